/// All 11 subjects offered in Forms 1 and 2.
pub const LOWER_FORM_SUBJECTS: [&str; 11] = [
    "Mathematics",
    "English",
    "Kiswahili",
    "Chemistry",
    "Physics",
    "Biology",
    "History",
    "Geography",
    "CRE",
    "Business Studies",
    "Computer Studies",
];

/// Core subjects carried into Forms 3 and 4.
pub const UPPER_FORM_SUBJECTS: [&str; 8] = [
    "Mathematics",
    "English",
    "Kiswahili",
    "Chemistry",
    "Physics",
    "Biology",
    "History",
    "Geography",
];

/// Pulls the form number out of a class label like "Form 3B". The "form"
/// prefix is matched case-insensitively; anything unparseable defaults to
/// form 1.
pub fn extract_form_number(class_label: &str) -> i64 {
    let lower = class_label.to_ascii_lowercase();
    let Some(at) = lower.find("form") else {
        return 1;
    };
    let digits: String = lower[at + 4..]
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(1)
}

pub fn subjects_for_form(form: i64) -> &'static [&'static str] {
    if form <= 2 {
        &LOWER_FORM_SUBJECTS
    } else {
        &UPPER_FORM_SUBJECTS
    }
}
