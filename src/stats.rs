use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::grading::{grade_of, PASS_MARK};
use crate::roster::StudentRecord;

/// How subject names are matched when grouping scores across a roster.
/// Subject identity is free text, so "Mathematics " and "mathematics"
/// split into separate subjects under `Exact`. The policy is chosen per
/// roster load; `Exact` is the default because it is what the school's
/// records assume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubjectNamePolicy {
    #[default]
    Exact,
    Trimmed,
    TrimmedCaseFold,
}

impl SubjectNamePolicy {
    fn key(self, name: &str) -> String {
        match self {
            SubjectNamePolicy::Exact => name.to_string(),
            SubjectNamePolicy::Trimmed => name.trim().to_string(),
            SubjectNamePolicy::TrimmedCaseFold => name.trim().to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectClassSummary {
    pub subject_name: String,
    pub average: f64,
    pub pass_rate: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub student_count: usize,
    pub grade: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOverview {
    pub class_average: f64,
    pub overall_pass_rate: f64,
    pub total_students: usize,
    pub subject_count: usize,
}

struct SubjectGroup {
    display_name: String,
    scores: Vec<f64>,
}

/// One summary per distinct subject observed across the roster. Students
/// need not share a subject set; each subject averages over however many
/// students report it. Output is sorted descending by average, subject
/// name ascending on ties.
pub fn summarize_subjects(
    roster: &[StudentRecord],
    policy: SubjectNamePolicy,
) -> Vec<SubjectClassSummary> {
    let mut groups: HashMap<String, SubjectGroup> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for student in roster {
        for subject in &student.subjects {
            let key = policy.key(&subject.name);
            let group = groups.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                SubjectGroup {
                    // First-seen spelling is the display name, so case
                    // folding never invents a label.
                    display_name: subject.name.clone(),
                    scores: Vec::new(),
                }
            });
            group.scores.push(subject.score);
        }
    }

    let mut out: Vec<SubjectClassSummary> = order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .map(|group| {
            let count = group.scores.len();
            let sum: f64 = group.scores.iter().sum();
            let average = sum / count as f64;
            let pass_count = group.scores.iter().filter(|s| **s >= PASS_MARK).count();
            let highest = group.scores.iter().cloned().fold(f64::MIN, f64::max);
            let lowest = group.scores.iter().cloned().fold(f64::MAX, f64::min);
            SubjectClassSummary {
                subject_name: group.display_name,
                average,
                pass_rate: 100.0 * pass_count as f64 / count as f64,
                highest_score: highest,
                lowest_score: lowest,
                student_count: count,
                grade: grade_of(average).grade,
            }
        })
        .collect();

    out.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.subject_name.cmp(&b.subject_name))
    });
    out
}

/// Class-wide rollup over the per-subject summaries. Both figures are
/// means of the per-subject figures (mean-of-means), not a pooled pass
/// over every raw score; subjects with few students weigh the same as
/// subjects with many, and the two disagree whenever subject sizes vary.
pub fn class_summary(
    summaries: &[SubjectClassSummary],
    total_students: usize,
) -> ClassOverview {
    let n = summaries.len();
    let (class_average, overall_pass_rate) = if n > 0 {
        let avg_sum: f64 = summaries.iter().map(|s| s.average).sum();
        let pass_sum: f64 = summaries.iter().map(|s| s.pass_rate).sum();
        (avg_sum / n as f64, pass_sum / n as f64)
    } else {
        (0.0, 0.0)
    };

    ClassOverview {
        class_average,
        overall_pass_rate,
        total_students,
        subject_count: n,
    }
}
