use crate::curriculum::{extract_form_number, subjects_for_form};
use crate::grading::{grade_of, mean_grade_of};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::roster::{rank_display, StudentRecord};
use crate::stats::{class_summary, summarize_subjects};
use serde_json::json;

fn required_str(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

fn roster<'a>(state: &'a AppState, req: &Request) -> Result<&'a [StudentRecord], serde_json::Value> {
    state
        .roster
        .as_deref()
        .ok_or_else(|| err(&req.id, "no_roster", "load a roster first", None))
}

fn handle_class_subject_summary(state: &mut AppState, req: &Request) -> serde_json::Value {
    let full_roster = match roster(state, req) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let class_filter = req.params.get("classLabel").and_then(|v| v.as_str());

    let selected: Vec<StudentRecord> = full_roster
        .iter()
        .filter(|r| class_filter.map(|c| r.class_label == c).unwrap_or(true))
        .cloned()
        .collect();

    let summaries = summarize_subjects(&selected, state.policy);
    let overview = class_summary(&summaries, selected.len());

    let mut result = json!(overview);
    result["subjects"] = json!(summaries);
    if let Some(c) = class_filter {
        result["classLabel"] = json!(c);
    }
    ok(&req.id, result)
}

fn handle_student_performance(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match required_str(req, "studentId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let full_roster = match roster(state, req) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let Some(student) = full_roster.iter().find(|r| r.id == student_id) else {
        return err(&req.id, "not_found", "student not found", None);
    };

    let subjects: Vec<serde_json::Value> = student
        .subjects
        .iter()
        .map(|s| {
            let gp = grade_of(s.score);
            json!({
                "name": s.name,
                "score": s.score,
                "grade": gp.grade,
                "points": gp.points,
            })
        })
        .collect();

    // A record loaded with a supplied average may carry no subject rows;
    // the mean grade is simply absent then.
    let mean = mean_grade_of(&student.subjects).ok();

    let form = extract_form_number(&student.class_label);
    let mut result = json!(student);
    result["subjects"] = json!(subjects);
    result["meanGrade"] = json!(mean.as_ref().map(|m| m.mean_grade));
    result["totalPoints"] = json!(mean.as_ref().map(|m| m.total_points));
    result["rankDisplay"] = json!(rank_display(student.rank, full_roster.len()));
    result["form"] = json!(form);
    result["expectedSubjects"] = json!(subjects_for_form(form));
    ok(&req.id, result)
}

fn handle_curriculum_subjects(req: &Request) -> serde_json::Value {
    let class_label = match required_str(req, "classLabel") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let form = extract_form_number(&class_label);
    ok(
        &req.id,
        json!({
            "form": form,
            "subjects": subjects_for_form(form),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "class.subjectSummary" => Some(handle_class_subject_summary(state, req)),
        "student.performance" => Some(handle_student_performance(state, req)),
        "curriculum.subjects" => Some(handle_curriculum_subjects(req)),
        _ => None,
    }
}
