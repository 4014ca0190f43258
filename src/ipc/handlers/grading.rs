use crate::grading::{grade_of, mean_grade_of};
use crate::ipc::error::{engine_err, err, ok};
use crate::ipc::types::{AppState, Request};
use crate::roster::SubjectScore;
use serde_json::json;

fn handle_grade_of(req: &Request) -> serde_json::Value {
    let Some(score) = req.params.get("score").and_then(|v| v.as_f64()) else {
        return err(&req.id, "bad_params", "missing numeric params.score", None);
    };
    ok(&req.id, json!(grade_of(score)))
}

fn handle_grade_mean(req: &Request) -> serde_json::Value {
    let Some(raw) = req.params.get("subjects") else {
        return err(&req.id, "bad_params", "missing params.subjects", None);
    };
    let subjects: Vec<SubjectScore> = match serde_json::from_value(raw.clone()) {
        Ok(v) => v,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                format!("subjects must be a list of {{name, score}}: {e}"),
                None,
            );
        }
    };

    match mean_grade_of(&subjects) {
        Ok(mean) => ok(&req.id, json!(mean)),
        Err(e) => engine_err(&req.id, e),
    }
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "grade.of" => Some(handle_grade_of(req)),
        "grade.mean" => Some(handle_grade_mean(req)),
        _ => None,
    }
}
