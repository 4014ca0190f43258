use crate::ipc::error::{engine_err, err, ok};
use crate::ipc::types::{AppState, Request};
use crate::roster::{build_roster, rank_display, StudentInput, StudentRecord};
use crate::stats::SubjectNamePolicy;
use serde_json::json;
use std::collections::BTreeSet;

fn handle_roster_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(raw_students) = req.params.get("students") else {
        return err(&req.id, "bad_params", "missing params.students", None);
    };
    let inputs: Vec<StudentInput> = match serde_json::from_value(raw_students.clone()) {
        Ok(v) => v,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                format!("students is not a valid roster: {e}"),
                None,
            );
        }
    };

    let policy = match req.params.get("policy") {
        None => SubjectNamePolicy::default(),
        Some(v) if v.is_null() => SubjectNamePolicy::default(),
        Some(v) => match serde_json::from_value::<SubjectNamePolicy>(v.clone()) {
            Ok(p) => p,
            Err(_) => {
                return err(
                    &req.id,
                    "bad_params",
                    "policy must be one of exact, trimmed, trimmedCaseFold",
                    None,
                );
            }
        },
    };

    let records = match build_roster(inputs) {
        Ok(r) => r,
        Err(e) => return engine_err(&req.id, e),
    };

    let class_labels: BTreeSet<&str> = records.iter().map(|r| r.class_label.as_str()).collect();
    let result = json!({
        "studentCount": records.len(),
        "classLabels": class_labels.iter().collect::<Vec<_>>(),
    });

    state.roster = Some(records);
    state.policy = policy;
    ok(&req.id, result)
}

fn handle_roster_clear(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.roster = None;
    state.policy = SubjectNamePolicy::default();
    ok(&req.id, json!({ "cleared": true }))
}

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(roster) = state.roster.as_ref() else {
        return err(&req.id, "no_roster", "load a roster first", None);
    };

    let class_filter = req
        .params
        .get("classLabel")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let selected: Vec<&StudentRecord> = roster
        .iter()
        .filter(|r| {
            class_filter
                .as_deref()
                .map(|c| r.class_label == c)
                .unwrap_or(true)
        })
        .collect();

    // Ranks are assigned across the whole roster, so the "of N" part of
    // the display stays roster-wide even when listing one class.
    let roster_size = roster.len();
    let students: Vec<serde_json::Value> = selected
        .iter()
        .map(|r| {
            let mut v = json!(r);
            v["rankDisplay"] = json!(rank_display(r.rank, roster_size));
            v
        })
        .collect();

    ok(&req.id, json!({ "students": students, "total": selected.len() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "roster.load" => Some(handle_roster_load(state, req)),
        "roster.clear" => Some(handle_roster_clear(state, req)),
        "students.list" => Some(handle_students_list(state, req)),
        _ => None,
    }
}
