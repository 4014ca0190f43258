use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::grading::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub name: String,
    pub score: f64,
}

/// A student as received from the roster provider. `id` and `average` are
/// optional on the wire; the daemon fills them in at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "class")]
    pub class_label: String,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub subjects: Vec<SubjectScore>,
    #[serde(default)]
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_label: String,
    pub term: String,
    pub subjects: Vec<SubjectScore>,
    pub average: f64,
    pub rank: i64,
}

pub fn derive_average(subjects: &[SubjectScore]) -> Option<f64> {
    if subjects.is_empty() {
        return None;
    }
    let sum: f64 = subjects.iter().map(|s| s.score).sum();
    Some(sum / subjects.len() as f64)
}

/// Validates raw roster rows and turns them into ranked records. Rejects
/// the whole batch on the first bad row so a load is all-or-nothing.
pub fn build_roster(inputs: Vec<StudentInput>) -> Result<Vec<StudentRecord>, EngineError> {
    let mut records = Vec::with_capacity(inputs.len());
    for (idx, input) in inputs.into_iter().enumerate() {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(EngineError::new(
                "bad_params",
                format!("students[{idx}] has an empty name"),
            ));
        }
        for s in &input.subjects {
            if s.name.trim().is_empty() {
                return Err(EngineError::new(
                    "bad_params",
                    format!("students[{idx}] has a subject with an empty name"),
                ));
            }
            if !s.score.is_finite() {
                return Err(EngineError::new(
                    "bad_params",
                    format!("students[{idx}] has a non-finite score for {}", s.name),
                ));
            }
        }

        let average = match input.average {
            Some(a) if a.is_finite() => a,
            Some(_) => {
                return Err(EngineError::new(
                    "bad_params",
                    format!("students[{idx}] has a non-finite average"),
                ));
            }
            None => derive_average(&input.subjects).ok_or_else(|| {
                EngineError::new(
                    "bad_params",
                    format!("students[{idx}] has no subjects and no average"),
                )
            })?,
        };

        records.push(StudentRecord {
            id: input
                .id
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            class_label: input.class_label.trim().to_string(),
            term: input.term.unwrap_or_else(|| "Term 1".to_string()),
            subjects: input.subjects,
            average,
            rank: 0,
        });
    }

    assign_ranks(&mut records);
    Ok(records)
}

/// Sorts descending by average and writes 1-based ranks. Equal averages
/// are ordered by name ascending and still get distinct consecutive
/// ranks; there is no shared-rank scheme.
pub fn assign_ranks(records: &mut [StudentRecord]) {
    records.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    for (i, r) in records.iter_mut().enumerate() {
        r.rank = (i + 1) as i64;
    }
}

/// 1 -> "st", 2 -> "nd", 3 -> "rd", everything else -> "th". No teens
/// exception: 21 renders "21th", matching the dashboard's long-standing
/// output.
pub fn ordinal_suffix(rank: i64) -> &'static str {
    match rank {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// "3rd of 28" as shown on the student dashboard header.
pub fn rank_display(rank: i64, total: usize) -> String {
    format!("{}{} of {}", rank, ordinal_suffix(rank), total)
}
