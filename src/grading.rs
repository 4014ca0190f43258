use serde::Serialize;

use crate::roster::SubjectScore;

/// One row of the KCSE banding table. Bands are contiguous over [0,100],
/// ordered descending by `min`, so lookup is "first band whose min the
/// score reaches".
#[derive(Debug, Clone, Copy)]
pub struct GradeBand {
    pub min: f64,
    pub grade: &'static str,
    pub points: i64,
}

/// Kenyan KCSE grading system (2024).
pub const GRADE_BANDS: [GradeBand; 12] = [
    GradeBand { min: 80.0, grade: "A", points: 12 },
    GradeBand { min: 75.0, grade: "A-", points: 11 },
    GradeBand { min: 70.0, grade: "B+", points: 10 },
    GradeBand { min: 65.0, grade: "B", points: 9 },
    GradeBand { min: 60.0, grade: "B-", points: 8 },
    GradeBand { min: 55.0, grade: "C+", points: 7 },
    GradeBand { min: 50.0, grade: "C", points: 6 },
    GradeBand { min: 45.0, grade: "C-", points: 5 },
    GradeBand { min: 40.0, grade: "D+", points: 4 },
    GradeBand { min: 35.0, grade: "D", points: 3 },
    GradeBand { min: 30.0, grade: "D-", points: 2 },
    GradeBand { min: 0.0, grade: "E", points: 1 },
];

pub const MAX_POINTS: i64 = 12;

/// Pass threshold on the 0-100 scale, shared with the stats module.
pub const PASS_MARK: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradePoint {
    pub grade: &'static str,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeanGrade {
    pub mean_grade: &'static str,
    pub total_points: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl EngineError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Maps a score to its band. Total over all of f64: scores above 100 land
/// in the top band (100+ >= 80), and anything below every band minimum
/// falls through to E/1. In-range scores can never reach the fallback, so
/// hitting it means the band table itself is broken.
pub fn grade_of(score: f64) -> GradePoint {
    for band in &GRADE_BANDS {
        if score >= band.min {
            return GradePoint {
                grade: band.grade,
                points: band.points,
            };
        }
    }
    log::warn!("score {score} matched no grade band, falling back to E/1");
    GradePoint {
        grade: "E",
        points: 1,
    }
}

/// KCSE mean grade over a student's subject scores.
///
/// The mean grade is NOT read off a points table directly: the average
/// point value is rescaled onto the 0-100 mark scale (12 points = 100%)
/// and re-banded. The intermediate scaling shifts band membership at
/// boundaries, so both steps are kept exactly as the school computes them.
///
/// `subjects` must be non-empty; an empty list is an `empty_subjects`
/// error, not a zero result.
pub fn mean_grade_of(subjects: &[SubjectScore]) -> Result<MeanGrade, EngineError> {
    if subjects.is_empty() {
        return Err(EngineError::new(
            "empty_subjects",
            "mean grade requires at least one subject score",
        ));
    }

    let total_points: i64 = subjects.iter().map(|s| grade_of(s.score).points).sum();
    let average_points = total_points as f64 / subjects.len() as f64;
    let mean = grade_of((average_points / MAX_POINTS as f64) * 100.0);

    Ok(MeanGrade {
        mean_grade: mean.grade,
        total_points,
    })
}
