use serde::Deserialize;

use crate::roster::StudentRecord;
use crate::stats::SubjectNamePolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// All daemon state, threaded explicitly through the handlers. Identity
/// never lives here; requests that concern one student carry the id in
/// their params.
#[derive(Default)]
pub struct AppState {
    pub roster: Option<Vec<StudentRecord>>,
    pub policy: SubjectNamePolicy,
}
