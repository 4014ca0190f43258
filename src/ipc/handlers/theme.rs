use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::theme::{theme_by_key, THEMES};
use serde_json::json;

fn handle_theme_get(req: &Request) -> serde_json::Value {
    let key = req
        .params
        .get("key")
        .and_then(|v| v.as_str())
        .unwrap_or("classic");
    match theme_by_key(key) {
        Some(theme) => ok(&req.id, json!(theme)),
        None => err(
            &req.id,
            "not_found",
            format!(
                "unknown theme '{}'; available: {}",
                key,
                THEMES.map(|t| t.key).join(", ")
            ),
            None,
        ),
    }
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "theme.get" => Some(handle_theme_get(req)),
        _ => None,
    }
}
