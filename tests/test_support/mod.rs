#![allow(dead_code)]

use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

pub fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_kosesd");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn kosesd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

pub fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

pub fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params.clone());
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

pub fn error_code(resp: &serde_json::Value) -> &str {
    assert_eq!(resp.get("ok").and_then(|v| v.as_bool()), Some(false));
    resp.get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .expect("error.code")
}

/// The Form 1A demo roster the dashboard ships with. Ids are fixed so
/// tests can address individual students; averages and ranks are left for
/// the daemon to derive.
pub fn form1a_roster() -> serde_json::Value {
    json!([
        {
            "id": "1",
            "name": "Dewton Osoro",
            "class": "Form 1A",
            "term": "Term 1",
            "subjects": [
                { "name": "Mathematics", "score": 75 },
                { "name": "English", "score": 68 },
                { "name": "Kiswahili", "score": 82 },
                { "name": "Chemistry", "score": 70 },
                { "name": "Physics", "score": 73 }
            ]
        },
        {
            "id": "2",
            "name": "Jane Achieng",
            "class": "Form 1A",
            "term": "Term 1",
            "subjects": [
                { "name": "Mathematics", "score": 88 },
                { "name": "English", "score": 85 },
                { "name": "Kiswahili", "score": 90 },
                { "name": "Chemistry", "score": 87 },
                { "name": "Physics", "score": 89 }
            ]
        },
        {
            "id": "3",
            "name": "Peter Mwangi",
            "class": "Form 1A",
            "term": "Term 1",
            "subjects": [
                { "name": "Mathematics", "score": 65 },
                { "name": "English", "score": 72 },
                { "name": "Kiswahili", "score": 78 },
                { "name": "Chemistry", "score": 68 },
                { "name": "Physics", "score": 70 }
            ]
        },
        {
            "id": "4",
            "name": "Grace Wanjiku",
            "class": "Form 1A",
            "term": "Term 1",
            "subjects": [
                { "name": "Mathematics", "score": 80 },
                { "name": "English", "score": 79 },
                { "name": "Kiswahili", "score": 85 },
                { "name": "Chemistry", "score": 82 },
                { "name": "Physics", "score": 78 }
            ]
        },
        {
            "id": "5",
            "name": "Samuel Kiprop",
            "class": "Form 1A",
            "term": "Term 1",
            "subjects": [
                { "name": "Mathematics", "score": 58 },
                { "name": "English", "score": 65 },
                { "name": "Kiswahili", "score": 70 },
                { "name": "Chemistry", "score": 60 },
                { "name": "Physics", "score": 62 }
            ]
        }
    ])
}
