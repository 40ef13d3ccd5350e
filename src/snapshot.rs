use crate::quiz::{Question, QuizOption};
use crate::record::{scalar_text, Record};
use serde::Deserialize;
use serde_json::Value;
use std::fs;

// Wire shape of one quiz question as embedded by the host page.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    q: String,
    options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    text: String,
    value: Value,
}

/// The data blobs a hosting page embeds for the controllers: practitioner
/// rows, client rows and the quiz question set. Loaded once at startup;
/// malformed input is fatal here and never reaches a controller.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub practitioners: Vec<Record>,
    pub clients: Vec<Record>,
    pub questions: Vec<Question>,
}

pub fn load_file(path: &str) -> Result<Snapshot, String> {
    let data = fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    parse(&data)
}

pub fn parse(s: &str) -> Result<Snapshot, String> {
    let root: Value =
        serde_json::from_str(s).map_err(|e| format!("failed to parse snapshot JSON: {e}"))?;
    let obj = root
        .as_object()
        .ok_or_else(|| "snapshot root must be a JSON object".to_string())?;

    let practitioners = match obj.get("practitioners") {
        Some(v) => parse_records(v, "practitioners")?,
        None => Vec::new(),
    };
    let clients = match obj.get("clients") {
        Some(v) => parse_records(v, "clients")?,
        None => Vec::new(),
    };
    let questions = match obj.get("questions") {
        Some(v) => parse_questions(v)?,
        None => Vec::new(),
    };

    Ok(Snapshot {
        practitioners,
        clients,
        questions,
    })
}

/// Maps an embedded row array into Records. Every element must be an object;
/// anything else means the payload is corrupt and the table must not render.
pub fn parse_records(v: &Value, what: &str) -> Result<Vec<Record>, String> {
    let arr = v
        .as_array()
        .ok_or_else(|| format!("{what} payload must be a JSON array"))?;
    let mut out = Vec::with_capacity(arr.len());
    for (i, row) in arr.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| format!("{what}[{i}] is not a JSON object"))?;
        out.push(Record::new(obj.clone()));
    }
    Ok(out)
}

/// Maps the embedded question payload. Some hosts double-encode it (a JSON
/// string containing JSON), so one level of re-parsing is accepted.
pub fn parse_questions(v: &Value) -> Result<Vec<Question>, String> {
    let decoded: Value;
    let v = if let Some(s) = v.as_str() {
        decoded = serde_json::from_str(s)
            .map_err(|e| format!("failed to parse nested questions JSON: {e}"))?;
        &decoded
    } else {
        v
    };

    let raw: Vec<RawQuestion> = serde_json::from_value(v.clone())
        .map_err(|e| format!("failed to parse questions payload: {e}"))?;

    let mut out = Vec::with_capacity(raw.len());
    for (i, rq) in raw.into_iter().enumerate() {
        if rq.options.is_empty() {
            return Err(format!("question {i} has no options"));
        }
        out.push(Question {
            prompt: rq.q,
            options: rq
                .options
                .into_iter()
                .map(|o| QuizOption {
                    value: scalar_text(&o.value),
                    label: o.text,
                })
                .collect(),
        });
    }
    Ok(out)
}
