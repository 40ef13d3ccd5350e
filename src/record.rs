use serde_json::{Map, Value};

/// Render a JSON scalar the way it appears in a table cell.
/// Strings are taken verbatim; numbers and booleans use their canonical text.
pub fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One listed entity (practitioner or client): an opaque attribute mapping.
/// Immutable once loaded; which fields matter is declared per list instance.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Display text for a field; missing fields render as empty cells.
    pub fn text(&self, field: &str) -> String {
        self.fields.get(field).map(scalar_text).unwrap_or_default()
    }

    /// Case-insensitive substring match of `needle` against any of the given
    /// fields. `needle` must already be lowercased; an empty needle matches.
    pub fn matches(&self, fields: &[String], needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|f| self.text(f).to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        match v {
            Value::Object(map) => Record::new(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_text_renders_scalars() {
        let r = record(json!({
            "full_name": "Ahmed Ali",
            "active": true,
            "patient_id": 17,
        }));
        assert_eq!(r.text("full_name"), "Ahmed Ali");
        assert_eq!(r.text("active"), "true");
        assert_eq!(r.text("patient_id"), "17");
        assert_eq!(r.text("missing"), "");
    }

    #[test]
    fn test_matches_any_field_case_insensitive() {
        let r = record(json!({
            "first_name": "Ahmed",
            "last_name": "Saleh",
            "organization_name": "Glow Clinic",
        }));
        let fields: Vec<String> = ["first_name", "last_name", "organization_name"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(r.matches(&fields, "ahmed"));
        assert!(r.matches(&fields, "glow"));
        assert!(r.matches(&fields, "leh"));
        assert!(!r.matches(&fields, "nope"));
    }

    #[test]
    fn test_matches_only_declared_fields() {
        let r = record(json!({
            "full_name": "Huda",
            "gender": "female",
        }));
        let fields = vec!["full_name".to_string()];
        // gender is not searchable for this instance
        assert!(!r.matches(&fields, "female"));
        assert!(r.matches(&fields, "huda"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let r = record(json!({ "full_name": "C1" }));
        assert!(r.matches(&["full_name".to_string()], ""));
        assert!(Record::default().matches(&["full_name".to_string()], ""));
    }
}
