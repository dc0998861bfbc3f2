use serde_json::Value;

/// Read the first usable value among `candidates` on `record`.
///
/// "Usable" mirrors the upstream truthiness contract: a non-empty string, or a
/// number other than zero (numeric ids are common upstream). Missing keys, nulls,
/// empty strings, zero, and structured values fall through to the next candidate.
pub fn first_text(record: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|key| record.get(key).and_then(text_value))
}

/// Single-field variant of [`first_text`].
pub fn text(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(text_value)
}

fn text_value(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_candidate_wins() {
        let record = json!({"name": "Leeds CU", "title": "ignored"});
        assert_eq!(
            first_text(&record, &["name", "title"]),
            Some("Leeds CU".to_string())
        );
    }

    #[test]
    fn test_falls_through_missing_and_falsy() {
        let record = json!({"name": "", "title": null, "label": "Fallback"});
        assert_eq!(
            first_text(&record, &["name", "title", "label"]),
            Some("Fallback".to_string())
        );
    }

    #[test]
    fn test_none_when_no_candidate_usable() {
        let record = json!({"name": "", "title": {"nested": true}});
        assert_eq!(first_text(&record, &["name", "title"]), None);
    }

    #[test]
    fn test_numeric_values_accepted_zero_is_falsy() {
        let record = json!({"id": 42});
        assert_eq!(text(&record, "id"), Some("42".to_string()));
        let record = json!({"id": 0});
        assert_eq!(text(&record, "id"), None);
    }
}
