use serde_json::Value;

use crate::models::{DirectoryError, DirectoryView, UnionRecord};
use crate::normalizer::normalize_unions;
use crate::resolver::resolve_union;

/// User-facing message for the "data unavailable" state. Raw status codes and
/// error details never reach the user.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load unions right now. Please refresh later.";

/// Normalize a raw payload and resolve every record, preserving source order.
pub fn resolve_directory(payload: &Value) -> Vec<UnionRecord> {
    normalize_unions(payload)
        .iter()
        .enumerate()
        .map(|(index, raw)| resolve_union(raw, index))
        .collect()
}

/// Top-level boundary: convert the fetch outcome into the presentation contract.
///
/// A fetch failure becomes an empty record list paired with the fixed
/// [`UNAVAILABLE_MESSAGE`]; it does not propagate. Configuration errors are
/// handled before fetching and never reach this function.
pub fn view_from_fetch(result: Result<Value, DirectoryError>) -> DirectoryView {
    match result {
        Ok(payload) => DirectoryView {
            unions: resolve_directory(&payload),
            error: None,
        },
        Err(_) => DirectoryView {
            unions: Vec::new(),
            error: Some(UNAVAILABLE_MESSAGE.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_results_payload_resolves_in_order() {
        let payload = json!({"results": [{"name": "A"}, {"name": "B"}]});
        let unions = resolve_directory(&payload);
        assert_eq!(unions.len(), 2);
        assert_eq!(unions[0].name, "A");
        assert_eq!(unions[1].name, "B");
    }

    #[test]
    fn test_duplicate_names_get_distinct_keys() {
        let payload = json!([{"name": "A"}, {"name": "B"}, {"name": "A"}]);
        let unions = resolve_directory(&payload);
        assert_eq!(unions[0].key, "A-0");
        assert_eq!(unions[2].key, "A-2");
    }

    #[test]
    fn test_fetch_failure_yields_empty_view_with_message() {
        let view = view_from_fetch(Err(DirectoryError::Fetch(
            "API responded with status 500 Internal Server Error".to_string(),
        )));
        assert!(view.unions.is_empty());
        assert_eq!(view.error.as_deref(), Some(UNAVAILABLE_MESSAGE));
        // The raw status must not leak into the user-facing message.
        assert!(!view.error.unwrap().contains("500"));
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let view = view_from_fetch(Ok(json!({"results": []})));
        assert!(view.unions.is_empty());
        assert!(view.error.is_none());
    }

    #[test]
    fn test_malformed_payload_degrades_silently() {
        let view = view_from_fetch(Ok(json!({"unexpected": true})));
        assert!(view.unions.is_empty());
        assert!(view.error.is_none());
    }

    #[test]
    fn test_cambridge_institution_end_to_end() {
        let payload = json!({
            "results": [{
                "name": "Cambridge CU",
                "institutions": [{
                    "name": "Cambridge, University of",
                    "geocode": "52.2, 0.12"
                }]
            }]
        });
        let unions = resolve_directory(&payload);
        let inst = &unions[0].institutions[0];
        assert_eq!(inst.display_name, "University of Cambridge");
        assert!(inst
            .map_link
            .as_deref()
            .unwrap()
            .contains("query=52.2%2C0.12"));
    }
}
