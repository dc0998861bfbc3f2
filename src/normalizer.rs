use serde_json::Value;

/// Extract the ordered list of raw union objects from a payload of unknown shape.
///
/// First match wins:
/// 1. the payload itself is an array → returned unchanged;
/// 2. an object whose `results` field is an array → that array;
/// 3. an object whose `data` field is an array → that array;
/// 4. anything else (including `null`) → empty.
///
/// Total over all JSON values. An unrecognized shape is silent degradation, not
/// an error.
pub fn normalize_unions(payload: &Value) -> Vec<Value> {
    if let Some(items) = payload.as_array() {
        return items.clone();
    }
    for key in ["results", "data"] {
        if let Some(items) = payload.get(key).and_then(|v| v.as_array()) {
            return items.clone();
        }
    }
    Vec::new()
}
