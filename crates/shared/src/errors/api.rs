use serde_json::Value;

/// Shown whenever no usable message can be recovered from the backend.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Server connection failed. Please check your internet.";

/// Normalizes a backend error body into a single message.
///
/// Lookup order: top-level `error` string, then `detail` string, then the
/// first value of the first key of a field-level validation map
/// (`{"username": ["This field is required."]}`), then the fixed transport
/// message. The same body always yields the same message.
pub fn extract_api_message(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return TRANSPORT_FAILURE_MESSAGE.to_string();
    };

    if let Some(msg) = value.get("error").and_then(Value::as_str) {
        return msg.to_string();
    }

    if let Some(msg) = value.get("detail").and_then(Value::as_str) {
        return msg.to_string();
    }

    if let Some(fields) = value.as_object() {
        for field_value in fields.values() {
            match field_value {
                Value::String(msg) => return msg.clone(),
                Value::Array(items) => {
                    if let Some(msg) = items.first().and_then(Value::as_str) {
                        return msg.to_string();
                    }
                }
                _ => {}
            }
        }
    }

    TRANSPORT_FAILURE_MESSAGE.to_string()
}
