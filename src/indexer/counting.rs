use serde_json::Value;

/// Count the messages in a decoded chat file
///
/// Accepts the shapes found in the corpus, in this order:
/// - an object with `messages` (its length)
/// - an object whose `chat` is an array
/// - a bare top-level array (older Fog output)
///
/// Anything else counts as zero.
pub fn count_messages(value: &Value) -> usize {
    match value {
        Value::Object(map) => {
            if let Some(messages) = map.get("messages") {
                return value_len(messages);
            }
            match map.get("chat") {
                Some(Value::Array(chat)) => chat.len(),
                _ => 0,
            }
        }
        Value::Array(items) => items.len(),
        _ => 0,
    }
}

fn value_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::String(s) => s.chars().count(),
        _ => 0,
    }
}
