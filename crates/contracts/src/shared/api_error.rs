use serde_json::Value;

/// Key under which the backend reports errors not tied to a field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Flatten a backend error payload into one human-readable line
///
/// - `{"detail": "..."}` -> the detail text
/// - `{"nit": ["Requerido."], "email": ["Inválido.", "Duplicado."]}` ->
///   `"email: Inválido., Duplicado. | nit: Requerido."`
/// - `non_field_errors` messages are emitted without the field prefix
///
/// Returns `None` when the payload carries nothing printable.
pub fn flatten_error_body(body: &Value) -> Option<String> {
    match body {
        Value::String(s) => non_empty(s.trim().to_string()),
        Value::Array(items) => non_empty(join_messages(items)),
        Value::Object(map) => {
            if let Some(detail) = map.get("detail").and_then(Value::as_str) {
                return non_empty(detail.trim().to_string());
            }

            let mut fields: Vec<(&String, &Value)> = map.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));

            let parts: Vec<String> = fields
                .into_iter()
                .filter_map(|(field, value)| {
                    let messages = messages_of(value);
                    if messages.is_empty() {
                        None
                    } else if field == NON_FIELD_ERRORS {
                        Some(messages)
                    } else {
                        Some(format!("{}: {}", field, messages))
                    }
                })
                .collect();

            non_empty(parts.join(" | "))
        }
        _ => None,
    }
}

fn messages_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => join_messages(items),
        // nested serializer errors: {"nap": {"cantidad": ["..."]}}
        Value::Object(_) => flatten_error_body(value).unwrap_or_default(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn join_messages(items: &[Value]) -> String {
    items
        .iter()
        .map(messages_of)
        .filter(|m| !m.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
