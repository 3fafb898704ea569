use serde::{Deserialize, Deserializer, de::DeserializeOwned, de::Error};
use serde_json::Value;

/// Deserializes a structured form field that may arrive as JSON text.
///
/// Multipart parts are plain strings, so a tag list or a coordinate pair is
/// sent JSON-encoded. Already-structured values pass through unchanged, a
/// bare string that is not JSON is tried as-is, then as a one-element list.
pub fn json_text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode(value).map(Some).map_err(D::Error::custom),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    let Value::String(text) = value else {
        return serde_json::from_value(value);
    };

    let parsed = serde_json::from_str::<T>(text.trim());
    if parsed.is_ok() {
        return parsed;
    }

    serde_json::from_value(Value::String(text.clone()))
        .or_else(|_| serde_json::from_value(Value::Array(vec![Value::String(text)])))
        .or(parsed)
}
