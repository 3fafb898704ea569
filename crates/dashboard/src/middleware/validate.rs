use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

pub type ValidationRejection = (StatusCode, Json<Value>);

pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "status": "error",
                    "message": rejection.body_text(),
                });
                (rejection.status(), Json(payload))
            })?;

        validate(&value)?;

        Ok(Self(value))
    }
}

pub fn validate<T: Validate>(value: &T) -> Result<(), ValidationRejection> {
    value.validate().map_err(|errors| {
        let payload = json!({
            "status": "error",
            "message": format_validation_errors(&errors),
            "details": format_validation_errors_detailed(&errors),
        });
        (StatusCode::BAD_REQUEST, Json(payload))
    })
}

fn describe(code: &str, field: &str) -> String {
    match code {
        "email" => "Invalid email format".to_string(),
        "url" => "Invalid URL format".to_string(),
        "length" => "Invalid length".to_string(),
        "range" => "Value out of range".to_string(),
        "custom" => "Custom validation failed".to_string(),
        _ => format!("Invalid {field}"),
    }
}

/// Flattens nested struct errors into dotted paths such as `location.lat`.
fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| describe(error.code.as_ref(), field));
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect(errors, "", &mut messages);

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut messages = Vec::new();
    collect(errors, "", &mut messages);

    let mut map = Map::new();
    for (field, message) in messages {
        match map.get_mut(&field) {
            Some(Value::Array(list)) => list.push(Value::String(message)),
            _ => {
                map.insert(field, json!([message]));
            }
        }
    }

    Value::Object(map)
}
