use crate::{
    domain::requests::{MultipartRequest, UploadFile},
    middleware::validate::{ValidationRejection, validate},
    service::multipart::{DELETE_IMAGES_FIELD, IMAGES_FIELD},
};
use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use validator::Validate;

/// A multipart create/update form: typed fields, `images` files and an
/// optional `delete_images` list, validated before the handler runs.
///
/// Text parts stay strings; structured fields decode their own JSON text.
/// A name sent more than once becomes a list and empty parts are treated as
/// absent.
pub struct ValidatedMultipart<T>(pub MultipartRequest<T>);

fn bad_request(message: impl Into<String>) -> ValidationRejection {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "status": "error", "message": message.into() })),
    )
}

fn field_error(err: MultipartError) -> ValidationRejection {
    (
        err.status(),
        Json(json!({ "status": "error", "message": err.body_text() })),
    )
}

fn push_text(fields: &mut Map<String, Value>, name: String, text: String) {
    if text.trim().is_empty() {
        return;
    }

    match fields.get_mut(&name) {
        Some(Value::Array(values)) => values.push(Value::String(text)),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, Value::String(text)]);
        }
        None => {
            fields.insert(name, Value::String(text));
        }
    }
}

fn delete_list(text: &str) -> Result<Vec<String>, ValidationRejection> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
            .map_err(|e| bad_request(format!("{DELETE_IMAGES_FIELD} must be a JSON array of URLs: {e}")))
    } else {
        Ok(vec![trimmed.to_string()])
    }
}

impl<S, T> FromRequest<S> for ValidatedMultipart<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({ "status": "error", "message": rejection.body_text() });
                (rejection.status(), Json(payload))
            })?;

        let mut fields = Map::new();
        let mut images = Vec::new();
        let mut delete_images = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(field_error)?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == IMAGES_FIELD || field.file_name().is_some() {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(field_error)?;

                if !bytes.is_empty() {
                    images.push(UploadFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
                continue;
            }

            let text = field
                .text()
                .await
                .map_err(field_error)?;

            if name == DELETE_IMAGES_FIELD {
                delete_images.extend(delete_list(&text)?);
            } else {
                push_text(&mut fields, name, text);
            }
        }

        let fields: T = serde_json::from_value(Value::Object(fields))
            .map_err(|e| bad_request(format!("Invalid form fields: {e}")))?;

        validate(&fields)?;

        Ok(Self(MultipartRequest {
            fields,
            images,
            delete_images,
        }))
    }
}
