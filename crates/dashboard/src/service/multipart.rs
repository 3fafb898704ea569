use crate::domain::requests::{MultipartRequest, UploadFile};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use shared::errors::ClientError;

pub const IMAGES_FIELD: &str = "images";
pub const DELETE_IMAGES_FIELD: &str = "delete_images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(UploadFile),
}

/// Flattened form for a multipart create/update call.
///
/// Scalars become their text form, nested values are JSON-encoded, and nulls
/// are dropped. Dates arrive already rendered by the field serializers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<(String, PartValue)>,
}

impl MultipartPayload {
    pub fn from_fields<T: Serialize>(fields: &T) -> Result<Self, ClientError> {
        let value = serde_json::to_value(fields)
            .map_err(|e| ClientError::InvalidRequest(format!("unserializable form fields: {e}")))?;

        let Value::Object(map) = value else {
            return Err(ClientError::InvalidRequest(
                "form fields must serialize to an object".into(),
            ));
        };

        let mut parts = Vec::with_capacity(map.len());
        for (name, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
            };
            parts.push((name, PartValue::Text(text)));
        }

        Ok(Self { parts })
    }

    pub fn from_request<T: Serialize>(req: MultipartRequest<T>) -> Result<Self, ClientError> {
        Ok(Self::from_fields(&req.fields)?
            .with_images(req.images)
            .with_deleted_images(&req.delete_images))
    }

    pub fn with_images(mut self, images: Vec<UploadFile>) -> Self {
        self.parts.extend(
            images
                .into_iter()
                .map(|file| (IMAGES_FIELD.to_string(), PartValue::File(file))),
        );
        self
    }

    pub fn with_deleted_images(mut self, urls: &[String]) -> Self {
        if !urls.is_empty() {
            let encoded = Value::from(urls.to_vec()).to_string();
            self.parts
                .push((DELETE_IMAGES_FIELD.to_string(), PartValue::Text(encoded)));
        }
        self
    }

    pub fn parts(&self) -> &[(String, PartValue)] {
        &self.parts
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, value)| match value {
            PartValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn into_form(self) -> Result<Form, ClientError> {
        let mut form = Form::new();
        for (name, value) in self.parts {
            form = match value {
                PartValue::Text(text) => form.text(name, text),
                PartValue::File(file) => {
                    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                    if let Some(mime) = file.content_type {
                        part = part.mime_str(&mime).map_err(|e| {
                            ClientError::InvalidRequest(format!("invalid content type {mime}: {e}"))
                        })?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
