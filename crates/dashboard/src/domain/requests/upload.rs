/// A file received from the dashboard, forwarded to the remote API under `images`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A create/update intent carrying typed fields plus attachments.
#[derive(Debug, Clone)]
pub struct MultipartRequest<T> {
    pub fields: T,
    pub images: Vec<UploadFile>,
    pub delete_images: Vec<String>,
}

impl<T> MultipartRequest<T> {
    pub fn new(fields: T) -> Self {
        Self {
            fields,
            images: Vec::new(),
            delete_images: Vec::new(),
        }
    }
}
