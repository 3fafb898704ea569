use crate::domain::response::pagination::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".into(),
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponsePagination<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub pagination: Option<Pagination>,
}

/// A list unwrapped from its envelope, with whatever pagination came next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Paginated<T> {
    pub fn into_response(self, message: impl Into<String>) -> ApiResponsePagination<Vec<T>> {
        ApiResponsePagination {
            status: "success".into(),
            message: message.into(),
            data: self.data,
            pagination: self.pagination,
        }
    }
}
