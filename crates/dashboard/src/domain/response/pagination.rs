use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Pagination {
    #[serde(default, alias = "currentPage", alias = "current_page")]
    pub page: u32,

    #[serde(default, alias = "limit", alias = "pageSize")]
    pub page_size: u32,

    #[serde(default, alias = "total", alias = "totalItems", alias = "total_records")]
    pub total_items: u64,

    #[serde(default, alias = "totalPages")]
    pub total_pages: u32,
}
