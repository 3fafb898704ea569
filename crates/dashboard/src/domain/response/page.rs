use crate::{domain::response::DashboardSummary, session::CurrentUser};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LoginPage {
    pub login_path: &'static str,
    pub landing_path: &'static str,
}

/// The dashboard entry page. A failed summary call leaves `summary` empty and
/// sets `error` instead of failing the page.
#[derive(Debug, Clone, Serialize)]
pub struct MenuPage {
    pub user: CurrentUser,
    pub display_name: String,
    pub summary: Option<DashboardSummary>,
    pub error: Option<String>,
}
