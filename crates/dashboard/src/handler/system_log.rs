use crate::{
    abstract_trait::DynSystemLogService,
    domain::{
        requests::SystemLogQuery,
        response::{ApiResponse, ApiResponsePagination, SystemLog},
    },
    session::AccessToken,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/system-logs",
    tag = "SystemLog",
    params(SystemLogQuery),
    responses(
        (status = 200, description = "Audit log entries", body = ApiResponsePagination<Vec<SystemLog>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_system_logs(
    Extension(service): Extension<DynSystemLogService>,
    token: AccessToken,
    Query(params): Query<SystemLogQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let page = service.find_all(&token, &params).await?;
    Ok((StatusCode::OK, Json(page.into_response("System logs retrieved"))))
}

#[utoipa::path(
    get,
    path = "/system-logs/{id}",
    tag = "SystemLog",
    params(("id" = String, Path, description = "Log entry ID")),
    responses(
        (status = 200, description = "Log entry", body = ApiResponse<SystemLog>),
        (status = 404, description = "Log entry not found")
    )
)]
pub async fn get_system_log(
    Extension(service): Extension<DynSystemLogService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let entry = service.find_by_id(&token, &id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("System log retrieved", entry))))
}

pub fn system_log_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/system-logs", get(get_system_logs))
        .route("/system-logs/{id}", get(get_system_log))
        .layer(Extension(app_state.di_container.system_log_service.clone()))
}
