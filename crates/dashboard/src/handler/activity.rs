use crate::{
    abstract_trait::DynActivityService,
    domain::{
        requests::{CreateActivityRequest, ListQuery, UpdateActivityRequest},
        response::{ApiResponse, ApiResponsePagination, Activity},
    },
    middleware::upload::ValidatedMultipart,
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
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/activities",
    tag = "Activity",
    params(ListQuery),
    responses(
        (status = 200, description = "List of activities", body = ApiResponsePagination<Vec<Activity>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_activities(
    Extension(service): Extension<DynActivityService>,
    token: AccessToken,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let page = service.find_all(&token, &params).await?;
    Ok((StatusCode::OK, Json(page.into_response("Activity list retrieved"))))
}

#[utoipa::path(
    get,
    path = "/activities/{id}",
    tag = "Activity",
    params(("id" = String, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Activity details", body = ApiResponse<Activity>),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn get_activity(
    Extension(service): Extension<DynActivityService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.find_by_id(&token, &id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Activity retrieved", item))))
}

#[utoipa::path(
    post,
    path = "/activities",
    tag = "Activity",
    request_body(content = CreateActivityRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Activity created", body = ApiResponse<Activity>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_activity(
    Extension(service): Extension<DynActivityService>,
    token: AccessToken,
    ValidatedMultipart(body): ValidatedMultipart<CreateActivityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.create(&token, body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("Activity created", item))))
}

#[utoipa::path(
    put,
    path = "/activities/{id}",
    tag = "Activity",
    params(("id" = String, Path, description = "Activity ID")),
    request_body(content = UpdateActivityRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Activity updated", body = ApiResponse<Activity>),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn update_activity(
    Extension(service): Extension<DynActivityService>,
    token: AccessToken,
    Path(id): Path<String>,
    ValidatedMultipart(body): ValidatedMultipart<UpdateActivityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.update(&token, &id, body).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Activity updated", item))))
}

#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = "Activity",
    params(("id" = String, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Activity deleted"),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn delete_activity(
    Extension(service): Extension<DynActivityService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(&token, &id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Activity deleted"
        })),
    ))
}

pub fn activity_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/activities", get(get_activities).post(create_activity))
        .route(
            "/activities/{id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
        .layer(Extension(app_state.di_container.activity_service.clone()))
}
