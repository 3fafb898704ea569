use crate::{
    abstract_trait::DynPrayerRoomService,
    domain::{
        requests::{CreatePrayerRoomRequest, ListQuery, UpdatePrayerRoomRequest},
        response::{ApiResponse, ApiResponsePagination, PrayerRoom},
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
    path = "/prayer-rooms",
    tag = "PrayerRoom",
    params(ListQuery),
    responses(
        (status = 200, description = "List of prayer rooms", body = ApiResponsePagination<Vec<PrayerRoom>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_prayer_rooms(
    Extension(service): Extension<DynPrayerRoomService>,
    token: AccessToken,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let page = service.find_all(&token, &params).await?;
    Ok((StatusCode::OK, Json(page.into_response("Prayer room list retrieved"))))
}

#[utoipa::path(
    get,
    path = "/prayer-rooms/{id}",
    tag = "PrayerRoom",
    params(("id" = String, Path, description = "Prayer room ID")),
    responses(
        (status = 200, description = "Prayer room details", body = ApiResponse<PrayerRoom>),
        (status = 404, description = "Prayer room not found")
    )
)]
pub async fn get_prayer_room(
    Extension(service): Extension<DynPrayerRoomService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.find_by_id(&token, &id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Prayer room retrieved", item))))
}

#[utoipa::path(
    post,
    path = "/prayer-rooms",
    tag = "PrayerRoom",
    request_body(content = CreatePrayerRoomRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Prayer room created", body = ApiResponse<PrayerRoom>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_prayer_room(
    Extension(service): Extension<DynPrayerRoomService>,
    token: AccessToken,
    ValidatedMultipart(body): ValidatedMultipart<CreatePrayerRoomRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.create(&token, body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("Prayer room created", item))))
}

#[utoipa::path(
    put,
    path = "/prayer-rooms/{id}",
    tag = "PrayerRoom",
    params(("id" = String, Path, description = "Prayer room ID")),
    request_body(content = UpdatePrayerRoomRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Prayer room updated", body = ApiResponse<PrayerRoom>),
        (status = 404, description = "Prayer room not found")
    )
)]
pub async fn update_prayer_room(
    Extension(service): Extension<DynPrayerRoomService>,
    token: AccessToken,
    Path(id): Path<String>,
    ValidatedMultipart(body): ValidatedMultipart<UpdatePrayerRoomRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.update(&token, &id, body).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Prayer room updated", item))))
}

#[utoipa::path(
    delete,
    path = "/prayer-rooms/{id}",
    tag = "PrayerRoom",
    params(("id" = String, Path, description = "Prayer room ID")),
    responses(
        (status = 200, description = "Prayer room deleted"),
        (status = 404, description = "Prayer room not found")
    )
)]
pub async fn delete_prayer_room(
    Extension(service): Extension<DynPrayerRoomService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(&token, &id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Prayer room deleted"
        })),
    ))
}

pub fn prayer_room_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/prayer-rooms", get(get_prayer_rooms).post(create_prayer_room))
        .route(
            "/prayer-rooms/{id}",
            get(get_prayer_room).put(update_prayer_room).delete(delete_prayer_room),
        )
        .layer(Extension(app_state.di_container.prayer_room_service.clone()))
}
