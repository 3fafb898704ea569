use crate::{
    domain::{requests::ModeRequest, response::ApiResponse},
    middleware::validate::SimpleValidatedJson,
    session::{CookieSettings, MODE_COOKIE},
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/preferences/mode",
    tag = "Preferences",
    request_body = ModeRequest,
    responses(
        (status = 200, description = "Theme cookie written", body = ApiResponse<ModeRequest>),
        (status = 422, description = "Unknown mode")
    )
)]
pub async fn set_mode(
    Extension(settings): Extension<CookieSettings>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<ModeRequest>,
) -> impl IntoResponse {
    let jar = jar.add(settings.preference(MODE_COOKIE, body.mode.as_str().to_string()));
    (
        StatusCode::OK,
        jar,
        Json(ApiResponse::success("Theme updated", body)),
    )
}

pub fn preference_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/preferences/mode", post(set_mode))
        .layer(Extension(app_state.cookies))
}
