use crate::{
    abstract_trait::{DynNewsService, DynSlugService},
    domain::{
        requests::{CreateNewsRequest, ListQuery, SlugRequest, UpdateNewsRequest},
        response::{ApiResponse, ApiResponsePagination, News, SlugResponse},
    },
    middleware::{upload::ValidatedMultipart, validate::SimpleValidatedJson},
    session::AccessToken,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/news",
    tag = "News",
    params(ListQuery),
    responses(
        (status = 200, description = "List of news items", body = ApiResponsePagination<Vec<News>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_news(
    Extension(service): Extension<DynNewsService>,
    token: AccessToken,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let page = service.find_all(&token, &params).await?;
    Ok((StatusCode::OK, Json(page.into_response("News list retrieved"))))
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = "News",
    params(("id" = String, Path, description = "News ID")),
    responses(
        (status = 200, description = "News details", body = ApiResponse<News>),
        (status = 404, description = "News not found")
    )
)]
pub async fn get_news_item(
    Extension(service): Extension<DynNewsService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.find_by_id(&token, &id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("News retrieved", item))))
}

#[utoipa::path(
    post,
    path = "/news",
    tag = "News",
    request_body(content = CreateNewsRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "News created", body = ApiResponse<News>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_news_item(
    Extension(service): Extension<DynNewsService>,
    token: AccessToken,
    ValidatedMultipart(body): ValidatedMultipart<CreateNewsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.create(&token, body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("News created", item))))
}

#[utoipa::path(
    put,
    path = "/news/{id}",
    tag = "News",
    params(("id" = String, Path, description = "News ID")),
    request_body(content = UpdateNewsRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "News updated", body = ApiResponse<News>),
        (status = 404, description = "News not found")
    )
)]
pub async fn update_news_item(
    Extension(service): Extension<DynNewsService>,
    token: AccessToken,
    Path(id): Path<String>,
    ValidatedMultipart(body): ValidatedMultipart<UpdateNewsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.update(&token, &id, body).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("News updated", item))))
}

#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = "News",
    params(("id" = String, Path, description = "News ID")),
    responses(
        (status = 200, description = "News deleted"),
        (status = 404, description = "News not found")
    )
)]
pub async fn delete_news_item(
    Extension(service): Extension<DynNewsService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(&token, &id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "News deleted"
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/news/slug/generate",
    tag = "News",
    request_body = SlugRequest,
    responses(
        (status = 200, description = "Slug generated from the title", body = ApiResponse<SlugResponse>),
        (status = 400, description = "Slug could not be generated")
    )
)]
pub async fn generate_slug(
    Extension(slugs): Extension<DynSlugService>,
    SimpleValidatedJson(body): SimpleValidatedJson<SlugRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let slug = slugs.generate(&body.title).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Slug generated", SlugResponse { slug })),
    ))
}

pub fn news_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/news", get(get_news).post(create_news_item))
        .route(
            "/news/{id}",
            get(get_news_item).put(update_news_item).delete(delete_news_item),
        )
        .route("/news/slug/generate", post(generate_slug))
        .layer(Extension(app_state.di_container.news_service.clone()))
        .layer(Extension(app_state.di_container.slug_service.clone()))
}
