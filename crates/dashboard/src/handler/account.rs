use crate::{
    abstract_trait::DynAccountService,
    domain::{
        requests::{CreateAccountRequest, ListQuery, UpdateAccountRequest, UpdateRoleRequest},
        response::{ApiResponse, ApiResponsePagination, UserProfile},
    },
    middleware::validate::SimpleValidatedJson,
    session::AccessToken,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/accounts",
    tag = "Account",
    params(ListQuery),
    responses(
        (status = 200, description = "List of accounts", body = ApiResponsePagination<Vec<UserProfile>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_accounts(
    Extension(service): Extension<DynAccountService>,
    token: AccessToken,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let page = service.find_all(&token, &params).await?;
    Ok((StatusCode::OK, Json(page.into_response("Accounts retrieved"))))
}

#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = "Account",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account details", body = ApiResponse<UserProfile>),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account(
    Extension(service): Extension<DynAccountService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let account = service.find_by_id(&token, &id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Account retrieved", account))))
}

#[utoipa::path(
    post,
    path = "/accounts",
    tag = "Account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserProfile>),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_account(
    Extension(service): Extension<DynAccountService>,
    token: AccessToken,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateAccountRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let account = service.create(&token, &body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("Account created", account))))
}

#[utoipa::path(
    put,
    path = "/accounts/{id}",
    tag = "Account",
    params(("id" = String, Path, description = "Account ID")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = ApiResponse<UserProfile>),
        (status = 404, description = "Account not found")
    )
)]
pub async fn update_account(
    Extension(service): Extension<DynAccountService>,
    token: AccessToken,
    Path(id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateAccountRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let account = service.update(&token, &id, &body).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Account updated", account))))
}

#[utoipa::path(
    put,
    path = "/accounts/{id}/role",
    tag = "Account",
    params(("id" = String, Path, description = "Account ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role changed", body = ApiResponse<UserProfile>),
        (status = 403, description = "Not allowed to change roles")
    )
)]
pub async fn update_account_role(
    Extension(service): Extension<DynAccountService>,
    token: AccessToken,
    Path(id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateRoleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let account = service.update_role(&token, &id, &body).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Role updated", account))))
}

#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    tag = "Account",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn delete_account(
    Extension(service): Extension<DynAccountService>,
    token: AccessToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(&token, &id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Account deleted"
        })),
    ))
}

pub fn account_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/accounts", get(get_accounts).post(create_account))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route("/accounts/{id}/role", put(update_account_role))
        .layer(Extension(app_state.di_container.account_service.clone()))
}
