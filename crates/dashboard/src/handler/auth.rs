use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::LoginRequest,
        response::{ApiResponse, LoginPage, LoginResult},
    },
    middleware::{
        guard::{LANDING_PATH, LOGIN_PATH},
        session::session_middleware,
        validate::SimpleValidatedJson,
    },
    session::{
        ACCESS_TOKEN_COOKIE, CookieSet, CookieSettings, CurrentUser, REFRESH_TOKEN_COOKIE,
        candidate_token,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;

fn store_tokens(
    jar: CookieJar,
    settings: &CookieSettings,
    access_token: String,
    refresh_token: Option<String>,
) -> CookieJar {
    let jar = jar.add(settings.session(ACCESS_TOKEN_COOKIE, access_token));
    match refresh_token {
        Some(refresh) => jar.add(settings.session(REFRESH_TOKEN_COOKIE, refresh)),
        None => jar,
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 307, description = "Redirect to the dashboard landing page")),
    tag = "Page"
)]
pub async fn root_handler() -> Redirect {
    Redirect::temporary(LANDING_PATH)
}

#[utoipa::path(
    get,
    path = "/auth/login",
    responses((status = 200, description = "Login page model", body = serde_json::Value)),
    tag = "Auth"
)]
pub async fn login_page_handler() -> impl IntoResponse {
    Json(LoginPage {
        login_path: LOGIN_PATH,
        landing_path: LANDING_PATH,
    })
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookies set", body = ApiResponse<LoginResult>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(settings): Extension<CookieSettings>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let tokens = service.login(&body).await?;
    let jar = store_tokens(jar, &settings, tokens.access_token, tokens.refresh_token);

    info!("login succeeded for {}", body.email);

    Ok((
        StatusCode::OK,
        jar,
        Json(ApiResponse::success(
            "Login successful",
            LoginResult {
                redirect_to: LANDING_PATH.to_string(),
            },
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session cookies cleared", body = ApiResponse<LoginResult>)
    ),
    tag = "Auth"
)]
pub async fn logout_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(settings): Extension<CookieSettings>,
    cookies: CookieSet,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(token) = candidate_token(&cookies) {
        if let Err(err) = service.logout(&token).await {
            warn!("remote logout failed, clearing cookies anyway: {err}");
        }
    }

    let jar = jar
        .remove(settings.removal(ACCESS_TOKEN_COOKIE))
        .remove(settings.removal(REFRESH_TOKEN_COOKIE));

    (
        StatusCode::OK,
        jar,
        Json(ApiResponse::success(
            "Logout successful",
            LoginResult {
                redirect_to: LOGIN_PATH.to_string(),
            },
        )),
    )
}

#[utoipa::path(
    post,
    path = "/auth/refresh",
    responses(
        (status = 200, description = "Access token replaced", body = ApiResponse<LoginResult>),
        (status = 401, description = "No refresh token cookie or refresh rejected")
    ),
    tag = "Auth"
)]
pub async fn refresh_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(settings): Extension<CookieSettings>,
    cookies: CookieSet,
    jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    let refresh_token = cookies
        .get(REFRESH_TOKEN_COOKIE)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| HttpError::Unauthorized("Refresh token is missing".into()))?;

    let tokens = service.refresh(refresh_token).await?;
    let jar = store_tokens(jar, &settings, tokens.access_token, tokens.refresh_token);

    Ok((
        StatusCode::OK,
        jar,
        Json(ApiResponse::success(
            "Token refreshed",
            LoginResult {
                redirect_to: LANDING_PATH.to_string(),
            },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current user, verified profile or session placeholder", body = serde_json::Value),
        (status = 401, description = "No usable session")
    ),
    tag = "Auth"
)]
pub async fn get_me_handler(user: CurrentUser) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success("Current user", user)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/", get(root_handler))
        .route("/auth/login", get(login_page_handler).post(login_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/auth/refresh", post(refresh_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.cookies));

    let session_routes = OpenApiRouter::new()
        .route("/me", get(get_me_handler))
        .route_layer(middleware::from_fn(session_middleware))
        .layer(Extension(app_state.di_container.profile_fetcher.clone()));

    public_routes.merge(session_routes)
}
