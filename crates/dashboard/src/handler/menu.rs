use crate::{
    abstract_trait::DynDashboardService,
    domain::{
        requests::ChartQuery,
        response::{ApiResponse, ChartSeries, MenuPage},
    },
    middleware::session::session_middleware,
    session::{AccessToken, CurrentUser},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

/// Landing page model. A failing summary call degrades to an inline error
/// instead of failing the whole page.
#[utoipa::path(
    get,
    path = "/menu",
    responses(
        (status = 200, description = "Dashboard landing page model", body = serde_json::Value),
        (status = 401, description = "No usable session")
    ),
    tag = "Page"
)]
pub async fn menu_handler(
    Extension(service): Extension<DynDashboardService>,
    user: CurrentUser,
    token: AccessToken,
) -> impl IntoResponse {
    let (summary, error) = match service.summary(&token).await {
        Ok(summary) => (Some(summary), None),
        Err(err) => {
            warn!("dashboard summary unavailable: {err}");
            (None, Some(HttpError::from(err).message().to_string()))
        }
    };

    let page = MenuPage {
        display_name: user.display_name(),
        user,
        summary,
        error,
    };

    (StatusCode::OK, Json(page))
}

#[utoipa::path(
    get,
    path = "/dashboard/charts",
    params(ChartQuery),
    responses(
        (status = 200, description = "Chart series for the dashboard", body = ApiResponse<ChartSeries>),
        (status = 401, description = "Not logged in")
    ),
    tag = "Page"
)]
pub async fn charts_handler(
    Extension(service): Extension<DynDashboardService>,
    token: AccessToken,
    Query(params): Query<ChartQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let charts = service.charts(&token, &params).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Chart data retrieved", charts)),
    ))
}

pub fn menu_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let page_routes = OpenApiRouter::new()
        .route("/menu", get(menu_handler))
        .route_layer(middleware::from_fn(session_middleware))
        .layer(Extension(app_state.di_container.profile_fetcher.clone()));

    let data_routes = OpenApiRouter::new().route("/dashboard/charts", get(charts_handler));

    page_routes
        .merge(data_routes)
        .layer(Extension(app_state.di_container.dashboard_service.clone()))
}
