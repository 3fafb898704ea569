mod account;
mod activity;
mod auth;
mod menu;
mod news;
mod prayer_room;
mod preferences;
mod system_log;

use crate::{middleware::guard::route_guard, state::AppState};
use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::account::account_routes;
pub use self::activity::activity_routes;
pub use self::auth::auth_routes;
pub use self::menu::menu_routes;
pub use self::news::news_routes;
pub use self::prayer_room::prayer_room_routes;
pub use self::preferences::preference_routes;
pub use self::system_log::system_log_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::root_handler,
        auth::login_page_handler,
        auth::login_handler,
        auth::logout_handler,
        auth::refresh_handler,
        auth::get_me_handler,

        menu::menu_handler,
        menu::charts_handler,

        account::get_accounts,
        account::get_account,
        account::create_account,
        account::update_account,
        account::update_account_role,
        account::delete_account,

        news::get_news,
        news::get_news_item,
        news::create_news_item,
        news::update_news_item,
        news::delete_news_item,
        news::generate_slug,

        prayer_room::get_prayer_rooms,
        prayer_room::get_prayer_room,
        prayer_room::create_prayer_room,
        prayer_room::update_prayer_room,
        prayer_room::delete_prayer_room,

        activity::get_activities,
        activity::get_activity,
        activity::create_activity,
        activity::update_activity,
        activity::delete_activity,

        system_log::get_system_logs,
        system_log::get_system_log,

        preferences::set_mode,
    ),
    tags(
        (name = "Auth", description = "Session cookie endpoints"),
        (name = "Page", description = "Page models for the dashboard UI"),
        (name = "Account", description = "Account endpoints"),
        (name = "News", description = "News endpoints"),
        (name = "PrayerRoom", description = "Prayer room endpoints"),
        (name = "Activity", description = "Activity endpoints"),
        (name = "SystemLog", description = "System log endpoints"),
        (name = "Preferences", description = "UI preference cookies"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(json!({
            "status": "success",
            "message": "Dashboard is running"
        })),
    )
}

pub struct AppRouter;

impl AppRouter {
    /// The full application: documented routes, static files, docs, and the
    /// route guard wrapped around all of it.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .route("/healthz", get(health_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(menu_routes(shared_state.clone()))
            .merge(account_routes(shared_state.clone()))
            .merge(news_routes(shared_state.clone()))
            .merge(prayer_room_routes(shared_state.clone()))
            .merge(activity_routes(shared_state.clone()))
            .merge(system_log_routes(shared_state.clone()))
            .merge(preference_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(250 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .nest_service("/static", ServeDir::new(&shared_state.static_dir))
            .layer(middleware::from_fn(route_guard))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("Server running on http://{}", listener.local_addr()?);
        info!("Swagger UI: http://localhost:{port}/swagger-ui");
        info!("Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
