use crate::session::{ACCESS_TOKEN_COOKIE, CookieSet};
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LANDING_PATH: &str = "/menu";

/// Asset trees the guard never touches.
pub const EXCLUDED_PREFIXES: [&str; 2] = ["/_next/", "/static/"];

/// The server's own endpoints, matched exactly or as a parent segment.
pub const EXCLUDED_ROUTES: [&str; 5] = ["/favicon.ico", "/swagger-ui", "/api-docs", "/metrics", "/healthz"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

fn is_route_or_below(path: &str, route: &str) -> bool {
    path.strip_prefix(route)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

pub fn is_excluded(path: &str) -> bool {
    EXCLUDED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || EXCLUDED_ROUTES.iter().any(|route| is_route_or_below(path, route))
}

fn is_login(path: &str) -> bool {
    is_route_or_below(path, LOGIN_PATH)
}

/// Presence-only: the cookie is never decoded or verified here.
pub fn guard_decision(has_cookie: bool, path: &str) -> GuardDecision {
    if is_excluded(path) {
        return GuardDecision::Allow;
    }

    match (has_cookie, is_login(path), path == "/") {
        (false, true, _) => GuardDecision::Allow,
        (false, false, _) => GuardDecision::Redirect(LOGIN_PATH),
        (true, true, _) | (true, false, true) => GuardDecision::Redirect(LANDING_PATH),
        (true, false, false) => GuardDecision::Allow,
    }
}

pub async fn route_guard(req: Request<Body>, next: Next) -> Response {
    let has_cookie = CookieSet::from_headers(req.headers()).has_value(ACCESS_TOKEN_COOKIE);
    let path = req.uri().path();

    match guard_decision(has_cookie, path) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::Redirect(target) => {
            debug!(path, target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
    }
}
