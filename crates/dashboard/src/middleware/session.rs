use crate::{
    abstract_trait::DynProfileFetcher,
    session::{CookieSet, ResolvedSession, resolve_session},
};
use axum::{Extension, body::Body, http::Request, middleware::Next, response::Response};

/// Resolves the cookie session and, when there is one, upgrades it to the
/// remote profile. Requests without a session pass through untouched; the
/// `CurrentUser` extractor rejects them where a user is required.
pub async fn session_middleware(
    Extension(profiles): Extension<DynProfileFetcher>,
    cookies: CookieSet,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(ResolvedSession { identity, token }) = resolve_session(&cookies) {
        let user = profiles.fetch(&token, identity).await;
        req.extensions_mut().insert(user);
    }

    next.run(req).await
}
