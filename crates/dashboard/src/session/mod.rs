mod cookies;
mod identity;
mod resolver;
mod token;

pub use self::cookies::{
    ACCESS_TOKEN_COOKIE, CookieSet, CookieSettings, MODE_COOKIE, REFRESH_TOKEN_COOKIE,
};
pub use self::identity::{CurrentUser, PLACEHOLDER_FIRST_NAME, SessionIdentity};
pub use self::resolver::{
    ID_CLAIMS, ROLE_CLAIM, ResolvedSession, TOKEN_COOKIES, candidate_token, resolve_session,
};
pub use self::token::{AccessToken, Claims, decode_claims, is_compact_token};

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::errors::HttpError;

impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = CookieSet::from_headers(&parts.headers);
        candidate_token(&cookies).ok_or_else(|| {
            HttpError::Unauthorized("You are not logged in, please provide token".into())
        })
    }
}
