use crate::session::{
    cookies::CookieSet,
    identity::SessionIdentity,
    token::{AccessToken, decode_claims, is_compact_token},
};
use tracing::debug;

/// Cookie names checked, in order, before falling back to a scan.
pub const TOKEN_COOKIES: [&str; 3] = ["access_token", "token", "jwt"];

/// Claims that may carry the user identifier, in priority order.
pub const ID_CLAIMS: [&str; 3] = ["sub", "_id", "id"];

pub const ROLE_CLAIM: &str = "role";

/// Picks the token the session is derived from: a well-known cookie first,
/// then the first cookie whose value looks like a compact token.
pub fn candidate_token(cookies: &CookieSet) -> Option<AccessToken> {
    TOKEN_COOKIES
        .iter()
        .find_map(|name| cookies.get(name).filter(|value| !value.is_empty()))
        .or_else(|| {
            cookies
                .iter()
                .map(|(_, value)| value)
                .find(|value| is_compact_token(value))
        })
        .map(AccessToken::new)
}

/// A decoded session together with the token it was read from.
#[derive(Clone)]
pub struct ResolvedSession {
    pub identity: SessionIdentity,
    pub token: AccessToken,
}

pub fn resolve_session(cookies: &CookieSet) -> Option<ResolvedSession> {
    let token = candidate_token(cookies)?;

    let Some(claims) = decode_claims(token.as_str()) else {
        debug!("session cookie present but payload could not be decoded");
        return None;
    };

    let id = claims.first_text(&ID_CLAIMS)?;
    let role = claims.text(ROLE_CLAIM)?;

    Some(ResolvedSession {
        identity: SessionIdentity::placeholder(id, role),
        token,
    })
}
