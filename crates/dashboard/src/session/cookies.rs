use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use std::convert::Infallible;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
pub const MODE_COOKIE: &str = "mode";

/// The cookies sent with one request, in the order the client sent them.
///
/// Unlike `CookieJar` this keeps duplicates and ordering, which the session
/// fallback scan depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieSet {
    entries: Vec<(String, String)>,
}

impl CookieSet {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let entries = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|raw| Cookie::split_parse(raw.to_owned()))
            .filter_map(|parsed| parsed.ok())
            .map(|cookie| (cookie.name().to_owned(), cookie.value().to_owned()))
            .collect();

        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// True when `name` is present with a non-empty value.
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CookieSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<S> FromRequestParts<S> for CookieSet
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Attributes applied to every cookie the dashboard writes.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
}

impl CookieSettings {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    pub fn session(&self, name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build()
    }

    pub fn preference(&self, name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .permanent()
            .build()
    }

    pub fn removal(&self, name: &'static str) -> Cookie<'static> {
        Cookie::build(name).path("/").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parses_cookie_headers_in_order() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("mode=dark; b=2"));
        headers.append(COOKIE, HeaderValue::from_static("a=1"));

        let cookies = CookieSet::from_headers(&headers);
        let names: Vec<&str> = cookies.iter().map(|(name, _)| name).collect();

        assert_eq!(names, vec!["mode", "b", "a"]);
        assert_eq!(cookies.get("b"), Some("2"));
    }

    #[test]
    fn empty_value_is_present_but_not_set() {
        let cookies: CookieSet = [("access_token", "")].into_iter().collect();
        assert_eq!(cookies.get("access_token"), Some(""));
        assert!(!cookies.has_value("access_token"));
    }

    #[test]
    fn missing_header_gives_empty_set() {
        assert!(CookieSet::from_headers(&HeaderMap::new()).is_empty());
    }
}
