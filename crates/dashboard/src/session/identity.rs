use crate::domain::response::UserProfile;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Serialize;
use shared::errors::HttpError;

pub const PLACEHOLDER_FIRST_NAME: &str = "Admin";

/// Display-only identity synthesized from unverified token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub id: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl SessionIdentity {
    pub fn placeholder(id: String, role: String) -> Self {
        Self {
            id,
            role,
            first_name: PLACEHOLDER_FIRST_NAME.to_string(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
        }
    }
}

/// The user a page is rendered for: the authoritative profile when the
/// remote API answered, otherwise the placeholder from the session cookie.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CurrentUser {
    Profile(UserProfile),
    Placeholder(SessionIdentity),
}

impl CurrentUser {
    pub fn id(&self) -> &str {
        match self {
            CurrentUser::Profile(profile) => &profile.id,
            CurrentUser::Placeholder(identity) => &identity.id,
        }
    }

    pub fn role(&self) -> &str {
        match self {
            CurrentUser::Profile(profile) => &profile.role,
            CurrentUser::Placeholder(identity) => &identity.role,
        }
    }

    pub fn display_name(&self) -> String {
        let (first, last) = match self {
            CurrentUser::Profile(profile) => (&profile.first_name, &profile.last_name),
            CurrentUser::Placeholder(identity) => (&identity.first_name, &identity.last_name),
        };

        format!("{first} {last}").trim().to_string()
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, CurrentUser::Profile(_))
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| HttpError::Unauthorized("Session is not available, please log in again".into()))
    }
}
