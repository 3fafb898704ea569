use crate::errors::{client::ClientError, error::ErrorResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    BadGateway(String),
    ServiceUnavailable(String),
    GatewayTimeout(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::Forbidden(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::BadGateway(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::GatewayTimeout(msg)
            | HttpError::Internal(msg) => msg,
        }
    }
}

impl From<ClientError> for HttpError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status, message } => match status {
                401 => HttpError::Unauthorized(message),
                403 => HttpError::Forbidden(message),
                404 => HttpError::NotFound(message),
                409 => HttpError::Conflict(message),
                503 => HttpError::ServiceUnavailable(message),
                504 => HttpError::GatewayTimeout(message),
                400..=499 => HttpError::BadRequest(message),
                _ => HttpError::BadGateway(message),
            },

            ClientError::Transport(err) if err.is_timeout() => {
                HttpError::GatewayTimeout("Remote API timed out".into())
            }

            ClientError::Transport(err) if err.is_connect() => {
                HttpError::ServiceUnavailable("Remote API is unreachable".into())
            }

            ClientError::Transport(err) => HttpError::BadGateway(format!("Remote API error: {err}")),

            ClientError::Decode(msg) => {
                HttpError::BadGateway(format!("Unexpected response from remote API: {msg}"))
            }

            ClientError::InvalidRequest(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message().to_string();

        let body = Json(ErrorResponse {
            status: "error".into(),
            message,
        });

        (status, body).into_response()
    }
}
