use crate::{
    domain::response::Paginated,
    service::envelope::{Nesting, unwrap_envelope, unwrap_page},
    session::AccessToken,
};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use reqwest::{Client, Method as HttpMethod, RequestBuilder, Response, StatusCode, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use shared::{
    errors::ClientError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

/// Thin wrapper over `reqwest` bound to the remote API base URL.
///
/// Every call is traced, timed into [`Metrics`], and carries the caller's
/// bearer token when one is given. Nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    metrics: Metrics,
}

impl ApiClient {
    pub fn new(http: Client, base_url: impl Into<String>, metrics: Metrics) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            metrics,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("dashboard-api-client")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Client)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("Operation completed successfully: {message}");
        } else {
            error!("Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    fn request(&self, method: HttpMethod, path: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token.as_str()),
            None => builder,
        }
    }

    async fn dispatch(
        &self,
        method: &HttpMethod,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Value, ClientError> {
        let operation = format!("{method} {path}");
        let tracing_ctx = self.start_tracing(
            &operation,
            vec![
                KeyValue::new("component", "remote-api"),
                KeyValue::new("http.method", method.to_string()),
                KeyValue::new("http.path", path.to_string()),
            ],
        );

        let result = match builder.send().await {
            Ok(response) => read_body(response).await,
            Err(err) => Err(ClientError::from(err)),
        };

        match &result {
            Ok(_) => self.complete_tracing(&tracing_ctx, metric_method(method), true, &operation),
            Err(err) => self.complete_tracing(
                &tracing_ctx,
                metric_method(method),
                false,
                &format!("{operation}: {err}"),
            ),
        }

        result
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        token: Option<&AccessToken>,
        path: &str,
        query: &[(&str, String)],
        nesting: Nesting,
    ) -> Result<T, ClientError> {
        let builder = self.request(HttpMethod::GET, path, token).query(query);
        let body = self.dispatch(&HttpMethod::GET, path, builder).await?;
        unwrap_envelope(body, nesting)
    }

    pub async fn get_page<T: DeserializeOwned>(
        &self,
        token: Option<&AccessToken>,
        path: &str,
        query: &[(&str, String)],
        nesting: Nesting,
    ) -> Result<Paginated<T>, ClientError> {
        let builder = self.request(HttpMethod::GET, path, token).query(query);
        let body = self.dispatch(&HttpMethod::GET, path, builder).await?;
        unwrap_page(body, nesting)
    }

    pub async fn send_json<B, T>(
        &self,
        method: HttpMethod,
        token: Option<&AccessToken>,
        path: &str,
        payload: &B,
        nesting: Nesting,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path, token).json(payload);
        let body = self.dispatch(&method, path, builder).await?;
        unwrap_envelope(body, nesting)
    }

    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        token: Option<&AccessToken>,
        path: &str,
        form: Form,
        nesting: Nesting,
    ) -> Result<T, ClientError> {
        let builder = self.request(method.clone(), path, token).multipart(form);
        let body = self.dispatch(&method, path, builder).await?;
        unwrap_envelope(body, nesting)
    }

    /// Sends a request whose response body, if any, is ignored.
    pub async fn send_empty(
        &self,
        method: HttpMethod,
        token: Option<&AccessToken>,
        path: &str,
    ) -> Result<(), ClientError> {
        let builder = self.request(method.clone(), path, token);
        self.dispatch(&method, path, builder).await.map(|_| ())
    }
}

async fn read_body(response: Response) -> Result<Value, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::status(
            status.as_u16(),
            upstream_message(&body, status),
        ));
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body).map_err(|e| ClientError::decode(format!("invalid JSON body: {e}")))
}

fn upstream_message(body: &str, status: StatusCode) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["message", "error"]
            .iter()
            .find_map(|key| match value.get(*key)? {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Array(items) => {
                    let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                    (!parts.is_empty()).then(|| parts.join("; "))
                }
                _ => None,
            })
    });

    from_json
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty() && text.len() <= 512 && !text.starts_with('<')).then(|| text.to_string())
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}

fn metric_method(method: &HttpMethod) -> Method {
    match *method {
        HttpMethod::POST => Method::Post,
        HttpMethod::PUT => Method::Put,
        HttpMethod::PATCH => Method::Patch,
        HttpMethod::DELETE => Method::Delete,
        _ => Method::Get,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_prefers_json_message() {
        let msg = upstream_message(r#"{"status":"error","message":"News not found"}"#, StatusCode::NOT_FOUND);
        assert_eq!(msg, "News not found");
    }

    #[test]
    fn upstream_message_joins_validation_arrays() {
        let msg = upstream_message(
            r#"{"message":["title should not be empty","content should not be empty"]}"#,
            StatusCode::BAD_REQUEST,
        );
        assert_eq!(msg, "title should not be empty; content should not be empty");
    }

    #[test]
    fn upstream_message_falls_back_to_reason_phrase() {
        assert_eq!(upstream_message("", StatusCode::BAD_GATEWAY), "Bad Gateway");
        assert_eq!(
            upstream_message("<html>oops</html>", StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
        assert_eq!(upstream_message("plain failure", StatusCode::CONFLICT), "plain failure");
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new(Client::new(), "http://api.local/v1/", Metrics::new());
        assert_eq!(client.url("/news"), "http://api.local/v1/news");
    }
}
