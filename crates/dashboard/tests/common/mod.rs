#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Body,
    extract::{Multipart, Path, State},
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use dashboard::{config::Config, handler::AppRouter, state::AppState};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Knobs for the stand-in remote API.
#[derive(Debug, Clone, Default)]
pub struct Behavior {
    pub profile_unavailable: bool,
    pub logout_fails: bool,
    pub summary_fails: bool,
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub parts: Vec<(String, String)>,
}

#[derive(Clone)]
struct FakeState {
    behavior: Behavior,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeState {
    fn record(&self, method: &str, path: &str, headers: &HeaderMap, parts: Vec<(String, String)>) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        self.log.lock().unwrap().push(Recorded {
            method: method.to_string(),
            path: path.to_string(),
            authorization,
            parts,
        });
    }
}

fn news_json(id: &str) -> Value {
    json!({
        "_id": id,
        "title": "Kajian Akbar",
        "slug": "kajian-akbar",
        "content": "Isi berita",
        "images": ["https://cdn.example/news/1.png"],
        "tags": ["kajian"],
        "createdAt": "2024-03-01T05:30:00.000Z"
    })
}

async fn me(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("GET", "/accounts/me", &headers, Vec::new());

    if state.behavior.profile_unavailable {
        return (StatusCode::UNAUTHORIZED, Json(json!({"status": "error", "message": "jwt expired"})))
            .into_response();
    }

    Json(json!({
        "status": "success",
        "data": {
            "_id": "user-1",
            "role": "admin",
            "firstName": "Siti",
            "lastName": "Aminah",
            "email": "siti@example.com",
            "phoneNumber": "08123456789"
        }
    }))
    .into_response()
}

async fn list_news(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("GET", "/news", &headers, Vec::new());

    Json(json!({
        "status": "success",
        "data": {
            "data": [news_json("n-1"), news_json("n-2")],
            "pagination": {"page": 1, "limit": 10, "total": 2, "totalPages": 1}
        }
    }))
    .into_response()
}

async fn get_news(State(state): State<FakeState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    state.record("GET", &format!("/news/{id}"), &headers, Vec::new());

    if id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({"status": "error", "message": "News not found"})))
            .into_response();
    }

    Json(json!({"status": "success", "data": {"data": news_json(&id)}})).into_response()
}

async fn read_parts(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let bytes = field.bytes().await.unwrap_or_default();
                format!("file:{file_name}:{}", bytes.len())
            }
            None => field.text().await.unwrap_or_default(),
        };
        parts.push((name, value));
    }
    parts
}

async fn create_news(State(state): State<FakeState>, headers: HeaderMap, multipart: Multipart) -> Response {
    let parts = read_parts(multipart).await;
    state.record("POST", "/news", &headers, parts);

    (
        StatusCode::CREATED,
        Json(json!({"status": "success", "data": news_json("n-new")})),
    )
        .into_response()
}

async fn update_news(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    let parts = read_parts(multipart).await;
    state.record("PUT", &format!("/news/{id}"), &headers, parts);

    Json(json!({"status": "success", "data": news_json(&id)})).into_response()
}

fn account_json(id: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "role": role,
        "firstName": "Siti",
        "lastName": "Aminah",
        "email": format!("{id}@example.com"),
        "phoneNumber": "08123456789",
        "isActive": true
    })
}

async fn list_accounts(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("GET", "/accounts", &headers, Vec::new());

    Json(json!({
        "status": "success",
        "data": {
            "data": [account_json("user-1", "admin"), account_json("user-2", "editor"), account_json("user-3", "viewer")],
            "pagination": {"currentPage": 1, "pageSize": 10, "totalItems": 3, "totalPages": 1}
        }
    }))
    .into_response()
}

async fn update_role(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let role = body["role"].as_str().unwrap_or_default().to_string();
    state.record(
        "PUT",
        &format!("/accounts/{id}/role"),
        &headers,
        vec![("role".to_string(), role.clone())],
    );

    Json(json!({"status": "success", "data": account_json(&id, &role)})).into_response()
}

fn prayer_room_json(id: &str) -> Value {
    json!({
        "_id": id,
        "name": "Musholla Al-Ikhlas",
        "address": "Jl. Merdeka 1",
        "city": "Bandung",
        "facilities": ["wifi", "mukena"],
        "location": {"lat": -6.9, "lng": 107.6},
        "images": []
    })
}

async fn list_prayer_rooms(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("GET", "/prayer-rooms", &headers, Vec::new());

    Json(json!({
        "status": "success",
        "data": {
            "data": [prayer_room_json("pr-1")],
            "pagination": {"page": 1, "limit": 10, "total": 1, "totalPages": 1}
        }
    }))
    .into_response()
}

async fn get_prayer_room(State(state): State<FakeState>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    state.record("GET", &format!("/prayer-rooms/{id}"), &headers, Vec::new());

    Json(json!({"status": "success", "data": prayer_room_json(&id)})).into_response()
}

async fn create_prayer_room(State(state): State<FakeState>, headers: HeaderMap, multipart: Multipart) -> Response {
    let parts = read_parts(multipart).await;
    state.record("POST", "/prayer-rooms", &headers, parts);

    (
        StatusCode::CREATED,
        Json(json!({"status": "success", "data": prayer_room_json("pr-new")})),
    )
        .into_response()
}

async fn list_activities(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("GET", "/activities", &headers, Vec::new());

    Json(json!({
        "status": "success",
        "data": [
            {"_id": "act-1", "title": "Kajian Subuh", "startDate": "2024-03-01T05:30:00.000Z"},
            {"_id": "act-2", "title": "Buka Bersama", "startDate": "2024-03-10T11:00:00.000Z", "location": "Aula"}
        ],
        "meta": {"page": 1, "limit": 10, "total": 2, "totalPages": 1}
    }))
    .into_response()
}

async fn list_system_logs(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("GET", "/system-logs", &headers, Vec::new());

    Json(json!({
        "status": "success",
        "data": {
            "data": [{
                "_id": "log-1",
                "level": "info",
                "action": "LOGIN",
                "message": "User signed in",
                "actor": "user-1",
                "createdAt": "2024-03-01T05:30:00.000Z"
            }],
            "pagination": {"page": 1, "limit": 20, "total": 41, "totalPages": 3}
        }
    }))
    .into_response()
}

async fn summary(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("GET", "/dashboard/summary", &headers, Vec::new());

    if state.behavior.summary_fails {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database down").into_response();
    }

    Json(json!({
        "status": "success",
        "data": {"totalUsers": 4, "totalNews": 12, "totalPrayerRooms": 3, "totalActivities": 7}
    }))
    .into_response()
}

async fn login(State(state): State<FakeState>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record("POST", "/auth/login", &headers, Vec::new());

    if body["password"] != "secret123" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "error", "message": "Invalid email or password"})),
        )
            .into_response();
    }

    Json(json!({
        "status": "success",
        "data": {
            "accessToken": mint_token("user-1", "admin"),
            "refreshToken": "refresh-abc"
        }
    }))
    .into_response()
}

async fn logout(State(state): State<FakeState>, headers: HeaderMap) -> Response {
    state.record("POST", "/auth/logout", &headers, Vec::new());

    if state.behavior.logout_fails {
        return StatusCode::BAD_GATEWAY.into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}

pub struct FakeApi {
    pub addr: SocketAddr,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeApi {
    pub async fn start(behavior: Behavior) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            behavior,
            log: log.clone(),
        };

        let app = Router::new()
            .route("/accounts/me", get(me))
            .route("/news", get(list_news).post(create_news))
            .route("/news/{id}", get(get_news).put(update_news))
            .route("/accounts", get(list_accounts))
            .route("/accounts/{id}/role", put(update_role))
            .route("/prayer-rooms", get(list_prayer_rooms).post(create_prayer_room))
            .route("/prayer-rooms/{id}", get(get_prayer_room))
            .route("/activities", get(list_activities))
            .route("/system-logs", get(list_system_logs))
            .route("/dashboard/summary", get(summary))
            .route("/auth/login", post(login))
            .route("/auth/logout", post(logout))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, log }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }

    /// Every value sent under `name` by the first `method` call to `path`.
    pub fn sent_parts(&self, method: &str, path: &str, name: &str) -> Vec<String> {
        self.requests_to(path)
            .into_iter()
            .find(|r| r.method == method)
            .map(|r| {
                r.parts
                    .into_iter()
                    .filter(|(key, _)| key == name)
                    .map(|(_, value)| value)
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub fn mint_token(sub: &str, role: &str) -> String {
    encode(
        &Header::default(),
        &json!({"sub": sub, "role": role, "exp": 4_102_444_800u64}),
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

pub struct TestApp {
    pub router: Router,
    pub api: FakeApi,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_behavior(Behavior::default()).await
    }

    pub async fn with_behavior(behavior: Behavior) -> Self {
        let api = FakeApi::start(behavior).await;

        let config = Config {
            port: 0,
            api_base_url: api.base_url(),
            translate_url: None,
            static_dir: "./public".into(),
            otel_endpoint: None,
            is_dev: true,
            enable_file_log: false,
            cookie_secure: false,
            api_timeout: Duration::from_secs(5),
        };

        let state = AppState::new(&config).await.unwrap();
        let router = AppRouter::build(state);

        Self { router, api }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    /// Sends a multipart form made of text parts; a name may repeat.
    pub async fn send_form(&self, method: &str, uri: &str, cookie: &str, parts: &[(&str, &str)]) -> Response {
        let boundary = "X-DASHBOARD-TEST-BOUNDARY";
        let mut form = String::new();
        for (name, value) in parts {
            form.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        form.push_str(&format!("--{boundary}--\r\n"));

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, cookie)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(form))
            .unwrap();

        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, cookie: Option<&str>, body: Value) -> Response {
        self.send_json("POST", uri, cookie, body).await
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}
