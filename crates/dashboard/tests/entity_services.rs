mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{Behavior, TestApp, body_json, mint_token, set_cookies};
use serde_json::json;

fn session_cookie() -> String {
    format!("access_token={}", mint_token("user-1", "admin"))
}

#[tokio::test]
async fn news_list_unwraps_double_envelope_with_pagination() {
    let app = TestApp::new().await;
    let cookie = session_cookie();

    let response = app.get("/news?page=1&limit=10", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["id"], "n-1");
    assert_eq!(body["pagination"]["total_items"], 2);

    let calls = app.api.requests_to("/news");
    assert!(calls[0].authorization.as_deref().unwrap().starts_with("Bearer "));
}

#[tokio::test]
async fn news_item_unwraps_double_envelope() {
    let app = TestApp::new().await;

    let response = app.get("/news/n-9", Some(&session_cookie())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], "n-9");
    assert_eq!(body["data"]["slug"], "kajian-akbar");
}

#[tokio::test]
async fn upstream_not_found_is_propagated() {
    let app = TestApp::new().await;

    let response = app.get("/news/missing", Some(&session_cookie())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "News not found");
}

#[tokio::test]
async fn news_create_forwards_multipart_form() {
    let app = TestApp::new().await;
    let boundary = "X-DASHBOARD-BOUNDARY";
    let form = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\nKajian Akbar\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"content\"\r\n\r\nIsi berita\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"category\"\r\n\r\n\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"publishedAt\"\r\n\r\n2024-03-01T12:00:00+07:00\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"tags\"\r\n\r\n[\"kajian\",\"umum\"]\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"cover.png\"\r\nContent-Type: image/png\r\n\r\nPNG\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let request = Request::builder()
        .method("POST")
        .uri("/news")
        .header(header::COOKIE, session_cookie())
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(form))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let calls = app.api.requests_to("/news");
    let post = calls.iter().find(|r| r.method == "POST").unwrap();
    let part = |name: &str| {
        post.parts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    assert_eq!(part("title"), Some("Kajian Akbar"));
    assert_eq!(part("publishedAt"), Some("2024-03-01T05:00:00.000Z"));
    assert_eq!(part("tags"), Some(r#"["kajian","umum"]"#));
    assert_eq!(part("images"), Some("file:cover.png:3"));
    assert!(part("category").is_none());
    assert!(part("delete_images").is_none());
}

#[tokio::test]
async fn news_create_rejects_invalid_form() {
    let app = TestApp::new().await;
    let boundary = "B";
    let form = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"content\"\r\n\r\nno title\r\n--{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/news")
        .header(header::COOKIE, session_cookie())
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(form))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.api.requests_to("/news").is_empty());
}

#[tokio::test]
async fn news_text_fields_are_not_decoded_as_json() {
    let app = TestApp::new().await;

    let response = app
        .send_form(
            "POST",
            "/news",
            &session_cookie(),
            &[("title", "[2024]"), ("content", r#"{"blocks":[]}"#)],
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.api.sent_parts("POST", "/news", "title"), vec!["[2024]"]);
    assert_eq!(
        app.api.sent_parts("POST", "/news", "content"),
        vec![r#"{"blocks":[]}"#]
    );
}

#[tokio::test]
async fn news_update_forwards_deleted_images() {
    let app = TestApp::new().await;

    let response = app
        .send_form(
            "PUT",
            "/news/n-1",
            &session_cookie(),
            &[
                ("title", "Judul baru"),
                ("delete_images", r#"["https://cdn.example/news/1.png"]"#),
                ("delete_images", "https://cdn.example/news/2.png"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], "n-1");

    assert_eq!(app.api.sent_parts("PUT", "/news/n-1", "title"), vec!["Judul baru"]);
    assert_eq!(
        app.api.sent_parts("PUT", "/news/n-1", "delete_images"),
        vec![r#"["https://cdn.example/news/1.png","https://cdn.example/news/2.png"]"#]
    );
}

#[tokio::test]
async fn news_item_named_slug_is_fetched_like_any_other() {
    let app = TestApp::new().await;

    let response = app.get("/news/slug", Some(&session_cookie())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], "slug");
}

#[tokio::test]
async fn account_list_unwraps_double_envelope() {
    let app = TestApp::new().await;

    let response = app.get("/accounts", Some(&session_cookie())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][1]["id"], "user-2");
    assert_eq!(body["data"][1]["role"], "editor");
    assert_eq!(body["pagination"]["total_items"], 3);
}

#[tokio::test]
async fn account_role_change_sends_role_and_unwraps_single_envelope() {
    let app = TestApp::new().await;

    let response = app
        .send_json(
            "PUT",
            "/accounts/user-2/role",
            Some(&session_cookie()),
            json!({"role": "admin"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["id"], "user-2");
    assert_eq!(body["data"]["role"], "admin");
    assert_eq!(app.api.sent_parts("PUT", "/accounts/user-2/role", "role"), vec!["admin"]);
}

#[tokio::test]
async fn account_role_change_requires_a_role() {
    let app = TestApp::new().await;

    let response = app
        .send_json("PUT", "/accounts/user-2/role", Some(&session_cookie()), json!({"role": ""}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.api.requests_to("/accounts/user-2/role").is_empty());
}

#[tokio::test]
async fn prayer_room_list_is_double_and_item_is_single() {
    let app = TestApp::new().await;
    let cookie = session_cookie();

    let list = app.get("/prayer-rooms", Some(&cookie)).await;
    assert_eq!(list.status(), StatusCode::OK);
    let body = body_json(list).await;
    assert_eq!(body["data"][0]["id"], "pr-1");
    assert_eq!(body["data"][0]["facilities"], json!(["wifi", "mukena"]));
    assert_eq!(body["pagination"]["total_items"], 1);

    let item = app.get("/prayer-rooms/pr-7", Some(&cookie)).await;
    assert_eq!(item.status(), StatusCode::OK);
    let body = body_json(item).await;
    assert_eq!(body["data"]["id"], "pr-7");
    assert_eq!(body["data"]["location"]["lat"], -6.9);
}

#[tokio::test]
async fn prayer_room_create_collects_repeated_and_json_fields() {
    let app = TestApp::new().await;

    let response = app
        .send_form(
            "POST",
            "/prayer-rooms",
            &session_cookie(),
            &[
                ("name", "Musholla Al-Ikhlas"),
                ("address", "Jl. Merdeka 1"),
                ("facilities", "wifi"),
                ("facilities", "mukena"),
                ("location", r#"{"lat":-6.9,"lng":107.6}"#),
                ("openingHours", "24 jam"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        app.api.sent_parts("POST", "/prayer-rooms", "facilities"),
        vec![r#"["wifi","mukena"]"#]
    );
    assert_eq!(
        app.api.sent_parts("POST", "/prayer-rooms", "location"),
        vec![r#"{"lat":-6.9,"lng":107.6}"#]
    );
    assert_eq!(app.api.sent_parts("POST", "/prayer-rooms", "openingHours"), vec!["24 jam"]);
}

#[tokio::test]
async fn prayer_room_create_rejects_unreadable_location() {
    let app = TestApp::new().await;

    let response = app
        .send_form(
            "POST",
            "/prayer-rooms",
            &session_cookie(),
            &[("name", "Musholla"), ("address", "Jl. Merdeka 1"), ("location", "near the market")],
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.api.requests_to("/prayer-rooms").is_empty());
}

#[tokio::test]
async fn activity_list_unwraps_single_envelope_with_meta() {
    let app = TestApp::new().await;

    let response = app.get("/activities", Some(&session_cookie())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][1]["id"], "act-2");
    assert_eq!(body["data"][1]["location"], "Aula");
    assert_eq!(body["pagination"]["total_items"], 2);
}

#[tokio::test]
async fn system_log_list_unwraps_double_envelope() {
    let app = TestApp::new().await;

    let response = app.get("/system-logs", Some(&session_cookie())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"][0]["id"], "log-1");
    assert_eq!(body["data"][0]["action"], "LOGIN");
    assert_eq!(body["pagination"]["total_items"], 41);
    assert_eq!(body["pagination"]["total_pages"], 3);
}

#[tokio::test]
async fn login_sets_session_cookies() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/auth/login",
            None,
            json!({"email": "siti@example.com", "password": "secret123"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    let access = cookies
        .iter()
        .find(|c| c.starts_with("access_token="))
        .unwrap();
    assert!(access.contains("HttpOnly"));
    assert!(access.contains("SameSite=Lax"));
    assert!(cookies.iter().any(|c| c.starts_with("refresh_token=refresh-abc")));

    let body = body_json(response).await;
    assert_eq!(body["data"]["redirect_to"], "/menu");
}

#[tokio::test]
async fn login_failure_is_reported_without_cookies() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/auth/login",
            None,
            json!({"email": "siti@example.com", "password": "wrong-pass"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&response).is_empty());
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn login_validates_input_before_calling_the_api() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/auth/login", None, json!({"email": "nope", "password": "secret123"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.api.requests_to("/auth/login").is_empty());
}

#[tokio::test]
async fn logout_clears_cookies_even_when_remote_logout_fails() {
    let app = TestApp::with_behavior(Behavior {
        logout_fails: true,
        ..Default::default()
    })
    .await;

    let response = app
        .post_json("/auth/logout", Some(&session_cookie()), json!({}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    let cleared = cookies
        .iter()
        .find(|c| c.starts_with("access_token="))
        .unwrap();
    assert!(cleared.contains("Max-Age=0"));
    assert_eq!(app.api.requests_to("/auth/logout").len(), 1);
}

#[tokio::test]
async fn slug_is_generated_from_title() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/news/slug/generate",
            Some(&session_cookie()),
            json!({"title": "Hello, World!  2024"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["slug"], "hello-world-2024");
}

#[tokio::test]
async fn unusable_title_gets_manual_slug_message() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/news/slug/generate", Some(&session_cookie()), json!({"title": "???"}))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Failed to generate slug from title, please fill it in manually"
    );
}

#[tokio::test]
async fn theme_preference_is_written_to_cookie() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/preferences/mode", Some(&session_cookie()), json!({"mode": "dark"}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).iter().any(|c| c.starts_with("mode=dark")));
}

#[tokio::test]
async fn remote_calls_are_counted_in_metrics() {
    let app = TestApp::new().await;
    app.get("/news", Some(&session_cookie())).await;

    let response = app.get("/metrics", None).await;
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains("api_requests_total"));
    assert!(text.contains("method=\"Get\""));
}
