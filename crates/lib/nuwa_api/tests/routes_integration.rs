//! Integration tests: build the router and drive it with in-memory requests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use nuwa_api::{AppState, config::ApiConfig};
use nuwa_core::language::Language;
use nuwa_core::reply::canned::service_replies;
use tower::ServiceExt;

fn app() -> Router {
    nuwa_api::router(AppState::seeded(ApiConfig::default(), 17))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let (status, json) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    let ts = json["timestamp"].as_str().expect("timestamp is string");
    assert!(ts.ends_with('Z'), "unexpected timestamp: {ts}");
    chrono::DateTime::parse_from_rfc3339(ts).expect("RFC 3339 timestamp");
}

#[tokio::test]
async fn root_banner() {
    let (status, json) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Nuwa Language Room API");
}

#[tokio::test]
async fn chat_returns_canned_reply() {
    for uri in ["/chat", "/api/chat"] {
        let (status, json) = send(
            app(),
            post_json(uri, serde_json::json!({"message": "today is nice day"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let reply = json["reply"].as_str().expect("reply is string");
        assert!(service_replies(Language::English).contains(&reply));
    }
}

#[tokio::test]
async fn chat_replies_in_message_language() {
    let (status, json) = send(
        app(),
        post_json("/chat", serde_json::json!({"message": "こんにちは"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let reply = json["reply"].as_str().unwrap();
    assert!(service_replies(Language::Japanese).contains(&reply));
}

#[tokio::test]
async fn chat_rejects_blank_message() {
    let req = post_json("/chat", serde_json::json!({"message": "  "}));
    let (status, json) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn chat_rejects_malformed_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn correction_capitalises_and_translates() {
    let (status, json) = send(
        app(),
        post_json("/correction", serde_json::json!({"message": "good morning"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["original"], "good morning");
    assert_eq!(json["corrected"], "Good morning.");
    assert_eq!(json["is_correct"], false);
    assert_eq!(json["translation"], "selamat pagi");
    assert_eq!(json["grammar_note"], "Basic sentence structure applied");
}

#[tokio::test]
async fn correction_unknown_target_language() {
    let (status, json) = send(
        app(),
        post_json(
            "/correction",
            serde_json::json!({"message": "Hello.", "target_language": "fr"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_correct"], true);
    assert_eq!(json["translation"], "Translation not available");
}

#[tokio::test]
async fn process_combines_reply_and_correction() {
    let (status, json) = send(
        app(),
        post_json("/process", serde_json::json!({"message": "thank you"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["response"].is_string());
    assert_eq!(json["language"], "English");
    assert_eq!(json["translation"], "terima kasih");
    assert_eq!(json["correction"]["corrected"], "Thank you.");
    assert_eq!(json["grammar_formula"], "Subject + Verb + Object");
    assert_eq!(json["correction"]["grammar_formula"], json["grammar_formula"]);
}

#[tokio::test]
async fn auth_and_user_mounts_are_not_implemented() {
    for (method, uri) in [
        ("POST", "/api/auth/login"),
        ("GET", "/api/auth"),
        ("GET", "/api/user/profile"),
        ("DELETE", "/api/user/42/settings"),
    ] {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(app(), req).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "{method} {uri}");
        assert_eq!(json["error"], "not_implemented");
    }
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let (status, json) = send(app(), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}
