use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::post;
use serde_json::{Value, json};

use crate::config::ServerConfig;
use crate::routes::api_routes;
use crate::state::AppState;

// =============================================================================
// HELPERS
// =============================================================================

/// Bind `app` on an ephemeral local port and return its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stand-in backend: echoes what it received so tests can see what was relayed.
fn fake_backend() -> Router {
    Router::new()
        .route(
            "/predict",
            post(|headers: axum::http::HeaderMap, body: axum::body::Bytes| async move {
                let content_type = headers
                    .get(axum::http::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                Json(json!({
                    "predicted_class": "samosa",
                    "seen_content_type": content_type,
                    "seen_bytes": body.len(),
                }))
            }),
        )
        .route(
            "/chat",
            post(|Json(body): Json<Value>| async move {
                let query = body.get("query").and_then(Value::as_str).unwrap_or_default().to_owned();
                Json(json!({ "response": format!("you asked: {query}") }))
            }),
        )
}

fn failing_backend() -> Router {
    Router::new()
        .route("/predict", post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }))
        .route(
            "/chat",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "No query provided" }))).into_response() }),
        )
}

fn config(classifier_url: &str, chat_url: &str, max_upload_bytes: usize) -> ServerConfig {
    ServerConfig {
        port: 0,
        classifier_url: classifier_url.to_owned(),
        chat_url: chat_url.to_owned(),
        connect_timeout_secs: 2,
        max_upload_bytes,
    }
}

async fn spawn_decoder(classifier_url: &str, chat_url: &str, max_upload_bytes: usize) -> String {
    let state = AppState::new(&config(classifier_url, chat_url, max_upload_bytes)).unwrap();
    spawn(api_routes(state)).await
}

/// A base URL nothing listens on.
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

const MULTIPART_TYPE: &str = "multipart/form-data; boundary=XyZ";

fn multipart_body() -> Vec<u8> {
    b"--XyZ\r\nContent-Disposition: form-data; name=\"file\"; filename=\"samosa.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n\xff\xd8\xff\xe0\r\n--XyZ--\r\n".to_vec()
}

// =============================================================================
// /predict
// =============================================================================

#[tokio::test]
async fn predict_relays_body_and_content_type() {
    let backend = spawn(fake_backend()).await;
    let base = spawn_decoder(&backend, &backend, 1024 * 1024).await;
    let payload = multipart_body();
    let payload_len = payload.len();

    let resp = reqwest::Client::new()
        .post(format!("{base}/predict"))
        .header("content-type", MULTIPART_TYPE)
        .body(payload)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "application/json");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["predicted_class"], "samosa");
    assert_eq!(body["seen_content_type"], MULTIPART_TYPE);
    assert_eq!(body["seen_bytes"], payload_len);
}

#[tokio::test]
async fn predict_relays_backend_failure_status() {
    let backend = spawn(failing_backend()).await;
    let base = spawn_decoder(&backend, &backend, 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/predict"))
        .header("content-type", MULTIPART_TYPE)
        .body(multipart_body())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "boom");
}

#[tokio::test]
async fn predict_unreachable_backend_is_bad_gateway() {
    let dead = dead_url().await;
    let base = spawn_decoder(&dead, &dead, 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/predict"))
        .header("content-type", MULTIPART_TYPE)
        .body(multipart_body())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn predict_over_body_limit_is_rejected() {
    let backend = spawn(fake_backend()).await;
    let base = spawn_decoder(&backend, &backend, 16).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/predict"))
        .header("content-type", MULTIPART_TYPE)
        .body(vec![0_u8; 64])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// /chat
// =============================================================================

#[tokio::test]
async fn chat_relays_to_chat_backend() {
    let backend = spawn(fake_backend()).await;
    let dead = dead_url().await;
    // Classifier unreachable: proves chat goes to its own base URL.
    let base = spawn_decoder(&dead, &backend, 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/chat"))
        .json(&json!({ "query": "what is a samosa?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let text = resp.text().await.unwrap();
    assert_eq!(decoder::chat_outcome(&text), Ok("you asked: what is a samosa?".to_owned()));
}

#[tokio::test]
async fn chat_relays_error_body_with_status() {
    let backend = spawn(failing_backend()).await;
    let base = spawn_decoder(&backend, &backend, 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/chat"))
        .json(&json!({ "query": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let text = resp.text().await.unwrap();
    assert_eq!(decoder::chat_outcome(&text), Err(decoder::ChatFailure::Service("No query provided".to_owned())));
}

// =============================================================================
// /healthz
// =============================================================================

#[tokio::test]
async fn healthz_ok() {
    let dead = dead_url().await;
    let base = spawn_decoder(&dead, &dead, 1024).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
