use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use trainer_invite::api::create_router;
use trainer_invite::config::{Config, LogFormat};
use trainer_invite::mail::{MailTransport, OutgoingEmail, TransportFailure};
use trainer_invite::state::AppState;

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail_with: Option<String>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportFailure> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.sent.lock().unwrap().push(email.clone());
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match &self.fail_with {
            Some(message) => Err(TransportFailure::Other(message.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

fn test_config(max_instances: usize) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        smtp_host: "smtp.gmail.com".to_string(),
        smtp_username: "coach@gmail.com".to_string(),
        smtp_password: "app-password".to_string(),
        mail_from: "\"Fitness App\" <coach@gmail.com>".to_string(),
        max_instances,
        log_format: LogFormat::Text,
    }
}

fn app(transport: Arc<RecordingTransport>, max_instances: usize) -> Router {
    create_router(AppState::new(test_config(max_instances), transport))
}

fn invoke(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/sendTrainerInvite")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn call(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app.oneshot(invoke(body.to_string())).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_send_invite_success() {
    let transport = Arc::new(RecordingTransport::default());

    let (status, body) = call(
        app(transport.clone(), 10),
        json!({ "data": { "name": "Alex", "email": "alex@example.com" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": { "success": true } }));

    let sent = transport.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "alex@example.com");
    assert_eq!(sent[0].subject, "Trainer Invitation");
    assert!(sent[0].body.starts_with("Hello Alex,"));
}

#[tokio::test]
async fn test_send_invite_transport_failure() {
    let transport = Arc::new(RecordingTransport {
        fail_with: Some("Invalid login".to_string()),
        ..Default::default()
    });

    let (status, body) = call(
        app(transport, 10),
        json!({ "data": { "name": "Alex", "email": "alex@example.com" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "result": { "success": false, "error": "Invalid login" } })
    );
}

#[tokio::test]
async fn test_send_invite_empty_name_is_sent() {
    let transport = Arc::new(RecordingTransport::default());

    let (status, body) = call(
        app(transport.clone(), 10),
        json!({ "data": { "name": "", "email": "alex@example.com" } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["success"], json!(true));
    assert!(transport.sent.lock().unwrap()[0].body.starts_with("Hello ,"));
}

#[tokio::test]
async fn test_send_invite_missing_field() {
    let transport = Arc::new(RecordingTransport::default());

    let (status, body) = call(
        app(transport.clone(), 10),
        json!({ "data": { "name": "Alex" } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], json!("INVALID_ARGUMENT"));
    assert!(transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_invite_malformed_json() {
    let transport = Arc::new(RecordingTransport::default());

    let response = app(transport, 10)
        .oneshot(invoke("{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrency_ceiling() {
    let transport = Arc::new(RecordingTransport {
        delay: Some(Duration::from_millis(50)),
        ..Default::default()
    });
    let router = app(transport.clone(), 2);

    let calls = (0..6).map(|i| {
        let router = router.clone();
        tokio::spawn(async move {
            call(
                router,
                json!({ "data": { "name": format!("Trainer {i}"), "email": "t@example.com" } }),
            )
            .await
        })
    });

    for handle in calls.collect::<Vec<_>>() {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["success"], json!(true));
    }

    assert_eq!(transport.sent.lock().unwrap().len(), 6);
    assert!(transport.peak.load(Ordering::SeqCst) <= 2);
}

#[tokio::test]
async fn test_health() {
    let transport = Arc::new(RecordingTransport::default());

    let response = app(transport, 10)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["mail_transport"], json!("recording"));
    assert_eq!(body["max_instances"], json!(10));
}
