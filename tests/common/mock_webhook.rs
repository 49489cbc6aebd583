// Mock workflow webhook for relay tests
#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, header::LOCATION, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, post},
    Router,
};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

/// A request received by the mock webhook
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

/// Reply the mock webhook sends for every call
#[derive(Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
    pub location: Option<String>,
}

impl MockReply {
    pub fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
            location: None,
        }
    }

    /// Redirects to `/final`, which answers `{"answer":"from redirect"}`.
    pub fn redirect(status: StatusCode) -> Self {
        Self {
            location: Some("/final".to_string()),
            ..Self::new(status, "")
        }
    }

    pub fn answer(answer: &str) -> Self {
        Self::new(
            StatusCode::OK,
            &serde_json::json!({ "answer": answer }).to_string(),
        )
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Mock webhook server bound to an ephemeral local port
pub struct MockWebhook {
    pub url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl MockWebhook {
    pub async fn start(reply: MockReply) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            calls: calls.clone(),
        };

        let app = Router::new()
            .route("/webhook/chat", post(webhook_handler))
            .route("/final", any(redirect_target_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = server.await {
                eprintln!("Mock webhook error: {}", e);
            }
        });

        Self {
            url: format!("http://{}/webhook/chat", addr),
            calls,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

async fn webhook_handler(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    record(&state, &method, &uri, &headers, &body);

    if !state.reply.delay.is_zero() {
        tokio::time::sleep(state.reply.delay).await;
    }
    match &state.reply.location {
        Some(location) => (state.reply.status, [(LOCATION, location.clone())]).into_response(),
        None => (state.reply.status, state.reply.body.clone()).into_response(),
    }
}

async fn redirect_target_handler(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    record(&state, &method, &uri, &headers, &body);
    (
        StatusCode::OK,
        serde_json::json!({ "answer": "from redirect" }).to_string(),
    )
        .into_response()
}

fn record(state: &MockState, method: &Method, uri: &Uri, headers: &HeaderMap, body: &str) {
    let header = |name: axum::http::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.calls.lock().unwrap().push(RecordedCall {
        method: method.to_string(),
        path: uri.path().to_string(),
        body: serde_json::from_str(body).unwrap_or(serde_json::Value::Null),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
    });
}

/// Returns a local URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/webhook/chat", port)
}
