//! Shared helpers for tests.

use std::sync::{Arc, Mutex};

use axum::{http::StatusCode, response::Json, routing::post, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// Start a local webhook receiver that records every JSON body and answers
/// with `status`. Returns the URL to post to and the recorded bodies.
pub async fn spawn_fake_webhook(status: StatusCode) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&received);

    let app = Router::new().route(
        "/hook",
        post(move |Json(body): Json<Value>| {
            let captured = Arc::clone(&captured);
            async move {
                captured.lock().unwrap().push(body);
                status
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/hook", addr), received)
}
