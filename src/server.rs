//! Optional HTTP ingress that forwards a dream collection to the webhook.
//!
//! `POST /api/send-dreams` accepts `{"dreams": [{"categoryId", "text"}]}`.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::models::Dream;
use crate::notify::WebhookClient;
use crate::webhook::build_payload;

pub struct IngressState {
    pub webhook: WebhookClient,
}

type ApiResponse = (StatusCode, Json<Value>);

fn failure(status: StatusCode, message: &str) -> ApiResponse {
    (status, Json(json!({ "error": message })))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "birthday-tui"
    }))
}

/// Forward a dream collection to the webhook.
///
/// Every entry must deserialize as a `Dream`. A malformed entry fails the
/// whole request with the generic error instead of being forwarded with
/// placeholder values. Unknown category ids are still accepted.
pub async fn send_dreams_handler(
    State(state): State<Arc<IngressState>>,
    body: Bytes,
) -> ApiResponse {
    let generic = || failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send dreams to Discord");

    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            error!("Error reading dreams request: {}", e);
            return generic();
        }
    };

    let Some(raw_dreams) = value.get("dreams").filter(|d| d.is_array()) else {
        return failure(StatusCode::BAD_REQUEST, "Invalid dreams data");
    };

    if !state.webhook.is_configured() {
        error!("Discord webhook URL not configured");
        return failure(StatusCode::INTERNAL_SERVER_ERROR, "Discord webhook not configured");
    }

    let dreams: Vec<Dream> = match serde_json::from_value(raw_dreams.clone()) {
        Ok(dreams) => dreams,
        Err(e) => {
            error!("Malformed dream entry: {}", e);
            return generic();
        }
    };

    let payload = build_payload(&dreams, state.webhook.name(), Utc::now());
    match state.webhook.post(&payload).await {
        Ok(()) => {
            info!("Forwarded {} dreams to webhook", dreams.len());
            (StatusCode::OK, Json(json!({ "success": true })))
        }
        Err(e) => {
            error!("Error sending dreams to Discord: {}", e);
            generic()
        }
    }
}

pub fn ingress_router(state: Arc<IngressState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/send-dreams", post(send_dreams_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Run the ingress until the process is stopped
pub async fn serve(webhook: WebhookClient, port: u16) -> Result<()> {
    let app = ingress_router(Arc::new(IngressState { webhook }));

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Dreams ingress listening on port {}", port);

    axum::serve(listener, app).await.context("Ingress server failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::spawn_fake_webhook;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn router(url: Option<String>) -> Router {
        ingress_router(Arc::new(IngressState {
            webhook: WebhookClient::new(url, "Alina"),
        }))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/send-dreams")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_non_array_dreams_is_bad_request() {
        for body in [r#"{}"#, r#"{"dreams": null}"#, r#"{"dreams": "Träume"}"#, r#"{"dreams": {}}"#] {
            let (status, json) = post_json(router(Some("http://unused".into())), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
            assert_eq!(json["error"], "Invalid dreams data");
        }
    }

    #[tokio::test]
    async fn test_unconfigured_webhook_is_server_error() {
        let (status, json) = post_json(router(None), r#"{"dreams": []}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Discord webhook not configured");
    }

    #[tokio::test]
    async fn test_invalid_json_is_generic_error() {
        let (status, json) = post_json(router(None), "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to send dreams to Discord");
    }

    #[tokio::test]
    async fn test_forwards_to_webhook() {
        let (url, received) = spawn_fake_webhook(StatusCode::NO_CONTENT).await;
        let body = r#"{"dreams": [{"categoryId": 1, "text": "Tierärztin"}, {"categoryId": 3, "text": "Mutiger sein"}]}"#;

        let (status, json) = post_json(router(Some(url)), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let embed = &received[0]["embeds"][0];
        assert_eq!(embed["fields"][0]["value"], "2");
        let description = embed["description"].as_str().unwrap();
        assert!(description.contains("💼 **Karriere & Beruf**\nTierärztin"));
        assert!(description.contains("🌟 **Persönliche Ziele**\nMutiger sein"));
    }

    #[tokio::test]
    async fn test_webhook_error_status_is_generic_error() {
        let (url, received) = spawn_fake_webhook(StatusCode::TOO_MANY_REQUESTS).await;
        let (status, json) =
            post_json(router(Some(url)), r#"{"dreams": [{"categoryId": 2, "text": "Peru"}]}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to send dreams to Discord");
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_category_is_forwarded() {
        let (url, received) = spawn_fake_webhook(StatusCode::OK).await;
        let (status, _) =
            post_json(router(Some(url)), r#"{"dreams": [{"categoryId": 9, "text": "Mond"}]}"#).await;
        assert_eq!(status, StatusCode::OK);

        let received = received.lock().unwrap();
        let description = received[0]["embeds"][0]["description"].as_str().unwrap();
        assert!(description.contains("✨ **Unbekannte Kategorie**\nMond"));
    }

    #[tokio::test]
    async fn test_malformed_entry_is_generic_error() {
        let (url, received) = spawn_fake_webhook(StatusCode::OK).await;
        let (status, _) =
            post_json(router(Some(url)), r#"{"dreams": [{"categoryId": "eins"}]}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(received.lock().unwrap().is_empty());
    }
}
