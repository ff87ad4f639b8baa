//! Best-effort delivery of collected dreams to the webhook.
//!
//! Delivery runs on a detached task. Whatever the outcome, the dispatch is
//! marked as attempted afterwards and never repeated.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::models::Dream;
use crate::webhook::{build_payload, WebhookPayload};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook URL not configured")]
    NotConfigured,
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("webhook returned status {0}")]
    Status(u16),
}

/// Receiver of a completed dream collection
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, dreams: Vec<Dream>) -> Result<(), NotifyError>;
}

/// Posts webhook payloads as JSON
#[derive(Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: Option<String>,
    name: String,
}

impl WebhookClient {
    pub fn new(url: Option<String>, name: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self {
            client,
            url,
            name: name.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn post(&self, payload: &WebhookPayload) -> Result<(), NotifyError> {
        let url = self.url.as_deref().ok_or(NotifyError::NotConfigured)?;
        let response = self.client.post(url).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for WebhookClient {
    async fn deliver(&self, dreams: Vec<Dream>) -> Result<(), NotifyError> {
        let payload = build_payload(&dreams, &self.name, Utc::now());
        self.post(&payload).await
    }
}

/// The "dreams sent" flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    NotAttempted,
    InFlight,
    Attempted,
}

/// One-shot dispatcher shared between the UI thread and the delivery task
#[derive(Debug, Clone, Default)]
pub struct DreamDispatch {
    state: Arc<Mutex<DispatchState>>,
}

impl DreamDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DispatchState {
        self.state
            .lock()
            .map(|state| *state)
            .unwrap_or(DispatchState::Attempted)
    }

    /// Start delivery unless it was started before. Must be called from
    /// within a tokio runtime. The handle is only useful to tests; callers
    /// normally drop it.
    pub fn fire_once(
        &self,
        sink: Arc<dyn NotificationSink>,
        dreams: Vec<Dream>,
    ) -> Option<JoinHandle<()>> {
        {
            let Ok(mut state) = self.state.lock() else {
                return None;
            };
            if *state != DispatchState::NotAttempted {
                return None;
            }
            *state = DispatchState::InFlight;
        }

        let state = Arc::clone(&self.state);
        let count = dreams.len();
        Some(tokio::spawn(async move {
            match sink.deliver(dreams).await {
                Ok(()) => info!("Delivered {} dreams to webhook", count),
                Err(NotifyError::NotConfigured) => {
                    warn!("No webhook configured, {} dreams not sent", count)
                }
                Err(e) => error!("Failed to deliver dreams: {}", e),
            }
            if let Ok(mut state) = state.lock() {
                *state = DispatchState::Attempted;
            }
        }))
    }
}
