//! HTTP client for the mail relay behind the contact form
//!
//! The relay accepts `POST <endpoint>` with `{name, email, subject, message}`
//! and answers with any success status, or a non-success status carrying
//! `{"error": "<message>"}`.

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::contact::{ContactPayload, MailOutcome};
use crate::infrastructure::config::ContactConfig;

#[derive(Debug, Error)]
pub enum MailError {
    /// The relay answered with a non-success status
    #[error("mail relay rejected the message ({status}): {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    /// No usable response (connection, timeout, TLS)
    #[error("mail relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl MailError {
    /// The user-visible outcome this failure maps to.
    pub fn outcome(&self) -> MailOutcome {
        match self {
            MailError::Rejected { message, .. } => MailOutcome::Rejected {
                message: message.clone(),
            },
            MailError::Transport(_) => MailOutcome::TransportFailed,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[async_trait]
pub trait MailClient: Send + Sync {
    async fn send(&self, payload: &ContactPayload) -> Result<(), MailError>;
}

pub struct HttpMailClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpMailClient {
    pub fn new(config: &ContactConfig) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config
                .api_key
                .as_ref()
                .map(|key| SecretString::new(key.clone().into_boxed_str())),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MailClient for HttpMailClient {
    async fn send(&self, payload: &ContactPayload) -> Result<(), MailError> {
        let mut request = self.client.post(&self.endpoint).json(payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            log::info!("Mail relay accepted message ({status})");
            return Ok(());
        }

        // A body that is not `{"error": ...}` still counts as a rejection
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(e) => {
                log::warn!("Unreadable rejection body from mail relay: {e}");
                None
            }
        };
        Err(MailError::Rejected { status, message })
    }
}
