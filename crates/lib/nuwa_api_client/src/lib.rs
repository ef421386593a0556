//! # nuwa_api_client
//!
//! Typed HTTP client for the Nuwa chat service, and the remote
//! [`ReplyPolicy`](nuwa_core::ReplyPolicy) built on it.

pub mod remote;
pub mod types;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub use remote::RemoteReplyPolicy;
pub use types::{ChatResponse, CorrectionResponse, HealthResponse};

/// Default service location used by the CLI.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:3000";

/// Errors talking to the chat service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response parse error: {0}")]
    Decode(String),
}

/// Thin client over the chat service endpoints.
#[derive(Debug, Clone)]
pub struct ChatServiceClient {
    http: Client,
    base_url: Url,
}

impl ChatServiceClient {
    /// Client using reqwest's default timeouts.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, None)
    }

    /// Client with an optional per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// `POST /chat`.
    pub async fn chat(&self, message: &str) -> Result<ChatResponse, ClientError> {
        let url = self.endpoint("chat")?;
        debug!(%url, "sending chat request");
        let resp = self
            .http
            .post(url)
            .json(&types::ChatRequest { message })
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let resp = self.http.get(self.endpoint("health")?).send().await?;
        Self::read_json(resp).await
    }

    /// `POST /correction`.
    pub async fn correction(
        &self,
        message: &str,
        target_language: &str,
    ) -> Result<CorrectionResponse, ClientError> {
        let resp = self
            .http
            .post(self.endpoint("correction")?)
            .json(&types::CorrectionRequest {
                message,
                target_language,
            })
            .send()
            .await?;
        Self::read_json(resp).await
    }
}
