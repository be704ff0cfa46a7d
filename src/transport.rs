//! HTTP transport to the collector endpoint. One POST per snapshot,
//! best-effort; the polling loop is the only retry mechanism.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

use crate::config::AgentConfig;
use crate::error::TransportError;
use crate::snapshot::SystemSnapshot;

/// Delivery seam for the polling loop; tests substitute a recording fake.
#[async_trait]
pub trait Reporter: Send {
    async fn send(&self, snapshot: &SystemSnapshot) -> Result<(), TransportError>;
}

pub struct HttpReporter {
    client: Client,
    endpoint: String,
    secret: String,
}

impl HttpReporter {
    pub fn new(config: &AgentConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/agent", config.collector_url),
            secret: config.secret.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Reporter for HttpReporter {
    async fn send(&self, snapshot: &SystemSnapshot) -> Result<(), TransportError> {
        let body = serde_json::to_vec(snapshot)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            // Raw shared secret, no bearer prefix; the collector expects it
            // verbatim.
            .header(AUTHORIZATION, &self.secret)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
