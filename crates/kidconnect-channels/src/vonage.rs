//! WhatsApp transport over the Vonage Messages API.
//!
//! Each send is a single authenticated `POST` carrying the sender, the
//! recipient, the text, and the `whatsapp` channel tag. The API answers
//! `202 Accepted` when it takes the message for delivery.

use crate::error::ChannelError;
use crate::traits::{MessageTransport, TransportResult};
use crate::Result;
use async_trait::async_trait;
use kidconnect_core::config::{VonageConfig, DEFAULT_ENDPOINT};
use kidconnect_core::SecretString;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Channel tag sent with every message.
const CHANNEL: &str = "whatsapp";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Vonage Messages API client.
pub struct VonageTransport {
    /// HTTP client.
    client: Client,

    /// Messages endpoint.
    endpoint: String,

    /// API key (basic auth user).
    api_key: SecretString,

    /// API secret (basic auth password).
    api_secret: SecretString,

    /// Sender identity.
    from_number: String,
}

impl std::fmt::Debug for VonageTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VonageTransport")
            .field("endpoint", &self.endpoint)
            .field("from_number", &self.from_number)
            .field("api_key", &self.api_key.masked())
            .finish()
    }
}

/// Outbound message payload.
#[derive(Debug, Serialize)]
struct VonageMessagePayload<'a> {
    from: &'a str,
    to: &'a str,
    message_type: &'static str,
    text: &'a str,
    channel: &'static str,
}

impl VonageTransport {
    /// Create a transport against the sandbox endpoint.
    pub fn new(
        api_key: impl Into<SecretString>,
        api_secret: impl Into<SecretString>,
        from_number: impl Into<String>,
    ) -> Result<Self> {
        Self::build(
            api_key.into(),
            api_secret.into(),
            from_number.into(),
            DEFAULT_ENDPOINT.to_string(),
            DEFAULT_TIMEOUT,
        )
    }

    /// Create from configuration.
    pub fn from_config(config: &VonageConfig) -> Result<Self> {
        Self::build(
            config.api_key.clone(),
            config.api_secret.clone(),
            config.from_number.clone(),
            config.endpoint.clone(),
            config.timeout(),
        )
    }

    fn build(
        api_key: SecretString,
        api_secret: SecretString,
        from_number: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self> {
        if api_key.is_blank() || api_secret.is_blank() {
            return Err(ChannelError::config("API key and secret are required"));
        }
        if from_number.trim().is_empty() {
            return Err(ChannelError::config("Missing from_number"));
        }
        url::Url::parse(&endpoint)
            .map_err(|e| ChannelError::config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            api_secret,
            from_number: from_number.trim().to_string(),
        })
    }

    /// Point the transport at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The endpoint messages are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MessageTransport for VonageTransport {
    fn name(&self) -> &str {
        "vonage-whatsapp"
    }

    async fn send(&self, to_number: &str, body: &str) -> TransportResult {
        if to_number.trim().is_empty() {
            return TransportResult::rejected("recipient number is empty");
        }
        if body.is_empty() {
            return TransportResult::rejected("message body is empty");
        }

        let payload = VonageMessagePayload {
            from: &self.from_number,
            to: to_number,
            message_type: "text",
            text: body,
            channel: CHANNEL,
        };

        debug!(to = to_number, body_len = body.len(), "Sending WhatsApp message");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .basic_auth(
                self.api_key.expose_secret(),
                Some(self.api_secret.expose_secret()),
            )
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                debug!(to = to_number, status, "Messages API responded");
                TransportResult::remote(status, body)
            }
            Err(e) => {
                warn!(to = to_number, error = %e, "Messages API request failed");
                TransportResult::failed(e)
            }
        }
    }
}
