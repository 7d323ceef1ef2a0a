//! Message transport contract.

use async_trait::async_trait;

/// Status code meaning "accepted for delivery".
pub const ACCEPTED: u16 = 202;

/// Synthetic status reported when the request never completed.
pub const TRANSPORT_FAILURE: u16 = 500;

/// Synthetic status reported when the request was refused before sending.
pub const LOCAL_REJECTION: u16 = 400;

/// Outcome of one outbound send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResult {
    /// HTTP status code, real or synthetic.
    pub status_code: u16,

    /// Response body or diagnostic text.
    pub response_body: String,

    /// Whether the remote API produced this response.
    pub reached_remote: bool,
}

impl TransportResult {
    /// A response returned by the remote API.
    pub fn remote(status_code: u16, response_body: impl Into<String>) -> Self {
        Self {
            status_code,
            response_body: response_body.into(),
            reached_remote: true,
        }
    }

    /// A request that failed below the HTTP layer.
    pub fn failed(description: impl std::fmt::Display) -> Self {
        Self {
            status_code: TRANSPORT_FAILURE,
            response_body: format!("Request failed: {}", description),
            reached_remote: false,
        }
    }

    /// A request refused locally without a network call.
    pub fn rejected(reason: impl std::fmt::Display) -> Self {
        Self {
            status_code: LOCAL_REJECTION,
            response_body: format!("Request rejected: {}", reason),
            reached_remote: false,
        }
    }

    /// Whether the message was accepted for delivery.
    pub fn is_accepted(&self) -> bool {
        self.status_code == ACCEPTED
    }
}

/// A transport that delivers one text message to one number.
///
/// Implementations never return an error: network and transport failures
/// are folded into a non-accepted [`TransportResult`]. No retries happen at
/// this layer.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Transport name for logs.
    fn name(&self) -> &str;

    /// Send `body` to `to_number`.
    async fn send(&self, to_number: &str, body: &str) -> TransportResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_202_is_accepted() {
        assert!(TransportResult::remote(202, "{}").is_accepted());
        assert!(!TransportResult::remote(200, "{}").is_accepted());
        assert!(!TransportResult::remote(401, "unauthorized").is_accepted());
    }

    #[test]
    fn test_failed_result() {
        let result = TransportResult::failed("connection refused");
        assert_eq!(result.status_code, 500);
        assert_eq!(result.response_body, "Request failed: connection refused");
        assert!(!result.reached_remote);
        assert!(!result.is_accepted());
    }

    #[test]
    fn test_rejected_result() {
        let result = TransportResult::rejected("recipient number is empty");
        assert_eq!(result.status_code, 400);
        assert!(!result.reached_remote);
    }
}
