//! Mock credential exchange client for testing
//!
//! Records every call and replays a configured outcome without touching
//! the network.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{AuthApi, Credentials, TokenResponse};
use crate::error::{ApiError, Result};

/// Outcome replayed by the mock
#[derive(Debug, Clone)]
enum MockOutcome {
    Token(TokenResponse),
    Network(String),
    Status(u16, String),
}

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAuthClient::new().with_body("jwt");
/// let resp = mock.fetch_token(&Credentials::new("alice", "s3cret")).await?;
/// assert_eq!(mock.call_count().await, 1);
/// ```
pub struct MockAuthClient {
    outcome: MockOutcome,
    calls: Arc<Mutex<Vec<Credentials>>>,
}

impl MockAuthClient {
    /// Create a mock that answers 200 with an empty body
    pub fn new() -> Self {
        Self {
            outcome: MockOutcome::Token(TokenResponse::new(200, Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer with 200 and the given body
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.outcome = MockOutcome::Token(TokenResponse::new(200, body));
        self
    }

    /// Fail with a transport error
    pub fn with_network_error(mut self, message: &str) -> Self {
        self.outcome = MockOutcome::Network(message.to_string());
        self
    }

    /// Fail with a status error
    pub fn with_status_error(mut self, status: u16, body: &str) -> Self {
        self.outcome = MockOutcome::Status(status, body.to_string());
        self
    }

    /// Number of fetch_token calls made so far
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Credentials passed to each call, in order
    pub async fn calls(&self) -> Vec<Credentials> {
        self.calls.lock().await.clone()
    }
}

impl Default for MockAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthApi for MockAuthClient {
    async fn fetch_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        self.calls.lock().await.push(credentials.clone());

        match &self.outcome {
            MockOutcome::Token(resp) => Ok(resp.clone()),
            MockOutcome::Network(msg) => Err(ApiError::Network(msg.clone()).into()),
            MockOutcome::Status(status, body) => Err(ApiError::Status {
                status: *status,
                body: body.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockAuthClient::new().with_body("jwt");
        let resp = mock
            .fetch_token(&Credentials::new("alice", "s3cret"))
            .await
            .unwrap();

        assert_eq!(resp.as_text(), Some("jwt"));
        assert_eq!(mock.call_count().await, 1);
        assert_eq!(mock.calls().await[0], Credentials::new("alice", "s3cret"));
    }

    #[tokio::test]
    async fn test_mock_network_error() {
        let mock = MockAuthClient::new().with_network_error("connection refused");
        let err = mock
            .fetch_token(&Credentials::new("alice", "s3cret"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert_eq!(mock.call_count().await, 1);
    }
}
