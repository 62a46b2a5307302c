//! Credential exchange client

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;

pub mod exchange;
#[cfg(test)]
pub mod mock;

pub use exchange::CredentialExchangeClient;
#[cfg(test)]
pub use mock::MockAuthClient;

/// Credential exchange operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Send the credentials to the auth endpoint and return its raw response
    async fn fetch_token(&self, credentials: &Credentials) -> Result<TokenResponse>;
}

/// Username and password pair sent as request headers.
///
/// Both values are opaque and forwarded verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response payload from the auth endpoint, kept exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    status: u16,
    body: Vec<u8>,
}

impl TokenResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code of the response
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as UTF-8 text, if it is valid UTF-8
    #[allow(dead_code)]
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    #[allow(dead_code)]
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}
