//! HTTP implementation of the credential exchange

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::Url;
use reqwest::header::HeaderValue;

use super::{AuthApi, Credentials, TokenResponse};
use crate::config::{Config, validate_endpoint};
use crate::error::{ApiError, Result};

/// Header carrying the username
const USER_HEADER: &str = "user";

/// Header carrying the password
const PASSWORD_HEADER: &str = "password";

/// Client that trades credentials for a token with one GET request.
///
/// The endpoint is fixed at construction. Calls share no mutable state.
#[derive(Debug, Clone)]
pub struct CredentialExchangeClient {
    http: HttpClient,
    endpoint: Url,
}

impl CredentialExchangeClient {
    /// Create a client for the given endpoint using transport defaults
    #[allow(dead_code)]
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, None)
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(&config.endpoint, config.timeout_secs.map(Duration::from_secs))
    }

    fn with_timeout(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = validate_endpoint(endpoint)?;

        // Redirects would resend the credential headers to the Location target
        let mut builder = HttpClient::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    /// The endpoint this client calls
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

fn header_value(name: &str, value: &str) -> std::result::Result<HeaderValue, ApiError> {
    HeaderValue::from_bytes(value.as_bytes()).map_err(|_| {
        ApiError::InvalidRequest(format!("{} cannot be sent as an HTTP header value", name))
    })
}

#[async_trait]
impl AuthApi for CredentialExchangeClient {
    async fn fetch_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        let user = header_value("username", &credentials.username)?;
        let mut password = header_value("password", &credentials.password)?;
        password.set_sensitive(true);

        log::debug!("GET {} as user '{}'", self.endpoint, credentials.username);

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(USER_HEADER, user)
            .header(PASSWORD_HEADER, password)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("Auth endpoint responded with {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                log::debug!("Failed to read error response body: {}", e);
                String::new()
            });
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        Ok(TokenResponse::new(status.as_u16(), body.to_vec()))
    }
}
