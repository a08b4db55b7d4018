//! HTTP gateway to the external identity service.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{AuthGateway, AuthGatewayError, LoginCredentials, UpstreamResponse};

/// Forwards login attempts to the identity service over HTTPS.
///
/// Whatever the upstream answers, status and body are relayed untouched.
/// Only a failure to complete the round-trip at all surfaces as an error.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: reqwest::Client,
    login_url: String,
}

impl HttpAuthGateway {
    /// Build a gateway posting to the given login endpoint.
    #[must_use]
    pub fn new(client: reqwest::Client, login_url: impl Into<String>) -> Self {
        Self {
            client,
            login_url: login_url.into(),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(
        &self,
        credentials: &LoginCredentials,
        expires_in_mins: u32,
    ) -> Result<UpstreamResponse, AuthGatewayError> {
        let payload = json!({
            "username": credentials.username(),
            "password": credentials.password(),
            "expiresInMins": expires_in_mins,
        });

        let response = self
            .client
            .post(&self.login_url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| AuthGatewayError::transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body: Value = response
            .json()
            .await
            .map_err(|err| AuthGatewayError::transport(err.to_string()))?;
        debug!(status, "upstream login answered");
        Ok(UpstreamResponse { status, body })
    }
}
