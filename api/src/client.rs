//! HTTP client for the booking backend's authentication endpoints.
//!
//! The backend answers a successful login or signup with the identity
//! payload `{id, username, role}`; that payload is all the session store ever
//! receives. Credential checks happen server-side; the client only performs
//! the same form checks the sign-in and sign-up pages do before sending.

use std::time::Duration;

use authz::types::Identity;
use reqwest::{StatusCode, Url};
use tracing::{debug, error, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, ErrorBody};

/// Configuration for [`BackendClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for `/auth/login` and `/auth/signup`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let base = config.base_url.trim_end_matches('/');
        let base_url =
            Url::parse(&format!("{}/", base)).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchange credentials for an identity.
    ///
    /// A 401 carries the backend's explanation in [`ApiError::Rejected`].
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Identity> {
        let credentials = Credentials::new(username, password);
        if !credentials.is_complete() {
            return Err(ApiError::MissingFields);
        }

        info!("Logging in as {}", username);
        self.post_credentials("auth/login", &credentials, StatusCode::UNAUTHORIZED)
            .await
    }

    /// Register a new guest account and return its identity.
    ///
    /// Password confirmation is checked before completeness, then the backend
    /// is asked; a 400 (e.g. username taken) becomes [`ApiError::Rejected`].
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> ApiResult<Identity> {
        if password != confirm_password {
            return Err(ApiError::PasswordMismatch);
        }

        let credentials = Credentials::new(username, password);
        if !credentials.is_complete() || confirm_password.is_empty() {
            return Err(ApiError::MissingFields);
        }

        info!("Signing up as {}", username);
        self.post_credentials("auth/signup", &credentials, StatusCode::BAD_REQUEST)
            .await
    }

    async fn post_credentials(
        &self,
        endpoint: &str,
        credentials: &Credentials,
        rejection: StatusCode,
    ) -> ApiResult<Identity> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let response = self.http.post(url).json(credentials).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{} answered {}", endpoint, status);

        if status.is_success() {
            return serde_json::from_str::<Identity>(&body).map_err(|e| {
                warn!("Backend returned an unusable identity: {}", e);
                ApiError::InvalidResponse(e.to_string())
            });
        }

        if status == rejection {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.detail)
                .unwrap_or(body);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        error!("Unexpected response from {}: {}", endpoint, status);
        Err(ApiError::Unexpected(status.as_u16()))
    }
}
