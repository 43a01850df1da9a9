//
//  ibm-cis
//  auth/iam.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # IAM API Key Authentication
//!
//! Exchanges an IBM Cloud API key for an IAM access token and sends it as a
//! bearer token. Tokens are cached and refreshed once 80% of their lifetime
//! has passed.
//!
//! ## Token exchange
//!
//! ```text
//! POST https://iam.cloud.ibm.com/identity/token
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=urn:ibm:params:oauth:grant-type:apikey&apikey=...&response_type=cloud_iam
//! ```
//!
//! The token lifetime is read from the `exp` and `iat` claims of the
//! returned JWT. When the token cannot be decoded, the `expiration` and
//! `expires_in` fields of the response are used instead.
//!
//! ## Concurrency
//!
//! The cache sits behind a `tokio::sync::Mutex`, so concurrent requests
//! that find the token stale wait for a single refresh.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::auth::IamAuthenticator;
//!
//! # async fn example() -> Result<(), ibm_cis::api::common::CisError> {
//! let auth = IamAuthenticator::new("my-api-key")?
//!     .with_url("https://iam.test.cloud.ibm.com");
//! let token = auth.token().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

use super::token::require_credential;
use super::{Authenticator, AUTHTYPE_IAM};
use crate::api::common::CisError;
use crate::api::transport::format_api_error;

/// Default IAM endpoint.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const TOKEN_PATH: &str = "/identity/token";
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const REFRESH_FRACTION: f64 = 0.8;

/// Response from the IAM token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IamTokenResponse {
    /// The access token (a JWT)
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Expiry as a unix timestamp
    #[serde(default)]
    pub expiration: Option<i64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: i64,
    refresh_at: i64,
}

impl CachedToken {
    fn from_response(response: IamTokenResponse, now: i64) -> Self {
        let (issued_at, expires_at) = match jwt_times(&response.access_token) {
            Some(times) => times,
            None => match (response.expiration, response.expires_in) {
                (Some(expiration), Some(lifetime)) => (expiration - lifetime, expiration),
                (Some(expiration), None) => (now, expiration),
                (None, Some(lifetime)) => (now, now + lifetime),
                (None, None) => (now, now),
            },
        };

        let lifetime = (expires_at - issued_at).max(0);
        let refresh_at = issued_at + (lifetime as f64 * REFRESH_FRACTION) as i64;

        Self {
            access_token: response.access_token,
            expires_at,
            refresh_at,
        }
    }

    fn is_fresh(&self, now: i64) -> bool {
        now < self.refresh_at && now < self.expires_at
    }
}

/// Reads `(iat, exp)` from a JWT without verifying it.
fn jwt_times(token: &str) -> Option<(i64, i64)> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    let iat = claims.get("iat")?.as_i64()?;
    Some((iat, exp))
}

/// Authenticates with an IBM Cloud API key.
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    http: Client,
    cache: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    /// Creates an authenticator for the default IAM endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CisError::Authentication`] if the key is empty or wrapped
    /// in braces or quotes.
    pub fn new(apikey: impl Into<String>) -> Result<Self, CisError> {
        let apikey = apikey.into();
        require_credential("apikey", &apikey)?;
        Ok(Self {
            apikey,
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: None,
            http: Self::http_client(false)?,
            cache: Mutex::new(None),
        })
    }

    /// Uses another IAM endpoint, with or without the `/identity/token` path.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sends a client id and secret as basic credentials on token requests.
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Disables certificate verification on token requests.
    pub fn with_disable_ssl(mut self, disable_ssl: bool) -> Result<Self, CisError> {
        self.http = Self::http_client(disable_ssl)?;
        Ok(self)
    }

    fn http_client(disable_ssl: bool) -> Result<Client, CisError> {
        Ok(Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .danger_accept_invalid_certs(disable_ssl)
            .build()?)
    }

    /// The full token endpoint URL.
    pub fn token_url(&self) -> String {
        let base = self.url.trim_end_matches('/');
        if base.ends_with(TOKEN_PATH) {
            base.to_string()
        } else {
            format!("{}{}", base, TOKEN_PATH)
        }
    }

    /// Returns a valid access token, requesting a new one when the cached
    /// token is missing or due for refresh.
    pub async fn token(&self) -> Result<String, CisError> {
        let mut cache = self.cache.lock().await;
        let now = chrono::Utc::now().timestamp();

        if let Some(token) = cache.as_ref().filter(|t| t.is_fresh(now)) {
            return Ok(token.access_token.clone());
        }

        let response = self.request_token().await?;
        let token = CachedToken::from_response(response, now);
        tracing::debug!(expires_at = token.expires_at, "obtained IAM access token");
        let access_token = token.access_token.clone();
        *cache = Some(token);
        Ok(access_token)
    }

    /// Performs the API key exchange, bypassing the cache.
    pub async fn request_token(&self) -> Result<IamTokenResponse, CisError> {
        let url = self.token_url();
        tracing::debug!("POST {}", url);

        let mut form = vec![
            ("grant_type", GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", "cloud_iam"),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }

        let mut request = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form);
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| CisError::Authentication(format!("IAM token request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CisError::Authentication(format!("Failed to read IAM token response: {}", e)))?;

        if !status.is_success() {
            let err = format_api_error(status, &body);
            return Err(CisError::Authentication(format!("IAM token request failed: {}", err)));
        }

        serde_json::from_str(&body)
            .map_err(|e| CisError::Authentication(format!("Failed to parse IAM token response: {}", e)))
    }
}

impl std::fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.url)
            .field("apikey", &"***")
            .field("client_id", &self.client_id)
            .finish()
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_IAM
    }

    fn validate(&self) -> Result<(), CisError> {
        require_credential("apikey", &self.apikey)?;
        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err(CisError::Authentication(
                "client id and client secret must be set together".to_string(),
            ));
        }
        Ok(())
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, CisError> {
        let token = self.token().await?;
        Ok(request.bearer_auth(token))
    }
}
