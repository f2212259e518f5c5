// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the cloud API.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::payload::{
    LoginRequest, LoginResponse, ModeChange, SettingChange, TemperatureChange,
};
use crate::protocol::GatewayApi;
use crate::state::{PlantData, PlantSettings};
use crate::types::{
    ConsumptionSequence, ConsumptionUsage, DeviceInfo, Gateway, LydosPlantMode, SeSetting,
};

/// Header carrying the session token.
const AUTH_HEADER: &str = "ar.authToken";

// ============================================================================
// ApiConfig - Connection parameters
// ============================================================================

/// Configuration of the cloud API client.
///
/// # Examples
///
/// ```
/// use lydos_lib::protocol::ApiConfig;
/// use std::time::Duration;
///
/// let config = ApiConfig::new()
///     .with_credentials("me@example.com", "secret")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.base_url(), ApiConfig::DEFAULT_BASE_URL);
/// assert_eq!(config.timeout(), Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    user_agent: String,
}

impl ApiConfig {
    /// Production endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.ariston-net.remotethermo.com/api/v2";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// Default user agent.
    pub const DEFAULT_USER_AGENT: &'static str = "RestSharp/106.11.7.0";

    /// Creates a configuration pointing at the production endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets another API root, e.g. a test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the account credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the account user name if credentials are set.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an HTTP(S) URL or the HTTP client
    /// cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            credentials: self.credentials,
            token: Arc::new(RwLock::new(None)),
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Account credentials.
#[derive(Clone)]
struct Credentials {
    username: String,
    password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the Ariston NET cloud API.
///
/// The session token is obtained on [`connect`](Self::connect) or, if that
/// was not called, before the first request. Clones share the token.
///
/// # Examples
///
/// ```no_run
/// use lydos_lib::protocol::{ApiConfig, GatewayApi};
///
/// # async fn example() -> lydos_lib::Result<()> {
/// let client = ApiConfig::new()
///     .with_credentials("me@example.com", "secret")
///     .into_client()?;
/// client.connect().await?;
///
/// for plant in client.get_velis_devices().await? {
///     println!("{} {:?}", plant.gw, plant.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    credentials: Option<Credentials>,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` once a session token has been obtained.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.read().is_some()
    }

    /// Logs in and stores the session token.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::AuthenticationFailed` if no credentials are
    /// configured or the server refuses them.
    pub async fn connect(&self) -> Result<(), Error> {
        self.login().await.map(|_| ())
    }

    async fn login(&self) -> Result<String, Error> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ProtocolError::AuthenticationFailed)?;

        tracing::debug!(username = %credentials.username, "Logging in");

        let body = LoginRequest::new(&credentials.username, &credentials.password);
        let request = self.client.post(self.url("accounts/login")).json(&body);
        let text = Self::execute(request).await?;
        let response: LoginResponse = serde_json::from_str(&text).map_err(ParseError::Json)?;

        let Some(token) = response.token else {
            tracing::warn!("Login response did not contain a token");
            return Err(ProtocolError::AuthenticationFailed.into());
        };

        *self.token.write() = Some(token.clone());
        Ok(token)
    }

    async fn auth_token(&self) -> Result<Option<String>, Error> {
        let cached = self.token.read().clone();
        match cached {
            Some(token) => Ok(Some(token)),
            None if self.credentials.is_some() => self.login().await.map(Some),
            None => Ok(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn plant_path(gw: &Gateway, suffix: &str) -> String {
        format!("velis/sePlantData/{}{suffix}", urlencoding::encode(gw.as_str()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let request = self.client.get(self.url(path));
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ParseError::Json(e).into())
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), Error> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, Error> {
        let token = self.auth_token().await?;
        let request = match &token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        };

        match Self::execute(request).await {
            Err(Error::Protocol(ProtocolError::AuthenticationFailed)) => {
                // Expired session: the next call logs in again.
                self.discard_token(token.as_deref());
                Err(ProtocolError::AuthenticationFailed.into())
            }
            other => other,
        }
    }

    /// Forgets the cached token unless another request replaced it since
    /// `sent` was read.
    fn discard_token(&self, sent: Option<&str>) {
        let mut current = self.token.write();
        if current.as_deref() == sent {
            current.take();
        }
    }

    async fn execute(request: RequestBuilder) -> Result<String, Error> {
        let response = request.send().await.map_err(ProtocolError::Http)?;

        tracing::debug!(
            url = %response.url(),
            status = %response.status(),
            "Received HTTP response"
        );

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed.into());
        }

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            ))
            .into());
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Response body");

        Ok(body)
    }
}

impl GatewayApi for HttpClient {
    async fn get_velis_devices(&self) -> Result<Vec<DeviceInfo>, Error> {
        self.get_json("velis/plants").await
    }

    async fn get_se_plant_data(&self, gw: &Gateway) -> Result<PlantData, Error> {
        self.get_json(&Self::plant_path(gw, "")).await
    }

    async fn get_se_plant_settings(&self, gw: &Gateway) -> Result<PlantSettings, Error> {
        self.get_json(&Self::plant_path(gw, "/plantSettings")).await
    }

    async fn get_consumptions_sequences(
        &self,
        gw: &Gateway,
        usages: &[ConsumptionUsage],
    ) -> Result<Vec<ConsumptionSequence>, Error> {
        let usages = usages
            .iter()
            .map(ConsumptionUsage::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let path = format!(
            "reports/{}/consSequencesApi8?usages={}",
            urlencoding::encode(gw.as_str()),
            urlencoding::encode(&usages)
        );
        self.get_json(&path).await
    }

    async fn set_lydos_mode(&self, gw: &Gateway, mode: LydosPlantMode) -> Result<(), Error> {
        self.post_json(&Self::plant_path(gw, "/mode"), &ModeChange::from(mode))
            .await
    }

    async fn set_lydos_temperature(&self, gw: &Gateway, temperature: f64) -> Result<(), Error> {
        self.post_json(
            &Self::plant_path(gw, "/temperature"),
            &TemperatureChange::new(temperature),
        )
        .await
    }

    async fn set_lydos_power(&self, gw: &Gateway, on: bool) -> Result<(), Error> {
        self.post_json(&Self::plant_path(gw, "/switch"), &on).await
    }

    async fn set_lydos_plant_setting(
        &self,
        gw: &Gateway,
        setting: SeSetting,
        value: f64,
        old_value: Option<f64>,
    ) -> Result<(), Error> {
        let change = SettingChange {
            setting,
            new: value,
            old: old_value,
        };
        self.post_json(&Self::plant_path(gw, "/plantSettings"), &change)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_config_default_values() {
        let config = ApiConfig::default();
        assert_eq!(
            config.base_url(),
            "https://www.ariston-net.remotethermo.com/api/v2"
        );
        assert!(config.username().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.user_agent(), "RestSharp/106.11.7.0");
    }

    #[test]
    fn api_config_builder_chain() {
        let config = ApiConfig::new()
            .with_base_url("http://localhost:8080/api/v2")
            .with_credentials("me@example.com", "secret")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("lydos-test");

        assert_eq!(config.base_url(), "http://localhost:8080/api/v2");
        assert_eq!(config.username(), Some("me@example.com"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent(), "lydos-test");
    }

    #[test]
    fn api_config_debug_hides_password() {
        let config = ApiConfig::new().with_credentials("me@example.com", "secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("me@example.com"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn into_client_trims_trailing_slash() {
        let client = ApiConfig::new()
            .with_base_url("http://localhost:8080/api/v2/")
            .into_client()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v2");
        assert_eq!(
            client.url("velis/plants"),
            "http://localhost:8080/api/v2/velis/plants"
        );
    }

    #[test]
    fn into_client_rejects_non_http_url() {
        let result = ApiConfig::new().with_base_url("ftp://example.com").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn new_client_is_not_logged_in() {
        let client = ApiConfig::new().into_client().unwrap();
        assert!(!client.is_logged_in());
    }

    #[test]
    fn plant_path_encodes_gateway() {
        let gw = Gateway::new("AB CD").unwrap();
        assert_eq!(
            HttpClient::plant_path(&gw, "/mode"),
            "velis/sePlantData/AB%20CD/mode"
        );
    }

    #[test]
    fn discard_token_keeps_newer_token() {
        let client = ApiConfig::new().into_client().unwrap();
        *client.token.write() = Some("fresh".to_string());

        client.discard_token(Some("stale"));
        assert_eq!(client.token.read().as_deref(), Some("fresh"));

        client.discard_token(None);
        assert!(client.is_logged_in());

        client.discard_token(Some("fresh"));
        assert!(!client.is_logged_in());
    }

    #[tokio::test]
    async fn connect_without_credentials_fails() {
        let client = ApiConfig::new().into_client().unwrap();
        let result = client.connect().await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::AuthenticationFailed))
        ));
    }
}
