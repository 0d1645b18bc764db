use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use kernel::prelude::entity::AccessToken;
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

pub use self::{admin::*, auth::*, booking::*, car::*, payment::*, review::*, user::*};

mod admin;
mod auth;
mod booking;
mod car;
mod payment;
mod review;
mod user;
mod wire;

static BACKEND_URL: &str = "BACKEND_URL";
static BACKEND_TIMEOUT_SECS: &str = "BACKEND_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
    timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DriverError> {
        let invalid = || DriverError::Config {
            key: BACKEND_URL,
            value: base_url.to_string(),
        };
        let base_url = Url::parse(base_url.trim()).map_err(|_| invalid())?;
        if base_url.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(Self { base_url, timeout })
    }

    /// Reads `BACKEND_URL` (required) and `BACKEND_TIMEOUT_SECS`.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let base_url = env(BACKEND_URL).convert_error()?;
        let timeout = match dotenvy::var(BACKEND_TIMEOUT_SECS) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| DriverError::Config {
                    key: BACKEND_TIMEOUT_SECS,
                    value: raw.clone(),
                })
                .convert_error()?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self::new(&base_url, Duration::from_secs(timeout)).convert_error()
    }

    /// `<base>/api/<segments...>`, each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }
}

/// Shared HTTP client for the booking backend. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "error")]
    message: Option<String>,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> error_stack::Result<Self, KernelError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::new(BackendConfig::from_env()?)
    }

    fn request(
        &self,
        method: Method,
        path: &[&str],
        token: Option<&AccessToken>,
    ) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match token {
            Some(token) => builder.bearer_auth(token.as_ref()),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, DriverError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(text);
        tracing::debug!(%status, %message, "backend refused request");
        Err(DriverError::Status { status, message })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        token: Option<&AccessToken>,
    ) -> error_stack::Result<T, KernelError> {
        self.fetch(self.request(Method::GET, path, token))
            .await
            .convert_error()
    }

    pub(crate) async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &[&str],
        token: Option<&AccessToken>,
        body: &B,
    ) -> error_stack::Result<(), KernelError> {
        self.execute(self.request(method, path, token).json(body))
            .await
            .map(drop)
            .convert_error()
    }

    pub(crate) async fn exchange<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &[&str],
        body: &B,
    ) -> error_stack::Result<T, KernelError> {
        self.fetch(self.request(Method::POST, path, None).json(body))
            .await
            .convert_error()
    }

    pub(crate) async fn delete(
        &self,
        path: &[&str],
        token: Option<&AccessToken>,
    ) -> error_stack::Result<(), KernelError> {
        self.execute(self.request(Method::DELETE, path, token))
            .await
            .map(drop)
            .convert_error()
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, DriverError> {
        let text = self.execute(builder).await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
