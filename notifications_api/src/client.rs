//! Signed HTTP client for the notifications API.

use std::fmt;
use std::time::Instant;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    errors::{HttpError, RawResponse},
    token::create_jwt_token,
    user_agent::get_user_agent,
    Error,
};

/// Decoded body of a successful call. `None` means the API answered 204.
pub type ApiResponse = Option<Value>;

/// Base URL, service id and API key. Validated once, never mutated.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    service_id: String,
    api_key: String,
}

impl ClientConfig {
    /// Validates the configuration triple. Every field is required and the
    /// base URL must be absolute.
    pub fn new(base_url: &str, service_id: &str, api_key: &str) -> Result<Self, Error> {
        if base_url.trim().is_empty() {
            return Err(Error::MissingConfig("base url"));
        }
        if service_id.trim().is_empty() {
            return Err(Error::MissingConfig("service ID"));
        }
        if api_key.trim().is_empty() {
            return Err(Error::MissingConfig("API key"));
        }
        Ok(Self {
            base_url: Url::parse(base_url)?,
            service_id: service_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("service_id", &self.service_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the notifications API.
///
/// Every call mints a fresh bearer token from the API key, so a `Client`
/// holds no per-request state and can be shared freely. Connection reuse is
/// left to the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the API at `base_url`.
    pub fn new(base_url: &str, service_id: &str, api_key: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(base_url, service_id, api_key)?)
    }

    /// Creates a client from an already validated configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::ClientBuild(e.to_string())
        })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get(&self, path: &str, params: &[(String, String)]) -> Result<ApiResponse, Error> {
        self.request::<Value>(Method::GET, path, None, params).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    pub async fn delete<B>(&self, path: &str, body: Option<&B>) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::DELETE, path, body, &[]).await
    }

    /// Signs and sends one request, then decodes the response.
    ///
    /// Statuses >= 400 and transport failures become [`Error::Http`]; a
    /// success whose body is not JSON becomes [`Error::InvalidResponse`].
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &[(String, String)],
    ) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let payload = body.map(serde_json::to_string).transpose()?;
        let token = create_jwt_token(&self.config.api_key, &self.config.service_id)?;
        let url = self.get_url(path)?;
        tracing::debug!("API request {} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(USER_AGENT, get_user_agent());
        if !params.is_empty() {
            builder = builder.query(params);
        }
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }

        let (status, body) = {
            let _timer = RequestTimer::start(&method, &url);
            match send(builder).await {
                Ok(resp) => resp,
                Err(err) => {
                    tracing::error!(
                        "API {} request on {} failed with {} '{}'",
                        method,
                        url,
                        err.status_code
                            .map_or_else(|| "no status".to_string(), |s| s.to_string()),
                        err.message
                    );
                    return Err(err.into());
                }
            }
        };

        if status == reqwest::StatusCode::NO_CONTENT.as_u16() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::error!("Failed to decode response from {}: {}", url, e);
                Err(Error::InvalidResponse {
                    response: RawResponse { status, body },
                    message: "No JSON response object could be decoded".to_string(),
                })
            }
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        self.config.base_url.join(path).map_err(|e| {
            tracing::error!("Invalid URL constructed from {}: {}", path, e);
            Error::InvalidArgument(format!("invalid path {}: {}", path, e))
        })
    }
}

/// Sends the request and reads the body. Only statuses below 400 come back
/// as `Ok`.
async fn send(builder: RequestBuilder) -> Result<(u16, String), HttpError> {
    let resp = builder.send().await.map_err(|e| {
        tracing::debug!("No response received: {}", e);
        HttpError::transport()
    })?;

    let status = resp.status().as_u16();
    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!("Failed to read response body: {}", e);
            return Err(HttpError::from_response(status, ""));
        }
    };

    if status >= 400 {
        return Err(HttpError::from_response(status, &body));
    }
    Ok((status, body))
}

/// Logs how long a request took when dropped, whichever way it ended.
struct RequestTimer<'a> {
    method: &'a Method,
    url: &'a Url,
    start: Instant,
}

impl<'a> RequestTimer<'a> {
    fn start(method: &'a Method, url: &'a Url) -> Self {
        Self {
            method,
            url,
            start: Instant::now(),
        }
    }
}

impl Drop for RequestTimer<'_> {
    fn drop(&mut self) {
        tracing::debug!(
            "API {} request on {} finished in {:?}",
            self.method,
            self.url,
            self.start.elapsed()
        );
    }
}
