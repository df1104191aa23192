//! HTTP client for the resources API

use reqwest::{StatusCode, Url};
use std::sync::OnceLock;

use crate::types::{InvalidResource, Resource, ResourceEnvelope, ResourcesEnvelope};

/// Flask backend default
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
#[cfg_attr(not(any(feature = "server", feature = "web")), allow(dead_code))]
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API base URL.
///
/// In the browser an unset URL falls back to the page origin, so the
/// frontend talks to whichever host served it.
pub fn get_api_url() -> String {
    if let Some(url) = API_URL.get() {
        return url.clone();
    }

    crate::util::browser::page_origin().unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Error type for resources API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Resource not found")]
    NotFound,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("No data returned")]
    NoData,

    #[error("Invalid resource: {0}")]
    InvalidResource(#[from] InvalidResource),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// Client for the public resources endpoints
#[derive(Clone)]
pub struct ResourceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ResourceClient {
    /// Create a new client rooted at `base_url` (scheme and host, optional path prefix)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `GET /api/resources`, in server order.
    pub async fn fetch_resources(&self) -> Result<Vec<Resource>, ClientError> {
        let url = self.endpoint(&["api", "resources"])?;
        let body = self.get(url).await?;

        let envelope: ResourcesEnvelope = serde_json::from_str(&body)?;
        if envelope.success == Some(false) {
            return Err(ClientError::Rejected(envelope.error.unwrap_or_default()));
        }

        envelope
            .resources
            .ok_or(ClientError::NoData)?
            .into_iter()
            .map(|raw| Resource::try_from(raw).map_err(ClientError::from))
            .collect()
    }

    /// `GET /api/resources/{id}`
    pub async fn fetch_resource(&self, id: &str) -> Result<Resource, ClientError> {
        if id.trim().is_empty() {
            return Err(ClientError::InvalidResource(InvalidResource::BlankId));
        }

        let url = self.endpoint(&["api", "resources", id])?;
        let body = self.get(url).await?;

        let envelope: ResourceEnvelope = serde_json::from_str(&body)?;
        if envelope.success == Some(false) {
            return Err(ClientError::Rejected(envelope.error.unwrap_or_default()));
        }

        let raw = envelope.resource.ok_or(ClientError::NoData)?;
        Ok(Resource::try_from(raw)?)
    }

    async fn get(&self, url: Url) -> Result<String, ClientError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(response.text().await?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

/// Create a client against the configured API URL
pub fn resource_client() -> ResourceClient {
    ResourceClient::new(get_api_url())
}
