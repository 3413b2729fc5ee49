//! HTTP transport backed by `reqwest`.

use crate::core::{
    config::ClientConfig,
    domain::{
        error::{VtError, VtResult},
        value_object::VtUrl,
    },
    infrastructure::{file_upload::FileUpload, transport::Transport},
};
use async_trait::async_trait;
use governor::DefaultDirectRateLimiter;
use reqwest::{Client, Method, Response, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP client bound to one VT endpoint.
///
/// Every JSON request carries `Content-Type: application/json; charset=utf-8`.
/// Failures (network errors, non-success statuses, bodies that are not JSON)
/// are logged and reported as `None` through the [`Transport`] implementation.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: VtUrl,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient` for `base_url`.
    ///
    /// # Errors
    /// Returns `VtError::Validation` if the configuration is invalid and
    /// `VtError::Connection` if the HTTP client cannot be built.
    pub fn new(base_url: VtUrl, config: &ClientConfig) -> VtResult<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| VtError::Connection(e.to_string()))?;

        let rate_limiter = config
            .rate_limit
            .map(|rl| rl.quota().map(|q| Arc::new(DefaultDirectRateLimiter::direct(q))))
            .transpose()?;

        Ok(Self {
            http_client,
            base_url,
            rate_limiter,
        })
    }

    /// Returns the endpoint this client talks to.
    pub fn base_url(&self) -> &VtUrl {
        &self.base_url
    }

    async fn throttle(&self) {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }
    }

    /// Sends a JSON request and parses the JSON response.
    pub(crate) async fn execute_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> VtResult<Value> {
        self.throttle().await;

        let url = self.base_url.join(path);
        debug!(%method, %url, "sending request");

        let mut req_builder = self
            .http_client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        // GET requests cannot carry a body
        if method != Method::GET {
            let empty = Value::Object(Default::default());
            let bytes = serde_json::to_vec(body.unwrap_or(&empty))
                .map_err(|e| VtError::Serialization(e.to_string()))?;
            req_builder = req_builder.body(bytes);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| VtError::Connection(format!("HTTP request failed: {}", e)))?;

        Self::parse_json(response).await
    }

    /// Posts a multipart upload and parses the JSON response.
    pub(crate) async fn execute_upload(&self, upload: FileUpload) -> VtResult<Value> {
        self.throttle().await;

        let url = self.base_url.join(&upload.path());
        debug!(%url, file = upload.file_name(), "uploading file");

        let response = self
            .http_client
            .post(&url)
            .multipart(upload.into_form())
            .send()
            .await
            .map_err(|e| VtError::Connection(format!("Upload failed: {}", e)))?;

        Self::parse_json(response).await
    }

    /// Performs a GET request and returns the raw body.
    pub(crate) async fn execute_fetch(&self, path: &str) -> VtResult<Vec<u8>> {
        self.throttle().await;

        let url = self.base_url.join(path);
        debug!(%url, "fetching");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| VtError::Connection(format!("HTTP request failed: {}", e)))?;
        let response = Self::check_status(response).await?;

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| VtError::Connection(format!("Failed to read response: {}", e)))
    }

    async fn check_status(response: Response) -> VtResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown".to_string());
        Err(VtError::Connection(format!(
            "API error ({}): {}",
            status, error_text
        )))
    }

    async fn parse_json(response: Response) -> VtResult<Value> {
        Self::check_status(response)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| VtError::Connection(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Option<Value> {
        self.execute_request(method.clone(), path, body.as_ref())
            .await
            .inspect_err(|e| error!(%method, path, error = %e, "request failed"))
            .ok()
    }

    async fn upload(&self, upload: FileUpload) -> Option<Value> {
        let file_name = upload.file_name().to_string();
        self.execute_upload(upload)
            .await
            .inspect_err(|e| error!(file = %file_name, error = %e, "upload failed"))
            .ok()
    }

    async fn fetch(&self, path: &str) -> Option<Vec<u8>> {
        self.execute_fetch(path)
            .await
            .inspect_err(|e| error!(path, error = %e, "fetch failed"))
            .ok()
    }
}
