//! The seam between the API methods and the HTTP layer.

use crate::core::infrastructure::file_upload::FileUpload;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// Issues requests against a VT endpoint.
///
/// Implementations never return errors: a failed request is logged and
/// reported as `None`. Paths are operation suffixes such as `/list`, appended
/// to the endpoint's base URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` as JSON and parses the JSON response.
    ///
    /// GET requests never carry a body.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Option<Value>;

    /// Posts a multipart upload and parses the JSON response.
    async fn upload(&self, upload: FileUpload) -> Option<Value>;

    /// Retrieves raw bytes with a GET request.
    async fn fetch(&self, path: &str) -> Option<Vec<u8>>;
}
