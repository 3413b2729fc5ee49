mod core;
mod resources;

#[cfg(test)]
mod tests;

pub use crate::core::{
    config::{ClientConfig, RateLimitConfig},
    domain::{
        error::{ValidationError, VtError, VtResult},
        model::{
            global_state::GlobalState,
            group::Group,
            params::{Params, ParamsBuilder},
            requests::{ElementsRequest, TransferRequest},
            vm_spec::VmSpec,
        },
        value_object::{Action, VtUrl, check_action, check_ip, check_range},
    },
    infrastructure::{api_client::ApiClient, file_upload::FileUpload, transport::Transport},
};
use std::sync::Arc;
use std::time::Duration;

/// A client for a VT virtual machine management endpoint.
///
/// Every API method issues exactly one HTTP request. Failed requests are
/// logged through `tracing` and reported as `None`; validation problems are
/// caught earlier, when [`Params`] or the client itself are built.
///
/// # Examples
///
/// ```no_run
/// use vtapi::{Params, VtClient, VtResult};
///
/// #[tokio::main]
/// async fn main() -> VtResult<()> {
///     let client = VtClient::builder()
///         .base_url("https://vt.example.com/api")
///         .access_key("0123456789abcdef")
///         .build()?;
///
///     let params = Params::builder()
///         .name("vm1")
///         .ram(2048)
///         .hdd(4096)
///         .cpu(50)
///         .cores(1)
///         .ip("10.0.0.1")
///         .iso("debian.iso")
///         .action("start")
///         .build()?;
///
///     if let Some(state) = client.add(&params).await {
///         println!("{} VMs", state.vms.len());
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct VtClient {
    base_url: VtUrl,
    transport: Arc<dyn Transport>,
}

/// Builder for VtClient configuration
#[derive(Debug, Default)]
pub struct VtClientBuilder {
    base_url: Option<String>,
    access_key: Option<String>,
    config: ClientConfig,
}

impl VtClientBuilder {
    /// Sets the endpoint URL. It may already include the access key.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Appends an access key as the last path element of the endpoint URL.
    pub fn access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Throttles requests client-side.
    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.config.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    /// Replaces the whole HTTP configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> VtResult<VtClient> {
        let raw_url = self.base_url.ok_or_else(|| ValidationError::Field {
            field: "url".to_string(),
            message: "Base URL is required".to_string(),
        })?;

        let mut base_url = VtUrl::new(raw_url)?;
        if let Some(key) = &self.access_key {
            base_url = base_url.with_access_key(key)?;
        }

        let api_client = ApiClient::new(base_url.clone(), &self.config)?;
        Ok(VtClient::with_transport(base_url, Arc::new(api_client)))
    }
}

impl VtClient {
    /// Creates a new builder for VtClient configuration
    pub fn builder() -> VtClientBuilder {
        VtClientBuilder::default()
    }

    /// Creates a client for `conn` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `VtError::Validation` if `conn` is not a valid http(s) URL.
    pub fn new(conn: impl Into<String>) -> VtResult<Self> {
        Self::builder().base_url(conn).build()
    }

    /// Creates a client that sends its requests through a custom transport.
    pub fn with_transport(base_url: VtUrl, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    /// Returns the endpoint URL, access key included.
    pub fn base_url(&self) -> &VtUrl {
        &self.base_url
    }
}

impl std::fmt::Debug for VtClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VtClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
