//! Request bodies sent to the VT service.

use crate::core::domain::error::{VtError, VtResult};
use serde::Serialize;
use serde_json::Value;

/// Group name the service expects in removal requests.
pub(crate) const REMOVE_TARGET: &str = "toRemove";

/// Body of `rm`, `link` and `unlink`: a target name plus the names it acts on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementsRequest {
    pub name: String,
    pub elements: Vec<String>,
}

impl ElementsRequest {
    pub fn new(name: impl Into<String>, elements: Vec<String>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    /// Body that removes every named VM or group.
    pub fn removal(elements: Vec<String>) -> Self {
        Self::new(REMOVE_TARGET, elements)
    }
}

/// Body of `import` and `export`: a VM name and a server-side file name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRequest {
    pub name: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl TransferRequest {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
        }
    }
}

/// Adds the `names` list that `set` uses to select the VMs it modifies.
pub(crate) fn with_names(mut payload: Value, names: Vec<String>) -> VtResult<Value> {
    let map = payload.as_object_mut().ok_or_else(|| {
        VtError::Serialization("VM parameters must serialize to a JSON object".to_string())
    })?;
    map.insert("names".to_string(), Value::from(names));
    Ok(payload)
}

/// Converts a request body to JSON.
pub(crate) fn to_body<T: Serialize>(request: &T) -> VtResult<Value> {
    serde_json::to_value(request).map_err(|e| VtError::Serialization(e.to_string()))
}
