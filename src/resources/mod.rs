//! API operations, one HTTP request each.

mod files;
mod groups;
mod vms;

use crate::VtResult;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

/// Decodes a JSON response into the type an operation promises.
///
/// A response of the wrong shape counts as a failed call.
pub(crate) fn decode<T: DeserializeOwned>(operation: &str, value: Value) -> Option<T> {
    serde_json::from_value(value)
        .inspect_err(|e| warn!(operation, error = %e, "unexpected response shape"))
        .ok()
}

/// Unwraps a request body, logging the failure when it cannot be built.
pub(crate) fn body(operation: &str, body: VtResult<Value>) -> Option<Value> {
    body.inspect_err(|e| error!(operation, error = %e, "could not build request body"))
        .ok()
}

/// Collects operation arguments such as VM names.
pub(crate) fn names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
