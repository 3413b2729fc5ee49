use crate::core::domain::error::{ValidationError, VtError, VtResult};
use serde::Serialize;
use serde_json::Value;

/// Capabilities required from anything sent as VM parameters.
///
/// [`Params`](super::params::Params) is the standard implementation. Services
/// that accept extra per-VM settings can wrap it (for instance with
/// `#[serde(flatten)]`) in their own type and implement this trait, then pass
/// that type to `add` and `set`.
pub trait VmSpec: Serialize + Send + Sync {
    /// Checks every set field against its domain rules.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Turns the parameters into the JSON body sent to the service.
    ///
    /// The default serializes `self` with serde. The result must be a JSON object.
    fn to_payload(&self) -> VtResult<Value> {
        let payload =
            serde_json::to_value(self).map_err(|e| VtError::Serialization(e.to_string()))?;
        if payload.is_object() {
            Ok(payload)
        } else {
            Err(VtError::Serialization(
                "VM parameters must serialize to a JSON object".to_string(),
            ))
        }
    }
}
