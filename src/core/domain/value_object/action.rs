//! Lifecycle actions understood by the VT service.

use crate::core::domain::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A requested state transition, or the observed state of a VM.
///
/// The same four values are used both ways: a client sends an `action`,
/// the service reports back a `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    #[default]
    Stop,
    Suspend,
    Reset,
}

impl Action {
    /// Every valid action, in declaration order.
    pub const ALL: [Action; 4] = [Action::Start, Action::Stop, Action::Suspend, Action::Reset];

    /// Returns the wire name of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Suspend => "suspend",
            Action::Reset => "reset",
        }
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| {
                ValidationError::ConstraintViolation(format!(
                    "Invalid action name {}, expected one of {}",
                    s,
                    Action::ALL
                        .iter()
                        .map(Action::as_str)
                        .collect::<Vec<&str>>()
                        .join(", ")
                ))
            })
    }
}

/// Checks an optional action name.
///
/// Unset passes through as `None`; a known name becomes its `Action`.
///
/// # Errors
///
/// Returns `ValidationError::ConstraintViolation` listing the valid actions.
pub fn check_action(action: Option<&str>) -> Result<Option<Action>, ValidationError> {
    action.map(str::parse).transpose()
}
