use thiserror::Error;

/// The main error type for VT client operations.
///
/// Transport failures never reach callers of the API methods (they are
/// logged and turned into `None`), so this type mostly carries validation
/// and configuration failures.
#[derive(Error, Debug)]
pub enum VtError {
    /// Represents errors that occur while setting up or using the HTTP layer
    ///
    /// # Fields
    /// * `0` - A description of what went wrong
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },

    /// Represents a payload that could not be turned into JSON
    ///
    /// # Fields
    /// * `0` - Description of the serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<ValidationError> for VtError {
    fn from(error: ValidationError) -> Self {
        VtError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Returns the name of the offending field, when the error is field-specific.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Type alias for Results that may fail with a VtError
pub type VtResult<T> = Result<T, VtError>;
