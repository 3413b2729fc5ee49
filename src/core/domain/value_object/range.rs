use crate::core::domain::error::ValidationError;
use std::fmt::Display;

/// Bounds for VM resource fields. `min` and `max` form an inclusive range.
pub(crate) const RAM_MIN_KB: u64 = 1024;
pub(crate) const RAM_MAX_KB: u64 = 1024 * 64;
pub(crate) const HDD_MIN_KB: u64 = 1024;
pub(crate) const CPU_MIN_PERCENT: u32 = 0;
pub(crate) const CPU_MAX_PERCENT: u32 = 100;
pub(crate) const CORES_MIN: u32 = 1;

/// Checks that `value` lies within `[min, max]`, or `[min, ∞)` when `max` is `None`.
///
/// An unset value passes through unchanged: unset fields mean "leave as is"
/// when a parameter set is applied to several VMs at once.
///
/// # Errors
///
/// Returns `ValidationError::Field` naming `field`, the rejected value and the
/// expected bounds.
pub fn check_range<T>(
    value: Option<T>,
    min: T,
    max: Option<T>,
    field: &str,
) -> Result<Option<T>, ValidationError>
where
    T: PartialOrd + Copy + Display,
{
    let Some(value) = value else {
        return Ok(None);
    };

    let within = value >= min && max.is_none_or(|max| value <= max);
    if within {
        return Ok(Some(value));
    }

    let expected = match max {
        Some(max) => format!("expected integer between {} and {}", min, max),
        None => format!("expected integer of at least {}", min),
    };
    Err(ValidationError::Field {
        field: field.to_string(),
        message: format!("invalid value {}, {}", value, expected),
    })
}
