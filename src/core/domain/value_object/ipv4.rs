use crate::core::domain::error::ValidationError;

/// Validates a dotted-decimal IPv4 address and returns it unchanged.
///
/// Each of the four groups must be one to three ASCII digits with a value no
/// greater than 255. Leading zeros are accepted (`010.0.0.1`), matching what
/// the VT service accepts.
///
/// # Errors
///
/// Returns `ValidationError::Format` when the address is malformed.
pub fn check_ip(ip: &str) -> Result<&str, ValidationError> {
    let octets: Vec<&str> = ip.split('.').collect();
    let valid = octets.len() == 4 && octets.iter().all(|octet| is_octet(octet));

    if valid {
        Ok(ip)
    } else {
        Err(ValidationError::Format(format!(
            "Invalid IPv4 address: {}",
            ip
        )))
    }
}

fn is_octet(group: &str) -> bool {
    if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // at most three digits, so this cannot overflow
    group.parse::<u16>().is_ok_and(|n| n <= 255)
}
