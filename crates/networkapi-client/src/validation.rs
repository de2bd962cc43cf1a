//! Parameter validation
//!
//! Identifiers are checked before any request is built, so a bad id never reaches
//! the network. Façade methods accept anything implementing [`IdParam`]: integers,
//! strings and `Option`s of either.

use crate::error::NetworkApiError;
use regex::Regex;
use std::sync::LazyLock;

static IPV4: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
});

/// A value that may carry a non-negative integer identifier
pub trait IdParam {
    /// The identifier, if the value is a well-formed non-negative integer
    fn as_id(&self) -> Option<u64>;
}

macro_rules! integer_id_param {
    ($($ty:ty),*) => {
        $(impl IdParam for $ty {
            fn as_id(&self) -> Option<u64> {
                u64::try_from(*self).ok()
            }
        })*
    };
}

integer_id_param!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl IdParam for str {
    fn as_id(&self) -> Option<u64> {
        let trimmed = self.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        trimmed.parse().ok()
    }
}

impl IdParam for String {
    fn as_id(&self) -> Option<u64> {
        self.as_str().as_id()
    }
}

impl<T: IdParam + ?Sized> IdParam for &T {
    fn as_id(&self) -> Option<u64> {
        (**self).as_id()
    }
}

impl<T: IdParam> IdParam for Option<T> {
    fn as_id(&self) -> Option<u64> {
        self.as_ref().and_then(IdParam::as_id)
    }
}

/// Whether `value` is a well-formed non-negative integer
pub fn is_valid_int_param<T: IdParam + ?Sized>(value: &T) -> bool {
    value.as_id().is_some()
}

/// Validate an identifier, naming the parameter in the error
///
/// # Returns
/// * `Ok(u64)` - The identifier
/// * `Err(NetworkApiError::InvalidParameter)` - If it is missing, negative or not a number
pub fn require_id<T: IdParam + ?Sized>(value: &T, name: &str) -> Result<u64, NetworkApiError> {
    value
        .as_id()
        .ok_or_else(|| NetworkApiError::InvalidParameter(format!("{name} is invalid or was not informed.")))
}

/// Validate every identifier in a list
pub fn require_ids<T: IdParam>(values: &[T], name: &str) -> Result<Vec<u64>, NetworkApiError> {
    if values.is_empty() {
        return Err(NetworkApiError::InvalidParameter(format!("{name} was not informed.")));
    }
    values.iter().map(|value| require_id(value, name)).collect()
}

/// Whether `ip` is a dotted-quad IPv4 address with every octet in 0-255
pub fn is_valid_ipv4(ip: &str) -> bool {
    IPV4.as_ref().is_ok_and(|pattern| pattern.is_match(ip))
}

/// Validate an IPv4 address, naming the parameter in the error
pub fn require_ipv4(ip: &str, name: &str) -> Result<(), NetworkApiError> {
    if is_valid_ipv4(ip) {
        Ok(())
    } else {
        Err(NetworkApiError::InvalidParameter(format!("{name} is invalid or was not informed.")))
    }
}

/// Validate that a text parameter is present and not blank
pub fn require_text<'a>(value: &'a str, name: &str) -> Result<&'a str, NetworkApiError> {
    if value.trim().is_empty() {
        Err(NetworkApiError::InvalidParameter(format!("{name} is invalid or was not informed.")))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ids() {
        assert_eq!(require_id(&7_u32, "Vlan id").unwrap(), 7);
        assert_eq!(require_id(&0_i64, "Vlan id").unwrap(), 0);
        assert!(require_id(&-1_i32, "Vlan id").is_err());
    }

    #[test]
    fn test_string_ids() {
        assert_eq!(require_id("42", "Vlan id").unwrap(), 42);
        assert_eq!(require_id(&"42".to_string(), "Vlan id").unwrap(), 42);
        assert!(!is_valid_int_param("abc"));
        assert!(!is_valid_int_param("-1"));
        assert!(!is_valid_int_param("+1"));
        assert!(!is_valid_int_param("1.5"));
        assert!(!is_valid_int_param(""));
    }

    #[test]
    fn test_optional_ids() {
        assert!(!is_valid_int_param(&None::<u64>));
        assert!(is_valid_int_param(&Some(3_u64)));
        assert!(!is_valid_int_param(&Some("x")));
    }

    #[test]
    fn test_error_names_parameter() {
        let err = require_id(&None::<u64>, "Environment id").unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(err.to_string(), "Invalid parameter: Environment id is invalid or was not informed.");
    }

    #[test]
    fn test_require_ids() {
        assert_eq!(require_ids(&[1_u64, 2, 3], "Vlan ids").unwrap(), vec![1, 2, 3]);
        assert!(require_ids::<u64>(&[], "Vlan ids").is_err());
        assert!(require_ids(&["1", "x"], "Vlan ids").is_err());
    }

    #[test]
    fn test_ipv4() {
        assert!(is_valid_ipv4("10.0.0.1"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(!is_valid_ipv4("256.0.0.1"));
        assert!(!is_valid_ipv4("10.0.0"));
        assert!(!is_valid_ipv4("10.0.0.1.5"));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(require_ipv4("300.1.1.1", "IP").is_err());
    }
}
