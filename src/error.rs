//! Error types for subnet calculations.

use thiserror::Error;

/// Errors returned by the subnet calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Malformed CIDR block '{cidr}': {reason}")]
    MalformedCidr { cidr: String, reason: String },

    #[error("Requested subnet count {requested} exceeds maximal possible subnet count {max}")]
    SubnetCountExceeded { requested: usize, max: usize },

    #[error("Prefix length /{0} is out of range 0-32")]
    PrefixLengthOutOfRange(u8),

    #[error("Subnet count must be greater than zero")]
    ZeroSubnetCount,
}

impl SubnetError {
    pub(crate) fn malformed(cidr: &str, reason: impl Into<String>) -> Self {
        SubnetError::MalformedCidr {
            cidr: cidr.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SubnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_count_exceeded_message() {
        let err = SubnetError::SubnetCountExceeded {
            requested: 65,
            max: 64,
        };
        assert_eq!(
            err.to_string(),
            "Requested subnet count 65 exceeds maximal possible subnet count 64"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = SubnetError::malformed("10.0.0.0/33", "prefix length too long");
        assert_eq!(
            err.to_string(),
            "Malformed CIDR block '10.0.0.0/33': prefix length too long"
        );
    }
}
