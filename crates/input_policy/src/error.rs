use std::fmt;

/// A policy configuration that cannot produce well-formed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyConfigError {
    /// A digit budget that must admit at least one digit is zero.
    ZeroCapacity { field: &'static str },
    /// The decimal separator collides with characters the policy assigns
    /// other meanings to (digits, sign, duration colon, whitespace).
    InvalidSeparator { separator: char },
}

impl fmt::Display for PolicyConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyConfigError::ZeroCapacity { field } => {
                write!(f, "{field} must be at least 1")
            }
            PolicyConfigError::InvalidSeparator { separator } => {
                write!(f, "invalid decimal separator: {separator:?}")
            }
        }
    }
}

impl std::error::Error for PolicyConfigError {}
