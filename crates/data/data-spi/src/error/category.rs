//! Coarse error taxonomy shared by every analytics domain.

use serde::{Deserialize, Serialize};

/// Kind of failure, independent of the domain that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The input series is too short, malformed or contains non-finite values.
    InputValidation,
    /// A configuration value is out of range.
    InvalidConfiguration,
    /// Model fitting did not converge.
    Convergence,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::InputValidation => "input validation",
            ErrorCategory::InvalidConfiguration => "invalid configuration",
            ErrorCategory::Convergence => "convergence",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ErrorCategory::InputValidation.to_string(), "input validation");
        assert_eq!(
            ErrorCategory::InvalidConfiguration.to_string(),
            "invalid configuration"
        );
        assert_eq!(ErrorCategory::Convergence.to_string(), "convergence");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ErrorCategory::InvalidConfiguration).unwrap();
        assert_eq!(json, "\"invalid_configuration\"");
    }
}
