/// Structured error types for padron-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (padron-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use thiserror::Error;

/// Configuration loading failure
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is absent or empty
    #[error("missing required environment variable {name}")]
    MissingVar { name: &'static str },

    /// Environment variable is present but unusable
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Create a missing-variable error
    pub fn missing(name: &'static str) -> Self {
        Self::MissingVar { name }
    }

    /// Create an invalid-variable error
    pub fn invalid(name: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVar {
            name,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for padron-core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_display() {
        let err = ConfigError::missing("PG_HOST");
        assert_eq!(
            err.to_string(),
            "missing required environment variable PG_HOST"
        );
    }

    #[test]
    fn invalid_var_display() {
        let err = ConfigError::invalid("PG_PORT", "up", "not a number");
        assert_eq!(err.to_string(), "invalid value 'up' for PG_PORT: not a number");
    }
}
