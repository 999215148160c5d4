// SPDX-License-Identifier: MIT

//! Typed error handling for adk-toolset
//!
//! Every fallible operation in the crate returns [`AdkError`].

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AdkError>;

/// Top-level error type for adk-toolset
#[derive(Debug, Error)]
pub enum AdkError {
    /// Tool input could not be turned into the tool's argument type
    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    /// Tool not found in a registry or agent
    #[error("Tool '{name}' not found")]
    ToolNotFound { name: String },

    /// Configuration names a toolset kind we cannot build
    #[error("Unknown toolset kind: {0}")]
    UnknownToolset(String),

    /// Configuration errors (missing fields, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

impl AdkError {
    /// Create an invalid arguments error
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a tool not found error
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<&str> for AdkError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<String> for AdkError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_message() {
        let err = AdkError::invalid_arguments("math_add_numbers", "missing field `a`");
        assert_eq!(
            err.to_string(),
            "Invalid arguments for tool 'math_add_numbers': missing field `a`"
        );
    }

    #[test]
    fn test_tool_not_found_message() {
        let err = AdkError::tool_not_found("nope");
        assert_eq!(err.to_string(), "Tool 'nope' not found");
    }

    #[test]
    fn test_from_str_and_string() {
        let a: AdkError = "boom".into();
        let b: AdkError = String::from("bang").into();
        assert!(matches!(a, AdkError::Other(ref m) if m == "boom"));
        assert!(matches!(b, AdkError::Other(ref m) if m == "bang"));
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = json_err.to_string();
        let err: AdkError = json_err.into();
        assert_eq!(err.to_string(), expected);
    }
}
