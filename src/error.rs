use serde_json::{json, Value};
use thiserror::Error;

/// Errors raised while looking up machines or computing quotes.
///
/// Every variant stems from invalid input against static data, so none of
/// them are retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    /// Unknown machine configuration or plasma unit
    #[error("Not found: {0}")]
    NotFound(String),

    /// Option requested on a machine that cannot take it
    #[error("Option '{option}' is not supported by configuration '{config}'")]
    UnsupportedOption { config: String, option: String },

    /// Non-positive dimension or rate
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl QuoteError {
    /// Stable snake_case name, used in JSON error output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::UnsupportedOption { .. } => "unsupported_option",
            Self::InvalidInput(_) => "invalid_input",
        }
    }

    /// Error body printed by `--json` commands
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "message": self.to_string(),
                "type": self.kind(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = QuoteError::NotFound("5 x 10 ft".to_string());
        assert_eq!(error.to_string(), "Not found: 5 x 10 ft");

        let error = QuoteError::UnsupportedOption {
            config: "400 x 400 mm".to_string(),
            option: "plasma".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Option 'plasma' is not supported by configuration '400 x 400 mm'"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(QuoteError::NotFound("x".to_string()).kind(), "not_found");
        assert_eq!(
            QuoteError::InvalidInput("x".to_string()).kind(),
            "invalid_input"
        );
    }

    #[test]
    fn test_error_json_body() {
        let error = QuoteError::UnsupportedOption {
            config: "400 x 400 mm".to_string(),
            option: "plasma".to_string(),
        };
        let body = error.to_json();

        assert_eq!(body["error"]["type"], "unsupported_option");
        assert_eq!(
            body["error"]["message"],
            "Option 'plasma' is not supported by configuration '400 x 400 mm'"
        );
    }
}
