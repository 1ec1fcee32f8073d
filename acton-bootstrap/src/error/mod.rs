//! Error types and error handling

use thiserror::Error;

/// Errors raised while parsing render arguments
///
/// Rendering itself never fails. Everything that can be wrong about a render
/// call is caught when layout names and options are parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// Layout name is not one of `default`, `horizontal`, `floating`
    #[error("Unknown layout: {0:?} (expected \"default\", \"horizontal\" or \"floating\")")]
    UnknownLayout(String),

    /// Render option key is not recognized
    #[error("Unknown render option: {0:?}")]
    UnknownOption(String),

    /// Boolean render option has a value other than true/false
    #[error("Invalid value {value:?} for flag {name:?} (expected \"true\" or \"false\")")]
    InvalidFlag {
        /// Option name
        name: String,
        /// Rejected value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_layout_message() {
        let err = BootstrapError::UnknownLayout("inline".into());
        assert!(err.to_string().contains("\"inline\""));
        assert!(err.to_string().contains("horizontal"));
    }

    #[test]
    fn test_invalid_flag_message() {
        let err = BootstrapError::InvalidFlag {
            name: "show_label".into(),
            value: "maybe".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"maybe\" for flag \"show_label\" (expected \"true\" or \"false\")"
        );
    }
}
