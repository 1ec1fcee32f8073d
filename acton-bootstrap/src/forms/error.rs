//! Validation errors shown next to fields
//!
//! Errors are collected per field name, usually by converting the
//! `validator` crate's errors, and then attached to a
//! [`FieldDescriptor`](super::FieldDescriptor) before rendering.

use std::collections::BTreeMap;

/// A single validation error for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The error message
    pub message: String,
    /// Optional error code for programmatic handling
    pub code: Option<String>,
}

impl FieldError {
    /// Create a new field error with just a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a field error with a message and code
    #[must_use]
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validation errors keyed by field name
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::forms::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("color", "This field is required.");
/// errors.add("size", "Select a valid choice.");
///
/// assert!(errors.has_errors());
/// assert_eq!(errors.for_field("color").len(), 1);
/// assert!(errors.for_field("shape").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// Create a new empty error collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field, FieldError::new(message));
    }

    /// Add an error with a code for a field
    pub fn add_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.push(field, FieldError::with_code(message, code));
    }

    fn push(&mut self, field: impl Into<String>, error: FieldError) {
        self.errors.entry(field.into()).or_default().push(error);
    }

    /// Check if there are any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get all errors for a specific field
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                result.add_with_code(field.to_string(), message, error.code.to_string());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_field_error_with_code() {
        let error = FieldError::with_code("Select a valid choice.", "invalid_choice");
        assert_eq!(error.to_string(), "Select a valid choice.");
        assert_eq!(error.code.as_deref(), Some("invalid_choice"));
    }

    #[test]
    fn test_add_keeps_order_per_field() {
        let mut errors = ValidationErrors::new();
        assert!(!errors.has_errors());

        errors.add("color", "is required");
        errors.add("color", "is invalid");

        assert!(errors.has_errors());
        assert_eq!(errors.for_field("color").len(), 2);
        assert_eq!(errors.for_field("color")[1].message, "is invalid");
        assert!(errors.for_field("size").is_empty());
    }

    #[derive(Validate)]
    struct ColorForm {
        #[validate(length(min = 1, message = "Pick a color."))]
        color: String,
    }

    #[test]
    fn test_from_validator_errors() {
        let form = ColorForm {
            color: String::new(),
        };
        let errors: ValidationErrors = form.validate().unwrap_err().into();

        let color = errors.for_field("color");
        assert_eq!(color.len(), 1);
        assert_eq!(color[0].message, "Pick a color.");
        assert_eq!(color[0].code.as_deref(), Some("length"));
    }
}
