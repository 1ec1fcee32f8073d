//! Bootstrap 5 rendering for choice fields
//!
//! Renders a field with choices (a radio group or a checkbox group) into the
//! markup Bootstrap expects:
//! - A wrapper carrying required/error marker classes
//! - An optional label, sized for the chosen layout
//! - A group container with one `form-check` block per choice
//! - Validation feedback and help text
//!
//! # Quick Start
//!
//! ```rust
//! use acton_bootstrap::forms::{Choice, FieldDescriptor, FieldRenderer, LayoutMode};
//!
//! let field = FieldDescriptor::new("size").label("Size").required();
//! let choices = [Choice::new("s", "Small"), Choice::new("l", "Large")];
//!
//! let html = FieldRenderer::default().render(&field, &choices, LayoutMode::Default);
//! assert!(html.contains(r#"id="id_size_1" value="l""#));
//! ```
//!
//! # Disabling Choices
//!
//! Individual choices can be disabled through their own flag or through a
//! predicate supplied at render time:
//!
//! ```rust
//! use acton_bootstrap::forms::{disabled_values, Choice, FieldDescriptor, FieldRenderer, RenderOptions};
//!
//! let field = FieldDescriptor::new("size");
//! let choices = [Choice::new("s", "Small"), Choice::new("l", "Large")];
//!
//! let html = FieldRenderer::default().render_with(
//!     &field,
//!     &choices,
//!     &RenderOptions::new(),
//!     disabled_values(["s"]),
//! );
//! assert!(html.contains(r#"<input class="form-check-input" disabled type="radio" name="size" id="id_size_0" value="s">"#));
//! ```

mod error;
mod field;
mod layout;
mod render;

pub use error::{FieldError, ValidationErrors};
pub use field::{disabled_values, pretty_name, Choice, ChoiceWidget, FieldDescriptor};
pub use layout::{LayoutMode, RenderOptions};
pub use render::FieldRenderer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_from_json() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{"name": "test", "required": true, "widget": "checkbox_select_multiple"}"#,
        )
        .unwrap();

        assert_eq!(field.effective_id(), "id_test");
        assert!(field.required);
        assert!(!field.disabled);
        assert_eq!(field.widget, ChoiceWidget::CheckboxSelectMultiple);
    }

    #[test]
    fn test_choices_from_json() {
        let choices: Vec<Choice> = serde_json::from_str(
            r#"[{"value": "1", "text": "one"}, {"value": "2", "text": "two", "disabled": true}]"#,
        )
        .unwrap();

        assert_eq!(choices[0], Choice::new("1", "one"));
        assert_eq!(choices[1], Choice::disabled("2", "two"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let field = FieldDescriptor::new("test").required();
        let choices = [Choice::new("1", "one")];
        let renderer = FieldRenderer::default();

        assert_eq!(
            renderer.render(&field, &choices, LayoutMode::Floating),
            renderer.render(&field, &choices, LayoutMode::Floating)
        );
    }
}
