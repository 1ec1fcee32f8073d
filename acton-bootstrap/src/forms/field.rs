//! Field descriptors and choices
//!
//! A [`FieldDescriptor`] carries the metadata the host framework knows about
//! a field. [`Choice`] is one selectable option in the group.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::ValidationErrors;

/// Widget used to render a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceWidget {
    /// One radio button per choice (default)
    #[default]
    RadioSelect,
    /// One checkbox per choice
    CheckboxSelectMultiple,
}

impl ChoiceWidget {
    /// Get the HTML type attribute value for each option input
    #[must_use]
    pub const fn input_type(&self) -> &'static str {
        match self {
            Self::RadioSelect => "radio",
            Self::CheckboxSelectMultiple => "checkbox",
        }
    }

    /// Whether the group container carries `required` for required fields
    ///
    /// A checkbox group never does: any single box may be left unchecked.
    #[must_use]
    pub const fn uses_required_attribute(&self) -> bool {
        matches!(self, Self::RadioSelect)
    }
}

impl std::fmt::Display for ChoiceWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RadioSelect => f.write_str("radio_select"),
            Self::CheckboxSelectMultiple => f.write_str("checkbox_select_multiple"),
        }
    }
}

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Value attribute
    pub value: String,
    /// Display text
    pub text: String,
    /// Whether this option is disabled on its own
    #[serde(default)]
    pub disabled: bool,
}

impl Choice {
    /// Create a new choice
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            disabled: false,
        }
    }

    /// Create a disabled choice
    #[must_use]
    pub fn disabled(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            disabled: true,
        }
    }
}

impl<V: Into<String>, T: Into<String>> From<(V, T)> for Choice {
    fn from((value, text): (V, T)) -> Self {
        Self::new(value, text)
    }
}

/// Build a predicate that disables choices by value
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::forms::{disabled_values, Choice};
///
/// let is_disabled = disabled_values(["1"]);
/// assert!(is_disabled(&Choice::new("1", "one")));
/// assert!(!is_disabled(&Choice::new("2", "two")));
/// ```
pub fn disabled_values<I, S>(values: I) -> impl Fn(&Choice) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: HashSet<String> = values.into_iter().map(Into::into).collect();
    move |choice: &Choice| values.contains(&choice.value)
}

/// Metadata for a single form field
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::forms::FieldDescriptor;
///
/// let field = FieldDescriptor::new("first_name").required();
/// assert_eq!(field.effective_id(), "id_first_name");
/// assert_eq!(field.effective_label(), "First name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name (used for form submission)
    pub name: String,
    /// Element ID (defaults to `id_<name>`)
    #[serde(default)]
    pub id: Option<String>,
    /// Label text (defaults to the prettified name; empty means no label)
    #[serde(default)]
    pub label: Option<String>,
    /// Whether a value is required
    #[serde(default)]
    pub required: bool,
    /// Whether the whole field is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Widget used for the choices
    #[serde(default)]
    pub widget: ChoiceWidget,
    /// Help text shown below the field
    #[serde(default)]
    pub help_text: Option<String>,
    /// Validation error messages
    #[serde(default)]
    pub errors: Vec<String>,
    /// Values of the currently selected choices
    #[serde(default)]
    pub selected: Vec<String>,
}

impl FieldDescriptor {
    /// Create a radio field with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            label: None,
            required: false,
            disabled: false,
            widget: ChoiceWidget::default(),
            help_text: None,
            errors: Vec::new(),
            selected: Vec::new(),
        }
    }

    /// Set the element ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the label text
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render without a field label
    #[must_use]
    pub fn no_label(mut self) -> Self {
        self.label = Some(String::new());
        self
    }

    /// Mark the field as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Disable the whole field
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the widget
    #[must_use]
    pub const fn widget(mut self, widget: ChoiceWidget) -> Self {
        self.widget = widget;
        self
    }

    /// Set help text
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Add a validation error message
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Attach this field's messages from a collection of validation errors
    #[must_use]
    pub fn with_errors(mut self, errors: &ValidationErrors) -> Self {
        self.errors.extend(
            errors
                .for_field(&self.name)
                .iter()
                .map(|e| e.message.clone()),
        );
        self
    }

    /// Mark a choice value as selected
    #[must_use]
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected.push(value.into());
        self
    }

    /// Get the effective ID (custom ID or `id_<name>`)
    #[must_use]
    pub fn effective_id(&self) -> Cow<'_, str> {
        self.id
            .as_deref()
            .map_or_else(|| Cow::Owned(format!("id_{}", self.name)), Cow::Borrowed)
    }

    /// Get the effective label (custom label or prettified name)
    #[must_use]
    pub fn effective_label(&self) -> Cow<'_, str> {
        self.label
            .as_deref()
            .map_or_else(|| Cow::Owned(pretty_name(&self.name)), Cow::Borrowed)
    }

    /// Check if the field has validation errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if a choice value is selected
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }
}

/// Turn a field name into label text: `first_name` becomes `First name`
#[must_use]
pub fn pretty_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_input_type() {
        assert_eq!(ChoiceWidget::RadioSelect.input_type(), "radio");
        assert_eq!(ChoiceWidget::CheckboxSelectMultiple.input_type(), "checkbox");
        assert!(ChoiceWidget::RadioSelect.uses_required_attribute());
        assert!(!ChoiceWidget::CheckboxSelectMultiple.uses_required_attribute());
    }

    #[test]
    fn test_choice() {
        let choice = Choice::new("1", "one");
        assert_eq!(choice.value, "1");
        assert_eq!(choice.text, "one");
        assert!(!choice.disabled);
        assert!(Choice::disabled("2", "two").disabled);
    }

    #[test]
    fn test_choice_from_tuple() {
        let choice: Choice = ("us", "United States").into();
        assert_eq!(choice, Choice::new("us", "United States"));
    }

    #[test]
    fn test_effective_id() {
        let field = FieldDescriptor::new("test");
        assert_eq!(field.effective_id(), "id_test");

        let field = field.id("custom");
        assert_eq!(field.effective_id(), "custom");
    }

    #[test]
    fn test_effective_label() {
        assert_eq!(FieldDescriptor::new("test").effective_label(), "Test");
        assert_eq!(FieldDescriptor::new("test").label("Pick").effective_label(), "Pick");
        assert_eq!(FieldDescriptor::new("test").no_label().effective_label(), "");
    }

    #[test]
    fn test_pretty_name() {
        assert_eq!(pretty_name("first_name"), "First name");
        assert_eq!(pretty_name("über"), "Über");
        assert_eq!(pretty_name(""), "");
    }

    #[test]
    fn test_with_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("test", "Select a valid choice.");
        errors.add("other", "ignored");

        let field = FieldDescriptor::new("test").with_errors(&errors);
        assert_eq!(field.errors, vec!["Select a valid choice."]);
        assert!(field.has_errors());
    }

    #[test]
    fn test_disabled_values() {
        let is_disabled = disabled_values(vec![String::from("b")]);
        assert!(is_disabled(&Choice::new("b", "B")));
        assert!(!is_disabled(&Choice::new("a", "A")));
    }

    #[test]
    fn test_selected() {
        let field = FieldDescriptor::new("test").selected("2");
        assert!(field.is_selected("2"));
        assert!(!field.is_selected("1"));
    }
}
