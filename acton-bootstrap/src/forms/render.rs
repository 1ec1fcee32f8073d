//! Field rendering to Bootstrap 5 markup
//!
//! Builds the markup tree for a choice field and serializes it. The output
//! for a required radio field in the default layout looks like:
//!
//! ```html
//! <div class="acton_bootstrap-req mb-3">
//!   <label class="form-label">Test</label>
//!   <div class="" required id="id_test">
//!     <div class="form-check">
//!       <input class="form-check-input" type="radio" name="test" id="id_test_0" value="1">
//!       <label class="form-check-label" for="id_test_0">one</label>
//!     </div>
//!   </div>
//! </div>
//! ```
//!
//! (whitespace added for readability; the renderer emits none)

use crate::config::{BootstrapSettings, DEFAULT_SETTINGS};
use crate::markup::{class_list, AttributeSet, Element};

use super::field::{Choice, FieldDescriptor};
use super::layout::{LayoutMode, RenderOptions};

/// Renders choice fields to HTML
///
/// The renderer only borrows its settings, so one instance can be shared
/// freely between threads.
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::forms::{Choice, FieldDescriptor, FieldRenderer, LayoutMode};
///
/// let field = FieldDescriptor::new("test").required();
/// let choices = [Choice::new("1", "one"), Choice::new("2", "two")];
///
/// let html = FieldRenderer::default().render(&field, &choices, LayoutMode::Horizontal);
/// assert!(html.starts_with(r#"<div class="acton_bootstrap-req row mb-3">"#));
/// assert!(html.contains(r#"<div class="col-sm-10">"#));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldRenderer<'s> {
    settings: &'s BootstrapSettings,
}

impl Default for FieldRenderer<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_SETTINGS)
    }
}

impl<'s> FieldRenderer<'s> {
    /// Create a renderer using the given settings
    #[must_use]
    pub const fn new(settings: &'s BootstrapSettings) -> Self {
        Self { settings }
    }

    /// Settings this renderer was created with
    #[must_use]
    pub const fn settings(&self) -> &'s BootstrapSettings {
        self.settings
    }

    /// Render a field in the given layout
    #[must_use]
    pub fn render(&self, field: &FieldDescriptor, choices: &[Choice], layout: LayoutMode) -> String {
        self.render_with_options(field, choices, &RenderOptions::from(layout))
    }

    /// Render a field with custom options
    #[must_use]
    pub fn render_with_options(
        &self,
        field: &FieldDescriptor,
        choices: &[Choice],
        options: &RenderOptions,
    ) -> String {
        self.render_with(field, choices, options, |_| false)
    }

    /// Render a field, disabling every choice for which `is_choice_disabled` holds
    ///
    /// The predicate is OR-ed with the field's own `disabled` flag and each
    /// choice's `disabled` flag. It never affects the group container.
    #[must_use]
    pub fn render_with<F>(
        &self,
        field: &FieldDescriptor,
        choices: &[Choice],
        options: &RenderOptions,
        is_choice_disabled: F,
    ) -> String
    where
        F: Fn(&Choice) -> bool,
    {
        self.build(field, choices, options, is_choice_disabled).render()
    }

    /// Build the markup tree without serializing it
    #[must_use]
    pub fn build<F>(
        &self,
        field: &FieldDescriptor,
        choices: &[Choice],
        options: &RenderOptions,
        is_choice_disabled: F,
    ) -> Element
    where
        F: Fn(&Choice) -> bool,
    {
        let layout = options.layout.unwrap_or(self.settings.layout);
        tracing::debug!(
            field = %field.name,
            %layout,
            widget = %field.widget,
            choices = choices.len(),
            "Rendering choice field"
        );

        let wrapper = Element::new("div")
            .attr("class", self.wrapper_class(field, options, layout))
            .child_opt(self.label(field, options, layout));

        let container = Self::container(field, choices, &is_choice_disabled);
        let feedback = Self::feedback(field, options);

        match layout {
            LayoutMode::Horizontal => {
                let column_class = options
                    .horizontal_field_class
                    .as_deref()
                    .unwrap_or(&self.settings.horizontal_field_class);
                wrapper.child(
                    Element::new("div")
                        .attr("class", column_class)
                        .child(container)
                        .children(feedback),
                )
            }
            LayoutMode::Default | LayoutMode::Floating => {
                wrapper.child(container).children(feedback)
            }
        }
    }

    fn wrapper_class(
        &self,
        field: &FieldDescriptor,
        options: &RenderOptions,
        layout: LayoutMode,
    ) -> String {
        let settings = self.settings;
        class_list([
            if field.required {
                settings.required_css_class.as_str()
            } else {
                ""
            },
            if field.has_errors() {
                settings.error_css_class.as_str()
            } else {
                ""
            },
            if layout == LayoutMode::Horizontal {
                "row"
            } else {
                ""
            },
            options
                .wrapper_class
                .as_deref()
                .unwrap_or(&settings.wrapper_class),
        ])
    }

    fn label(
        &self,
        field: &FieldDescriptor,
        options: &RenderOptions,
        layout: LayoutMode,
    ) -> Option<Element> {
        let text = field.effective_label();
        if !options.show_label || text.is_empty() {
            return None;
        }

        let class = match layout {
            LayoutMode::Horizontal => class_list([
                options
                    .horizontal_label_class
                    .as_deref()
                    .unwrap_or(&self.settings.horizontal_label_class),
                "col-form-label",
            ]),
            LayoutMode::Default | LayoutMode::Floating => "form-label".to_string(),
        };

        Some(Element::new("label").attr("class", class).text(text))
    }

    fn container<F>(field: &FieldDescriptor, choices: &[Choice], is_choice_disabled: &F) -> Element
    where
        F: Fn(&Choice) -> bool,
    {
        let id = field.effective_id();
        let class = if field.has_errors() { "is-invalid" } else { "" };

        Element::new("div")
            .attr("class", class)
            .bare_attr_if("disabled", field.disabled)
            .bare_attr_if(
                "required",
                field.required && field.widget.uses_required_attribute(),
            )
            .attr("id", &*id)
            .children(choices.iter().enumerate().map(|(index, choice)| {
                let disabled = field.disabled || choice.disabled || is_choice_disabled(choice);
                if disabled && !field.disabled {
                    tracing::trace!(field = %field.name, value = %choice.value, "Choice disabled");
                }
                Self::choice(field, &id, index, choice, disabled)
            }))
    }

    fn choice(
        field: &FieldDescriptor,
        field_id: &str,
        index: usize,
        choice: &Choice,
        disabled: bool,
    ) -> Element {
        let option_id = format!("{field_id}_{index}");

        let base = AttributeSet::new()
            .with("class", "form-check-input")
            .with_bare_if("disabled", disabled)
            .with("type", field.widget.input_type())
            .with("name", field.name.as_str())
            .with("id", option_id.as_str())
            .with("value", choice.value.as_str())
            .with_bare_if("checked", field.is_selected(&choice.value));

        // class overrides append, so the input keeps `form-check-input`
        let state = if field.has_errors() {
            AttributeSet::new().with("class", "is-invalid")
        } else {
            AttributeSet::new()
        };

        Element::new("div")
            .attr("class", "form-check")
            .child(Element::new("input").merge(&base).merge(&state))
            .child(
                Element::new("label")
                    .attr("class", "form-check-label")
                    .attr("for", option_id)
                    .text(choice.text.as_str()),
            )
    }

    fn feedback(field: &FieldDescriptor, options: &RenderOptions) -> Vec<Element> {
        let errors = field.errors.iter().map(|message| {
            Element::new("div")
                .attr("class", "invalid-feedback d-block")
                .text(message.as_str())
        });

        let help = field
            .help_text
            .as_deref()
            .filter(|_| options.show_help)
            .map(|text| Element::new("div").attr("class", "form-text").text(text));

        errors.chain(help).collect()
    }
}
