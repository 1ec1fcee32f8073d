//! Layout modes and per-call render options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BootstrapError;

/// Structural layout of a rendered field
///
/// The layout only decides which wrappers surround the field. The markup of
/// individual choices is the same in every layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Label stacked above the field
    #[default]
    Default,
    /// Label and field side by side in a grid row
    Horizontal,
    /// Floating labels (choice groups render like `Default`)
    Floating,
}

impl LayoutMode {
    /// All layouts, in declaration order
    pub const ALL: [Self; 3] = [Self::Default, Self::Horizontal, Self::Floating];

    /// Get the layout name as used in templates and configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Horizontal => "horizontal",
            Self::Floating => "floating",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "horizontal" => Ok(Self::Horizontal),
            "floating" => Ok(Self::Floating),
            other => Err(BootstrapError::UnknownLayout(other.to_string())),
        }
    }
}

/// Per-call rendering options
///
/// Unset values fall back to the renderer's
/// [`BootstrapSettings`](crate::config::BootstrapSettings).
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::forms::{LayoutMode, RenderOptions};
///
/// let options = RenderOptions::from_pairs([("layout", "horizontal"), ("show_help", "false")])?;
/// assert_eq!(options.layout, Some(LayoutMode::Horizontal));
/// assert!(!options.show_help);
///
/// assert!(RenderOptions::from_pairs([("layout", "inline")]).is_err());
/// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Layout override
    pub layout: Option<LayoutMode>,
    /// Whether to render the field label
    pub show_label: bool,
    /// Whether to render help text
    pub show_help: bool,
    /// Wrapper class override
    pub wrapper_class: Option<String>,
    /// Horizontal label grid class override
    pub horizontal_label_class: Option<String>,
    /// Horizontal field column class override
    pub horizontal_field_class: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: None,
            show_label: true,
            show_help: true,
            wrapper_class: None,
            horizontal_label_class: None,
            horizontal_field_class: None,
        }
    }
}

impl From<LayoutMode> for RenderOptions {
    fn from(layout: LayoutMode) -> Self {
        Self::new().layout(layout)
    }
}

impl RenderOptions {
    /// Create options that defer everything to the settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse template-tag style `key=value` arguments
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::UnknownOption`] for unrecognized keys,
    /// [`BootstrapError::UnknownLayout`] for bad layout names and
    /// [`BootstrapError::InvalidFlag`] for non-boolean flag values.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, BootstrapError> {
        let mut options = Self::new();
        for (key, value) in pairs {
            match key {
                "layout" => options.layout = Some(value.parse()?),
                "show_label" => options.show_label = parse_flag(key, value)?,
                "show_help" => options.show_help = parse_flag(key, value)?,
                "wrapper_class" => options.wrapper_class = Some(value.to_string()),
                "horizontal_label_class" => {
                    options.horizontal_label_class = Some(value.to_string());
                }
                "horizontal_field_class" => {
                    options.horizontal_field_class = Some(value.to_string());
                }
                other => return Err(BootstrapError::UnknownOption(other.to_string())),
            }
        }
        Ok(options)
    }

    /// Set the layout
    #[must_use]
    pub const fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Skip the field label
    #[must_use]
    pub const fn hide_label(mut self) -> Self {
        self.show_label = false;
        self
    }

    /// Skip help text
    #[must_use]
    pub const fn hide_help(mut self) -> Self {
        self.show_help = false;
        self
    }

    /// Override the wrapper class
    #[must_use]
    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = Some(class.into());
        self
    }

    /// Override the horizontal label grid class
    #[must_use]
    pub fn horizontal_label_class(mut self, class: impl Into<String>) -> Self {
        self.horizontal_label_class = Some(class.into());
        self
    }

    /// Override the horizontal field column class
    #[must_use]
    pub fn horizontal_field_class(mut self, class: impl Into<String>) -> Self {
        self.horizontal_field_class = Some(class.into());
        self
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, BootstrapError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(BootstrapError::InvalidFlag {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_round_trips_through_str() {
        for layout in LayoutMode::ALL {
            assert_eq!(layout.as_str().parse::<LayoutMode>().unwrap(), layout);
        }
    }

    #[test]
    fn test_unknown_layout_rejected() {
        assert_eq!(
            "inline".parse::<LayoutMode>(),
            Err(BootstrapError::UnknownLayout("inline".into()))
        );
        // names are case sensitive, no silent fallback
        assert!("Horizontal".parse::<LayoutMode>().is_err());
        assert!("".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn test_layout_serde_names() {
        #[derive(Deserialize)]
        struct Holder {
            layout: LayoutMode,
        }
        let holder: Holder = toml::from_str(r#"layout = "floating""#).unwrap();
        assert_eq!(holder.layout, LayoutMode::Floating);
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(options.layout.is_none());
        assert!(options.show_label);
        assert!(options.show_help);
    }

    #[test]
    fn test_from_pairs() {
        let options = RenderOptions::from_pairs([
            ("layout", "floating"),
            ("show_label", "false"),
            ("wrapper_class", "mb-5"),
            ("horizontal_label_class", "col-md-4"),
            ("horizontal_field_class", "col-md-8"),
        ])
        .unwrap();

        assert_eq!(options.layout, Some(LayoutMode::Floating));
        assert!(!options.show_label);
        assert_eq!(options.wrapper_class.as_deref(), Some("mb-5"));
        assert_eq!(options.horizontal_label_class.as_deref(), Some("col-md-4"));
        assert_eq!(options.horizontal_field_class.as_deref(), Some("col-md-8"));
    }

    #[test]
    fn test_from_pairs_errors() {
        assert_eq!(
            RenderOptions::from_pairs([("size", "lg")]),
            Err(BootstrapError::UnknownOption("size".into()))
        );
        assert_eq!(
            RenderOptions::from_pairs([("show_help", "yes")]),
            Err(BootstrapError::InvalidFlag {
                name: "show_help".into(),
                value: "yes".into(),
            })
        );
        assert!(matches!(
            RenderOptions::from_pairs([("layout", "grid")]),
            Err(BootstrapError::UnknownLayout(_))
        ));
    }
}
