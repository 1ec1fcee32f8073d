//! Configuration management for acton-bootstrap
//!
//! Framework-wide class names and the default layout are loaded from
//! multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_BOOTSTRAP_` prefix, `__` for nesting,
//!    e.g. `ACTON_BOOTSTRAP_BOOTSTRAP__WRAPPER_CLASS=mb-4`)
//! 2. `./config.toml` (development)
//! 3. `~/.config/acton-bootstrap/{service}/config.toml` (user config, XDG)
//! 4. `/etc/acton-bootstrap/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [bootstrap]
//! required_css_class = "app-req"
//! error_css_class = "app-err"
//! wrapper_class = "mb-4"
//! horizontal_label_class = "col-md-3"
//! horizontal_field_class = "col-md-9"
//! layout = "horizontal"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use acton_bootstrap::config::BootstrapConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BootstrapConfig::load_for_service("my-app")?;
//! let wrapper = &config.bootstrap.wrapper_class;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::forms::LayoutMode;

/// Settings used when no configuration has been loaded
pub static DEFAULT_SETTINGS: Lazy<BootstrapSettings> = Lazy::new(BootstrapSettings::default);

/// Bootstrap rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapSettings {
    /// Class added to the wrapper of required fields
    pub required_css_class: String,

    /// Class added to the wrapper of fields with errors
    pub error_css_class: String,

    /// Margin class on every field wrapper
    pub wrapper_class: String,

    /// Grid class for labels in horizontal layout
    pub horizontal_label_class: String,

    /// Grid class for the field column in horizontal layout
    pub horizontal_field_class: String,

    /// Layout used when a render call does not pick one
    pub layout: LayoutMode,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            required_css_class: "acton_bootstrap-req".to_string(),
            error_css_class: "acton_bootstrap-err".to_string(),
            wrapper_class: "mb-3".to_string(),
            horizontal_label_class: "col-sm-2".to_string(),
            horizontal_field_class: "col-sm-10".to_string(),
            layout: LayoutMode::Default,
        }
    }
}

/// Complete acton-bootstrap configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Bootstrap class settings
    #[serde(default)]
    pub bootstrap: BootstrapSettings,
}

impl BootstrapConfig {
    /// Load configuration for a specific service
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - A value has the wrong type (for example an unknown layout name)
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_bootstrap::config::BootstrapConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = BootstrapConfig::load_for_service("my-app")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc/acton-bootstrap")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config: Self = figment.merge(Self::env()).extract()?;
        tracing::debug!(
            service = service_name,
            layout = %config.bootstrap.layout,
            "Loaded bootstrap configuration"
        );
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_bootstrap::config::BootstrapConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = BootstrapConfig::load_from("./config/production.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Self::defaults()?
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env())
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_bootstrap::config::BootstrapConfig;
    ///
    /// let path = BootstrapConfig::recommended_path("my-app");
    /// // Returns: ~/.config/acton-bootstrap/my-app/config.toml
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("acton-bootstrap")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn env() -> Env {
        Env::prefixed("ACTON_BOOTSTRAP_").split("__").lowercase(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_settings() {
        let settings = BootstrapSettings::default();
        assert_eq!(settings.required_css_class, "acton_bootstrap-req");
        assert_eq!(settings.error_css_class, "acton_bootstrap-err");
        assert_eq!(settings.wrapper_class, "mb-3");
        assert_eq!(settings.horizontal_label_class, "col-sm-2");
        assert_eq!(settings.horizontal_field_class, "col-sm-10");
        assert_eq!(settings.layout, LayoutMode::Default);
    }

    #[test]
    fn test_static_defaults_match() {
        assert_eq!(*DEFAULT_SETTINGS, BootstrapSettings::default());
    }

    #[test]
    fn test_recommended_path() {
        let path = BootstrapConfig::recommended_path("test-app");
        let path = path.to_string_lossy();

        assert!(path.ends_with("config.toml"));
        if dirs::config_dir().is_some() {
            assert!(path.contains("acton-bootstrap"));
            assert!(path.contains("test-app"));
        }
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        Jail::expect_with(|_jail| {
            let config = BootstrapConfig::load_from("missing.toml").unwrap();
            assert_eq!(config.bootstrap, BootstrapSettings::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
[bootstrap]
wrapper_class = "mb-4"
layout = "horizontal"
"#,
            )?;

            let config = BootstrapConfig::load_from("config.toml").unwrap();

            assert_eq!(config.bootstrap.wrapper_class, "mb-4");
            assert_eq!(config.bootstrap.layout, LayoutMode::Horizontal);
            // untouched keys keep their defaults
            assert_eq!(config.bootstrap.required_css_class, "acton_bootstrap-req");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[bootstrap]\nwrapper_class = \"mb-4\"\n")?;
            jail.set_env("ACTON_BOOTSTRAP_BOOTSTRAP__WRAPPER_CLASS", "mb-5");
            jail.set_env("ACTON_BOOTSTRAP_BOOTSTRAP__LAYOUT", "floating");

            let config = BootstrapConfig::load_from("config.toml").unwrap();

            assert_eq!(config.bootstrap.wrapper_class, "mb-5");
            assert_eq!(config.bootstrap.layout, LayoutMode::Floating);
            Ok(())
        });
    }

    #[test]
    fn test_env_ignores_other_acton_variables() {
        Jail::expect_with(|jail| {
            jail.set_env("ACTON_BOOTSTRAP__LAYOUT", "inline");
            jail.set_env("ACTON_FEATURES__FLOATING", "true");

            let config = BootstrapConfig::load_from("config.toml").unwrap();

            assert_eq!(config.bootstrap, BootstrapSettings::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_unknown_layout() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[bootstrap]\nlayout = \"inline\"\n")?;

            assert!(BootstrapConfig::load_from("config.toml").is_err());
            Ok(())
        });
    }
}
