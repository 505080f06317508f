//! Configuration for the money pipeline

use std::str::FromStr;

use crate::error::{MoneyError, Result};
use crate::locale::is_well_formed_tag;
use crate::types::CurrencyDisplay;

/// Default configuration constants
pub mod defaults {
    /// Locale used when a call does not name one
    pub const DEFAULT_LOCALE: &str = "en-US";
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyConfig {
    pub(crate) default_locale: String,
    pub(crate) display: CurrencyDisplay,
    pub(crate) locale_fallback: bool, // retry unresolvable locales with default_locale
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_locale: defaults::DEFAULT_LOCALE.to_string(),
            display: CurrencyDisplay::default(),
            locale_fallback: false,
        }
    }
}

impl MoneyConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn display(&self) -> CurrencyDisplay {
        self.display
    }

    pub fn locale_fallback(&self) -> bool {
        self.locale_fallback
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if !is_well_formed_tag(&self.default_locale) {
            return Err(MoneyError::Config(format!(
                "default_locale is not a valid locale tag: '{}'",
                self.default_locale
            )));
        }
        Ok(())
    }

    /// Parse a configuration from TOML
    ///
    /// Recognized keys are `default_locale`, `display` (`"symbol"`, `"narrow-symbol"`
    /// or `"code"`) and `locale_fallback`. Missing keys keep their defaults.
    ///
    /// # Examples
    /// ```
    /// use money_fragments::config::MoneyConfig;
    /// use money_fragments::types::CurrencyDisplay;
    ///
    /// let toml = "default_locale = \"pt-BR\"\ndisplay = \"code\"";
    /// let config = MoneyConfig::from_toml_str(toml).unwrap();
    /// assert_eq!(config.default_locale(), "pt-BR");
    /// assert_eq!(config.display(), CurrencyDisplay::Code);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| MoneyError::Config(e.to_string()))?;
        let table = parsed_toml
            .as_table()
            .ok_or_else(|| MoneyError::Config("Root is not a table".to_string()))?;

        let mut builder = ConfigBuilder::new();
        for (key, value) in table {
            builder = match key.as_str() {
                "default_locale" => builder.default_locale(expect_str(key, value)?),
                "display" => builder.display_str(expect_str(key, value)?)?,
                "locale_fallback" => builder.locale_fallback(value.as_bool().ok_or_else(|| {
                    MoneyError::Config(format!("{key} must be a boolean"))
                })?),
                other => return Err(MoneyError::Config(format!("Unknown key: {other}"))),
            };
        }
        builder.build()
    }
}

fn expect_str<'a>(key: &str, value: &'a toml::Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| MoneyError::Config(format!("{key} must be a string")))
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    default_locale: Option<String>,
    display: Option<CurrencyDisplay>,
    locale_fallback: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale used when a call passes none
    pub fn default_locale(mut self, tag: impl Into<String>) -> Self {
        self.default_locale = Some(tag.into());
        self
    }

    pub fn display(mut self, display: CurrencyDisplay) -> Self {
        self.display = Some(display);
        self
    }

    /// Set the display style by name
    pub fn display_str(mut self, display: &str) -> Result<Self> {
        self.display = Some(CurrencyDisplay::from_str(display).map_err(MoneyError::Config)?);
        Ok(self)
    }

    /// Fall back to the default locale when a requested one cannot be resolved
    pub fn locale_fallback(mut self, enabled: bool) -> Self {
        self.locale_fallback = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MoneyConfig> {
        let defaults = MoneyConfig::default();
        let config = MoneyConfig {
            default_locale: self.default_locale.unwrap_or(defaults.default_locale),
            display: self.display.unwrap_or(defaults.display),
            locale_fallback: self.locale_fallback.unwrap_or(defaults.locale_fallback),
        };
        config.validate()?;
        Ok(config)
    }
}
