//! Locale support for currency formatting
//!
//! This module handles loading and managing locale-specific settings
//! for currency formatting based on BCP-47 locale tags.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use thiserror::Error;
use tracing::{debug, warn};

use crate::parser::parse_currency_pattern;
use crate::types::LocaleSettings;

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// A locale entry: the tag as written in the data plus its settings
#[derive(Debug, Clone)]
struct LocaleEntry {
    tag: String,
    settings: LocaleSettings,
}

/// Represents a locale manager that provides access to locale-specific settings
#[derive(Debug, Clone, Default)]
pub struct LocaleManager {
    base: LocaleSettings,
    // Keyed by lower-cased tag
    locales: HashMap<String, LocaleEntry>,
}

// Global singleton for the embedded locale data
static LOCALE_MANAGER: OnceLock<Arc<LocaleManager>> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the embedded locale data
    fn new() -> Self {
        let mut manager = Self::default();

        // Parse and load the built-in locale data
        if let Err(e) = manager.load_embedded_data() {
            // Continue with whatever was loaded; lookups report NotFound
            warn!("Failed to load embedded locale data: {}", e);
        }

        manager
    }

    /// Load the embedded locale data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)
    }

    /// Get the shared manager holding the embedded locale data
    pub fn builtin() -> Arc<Self> {
        LOCALE_MANAGER
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    /// Layer extra locale data over the embedded set
    ///
    /// The TOML uses the same schema as the embedded data: an optional `[base]` table
    /// and one table per locale tag. Existing locales are updated in place.
    pub fn with_overrides(toml_str: &str) -> Result<Self> {
        let mut manager = Self::builtin().as_ref().clone();
        manager.parse_locale_settings(toml_str)?;
        Ok(manager)
    }

    /// Parse the locale settings TOML data
    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        // Base settings first, every new locale starts from them
        if let Some(base) = table.get("base") {
            let mut base_settings = self.base.clone();
            apply_locale_settings(&mut base_settings, base)?;
            self.base = base_settings;
        }

        // Language tags before regional tags so parents are in place
        let mut locale_ids: Vec<&String> = table.keys().filter(|k| *k != "base").collect();
        locale_ids.sort_by_key(|id| id.matches(['-', '_']).count());

        for locale_id in locale_ids {
            if !is_well_formed_tag(locale_id) {
                return Err(LocaleError::ParseError(format!(
                    "Malformed locale tag: {locale_id}"
                )));
            }
            let key = normalize_tag(locale_id);

            let mut locale_settings = match self.locales.get(&key) {
                Some(existing) => existing.settings.clone(),
                None => self.parent_settings(&key),
            };

            // Apply locale-specific settings over the inherited ones
            apply_locale_settings(&mut locale_settings, &table[locale_id.as_str()])?;

            self.locales.insert(
                key,
                LocaleEntry {
                    tag: canonical_tag(locale_id),
                    settings: locale_settings,
                },
            );
        }

        Ok(())
    }

    /// Settings of the closest loaded ancestor, or the base settings
    fn parent_settings(&self, key: &str) -> LocaleSettings {
        let mut candidate = key;
        while let Some(idx) = candidate.rfind('-') {
            candidate = &candidate[..idx];
            if let Some(entry) = self.locales.get(candidate) {
                return entry.settings.clone();
            }
        }
        self.base.clone()
    }

    /// Resolve a BCP-47 tag to the closest loaded locale
    ///
    /// Subtags are dropped from the right until a match is found, so `de-AT-u-nu-latn`
    /// resolves to `de-AT`, and `pt-AO` to `pt`.
    pub fn resolve(&self, tag: &str) -> Result<(&str, &LocaleSettings)> {
        if !is_well_formed_tag(tag) {
            return Err(LocaleError::NotFound(tag.to_string()));
        }

        let key = normalize_tag(tag);
        let mut candidate = key.as_str();
        loop {
            if let Some(entry) = self.locales.get(candidate) {
                if candidate != key {
                    debug!("Locale {} resolved to {}", tag, entry.tag);
                }
                return Ok((entry.tag.as_str(), &entry.settings));
            }
            match candidate.rfind('-') {
                Some(idx) => candidate = &candidate[..idx],
                None => return Err(LocaleError::NotFound(tag.to_string())),
            }
        }
    }

    /// Get locale settings by exact locale tag (e.g., "en-US", "pt_BR")
    pub fn get_locale_settings(&self, locale_id: &str) -> Option<&LocaleSettings> {
        self.locales
            .get(&normalize_tag(locale_id))
            .map(|entry| &entry.settings)
    }

    /// List all loaded locale tags
    pub fn available_locales(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.locales.values().map(|e| e.tag.clone()).collect();
        tags.sort();
        tags
    }
}

/// Apply the keys of one TOML locale table to a LocaleSettings object
fn apply_locale_settings(settings: &mut LocaleSettings, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

    // Decimal separator
    if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
        settings.decimal_separator = single_char(decimal, "decimal")?;
    }

    // Grouping separator
    if let Some(group) = table.get("group").and_then(|v| v.as_str()) {
        settings.group_separator = single_char(group, "group")?;
    }

    // Currency pattern
    if let Some(pattern) = table.get("pattern").and_then(|v| v.as_str()) {
        settings.currency_pattern = parse_currency_pattern(pattern)
            .map_err(|e| LocaleError::ParseError(format!("Invalid pattern '{pattern}': {e}")))?;
    }

    // Minimum grouping digits
    if let Some(min_grouping) = table.get("min_grouping").and_then(|v| v.as_integer()) {
        settings.min_grouping = u8::try_from(min_grouping)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                LocaleError::ParseError(format!("Invalid min_grouping: {min_grouping}"))
            })?;
    }

    // Currency symbol overrides
    if let Some(symbols) = table.get("symbols") {
        let symbols = symbols
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("symbols is not a table".to_string()))?;
        for (code, symbol) in symbols {
            let symbol = symbol.as_str().ok_or_else(|| {
                LocaleError::ParseError(format!("Symbol for {code} is not a string"))
            })?;
            settings.symbols.insert(code.clone(), symbol.to_string());
        }
    }

    Ok(())
}

fn single_char(value: &str, key: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LocaleError::ParseError(format!(
            "{key} must be a single character, got '{value}'"
        ))),
    }
}

/// Lower-case a tag and use `-` as the subtag separator
fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

/// `pt_br` → `pt-BR`, `zh-hant-tw` → `zh-Hant-TW`
fn canonical_tag(tag: &str) -> String {
    normalize_tag(tag)
        .split('-')
        .enumerate()
        .map(|(i, subtag)| match (i, subtag.len()) {
            (0, _) => subtag.to_string(),
            (_, 2) if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
                subtag.to_ascii_uppercase()
            }
            (_, 4) if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
                let mut script = subtag.to_string();
                script[..1].make_ascii_uppercase();
                script
            }
            _ => subtag.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Check the shape of a BCP-47 tag: a 2-8 letter language, then 1-8 alphanumeric subtags
pub fn is_well_formed_tag(tag: &str) -> bool {
    let normalized = normalize_tag(tag);
    let mut subtags = normalized.split('-');
    let language_ok = subtags.next().is_some_and(|language| {
        (2..=8).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic())
    });
    language_ok
        && subtags.all(|subtag| {
            (1..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

/// Get the embedded locale settings by locale tag (e.g., "en-US", "zh-CN")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleManager::builtin()
        .get_locale_settings(locale_id)
        .cloned()
}

/// List all embedded locale tags
pub fn list_available_locales() -> Vec<String> {
    LocaleManager::builtin().available_locales()
}
