//! Effect configuration - flat key/value bag with coercion helpers
//!
//! Configuration values arrive as loosely typed strings, numbers, and
//! booleans (query-string overrides, bundle `config.toml` files, caller
//! maps). The accessors on [`Config`] do the parsing and clamping
//! centrally so individual effects don't reinvent it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::PluginError;

/// A single configuration value
///
/// Untagged so that JSON/TOML values map directly: `true`, `42`,
/// `"#ff8800"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean value
    Bool(bool),
    /// Numeric value (integers are widened)
    Num(f64),
    /// String value
    Str(String),
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Num(v as f64)
    }
}

impl From<u32> for ConfigValue {
    fn from(v: u32) -> Self {
        Self::Num(f64::from(v))
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Num(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// An effect's configuration: declared defaults overlaid with caller
/// overrides.
///
/// The merge is shallow and per-key: override wins, non-overridden
/// defaults survive, keys absent from both sides stay absent. No type
/// validation happens at merge time; effects coerce the values they
/// read through the typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: HashMap<String, ConfigValue>,
}

impl Config {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set a key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Overlay `overrides` onto `defaults` and return the result
    pub fn merged(defaults: &Config, overrides: &Config) -> Config {
        let mut values = defaults.values.clone();
        for (key, value) in &overrides.values {
            values.insert(key.clone(), value.clone());
        }
        Config { values }
    }

    /// Load a config from a TOML file
    ///
    /// Returns an empty config if the file doesn't exist. A file that
    /// exists but doesn't parse, or that holds nested values, is an
    /// error.
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, PluginError> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| PluginError::Config(e.to_string()))?;

        let mut config = Self::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => ConfigValue::Str(s),
                toml::Value::Integer(i) => ConfigValue::Num(i as f64),
                toml::Value::Float(f) => ConfigValue::Num(f),
                toml::Value::Boolean(b) => ConfigValue::Bool(b),
                other => {
                    return Err(PluginError::Config(format!(
                        "unsupported value for key '{key}': {other}"
                    )));
                }
            };
            config.values.insert(key, value);
        }
        Ok(config)
    }

    /// Get the raw value for a key
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the config holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // ─── Coercing accessors ──────────────────────────────────────────

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ConfigValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a numeric value, parsing numeric strings
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(ConfigValue::Num(n)) => Some(*n),
            Some(ConfigValue::Str(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Get an integer clamped into `[min, max]`, or `fallback` when the
    /// key is missing or not numeric
    pub fn get_u32_clamped(&self, key: &str, min: u32, max: u32, fallback: u32) -> u32 {
        self.get_f64(key)
            .map(|v| v.clamp(f64::from(min), f64::from(max)) as u32)
            .unwrap_or(fallback)
    }

    /// Get a boolean value, accepting `"true"`/`"false"`/`"1"`/`"0"`
    /// strings
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(ConfigValue::Bool(b)) => Some(*b),
            Some(ConfigValue::Str(s)) => match s.trim() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get an RGB color from a `#rgb` or `#rrggbb` hex string
    pub fn get_color(&self, key: &str) -> Option<(u8, u8, u8)> {
        self.get_str(key).and_then(parse_hex_color)
    }
}

/// Parse `#rgb` or `#rrggbb` into an RGB triple
fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let r = digits.next()?? as u8;
            let g = digits.next()?? as u8;
            let b = digits.next()?? as u8;
            // Single digit expands: #f80 -> #ff8800
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}
