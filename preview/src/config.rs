//! Preview configuration: CDN engines, visibility tuning, and card scale.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
pub const DEFAULT_REACT_CDN: &str = "https://unpkg.com/react@18/umd/react.development.js";
pub const DEFAULT_REACT_DOM_CDN: &str = "https://unpkg.com/react-dom@18/umd/react-dom.development.js";
pub const DEFAULT_BABEL_CDN: &str = "https://unpkg.com/@babel/standalone/babel.min.js";
pub const DEFAULT_ROOT_MARGIN: &str = "200px";
pub const DEFAULT_THRESHOLD: f64 = 0.01;
pub const DEFAULT_SCALE: f64 = 0.55;

/// Error returned when configuration values are malformed or out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got `{value}`")]
    NotANumber { var: &'static str, value: String },
    #[error("scale must be in (0, 1], got {0}")]
    ScaleOutOfRange(f64),
    #[error("threshold must be in [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Utility-CSS engine loaded in the head of tailwind documents.
    pub tailwind_cdn: String,
    /// UI runtime loaded by react documents.
    pub react_cdn: String,
    /// DOM renderer loaded by react documents.
    pub react_dom_cdn: String,
    /// In-browser JSX transpiler loaded by react documents.
    pub babel_cdn: String,
    /// `IntersectionObserver` root margin; previews mount this far before entering view.
    pub root_margin: String,
    /// Minimal visible fraction that counts as intersecting.
    pub threshold: f64,
    /// Visual scale-down applied to the frame wrapper.
    pub scale: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            tailwind_cdn: DEFAULT_TAILWIND_CDN.to_owned(),
            react_cdn: DEFAULT_REACT_CDN.to_owned(),
            react_dom_cdn: DEFAULT_REACT_DOM_CDN.to_owned(),
            babel_cdn: DEFAULT_BABEL_CDN.to_owned(),
            root_margin: DEFAULT_ROOT_MARGIN.to_owned(),
            threshold: DEFAULT_THRESHOLD,
            scale: DEFAULT_SCALE,
        }
    }
}

impl PreviewConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `PREVIEW_TAILWIND_CDN`, `PREVIEW_REACT_CDN`, `PREVIEW_REACT_DOM_CDN`, `PREVIEW_BABEL_CDN`
    /// - `PREVIEW_ROOT_MARGIN`: default `200px`
    /// - `PREVIEW_THRESHOLD`: default `0.01`
    /// - `PREVIEW_SCALE`: default `0.55`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable does not parse or a
    /// value is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (env, tests, query params).
    ///
    /// # Errors
    ///
    /// Same as [`PreviewConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()).unwrap_or(default)
        };
        let config = Self {
            tailwind_cdn: text("PREVIEW_TAILWIND_CDN", defaults.tailwind_cdn),
            react_cdn: text("PREVIEW_REACT_CDN", defaults.react_cdn),
            react_dom_cdn: text("PREVIEW_REACT_DOM_CDN", defaults.react_dom_cdn),
            babel_cdn: text("PREVIEW_BABEL_CDN", defaults.babel_cdn),
            root_margin: text("PREVIEW_ROOT_MARGIN", defaults.root_margin),
            threshold: parse_f64("PREVIEW_THRESHOLD", lookup("PREVIEW_THRESHOLD"), defaults.threshold)?,
            scale: parse_f64("PREVIEW_SCALE", lookup("PREVIEW_SCALE"), defaults.scale)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range or empty value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(ConfigError::ScaleOutOfRange(self.scale));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        for (var, value) in [
            ("tailwind_cdn", &self.tailwind_cdn),
            ("react_cdn", &self.react_cdn),
            ("react_dom_cdn", &self.react_dom_cdn),
            ("babel_cdn", &self.babel_cdn),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { var });
            }
        }
        Ok(())
    }
}

fn parse_f64(var: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<f64>()
            .map_err(|_| ConfigError::NotANumber { var, value: value.to_owned() }),
    }
}
