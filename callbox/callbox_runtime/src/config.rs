//! Configuration for the Callbox loader.
//!
//! Handles the loader's own knobs, as opposed to [`WidgetSettings`], which
//! belong to the embedding caller and pass through to the component.
//!
//! [`WidgetSettings`]: callbox_core::types::WidgetSettings

use serde::{Deserialize, Serialize};

use callbox_core::error::{ConfigError, Result};

/// Stylesheet injected into every isolation scope.
///
/// This is the widget's packaged baseline; the `:host` reset is what keeps
/// host-page cascade values from reaching into the scope.
pub const DEFAULT_STYLE_TEXT: &str = "\
:host { all: initial; }\n\
.callbox-modal { position: fixed; bottom: 24px; right: 24px; font-family: sans-serif; }\n\
.callbox-modal button { cursor: pointer; }\n";

fn default_style_text() -> String {
    DEFAULT_STYLE_TEXT.to_string()
}

/// Loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Stylesheet text injected into each scope at mount time
    #[serde(default = "default_style_text")]
    pub style_text: String,

    /// Whether `mount` requires the caller to supply a public API key
    #[serde(default)]
    pub enforce_identity: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            style_text: default_style_text(),
            enforce_identity: false,
        }
    }
}

impl LoaderConfig {
    /// Load a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|err| ConfigError::ParseFailed(err.to_string()).into())
    }

    /// Load a configuration from a JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|err| ConfigError::ParseFailed(err.to_string()).into())
    }
}
