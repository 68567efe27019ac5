//! Caller-supplied widget configuration.
//!
//! The settings object is built by the host page and forwarded, unmodified,
//! into the root component at mount time. The loader back-fills no defaults;
//! if the component has defaults, they are the component's responsibility.
//! Field names follow the embed surface the host page sees, so the serde
//! representation is camelCase.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Presentation and identity settings for a widget instance.
///
/// All fields are optional at this layer. `api_public_key` becomes required
/// only when the loader is configured to enforce caller identity, in which
/// case [`WidgetSettings::validate_identity`] is consulted before mounting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSettings {
    /// Primary text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    /// Accent color for interactive elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,

    /// Modal title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal_title: Option<String>,

    /// Modal body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal_content: Option<String>,

    /// Label for the button that starts a call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_call_button_text: Option<String>,

    /// Label for the button that ends a call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_call_button_text: Option<String>,

    /// Identifier of the assistant handling the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,

    /// Public API key identifying the embedding caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_public_key: Option<String>,
}

impl WidgetSettings {
    /// Check whether no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check whether the caller supplied an identity key.
    pub fn has_identity(&self) -> bool {
        self.api_public_key.is_some()
    }

    /// Validate the identity field.
    ///
    /// Used only by the identity-enforcing loader configuration; the default
    /// configuration passes settings through unvalidated.
    pub fn validate_identity(&self) -> Result<(), ConfigError> {
        if self.has_identity() {
            Ok(())
        } else {
            Err(ConfigError::MissingApiKey)
        }
    }
}
