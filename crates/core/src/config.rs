//! Interceptor configuration
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock behavior: smooth, top-aligned scrolling with the address
//! fragment replaced in place.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Selector for in-page hyperlinks.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Animated vs instant viewport movement, as the host scroll API names it.
///
/// Anchor clicks always request `Smooth`; pages cannot configure it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Which edge of the target lines up with the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlignment {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// How the visible address fragment changes after a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Rewrite the current entry; back navigation cannot undo it.
    #[default]
    Replace,
    /// Append a new history entry.
    Push,
    /// Leave the address untouched.
    Off,
}

/// Parameters handed to the host's scroll capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRequest {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlignment,
}

/// Configuration for the anchor interceptor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterceptorConfig {
    /// Structural selector used to enumerate candidate anchors
    pub selector: String,
    pub block: ScrollAlignment,
    pub history: HistoryMode,
    /// Log filter directive for hosts that install a subscriber
    pub log_level: String,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            selector: ANCHOR_SELECTOR.to_string(),
            block: ScrollAlignment::default(),
            history: HistoryMode::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl InterceptorConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for malformed JSON, unknown fields or
    /// enum values, and for a blank selector.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` when the selector is blank.
    pub fn validate(self) -> Result<Self> {
        if self.selector.trim().is_empty() {
            return Err(Error::invalid_config("selector must not be empty"));
        }
        Ok(self)
    }

    #[must_use]
    pub const fn scroll_request(&self) -> ScrollRequest {
        ScrollRequest {
            behavior: ScrollBehavior::Smooth,
            block: self.block,
        }
    }
}
