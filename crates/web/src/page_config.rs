//! Per-page configuration embedded in the document
//!
//! A page opts into non-default behavior with a JSON script block:
//!
//! ```html
//! <script type="application/json" id="smooth-anchor-config">
//!   { "history": "push", "block": "center", "log_level": "debug" }
//! </script>
//! ```

use smooth_anchor_core::{InterceptorConfig, Result};
use tracing::warn;
use web_sys::Document;

use crate::host::WebHost;
use crate::logging;

/// Id of the element carrying the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "smooth-anchor-config";

/// Reads the page's config block.
///
/// Returns `Ok(None)` when the page carries no config element.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` when the block is present but does not
/// parse or validate.
pub fn read_page_config(document: &Document) -> Result<Option<InterceptorConfig>> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .map(|text| InterceptorConfig::from_json(&text))
        .transpose()
}

/// Reads the page config, installs console logging at its level, and falls
/// back to defaults (with a warning) when the block is invalid.
///
/// Call once the document is parsed; earlier, a block in the body is not
/// there yet.
pub fn load_page_config(host: &WebHost) -> InterceptorConfig {
    match read_page_config(host.document()) {
        Ok(config) => {
            let config = config.unwrap_or_default();
            logging::init(&config.log_level);
            config
        }
        Err(e) => {
            let config = InterceptorConfig::default();
            logging::init(&config.log_level);
            warn!(error = %e, "ignoring page config, using defaults");
            config
        }
    }
}
