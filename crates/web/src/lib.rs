//! Browser smooth scrolling for in-page anchor links
//!
//! Compiled to WASM and loaded by documentation pages. On start it binds a
//! click handler to every `a[href^="#"]` once the DOM is parsed; clicks
//! smooth-scroll to the target and rewrite the address fragment in place.
//!
//! ## Module Structure
//! - `host`: web-sys implementation of the core `Host` trait
//! - `page_config`: JSON config block read from the page
//! - `logging`: tracing subscriber that writes to the browser console

#![forbid(unsafe_code)]

pub mod host;
pub mod logging;
pub mod page_config;

use std::rc::Rc;

use smooth_anchor_core::install;
use wasm_bindgen::prelude::*;

pub use host::{DomClickEvent, WebHost, WeakElementSet};
pub use page_config::{CONFIG_ELEMENT_ID, load_page_config, read_page_config};

/// WASM entry point, run when the module is instantiated.
///
/// Config, logging and anchor binding all wait for the content-ready
/// notification, so a config block later in the page is already parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let installed = WebHost::new().and_then(|host| install(Rc::new(host), load_page_config));
    if let Err(e) = installed {
        web_sys::console::error_1(&format!("smooth-anchor: {e}").into());
    }
}
