//! Host-agnostic in-page anchor interception
//!
//! Binds a click handler to every in-page hyperlink (`href` starting with
//! `#`). A click suppresses the default jump, resolves the fragment to an
//! element, smooth-scrolls it into view and rewrites the address fragment
//! without adding a history entry. A missing target is a silent no-op.
//!
//! ## Module Structure
//! - `config`: interceptor configuration and scroll/history modes
//! - `error`: error types
//! - `fragment`: fragment identifiers parsed from hrefs
//! - `host`: capabilities a page host must provide
//! - `interceptor`: handler binding and click resolution

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fragment;
pub mod host;
pub mod interceptor;

pub use config::{
    ANCHOR_SELECTOR, HistoryMode, InterceptorConfig, ScrollAlignment, ScrollBehavior,
    ScrollRequest,
};
pub use error::{Error, Result};
pub use fragment::FragmentId;
pub use host::{ClickEvent, ClickHandler, ElementSet, HashElementSet, Host, ReadyCallback};
pub use interceptor::{AnchorScroller, ClickOutcome, InitReport, Interceptor, install};
