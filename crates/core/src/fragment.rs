//! Fragment identifiers derived from in-page anchor hrefs.

use std::fmt;

/// Marker that starts an in-page href.
pub const FRAGMENT_MARKER: char = '#';

/// The identifier part of an in-page href, without the leading `#`.
///
/// May be empty (`href="#"`); an empty id simply never resolves to a target.
///
/// # Examples
///
/// ```
/// use smooth_anchor_core::FragmentId;
///
/// let id = FragmentId::from_href("#section-2");
/// assert_eq!(id.as_ref().map(FragmentId::as_str), Some("section-2"));
/// assert!(FragmentId::from_href("https://example.com").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentId(String);

impl FragmentId {
    /// Strips exactly one leading `#` from `href`.
    ///
    /// Returns `None` when `href` is not an in-page link.
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        href.strip_prefix(FRAGMENT_MARKER)
            .map(|id| Self(id.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the fragment as it appears in the address bar.
    #[must_use]
    pub fn to_hash(&self) -> String {
        format!("{FRAGMENT_MARKER}{}", self.0)
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}

/// True when `href` points inside the current document.
#[must_use]
pub fn is_fragment_href(href: &str) -> bool {
    href.starts_with(FRAGMENT_MARKER)
}
