//! Host capabilities consumed by the interceptor
//!
//! The browser provides these through the DOM; tests provide them with an
//! in-memory document. Everything runs on one cooperative thread, so nothing
//! here needs `Send` or `Sync`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;

use crate::config::{HistoryMode, ScrollRequest};
use crate::error::Result;
use crate::fragment::FragmentId;

/// The click event delivered to a registered handler.
pub trait ClickEvent {
    /// Suppresses the host's default navigation for this event.
    fn prevent_default(&self);
}

/// Callback registered for clicks on one anchor.
pub type ClickHandler = Box<dyn Fn(&dyn ClickEvent)>;

/// One-shot callback for the content-ready notification.
pub type ReadyCallback = Box<dyn FnOnce()>;

/// Set of elements that already carry a click handler.
pub trait ElementSet<E> {
    fn contains(&self, element: &E) -> bool;
    fn insert(&self, element: &E);
}

/// [`ElementSet`] for hosts whose element handles hash by node identity.
#[derive(Debug)]
pub struct HashElementSet<E>(RefCell<HashSet<E>>);

impl<E> Default for HashElementSet<E> {
    fn default() -> Self {
        Self(RefCell::new(HashSet::new()))
    }
}

impl<E: Clone + Eq + Hash> ElementSet<E> for HashElementSet<E> {
    fn contains(&self, element: &E) -> bool {
        self.0.borrow().contains(element)
    }

    fn insert(&self, element: &E) {
        self.0.borrow_mut().insert(element.clone());
    }
}

/// Page document and viewport operations.
pub trait Host {
    /// Element handle.
    type Element: Clone + 'static;

    /// Bookkeeping for bound anchors. Hosts with garbage-collected nodes
    /// hold them weakly.
    type Bound: ElementSet<Self::Element> + 'static;

    /// A fresh, empty set for one interceptor.
    fn element_set(&self) -> Self::Bound;

    /// All elements matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns `Error::QueryFailed` if the host rejects the selector.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Reads an attribute; `None` when absent.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Registers `handler` for click interactions on `element`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ListenerFailed` if the host refuses the listener.
    fn listen_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<()>;

    /// Zero-or-one element whose id equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Fire-and-forget scroll of `element` into view.
    fn scroll_into_view(&self, element: &Self::Element, request: ScrollRequest);

    /// Changes the visible fragment without reloading or jumping.
    ///
    /// # Errors
    ///
    /// Returns `Error::HistoryFailed` if the host refuses the update.
    fn update_fragment(&self, fragment: &FragmentId, mode: HistoryMode) -> Result<()>;

    /// Runs `callback` once the structural content is available.
    ///
    /// Hosts whose content is already available run it immediately.
    ///
    /// # Errors
    ///
    /// Returns `Error::ListenerFailed` if the notification cannot be observed.
    fn on_content_ready(&self, callback: ReadyCallback) -> Result<()>;
}
