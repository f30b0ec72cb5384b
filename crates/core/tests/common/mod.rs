//! In-memory page host for driving the interceptor without a browser.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use smooth_anchor_core::{
    ANCHOR_SELECTOR, ClickEvent, ClickHandler, Error, FragmentId, HashElementSet, HistoryMode,
    Host, ReadyCallback, Result, ScrollRequest,
};

/// Handle to a node in the fake document (its insertion index).
pub type NodeRef = usize;

/// The selectors this fake understands.
#[derive(Debug, Clone, Copy)]
enum Selector {
    InPageAnchors,
    Anchors,
    AnchorsWithHref,
}

impl Selector {
    /// Rejects unknown selectors up front, as `querySelectorAll` throws on a
    /// bad selector even when the document is empty.
    fn parse(selector: &str) -> Result<Self> {
        match selector {
            ANCHOR_SELECTOR => Ok(Self::InPageAnchors),
            "a" => Ok(Self::Anchors),
            "a[href]" => Ok(Self::AnchorsWithHref),
            _ => Err(Error::query_failed(selector, "SyntaxError")),
        }
    }

    fn matches(self, node: &FakeNode) -> bool {
        let href = node.attrs.get("href");
        node.tag == "a"
            && match self {
                Self::InPageAnchors => href.is_some_and(|h| h.starts_with('#')),
                Self::Anchors => true,
                Self::AnchorsWithHref => href.is_some(),
            }
    }
}

#[derive(Debug, Clone)]
struct FakeNode {
    tag: String,
    id: Option<String>,
    attrs: HashMap<String, String>,
}

/// Click event that records whether the default was suppressed.
#[derive(Debug, Default)]
pub struct FakeClick {
    prevented: Cell<bool>,
}

impl FakeClick {
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl ClickEvent for FakeClick {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

/// Result of dispatching one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub default_prevented: bool,
    pub handlers_run: usize,
}

#[derive(Default)]
pub struct FakeDocument {
    nodes: RefCell<Vec<FakeNode>>,
    listeners: RefCell<Vec<(NodeRef, ClickHandler)>>,
    scrolls: RefCell<Vec<(NodeRef, ScrollRequest)>>,
    hash: RefCell<String>,
    history_len: Cell<usize>,
    ready: Cell<bool>,
    pending_ready: RefCell<Vec<ReadyCallback>>,
    refuse_history: Cell<bool>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            history_len: Cell::new(1),
            ..Self::default()
        }
    }

    /// A document whose structural content has already been parsed.
    pub fn loaded() -> Self {
        let doc = Self::new();
        doc.ready.set(true);
        doc
    }

    fn insert(&self, tag: &str, id: Option<&str>, href: Option<&str>) -> NodeRef {
        let mut attrs = HashMap::new();
        if let Some(href) = href {
            attrs.insert("href".to_string(), href.to_string());
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            attrs,
        });
        nodes.len().saturating_sub(1)
    }

    pub fn anchor(&self, href: &str) -> NodeRef {
        self.insert("a", None, Some(href))
    }

    pub fn bare_anchor(&self) -> NodeRef {
        self.insert("a", None, None)
    }

    pub fn section(&self, id: &str) -> NodeRef {
        self.insert("div", Some(id), None)
    }

    pub fn set_href(&self, node: NodeRef, href: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(node) {
            node.attrs.insert("href".to_string(), href.to_string());
        }
    }

    pub fn refuse_history(&self) {
        self.refuse_history.set(true);
    }

    /// Dispatches a click to every handler registered on `node`.
    pub fn click(&self, node: NodeRef) -> Dispatch {
        let event = FakeClick::default();
        let listeners = self.listeners.borrow();
        let mut handlers_run = 0_usize;
        for (_, handler) in listeners.iter().filter(|(target, _)| *target == node) {
            handler(&event);
            handlers_run = handlers_run.saturating_add(1);
        }
        Dispatch {
            default_prevented: event.default_prevented(),
            handlers_run,
        }
    }

    /// Signals that the structural content is ready.
    pub fn fire_content_ready(&self) {
        self.ready.set(true);
        let pending: Vec<ReadyCallback> = self.pending_ready.borrow_mut().drain(..).collect();
        for callback in pending {
            callback();
        }
    }

    pub fn listener_count(&self, node: NodeRef) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(target, _)| *target == node)
            .count()
    }

    pub fn scrolls(&self) -> Vec<(NodeRef, ScrollRequest)> {
        self.scrolls.borrow().clone()
    }

    pub fn hash(&self) -> String {
        self.hash.borrow().clone()
    }

    pub fn history_len(&self) -> usize {
        self.history_len.get()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

impl Host for FakeDocument {
    type Element = NodeRef;
    type Bound = HashElementSet<NodeRef>;

    fn element_set(&self) -> Self::Bound {
        HashElementSet::default()
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeRef>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| selector.matches(node))
            .map(|(index, _)| index)
            .collect())
    }

    fn attribute(&self, element: &NodeRef, name: &str) -> Option<String> {
        self.nodes
            .borrow()
            .get(*element)
            .and_then(|node| node.attrs.get(name).cloned())
    }

    fn listen_click(&self, element: &NodeRef, handler: ClickHandler) -> Result<()> {
        self.listeners.borrow_mut().push((*element, handler));
        Ok(())
    }

    fn element_by_id(&self, id: &str) -> Option<NodeRef> {
        if id.is_empty() {
            return None;
        }
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
    }

    fn scroll_into_view(&self, element: &NodeRef, request: ScrollRequest) {
        self.scrolls.borrow_mut().push((*element, request));
    }

    fn update_fragment(&self, fragment: &FragmentId, mode: HistoryMode) -> Result<()> {
        if self.refuse_history.get() {
            return Err(Error::history_failed(fragment.to_hash(), "SecurityError"));
        }
        match mode {
            HistoryMode::Replace => *self.hash.borrow_mut() = fragment.to_hash(),
            HistoryMode::Push => {
                *self.hash.borrow_mut() = fragment.to_hash();
                self.history_len.set(self.history_len.get().saturating_add(1));
            }
            HistoryMode::Off => {}
        }
        Ok(())
    }

    fn on_content_ready(&self, callback: ReadyCallback) -> Result<()> {
        if self.ready.get() {
            callback();
        } else {
            self.pending_ready.borrow_mut().push(callback);
        }
        Ok(())
    }
}
