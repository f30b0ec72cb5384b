//! Browser implementation of the page host
//!
//! Maps each host capability onto the DOM through web-sys. All fallible DOM
//! calls return `Result`s; JS exceptions are rendered with `{:?}` into the
//! error reason.

use js_sys::{Object, WeakSet};
use smooth_anchor_core::{
    ClickEvent, ClickHandler, ElementSet, Error, FragmentId, HistoryMode, Host, ReadyCallback,
    Result, ScrollAlignment, ScrollBehavior, ScrollRequest,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

/// A DOM click event seen through the host-agnostic [`ClickEvent`] trait.
#[derive(Debug, Clone)]
pub struct DomClickEvent(pub Event);

impl ClickEvent for DomClickEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Bound anchors held in a JS `WeakSet`: constant-time membership, and
/// anchors removed from the page can still be collected.
#[derive(Debug, Clone)]
pub struct WeakElementSet(WeakSet);

impl Default for WeakElementSet {
    fn default() -> Self {
        Self(WeakSet::new())
    }
}

impl ElementSet<Element> for WeakElementSet {
    fn contains(&self, element: &Element) -> bool {
        let object: &Object = element.as_ref();
        self.0.has(object)
    }

    fn insert(&self, element: &Element) {
        let object: &Object = element.as_ref();
        self.0.add(object);
    }
}

/// `document.readyState` value while the parser is still running.
const READY_STATE_LOADING: &str = "loading";

fn is_still_parsing(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// The current browser page.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Binds to the global window and its document.
    ///
    /// # Errors
    ///
    /// Returns `Error::HostUnavailable` outside a browser context.
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::host_unavailable("window"))?;
        let document = window
            .document()
            .ok_or_else(|| Error::host_unavailable("document"))?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

fn js_reason(value: &JsValue) -> String {
    format!("{value:?}")
}

const fn dom_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    }
}

const fn dom_block(block: ScrollAlignment) -> ScrollLogicalPosition {
    match block {
        ScrollAlignment::Start => ScrollLogicalPosition::Start,
        ScrollAlignment::Center => ScrollLogicalPosition::Center,
        ScrollAlignment::End => ScrollLogicalPosition::End,
        ScrollAlignment::Nearest => ScrollLogicalPosition::Nearest,
    }
}

impl Host for WebHost {
    type Element = Element;
    type Bound = WeakElementSet;

    fn element_set(&self) -> Self::Bound {
        WeakElementSet::default()
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| Error::query_failed(selector, js_reason(&e)))?;

        Ok((0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn listen_click(&self, element: &Element, handler: ClickHandler) -> Result<()> {
        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            handler(&DomClickEvent(event));
        });

        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| Error::listener_failed(js_reason(&e)))?;

        // Lives as long as the page
        closure.forget();

        Ok(())
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&self, element: &Element, request: ScrollRequest) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(dom_behavior(request.behavior));
        options.set_block(dom_block(request.block));
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn update_fragment(&self, fragment: &FragmentId, mode: HistoryMode) -> Result<()> {
        let hash = fragment.to_hash();
        let refused = |e: JsValue| Error::history_failed(hash.as_str(), js_reason(&e));

        match mode {
            HistoryMode::Off => Ok(()),
            HistoryMode::Replace => self
                .window
                .history()
                .map_err(refused)?
                .replace_state_with_url(&JsValue::NULL, "", Some(&hash))
                .map_err(refused),
            HistoryMode::Push => self
                .window
                .history()
                .map_err(refused)?
                .push_state_with_url(&JsValue::NULL, "", Some(&hash))
                .map_err(refused),
        }
    }

    fn on_content_ready(&self, callback: ReadyCallback) -> Result<()> {
        if !is_still_parsing(&self.document.ready_state()) {
            callback();
            return Ok(());
        }

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let listener = Closure::once_into_js(move || callback());

        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                listener.unchecked_ref(),
                &options,
            )
            .map_err(|e| Error::listener_failed(js_reason(&e)))
    }
}
