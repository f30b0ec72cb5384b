//! Anchor interception: binding click handlers and resolving clicks
//!
//! [`Interceptor::initialize`] enumerates in-page anchors and binds one
//! handler per anchor. Each handler delegates to [`AnchorScroller`], which is
//! stateless: a click maps to "scroll + fragment update" or to a no-op.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::config::InterceptorConfig;
use crate::error::Result;
use crate::fragment::{FragmentId, is_fragment_href};
use crate::host::{ClickEvent, ClickHandler, ElementSet, Host};

const HREF: &str = "href";

/// What a single click resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The target was scrolled into view and the fragment updated.
    Scrolled { fragment: FragmentId },
    /// No element carries the fragment's id.
    TargetMissing { fragment: FragmentId },
    /// The anchor's href no longer points inside the page.
    NoFragment,
}

/// Counts from one initialization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitReport {
    /// Elements returned by the selector query
    pub matched: usize,
    /// Handlers registered in this pass
    pub registered: usize,
    /// Anchors bound by an earlier pass
    pub already_bound: usize,
    /// Matches whose href is not an in-page link
    pub skipped: usize,
}

/// Resolves anchor clicks against the host document.
pub struct AnchorScroller<H: Host> {
    host: Rc<H>,
    config: Rc<InterceptorConfig>,
}

impl<H: Host> Clone for AnchorScroller<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            config: Rc::clone(&self.config),
        }
    }
}

impl<H: Host> AnchorScroller<H> {
    #[must_use]
    pub const fn new(host: Rc<H>, config: Rc<InterceptorConfig>) -> Self {
        Self { host, config }
    }

    /// Handles one click on `anchor`.
    ///
    /// Default navigation is always suppressed. The href is read at click
    /// time, so an anchor rewritten after binding resolves its new target.
    ///
    /// # Errors
    ///
    /// Returns `Error::HistoryFailed` when the fragment update is refused;
    /// the scroll has already been requested at that point.
    pub fn handle_click(
        &self,
        event: &dyn ClickEvent,
        anchor: &H::Element,
    ) -> Result<ClickOutcome> {
        event.prevent_default();

        let Some(fragment) = self
            .host
            .attribute(anchor, HREF)
            .and_then(|href| FragmentId::from_href(&href))
        else {
            return Ok(ClickOutcome::NoFragment);
        };

        let Some(target) = self.host.element_by_id(fragment.as_str()) else {
            return Ok(ClickOutcome::TargetMissing { fragment });
        };

        self.host.scroll_into_view(&target, self.config.scroll_request());
        self.host.update_fragment(&fragment, self.config.history)?;

        Ok(ClickOutcome::Scrolled { fragment })
    }
}

/// Binds click handlers to in-page anchors.
///
/// Re-running [`initialize`](Self::initialize) only binds anchors that were
/// not bound before, so a handler never fires twice per click.
pub struct Interceptor<H: Host> {
    scroller: AnchorScroller<H>,
    bound: H::Bound,
    bound_count: Cell<usize>,
}

impl<H: Host + 'static> Interceptor<H> {
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `config` fails validation.
    pub fn new(host: Rc<H>, config: InterceptorConfig) -> Result<Self> {
        let config = Rc::new(config.validate()?);
        Ok(Self {
            bound: host.element_set(),
            bound_count: Cell::new(0),
            scroller: AnchorScroller::new(host, config),
        })
    }

    #[must_use]
    pub const fn scroller(&self) -> &AnchorScroller<H> {
        &self.scroller
    }

    /// Number of anchors carrying a handler from this interceptor.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.bound_count.get()
    }

    /// Enumerates in-page anchors and binds a click handler to each new one.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector query or a listener registration
    /// fails. Anchors bound before the failure stay bound.
    pub fn initialize(&self) -> Result<InitReport> {
        let host = &self.scroller.host;
        let selector = self.scroller.config.selector.as_str();
        let candidates = host.query_all(selector)?;

        let mut report = InitReport {
            matched: candidates.len(),
            ..InitReport::default()
        };

        for anchor in candidates {
            let is_in_page = host
                .attribute(&anchor, HREF)
                .is_some_and(|href| is_fragment_href(&href));
            if !is_in_page {
                report.skipped = report.skipped.saturating_add(1);
                continue;
            }
            if self.bound.contains(&anchor) {
                report.already_bound = report.already_bound.saturating_add(1);
                continue;
            }

            host.listen_click(&anchor, self.click_handler(anchor.clone()))?;
            self.bound.insert(&anchor);
            self.bound_count.set(self.bound_count.get().saturating_add(1));
            report.registered = report.registered.saturating_add(1);
        }

        debug!(
            selector,
            matched = report.matched,
            registered = report.registered,
            already_bound = report.already_bound,
            skipped = report.skipped,
            "anchor interception initialized"
        );

        Ok(report)
    }

    fn click_handler(&self, anchor: H::Element) -> ClickHandler {
        let scroller = self.scroller.clone();
        Box::new(move |event: &dyn ClickEvent| {
            match scroller.handle_click(event, &anchor) {
                Ok(outcome) => trace!(?outcome, "anchor click handled"),
                Err(e) => warn!(error = %e, "anchor click left address unchanged"),
            }
        })
    }
}

/// Initializes a new interceptor once the host's content is ready.
///
/// `load_config` runs inside the ready callback, so configuration embedded
/// anywhere in the page has been parsed by then.
///
/// # Errors
///
/// Returns an error if the host cannot observe the content-ready
/// notification. An invalid config or a failed initialization is logged at
/// `warn`.
pub fn install<H, F>(host: Rc<H>, load_config: F) -> Result<()>
where
    H: Host + 'static,
    F: FnOnce(&H) -> InterceptorConfig + 'static,
{
    let ready_host = Rc::clone(&host);
    host.on_content_ready(Box::new(move || {
        let config = load_config(&ready_host);
        let initialized =
            Interceptor::new(ready_host, config).and_then(|interceptor| interceptor.initialize());
        if let Err(e) = initialized {
            warn!(error = %e, "anchor interception failed to initialize");
        }
    }))
}
