//! Imperative side of the components: attaching a shadow root to a host
//! element and filling it with a style element and an insertion point.

use leptos::prelude::document;
use shadow_core::{Advance, AttachError, Lifecycle, ShadowMode};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlStyleElement, ShadowRoot, ShadowRootInit, ShadowRootMode};

use crate::error::{BoundaryError, js_message};

/// How children reach the inside of the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A `<slot>` that projects the host's light-DOM children
    Slot,
    /// An empty `<div>` that portaled children are mounted into
    ContentHolder,
}

/// A shadow root attached by one of the components, plus the nodes it owns
pub struct ShadowBoundary {
    style: HtmlStyleElement,
    content: Option<Element>,
}

impl ShadowBoundary {
    /// Attach a shadow root to `host` and populate it.
    ///
    /// Every node is created before `attachShadow` runs, so failures up to
    /// that call are [`AttachError::Retry`]. Once the root exists, a failure
    /// is [`AttachError::Abandon`] and the host is never attached to again.
    /// A shadow root already exposed by `host` is not ours and is abandoned
    /// without calling `attachShadow`.
    pub fn attach(
        host: &Element,
        mode: ShadowMode,
        styles: &str,
        insertion: Insertion,
    ) -> Result<Self, AttachError<BoundaryError>> {
        if host.shadow_root().is_some() {
            return Err(AttachError::Abandon(BoundaryError::ForeignShadowRoot));
        }

        let style: HtmlStyleElement = create_element("style").map_err(AttachError::Retry)?.unchecked_into();
        style.set_text_content(Some(styles));
        let marker = match insertion {
            Insertion::Slot => create_element("slot"),
            Insertion::ContentHolder => create_element("div"),
        }
        .map_err(AttachError::Retry)?;

        let root = host
            .attach_shadow(&ShadowRootInit::new(root_mode(mode)))
            .map_err(|err| AttachError::Retry(BoundaryError::Attach(js_message(&err))))?;

        append(&root, &style).map_err(AttachError::Abandon)?;
        append(&root, &marker).map_err(AttachError::Abandon)?;

        let content = (insertion == Insertion::ContentHolder).then_some(marker);
        Ok(Self { style, content })
    }

    /// The portal target, present for [`Insertion::ContentHolder`] only
    pub fn content_holder(&self) -> Option<&Element> {
        self.content.as_ref()
    }

    /// Replace the whole style text
    pub fn set_styles(&self, styles: &str) {
        self.style.set_text_content(Some(styles));
    }
}

/// Run one effect pass of `lifecycle` against `host`.
///
/// Returns true when this pass attached the boundary. Failures are logged;
/// a host whose root was attached but not populated is left alone from then on.
pub fn reconcile(
    lifecycle: &mut Lifecycle<ShadowBoundary>,
    host: &Element,
    mode: ShadowMode,
    styles: Option<&str>,
    insertion: Insertion,
) -> bool {
    if let Some(attached) = lifecycle.mode().filter(|attached| *attached != mode) {
        log::warn!("shadow root mode is fixed once attached; keeping {attached}, ignoring {mode}");
    }

    let outcome = lifecycle.advance(
        mode,
        styles,
        |mode, text| ShadowBoundary::attach(host, mode, text, insertion),
        |boundary, text| boundary.set_styles(text),
    );

    match outcome {
        Ok(Advance::Attached) => {
            log::debug!("attached {mode} shadow root to <{}>", host.tag_name().to_lowercase());
            true
        }
        Ok(Advance::Restyled) => {
            log::debug!("rewrote shadow root styles");
            false
        }
        Ok(Advance::Unchanged) => {
            log::trace!("shadow root setup already settled, nothing to do");
            false
        }
        Err(err) if lifecycle.is_abandoned() => {
            log::warn!("giving up on shadow root setup for this host: {err}");
            false
        }
        Err(err) => {
            log::warn!("skipping shadow root setup: {err}");
            false
        }
    }
}

fn root_mode(mode: ShadowMode) -> ShadowRootMode {
    match mode {
        ShadowMode::Open => ShadowRootMode::Open,
        ShadowMode::Closed => ShadowRootMode::Closed,
    }
}

fn create_element(tag: &'static str) -> Result<Element, BoundaryError> {
    document()
        .create_element(tag)
        .map_err(|err| BoundaryError::CreateElement {
            tag,
            message: js_message(&err),
        })
}

fn append(root: &ShadowRoot, node: &Element) -> Result<(), BoundaryError> {
    root.append_child(node)
        .map(|_| ())
        .map_err(|err| BoundaryError::Append(js_message(&err)))
}
