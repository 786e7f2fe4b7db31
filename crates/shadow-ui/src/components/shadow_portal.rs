use leptos::html::Div;
use leptos::portal::Portal;
use leptos::prelude::*;
use shadow_core::{Lifecycle, ShadowMode, StyleSync};

use crate::boundary::{Insertion, reconcile};

/// Renders an empty `<div style="all: initial">` and portals `children`
/// into a content-holder `<div>` inside its shadow root.
///
/// Nothing is portaled until the shadow root, its style element and the
/// content holder all exist. The style text follows `styles` on every
/// change; `mode` only matters for the first attach.
#[component]
pub fn ShadowPortal(
    #[prop(into, optional)] styles: MaybeProp<String>,
    #[prop(into, optional)] class: MaybeProp<String>,
    #[prop(into, optional)] mode: MaybeProp<ShadowMode>,
    #[prop(optional)] node_ref: Option<NodeRef<Div>>,
    children: ChildrenFn,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let lifecycle = StoredValue::new_local(Lifecycle::new(StyleSync::Always));
    let mounted = RwSignal::new(false);

    Effect::new(move |_| {
        let styles = styles.get();
        let mode = mode.get().unwrap_or_default();
        let Some(host) = node_ref.get() else {
            return;
        };
        let attached = lifecycle
            .try_update_value(|lifecycle| reconcile(lifecycle, &host, mode, styles.as_deref(), Insertion::ContentHolder))
            .unwrap_or(false);
        if attached {
            mounted.set(true);
        }
    });

    let portal = move || {
        if !mounted.get() {
            return None;
        }
        let holder = lifecycle
            .try_with_value(|lifecycle| lifecycle.boundary().and_then(|b| b.content_holder().cloned()))
            .flatten()?;
        let children = children.clone();
        Some(view! { <Portal mount=holder>{children()}</Portal> })
    };

    view! {
        <div node_ref=node_ref class=move || class.get().unwrap_or_default() style="all: initial"></div>
        {portal}
    }
}
