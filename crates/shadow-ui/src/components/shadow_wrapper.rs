use leptos::html::Div;
use leptos::prelude::*;
use shadow_core::{Lifecycle, ShadowMode, StyleSync};

use crate::boundary::{Insertion, reconcile};

/// Renders `children` as light DOM of a `<div>` whose shadow root shows them
/// through a `<slot>`, behind the reset rules and `styles`.
///
/// The shadow root is attached on the first effect run after the div exists.
/// `styles` is read once at that point; later changes are not applied.
/// A caller-supplied `node_ref` is bound to the root div, otherwise an
/// internal one is used.
#[component]
pub fn ShadowDomWrapper(
    #[prop(into, optional)] styles: MaybeProp<String>,
    #[prop(into, optional)] mode: MaybeProp<ShadowMode>,
    #[prop(optional)] node_ref: Option<NodeRef<Div>>,
    children: Children,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);
    let lifecycle = StoredValue::new_local(Lifecycle::new(StyleSync::OnCreate));

    Effect::new(move |_| {
        let styles = styles.get();
        let mode = mode.get().unwrap_or_default();
        let Some(host) = node_ref.get() else {
            return;
        };
        lifecycle.update_value(|lifecycle| {
            reconcile(lifecycle, &host, mode, styles.as_deref(), Insertion::Slot);
        });
    });

    view! { <div node_ref=node_ref>{children()}</div> }
}
