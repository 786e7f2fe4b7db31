use leptos::html::Div;
use leptos::mount::mount_to;
use leptos::prelude::*;
use shadow_ui::{RESET_STYLES, ShadowMode, ShadowPortal, compose_styles};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, Node, ShadowRoot};

use super::*;

fn holder(root: &ShadowRoot) -> Element {
    root.last_element_child().expect("content holder")
}

#[wasm_bindgen_test]
async fn children_wait_for_boundary_then_land_in_holder() {
    let parent = mount_component(|| view! { <ShadowPortal><button>"press"</button></ShadowPortal> });

    // Rendered, but the setup effect has not run yet
    let host = host(&parent);
    assert!(host.shadow_root().is_none());
    assert_eq!(host.child_element_count(), 0);
    assert!(parent.query_selector("button").unwrap().is_none());

    settle().await;

    let root = open_root(&host);
    assert_eq!(child_tags(&root), vec!["style", "div"]);
    assert_eq!(style_text(&root), RESET_STYLES);
    assert!(holder(&root).query_selector("button").unwrap().is_some());

    // Not part of the component's own output
    assert_eq!(host.child_element_count(), 0);
    assert!(parent.query_selector("button").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn styles_follow_every_change() {
    let styles = RwSignal::new(None::<String>);
    let parent = mount_component(move || {
        view! { <ShadowPortal styles=Signal::derive(move || styles.get())><span>"s"</span></ShadowPortal> }
    });
    settle().await;

    let root = open_root(&host(&parent));
    assert_eq!(style_text(&root), RESET_STYLES);

    for sheet in ["a{}", "span{color:blue}", "b{}"] {
        styles.set(Some(sheet.to_string()));
        settle().await;
        assert_eq!(style_text(&root), compose_styles(Some(sheet)));
        assert_eq!(child_tags(&root), vec!["style", "div"]);
    }

    styles.set(None);
    settle().await;
    assert_eq!(style_text(&root), RESET_STYLES);
}

#[wasm_bindgen_test]
async fn root_takes_class_and_inline_reset() {
    let parent = mount_component(|| view! { <ShadowPortal class="themed"><i>"c"</i></ShadowPortal> });
    settle().await;

    let host = host(&parent);
    assert_eq!(host.class_name(), "themed");
    assert!(host.get_attribute("style").unwrap_or_default().contains("all: initial"));
}

#[wasm_bindgen_test]
async fn mode_is_fixed_after_attach() {
    let mode = RwSignal::new(Some(ShadowMode::Open));
    let parent = mount_component(move || {
        view! { <ShadowPortal mode=Signal::derive(move || mode.get())><b>"m"</b></ShadowPortal> }
    });
    settle().await;
    let host = host(&parent);
    let before = open_root(&host);

    mode.set(Some(ShadowMode::Closed));
    settle().await;

    let after = open_root(&host);
    let before_node: &web_sys::Node = &before;
    assert!(after.is_same_node(Some(before_node)));
    assert_eq!(child_tags(&after), vec!["style", "div"]);
}

#[wasm_bindgen_test]
async fn closed_portal_attaches_single_hidden_root() {
    let parent = mount_component(|| view! { <ShadowPortal mode=ShadowMode::Closed><button>"hidden"</button></ShadowPortal> });
    settle().await;

    let host = host(&parent);
    assert!(host.shadow_root().is_none());
    assert!(attach_would_fail(&host));
    assert!(parent.query_selector("button").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn portaled_children_keep_context_and_handlers() {
    #[derive(Clone)]
    struct Label(&'static str);

    #[component]
    fn Labelled() -> impl IntoView {
        let label = use_context::<Label>().map(|l| l.0).unwrap_or("missing");
        view! { <em>{label}</em> }
    }

    let clicks = RwSignal::new(0u32);
    let parent = mount_component(move || {
        provide_context(Label("from parent"));
        view! {
            <ShadowPortal>
                <Labelled />
                <button on:click=move |_| clicks.update(|n| *n += 1)>"tap"</button>
            </ShadowPortal>
        }
    });
    settle().await;

    let content = holder(&open_root(&host(&parent)));
    let label = content.query_selector("em").unwrap().expect("portaled label");
    assert_eq!(label.text_content().unwrap_or_default(), "from parent");

    let button: HtmlElement = content.query_selector("button").unwrap().unwrap().unchecked_into();
    button.click();
    button.click();
    assert_eq!(clicks.get_untracked(), 2);
}

#[wasm_bindgen_test]
async fn caller_node_ref_exposes_root() {
    let node_ref = NodeRef::<Div>::new();
    let parent = mount_component(move || view! { <ShadowPortal node_ref=node_ref><p>"ref"</p></ShadowPortal> });
    settle().await;

    let exposed = node_ref.get_untracked().expect("caller ref bound");
    let host = host(&parent);
    let host_node: &Node = &host;
    assert!(exposed.is_same_node(Some(host_node)));

    let root = exposed.shadow_root().expect("open shadow root on the exposed node");
    assert_eq!(child_tags(&root), vec!["style", "div"]);
    assert!(holder(&root).query_selector("p").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn remount_on_fresh_node_attaches_once() {
    let first = container();
    let handle = mount_to(first.clone(), || view! { <ShadowPortal><button>"one"</button></ShadowPortal> });
    settle().await;
    let root = open_root(&host(&first));
    assert_eq!(child_tags(&root), vec!["style", "div"]);
    assert!(holder(&root).query_selector("button").unwrap().is_some());
    drop(handle);
    settle().await;
    assert!(first.first_element_child().is_none());

    let second = mount_component(|| view! { <ShadowPortal><button>"two"</button></ShadowPortal> });
    settle().await;
    let host = host(&second);
    let root = open_root(&host);
    assert_eq!(child_tags(&root), vec!["style", "div"]);
    let button = holder(&root).query_selector("button").unwrap().expect("children back in the holder");
    assert_eq!(button.text_content().unwrap_or_default(), "two");
    assert_eq!(host.child_element_count(), 0);
}
