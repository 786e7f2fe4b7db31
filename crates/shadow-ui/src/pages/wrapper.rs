use leptos::html::Div;
use leptos::prelude::*;
use shadow_ui::{ShadowDomWrapper, ShadowMode};

use crate::config::CONFIG;
use crate::pages::DemoBlock;

#[component]
pub fn WrapperPage() -> impl IntoView {
    let open_ref = NodeRef::<Div>::new();
    let (report, set_report) = signal(String::from("(not inspected)"));

    // Read back what the open boundary looks like from the page
    let inspect = move |_: leptos::ev::MouseEvent| {
        let text = match open_ref.get_untracked().and_then(|host| host.shadow_root()) {
            Some(root) => format!("open root with {} nodes", root.child_nodes().length()),
            None => String::from("no shadow root visible"),
        };
        set_report.set(text);
    };

    view! {
        <main>

            <DemoBlock id="open" title="Open Wrapper" mode=ShadowMode::Open>
                <ShadowDomWrapper styles=CONFIG.wrapper_styles node_ref=open_ref>
                    <p>"Styled only by the sheet inside the boundary."</p>
                </ShadowDomWrapper>
                <div class="text-sm text-[var(--ink-light)] mt-2">
                    <button on:click=inspect>"inspect"</button> " " {report}
                </div>
            </DemoBlock>

            <DemoBlock id="closed" title="Closed Wrapper" mode=ShadowMode::Closed>
                <ShadowDomWrapper styles=CONFIG.wrapper_styles mode=ShadowMode::Closed>
                    <p>"Same content, internals hidden from page scripts."</p>
                </ShadowDomWrapper>
            </DemoBlock>
        </main>
    }
}
