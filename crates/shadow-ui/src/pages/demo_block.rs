use leptos::prelude::*;
use shadow_ui::ShadowMode;

/// Frame around one live component, captioned with the boundary it sets up
#[component]
pub fn DemoBlock(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    /// Boundary mode of the framed component; `None` for plain page content
    #[prop(optional)]
    mode: Option<ShadowMode>,
    children: Children,
) -> impl IntoView {
    let caption = mode.map(|mode| format!("{mode} shadow root"));

    view! {
        <figure id=id class="mb-8">
            <figcaption class="flex justify-between text-sm mb-2">
                <strong class="uppercase">{title}</strong>
                {caption.map(|caption| view! { <code class="text-[var(--ink-light)]">{caption}</code> })}
            </figcaption>
            <div class="p-3 border border-dashed border-[var(--rule)]">
                {children()}
            </div>
        </figure>
    }
}
