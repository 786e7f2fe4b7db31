use leptos::prelude::*;
use shadow_ui::{ShadowMode, ShadowPortal};

use crate::config::CONFIG;
use crate::pages::DemoBlock;

#[component]
pub fn PortalPage() -> impl IntoView {
    let (theme, set_theme) = signal(0usize);
    let (clicks, set_clicks) = signal(0u32);

    let styles = Signal::derive(move || Some(CONFIG.themes[theme.get() % CONFIG.themes.len()].styles.to_string()));
    let theme_name = move || CONFIG.themes[theme.get() % CONFIG.themes.len()].name;

    view! {
        <main>

            <DemoBlock id="portal" title="Portal" mode=ShadowMode::Open>
                <ShadowPortal styles=styles class="demo-portal">
                    // Handler and signal belong to this page even though the button renders in the shadow root
                    <button on:click=move |_| set_clicks.update(|n| *n += 1)>
                        "clicked " {clicks} " times"
                    </button>
                </ShadowPortal>
            </DemoBlock>

            <DemoBlock id="themes" title="Themes">
                <div>
                    "current: " <strong>{theme_name}</strong> " "
                    <button on:click=move |_| set_theme.update(|t| *t += 1)>"next theme"</button>
                </div>
            </DemoBlock>
        </main>
    }
}
