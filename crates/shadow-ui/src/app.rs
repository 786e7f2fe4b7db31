use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::config::CONFIG;
use crate::pages::{PortalPage, WrapperPage};

/// Page shell: title, a link per component variant, and the routed demo
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
                <header class="mb-8 text-center">
                    <h1 class="text-xl font-bold">{CONFIG.name}</h1>
                    <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
                    <nav class="mt-4 text-sm space-x-4">
                        <A href="/">"slot wrapper"</A>
                        <A href="/portal">"portal"</A>
                    </nav>
                </header>
                <Routes fallback=|| view! { <p>"No demo at this address."</p> }>
                    <Route path=path!("/") view=WrapperPage />
                    <Route path=path!("/portal") view=PortalPage />
                </Routes>
            </div>
        </Router>
    }
}
