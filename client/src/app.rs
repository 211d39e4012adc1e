//! Root application component and document shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every SSR request; `App` mounts the
//! router, provides the shared records context, and applies the stored theme
//! once the client hydrates.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::convert::ConvertPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::focus::FocusPage;
use crate::pages::hue::HuePage;
use crate::pages::memory::MemoryPage;
use crate::state::records::RecordsState;
use crate::util::theme;

/// Document shell used for server rendering and hydration bootstrap.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: records context, theme bootstrap, top bar, routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let records = RwSignal::new(RecordsState::load());
    provide_context(records);

    view! {
        <Stylesheet id="leptos" href="/pkg/playdeck.css"/>
        <Title text="Playdeck"/>
        <Router>
            <div class="app-shell">
                <TopBar/>
                <main class="app-shell__main">
                    <Routes fallback=|| view! { <p class="app-shell__missing">"Nothing at this address."</p> }>
                        <Route path=path!("/") view=DashboardPage/>
                        <Route path=path!("/memory") view=MemoryPage/>
                        <Route path=path!("/convert") view=ConvertPage/>
                        <Route path=path!("/hue") view=HuePage/>
                        <Route path=path!("/focus") view=FocusPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Header with the home link and the theme toggle.
#[component]
fn TopBar() -> impl IntoView {
    let dark = RwSignal::new(false);

    // Theme is a hydrate-only concern; SSR output stays on the default.
    Effect::new(move || {
        let enabled = theme::read_preference();
        theme::apply(enabled);
        dark.set(enabled);
    });

    let on_toggle = move |_| {
        let next = !dark.get();
        dark.set(next);
        theme::apply(next);
        theme::store(next);
    };

    view! {
        <header class="top-bar">
            <a class="top-bar__home" href="/">"Playdeck"</a>
            <button class="top-bar__theme" on:click=on_toggle>
                {move || if dark.get() { "Light" } else { "Dark" }}
            </button>
        </header>
    }
}
