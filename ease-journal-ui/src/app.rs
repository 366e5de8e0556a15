//! App Root Component
//!
//! Application shell: navbar above the routed content area.

use leptos::*;
use leptos_router::*;

use ease_journal::{Collection, Config, Route as Page};

use crate::components::Nav;
use crate::pages::{Categories, Home, Journals, Users};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    // Views read the API settings from context
    provide_context(config);

    view! {
        <Router>
            <Nav />

            <main>
                <Routes>
                    <Route path=Page::Home.path() view=Home />
                    <Route path=Page::Collection(Collection::Categories).path() view=Categories />
                    <Route path=Page::Collection(Collection::Users).path() view=Users />
                    <Route path=Page::Collection(Collection::Journals).path() view=Journals />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="wrapper">
            <h1>"Page Not Found"</h1>
            <A href=Page::Home.path()>"Go Home"</A>
        </div>
    }
}
