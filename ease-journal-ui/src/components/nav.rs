//! Navigation Component
//!
//! Top bar with one link per page.

use leptos::*;
use leptos_router::*;

use ease_journal::{nav_links, NavLink};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                {nav_links()
                    .into_iter()
                    .map(|link| view! { <NavItem link=link /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    view! {
        <li>
            // Exact so that "/" is not marked active on every page
            <A href=link.destination exact=true active_class="active">
                {link.label}
            </A>
        </li>
    }
}
