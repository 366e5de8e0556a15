//! Collection Pages
//!
//! One routed page per API collection.

use leptos::*;

use ease_journal::Collection;

use crate::components::ListView;

#[component]
pub fn Categories() -> impl IntoView {
    view! { <ListView collection=Collection::Categories /> }
}

#[component]
pub fn Users() -> impl IntoView {
    view! { <ListView collection=Collection::Users /> }
}

#[component]
pub fn Journals() -> impl IntoView {
    view! { <ListView collection=Collection::Journals /> }
}
