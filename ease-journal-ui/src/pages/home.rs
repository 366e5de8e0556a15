//! Home Page

use leptos::*;

/// Landing page; static content only
#[component]
pub fn Home() -> impl IntoView {
    view! { <h1>"Home"</h1> }
}
