//! Item Card Component

use leptos::*;

use ease_journal::Card;

/// One record: a heading and a single labelled detail line
#[component]
pub fn ItemCard(card: Card, class: &'static str) -> impl IntoView {
    let detail = card.detail_line();

    view! {
        <div class=class>
            <h2>{card.heading}</h2>
            <p>{detail}</p>
        </div>
    }
}
