//! List View Component
//!
//! Fetches one collection when mounted and shows either its cards or the
//! generic error message. Every mount issues a fresh request.

use leptos::*;

use ease_journal::{load_list, Collection, Config, ListState, MountGuard};

use crate::api;
use crate::components::ItemCard;

#[component]
pub fn ListView(collection: Collection) -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let (state, set_state) = create_signal(ListState::default());

    // Released when the route changes; a response arriving later is discarded
    let guard = MountGuard::new();
    let liveness = guard.liveness();
    on_cleanup(move || guard.release());

    create_effect(move |_| {
        let client = api::api_client(&config.api);
        let liveness = liveness.clone();
        spawn_local(async move {
            if let Some(loaded) = load_list(&client, collection, &liveness).await {
                set_state.set(loaded);
            }
        });
    });

    view! { <ListContent collection=collection state=state /> }
}

/// Heading, then the error block or one card per item
#[component]
pub fn ListContent(collection: Collection, #[prop(into)] state: Signal<ListState>) -> impl IntoView {
    view! {
        <div class="wrapper">
            <h1>{collection.heading()}</h1>

            {move || {
                state.with(|s| s.error.clone()).map(|message| view! {
                    <div class="error-message">{message}</div>
                })
            }}

            {move || {
                state
                    .with(|s| s.visible_cards().to_vec())
                    .into_iter()
                    .map(|card| view! { <ItemCard card=card class=collection.card_class() /> })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::components::test_support::{mount_fixture, texts};
    use ease_journal::{Card, FetchError};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn card(heading: &str, detail: &str) -> Card {
        Card {
            heading: heading.to_string(),
            detail_label: "Date of Birth",
            detail: detail.to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_failure_shows_error_block_and_no_cards() {
        let root = mount_fixture(|| {
            let (state, _) = create_signal(ListState::from_result(Err(FetchError::Status { status: 500 })));
            view! { <ListContent collection=Collection::Categories state=state /> }
        });

        assert_eq!(texts(&root, "h1"), vec!["Categories"]);
        assert_eq!(texts(&root, ".error-message"), vec!["Something went wrong"]);
        assert_eq!(root.query_selector_all(".category-container").unwrap().length(), 0);
    }

    #[wasm_bindgen_test]
    fn test_one_card_per_item_with_collection_class() {
        let root = mount_fixture(|| {
            let cards = vec![card("Ava", "2001-03-03"), card("Emma", "2000-01-01")];
            let (state, _) = create_signal(ListState::from_result(Ok(cards)));
            view! { <ListContent collection=Collection::Users state=state /> }
        });

        assert_eq!(root.query_selector_all(".error-message").unwrap().length(), 0);
        assert_eq!(texts(&root, ".user-container h2"), vec!["Ava", "Emma"]);
        assert_eq!(
            texts(&root, ".user-container p"),
            vec!["Date of Birth: 2001-03-03", "Date of Birth: 2000-01-01"]
        );
    }

    #[wasm_bindgen_test]
    fn test_empty_list_renders_heading_only() {
        let root = mount_fixture(|| {
            let (state, _) = create_signal(ListState::from_result(Ok(Vec::new())));
            view! { <ListContent collection=Collection::Journals state=state /> }
        });

        assert_eq!(texts(&root, "h1"), vec!["Journals"]);
        assert_eq!(root.query_selector_all(".wrapper > div").unwrap().length(), 0);
    }
}
