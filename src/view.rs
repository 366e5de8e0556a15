//! List View State
//!
//! Per-mount state of a list view and the guard that keeps a late response
//! from touching a view that is no longer on screen.
//!
//! A view goes from empty, through an unrendered loading phase, to either a
//! populated list or the generic error message. There is no distinct loading
//! state: until the fetch resolves the view looks like an empty list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::ApiClient;
use crate::collection::Collection;
use crate::error::FetchResult;
use crate::models::Card;
use crate::transport::Transport;

/// What a list view renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Set once the fetch has failed
    pub error: Option<String>,
    /// Populated once the fetch has succeeded
    pub cards: Vec<Card>,
}

impl ListState {
    /// State after a fetch has resolved
    pub fn from_result(result: FetchResult<Vec<Card>>) -> Self {
        let mut state = Self::default();
        state.resolve(result);
        state
    }

    /// Apply a fetch result
    pub fn resolve(&mut self, result: FetchResult<Vec<Card>>) {
        match result {
            Ok(cards) => self.cards = cards,
            Err(e) => self.error = Some(e.user_message().to_string()),
        }
    }

    /// Cards to render; none while an error is shown
    pub fn visible_cards(&self) -> &[Card] {
        if self.error.is_some() {
            &[]
        } else {
            &self.cards
        }
    }
}

/// Shared flag telling an in-flight fetch whether its view is still mounted
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Owned by a mounted view; marks its [`Liveness`] dead on release or drop
#[derive(Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn liveness(&self) -> Liveness {
        Liveness(Arc::clone(&self.alive))
    }

    /// Unmount
    pub fn release(self) {
        drop(self);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}

/// Fetch one collection for a mounted view.
///
/// Returns `None` when the view was unmounted before the response arrived;
/// the caller must then leave its state alone.
pub async fn load_list<T: Transport>(
    client: &ApiClient<T>,
    collection: Collection,
    liveness: &Liveness,
) -> Option<ListState> {
    let result = client.fetch_cards(collection).await;

    if !liveness.is_alive() {
        tracing::debug!("Discarding {} response for unmounted view", collection.heading().to_lowercase());
        return None;
    }

    Some(ListState::from_result(result))
}
