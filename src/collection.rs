//! Collections
//!
//! The three list endpoints and how each response body becomes an ordered
//! list of cards.

use crate::error::FetchResult;
use crate::models::{Card, Category, Envelope, Journal, Record, User};

/// A list endpoint exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Categories,
    Users,
    Journals,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Categories, Collection::Users, Collection::Journals];

    /// Path of the endpoint, relative to the API base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            Collection::Categories => "/categories",
            Collection::Users => "/users",
            Collection::Journals => "/journals",
        }
    }

    /// Heading shown above the list
    pub fn heading(self) -> &'static str {
        match self {
            Collection::Categories => "Categories",
            Collection::Users => "Users",
            Collection::Journals => "Journals",
        }
    }

    /// CSS class of one item card
    pub fn card_class(self) -> &'static str {
        match self {
            Collection::Users => "user-container",
            Collection::Categories | Collection::Journals => "category-container",
        }
    }

    /// Decode a response body into the cards this collection renders
    pub fn decode_cards(self, body: &str) -> FetchResult<Vec<Card>> {
        match self {
            Collection::Categories => cards::<Category>(body),
            Collection::Users => cards::<User>(body),
            Collection::Journals => cards::<Journal>(body),
        }
    }
}

/// Decode an envelope and flatten its `Data` map into a sorted list.
///
/// Map order is not stable, so records are ordered by [`Record::sort_key`],
/// then by card heading.
pub fn decode_records<R: Record>(body: &str) -> FetchResult<Vec<R>> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let mut records: Vec<R> = envelope.into_records();
    records.sort_by_cached_key(|record| (record.sort_key().to_string(), record.card().heading));
    Ok(records)
}

fn cards<R: Record>(body: &str) -> FetchResult<Vec<Card>> {
    Ok(decode_records::<R>(body)?.iter().map(Record::card).collect())
}
