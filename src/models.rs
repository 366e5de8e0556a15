//! Wire Models
//!
//! Records returned by the Ease Journal API and the envelope that wraps them.
//! Display fields are lenient: a missing or null field decodes to an empty
//! string, and numbers or booleans are shown as their JSON text. An item that
//! is not an object becomes a blank record; only a missing or malformed
//! `Data` map fails the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Top-level response wrapper exposing a collection under `Data`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// "Data" for collection endpoints
    #[serde(rename = "Type", default, deserialize_with = "display_text")]
    pub kind: String,
    /// Human-readable title, e.g. "Current Categories"
    #[serde(rename = "Title", default, deserialize_with = "display_text")]
    pub title: String,
    /// Items keyed by opaque ids; key order carries no meaning
    #[serde(rename = "Data")]
    pub data: HashMap<String, Value>,
}

impl Envelope {
    /// Drop the keys and decode each item as `R`
    pub fn into_records<R: Record>(self) -> Vec<R> {
        self.data.into_values().map(record_from_item).collect()
    }
}

/// Items that do not decode as `R` (strings, arrays, numbers) render blank
fn record_from_item<R: Record>(item: Value) -> R {
    serde_json::from_value(item).unwrap_or_default()
}

/// One rendered item: a heading plus a single labelled detail line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub heading: String,
    pub detail_label: &'static str,
    pub detail: String,
}

impl Card {
    /// "Created: 2023-10-27 12:45:00"
    pub fn detail_line(&self) -> String {
        format!("{}: {}", self.detail_label, self.detail)
    }
}

/// A record type served by one collection endpoint
pub trait Record: DeserializeOwned + Default {
    /// Project the record onto its display card
    fn card(&self) -> Card;

    /// Field the list is ordered by
    fn sort_key(&self) -> &str;
}

/// Journal category
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "display_text")]
    pub category_id: String,
    #[serde(default, deserialize_with = "display_text")]
    pub title: String,
    #[serde(default, deserialize_with = "display_text")]
    pub user: String,
    #[serde(default, deserialize_with = "display_text")]
    pub created: String,
}

impl Record for Category {
    fn card(&self) -> Card {
        Card {
            heading: self.title.clone(),
            detail_label: "Created",
            detail: self.created.clone(),
        }
    }

    fn sort_key(&self) -> &str {
        &self.created
    }
}

/// Registered user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "display_text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "display_text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "display_text")]
    pub dob: String,
    #[serde(default, deserialize_with = "display_text")]
    pub email: String,
}

impl Record for User {
    fn card(&self) -> Card {
        Card {
            heading: self.first_name.clone(),
            detail_label: "Date of Birth",
            detail: self.dob.clone(),
        }
    }

    fn sort_key(&self) -> &str {
        &self.first_name
    }
}

/// Journal entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Journal {
    #[serde(default, deserialize_with = "display_text")]
    pub title: String,
    #[serde(default, deserialize_with = "display_text")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "display_text")]
    pub prompt: String,
    #[serde(default, deserialize_with = "display_text")]
    pub content: String,
    #[serde(default, deserialize_with = "display_text")]
    pub modified: String,
}

impl Record for Journal {
    fn card(&self) -> Card {
        Card {
            heading: self.title.clone(),
            detail_label: "Timestamp",
            detail: self.timestamp.clone(),
        }
    }

    fn sort_key(&self) -> &str {
        &self.timestamp
    }
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_type_and_title() {
        let body = r#"{
            "Type": "Data",
            "Title": "Current Categories",
            "Data": {
                "75638475": {"category_id": "75638475", "title": "Work", "user": "1234567890", "created": "2023-10-27 12:45:00"}
            }
        }"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.kind, "Data");
        assert_eq!(envelope.title, "Current Categories");

        let items: Vec<Category> = envelope.into_records();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Work");
        assert_eq!(items[0].user, "1234567890");
    }

    #[test]
    fn test_missing_fields_render_blank() {
        let body = r#"{"Data": {"a": {"last_name": "Smith"}}}"#;
        let envelope: Envelope = serde_json::from_str(body).unwrap();
        let items: Vec<User> = envelope.into_records();
        let user = &items[0];

        let card = user.card();
        assert_eq!(card.heading, "");
        assert_eq!(card.detail, "");
        assert_eq!(card.detail_line(), "Date of Birth: ");
    }

    #[test]
    fn test_non_string_fields_are_shown_as_json_text() {
        let body = r#"{"Data": {"a": {"first_name": "Emma", "dob": 19900101, "email": null}}}"#;
        let envelope: Envelope = serde_json::from_str(body).unwrap();
        let items: Vec<User> = envelope.into_records();
        let user = &items[0];

        assert_eq!(user.dob, "19900101");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{"Data": {"2023-10-27 08:30:00": {
            "title": "Morning Reflection",
            "timestamp": "2023-10-27 08:30:00",
            "content": "My alarm is broken...",
            "mood": 3
        }}}"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        let items: Vec<Journal> = envelope.into_records();
        let journal = &items[0];
        assert_eq!(journal.card().detail_line(), "Timestamp: 2023-10-27 08:30:00");
        assert_eq!(journal.content, "My alarm is broken...");
    }

    #[test]
    fn test_missing_data_is_rejected() {
        let result = serde_json::from_str::<Envelope>(r#"{"Title": "Current Categories"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_data_is_rejected() {
        let result = serde_json::from_str::<Envelope>(r#"{"Data": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_array_data_is_rejected() {
        let result = serde_json::from_str::<Envelope>(r#"{"Data": ["Work"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_item_renders_blank() {
        let envelope: Envelope = serde_json::from_str(r#"{"Data": {"a": "Work"}}"#).unwrap();
        let items: Vec<Category> = envelope.into_records();

        assert_eq!(items, vec![Category::default()]);
        assert_eq!(items[0].card().detail_line(), "Created: ");
    }

    #[test]
    fn test_non_string_title_and_type_are_tolerated() {
        let body = r#"{"Type": ["Data"], "Title": 7, "Data": {"a": {"title": "Work"}}}"#;
        let envelope: Envelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.title, "7");
        assert_eq!(envelope.kind, r#"["Data"]"#);

        let items: Vec<Category> = envelope.into_records();
        assert_eq!(items[0].title, "Work");
    }
}
