//! List response envelope.
//!
//! List endpoints return either a bare array or a paginated envelope
//! (`{count, next, previous, results}`) depending on the backend's
//! pagination settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results } => results,
            Self::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, Ticket};

    const EVENT_JSON: &str =
        r#"{"id":7,"title":"Caz Gecesi","date":"2024-07-12","price":"350.00"}"#;

    #[test]
    fn test_event_listing_both_shapes() {
        let plain: Listing<Event> = serde_json::from_str(&format!("[{}]", EVENT_JSON)).unwrap();
        assert_eq!(plain.into_items().len(), 1);

        let paged: Listing<Event> =
            serde_json::from_str(&format!(r#"{{"count":1,"results":[{}]}}"#, EVENT_JSON)).unwrap();
        assert_eq!(paged.into_items()[0].title, "Caz Gecesi");
    }

    #[test]
    fn test_empty_paginated_page() {
        let page: Listing<Ticket> = serde_json::from_str(
            r#"{"count":0,"next":null,"previous":null,"results":[]}"#,
        )
        .unwrap();
        assert!(page.into_items().is_empty());
    }
}
