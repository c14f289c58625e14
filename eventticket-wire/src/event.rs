//! Event and category types served by the events endpoint.

use serde::{Deserialize, Serialize};

/// Event category (concert, theatre, sports, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(default)]
    pub id: i64,

    /// Display name (e.g., "Konser")
    pub name: String,

    /// URL slug, used as the category filter value
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub description: String,
}

/// A purchasable event.
///
/// The storefront never mutates events; it only displays them and applies
/// live counter updates from the socket channel on top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    /// Image URL (falls back to a placeholder when absent)
    #[serde(default)]
    pub image: Option<String>,

    /// Calendar date, ISO format (`2024-06-01`)
    pub date: String,

    /// Start time (`20:30:00`)
    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub category: Option<Category>,

    /// Unit ticket price in TRY
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub price: f64,

    /// Ticket capacity
    #[serde(default)]
    pub available_tickets: i64,

    /// Capacity minus non-cancelled tickets
    #[serde(default)]
    pub remaining_tickets: i64,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Event {
    /// Category display name, "Genel" when uncategorised
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Genel")
    }

    /// Category slug, if any
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.slug.as_str())
    }

    /// Image URL or a stable placeholder keyed by the event id
    pub fn image_url(&self, width: u32, height: u32) -> String {
        match &self.image {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "https://picsum.photos/{}/{}?random={}",
                width, height, self.id
            ),
        }
    }
}
