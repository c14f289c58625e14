//! WebSocket protocol for the per-event live channel (`ws/event/{id}/`).
//!
//! Frames are JSON objects discriminated by a `type` field.

use serde::{Deserialize, Serialize};

/// Messages pushed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Current counters, sent on connect and on `get_ticket_count`
    TicketCount {
        ticket_count: i64,
        remaining_tickets: i64,
    },

    /// Someone bought a ticket for this event
    TicketPurchased {
        ticket_count: i64,
        remaining_tickets: i64,
        /// Display name of the buyer
        #[serde(default)]
        user: String,
    },

    /// Event snapshot, sent in reply to `join_event`
    EventInfo {
        /// `null` when the event no longer exists
        #[serde(default)]
        event: Option<EventSnapshot>,
    },

    /// Any message kind this client does not understand
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// Get the message type as a string (for logging)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TicketCount { .. } => "ticket_count",
            Self::TicketPurchased { .. } => "ticket_purchased",
            Self::EventInfo { .. } => "event_info",
            Self::Unknown => "unknown",
        }
    }
}

/// Event fields embedded in an `event_info` message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventSnapshot {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "crate::decimal::deserialize")]
    pub price: f64,
    #[serde(default)]
    pub available_tickets: i64,
    pub remaining_tickets: i64,
}

/// Messages sent by the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask for a fresh `ticket_count`
    GetTicketCount,
    /// Ask for an `event_info` snapshot
    JoinEvent,
}

impl ClientMessage {
    /// Messages sent right after the socket opens, in order
    pub const PRIMING: [ClientMessage; 2] = [ClientMessage::GetTicketCount, ClientMessage::JoinEvent];

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
