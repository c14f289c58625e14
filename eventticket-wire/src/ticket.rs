//! Purchased tickets and the payload encoded into ticket QR codes.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Ticket lifecycle state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Active,
    Used,
    Expired,
    Cancelled,
}

impl TicketStatus {
    /// Turkish label for badges
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Aktif",
            Self::Used => "Kullanıldı",
            Self::Expired => "Süresi Doldu",
            Self::Cancelled => "İptal Edildi",
        }
    }
}

/// A ticket as returned by `GET tickets/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub ticket_number: String,
    pub event: Event,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub total_price: f64,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub is_cancelled: bool,
}

fn default_quantity() -> u32 {
    1
}

/// JSON document encoded into a ticket's QR code.
///
/// Field names are camelCase because gate scanners read this format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketQrPayload {
    pub ticket_number: String,
    pub event_title: String,
    pub event_date: String,
    pub event_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    pub price: f64,
    /// RFC 3339 generation time
    pub timestamp: String,
}

impl TicketQrPayload {
    /// Build the payload for a purchased ticket
    pub fn for_ticket(ticket: &Ticket, seat_number: Option<String>, timestamp: String) -> Self {
        Self {
            ticket_number: ticket.ticket_number.clone(),
            event_title: ticket.event.title.clone(),
            event_date: ticket.event.date.clone(),
            event_time: ticket.event.time.clone(),
            seat_number,
            price: ticket.total_price,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> Ticket {
        serde_json::from_str(
            r#"{
                "id": 11,
                "ticket_number": "7f1c",
                "event": {"id": 2, "title": "Hamlet", "date": "2024-10-03", "time": "20:00:00", "price": "150.00"},
                "purchase_date": "2024-09-01T10:00:00Z",
                "quantity": 2,
                "total_price": "300.00",
                "status": "active",
                "is_cancelled": false
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ticket_parsing() {
        let t = ticket();
        assert_eq!(t.total_price, 300.0);
        assert_eq!(t.status, TicketStatus::Active);
        assert_eq!(t.status.label(), "Aktif");
    }

    #[test]
    fn test_qr_payload_field_names() {
        let payload = TicketQrPayload::for_ticket(
            &ticket(),
            Some("A4".to_string()),
            "2024-09-01T10:00:00+00:00".to_string(),
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["ticketNumber"], "7f1c");
        assert_eq!(json["eventTitle"], "Hamlet");
        assert_eq!(json["seatNumber"], "A4");
        assert_eq!(json["price"], 300.0);
    }

    #[test]
    fn test_qr_payload_omits_missing_seat() {
        let payload = TicketQrPayload::for_ticket(&ticket(), None, String::new());
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("seatNumber"));
    }
}
