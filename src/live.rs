//! Live ticket counters for one event detail view.
//!
//! `TicketCountState::apply` is the whole socket protocol as a pure reducer:
//! the socket task feeds it decoded `ServerMessage`s and renders the result.

use std::collections::VecDeque;

use eventticket_wire::ServerMessage;

/// Most recent purchase notices kept on screen
pub const MAX_NOTICES: usize = 5;
/// Notices older than this are purged (milliseconds)
pub const NOTICE_TTL_MS: u64 = 30_000;
/// How often the purge runs (milliseconds)
pub const PURGE_INTERVAL_MS: u64 = 5_000;
/// Remaining counts below this show the low-ticket warning
pub const LOW_TICKET_THRESHOLD: i64 = 10;

/// Someone else just bought a ticket
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseNotice {
    pub user: String,
    /// Arrival time, ms since the epoch
    pub received_at: u64,
}

impl PurchaseNotice {
    pub fn age_secs(&self, now: u64) -> u64 {
        now.saturating_sub(self.received_at) / 1000
    }
}

/// What a message changed, so the caller knows whether to notify its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Sold and remaining counters changed (parent is notified)
    Counts { sold: i64, remaining: i64 },
    /// Only the remaining count changed (from an event snapshot)
    Remaining(i64),
    Ignored,
}

impl Update {
    /// Only counter messages (`ticket_count`, `ticket_purchased`) reach the parent
    pub fn notifies_parent(&self) -> bool {
        matches!(self, Self::Counts { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// No counter received yet
    Unknown,
    Available(i64),
    Low(i64),
    SoldOut,
}

impl Availability {
    pub fn from_remaining(remaining: Option<i64>) -> Self {
        match remaining {
            None => Self::Unknown,
            Some(n) if n <= 0 => Self::SoldOut,
            Some(n) if n < LOW_TICKET_THRESHOLD => Self::Low(n),
            Some(n) => Self::Available(n),
        }
    }

    pub fn is_sold_out(&self) -> bool {
        matches!(self, Self::SoldOut)
    }

    /// Warning line shown under the counters, if any
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Low(n) => Some(format!("Dikkat! Sadece {} bilet kaldı!", n)),
            Self::SoldOut => Some("Tükendi! Bu etkinlik için bilet kalmadı.".to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "Bağlanıyor...",
            Self::Connected => "Canlı Bağlantı",
            Self::Disconnected => "Bağlantı Kesildi",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketCountState {
    pub sold: i64,
    pub remaining: Option<i64>,
    notices: VecDeque<PurchaseNotice>,
}

impl TicketCountState {
    pub fn apply(&mut self, message: ServerMessage, now: u64) -> Update {
        match message {
            ServerMessage::TicketCount {
                ticket_count,
                remaining_tickets,
            } => self.set_counts(ticket_count, remaining_tickets),
            ServerMessage::TicketPurchased {
                ticket_count,
                remaining_tickets,
                user,
            } => {
                self.notices.push_front(PurchaseNotice {
                    user,
                    received_at: now,
                });
                self.notices.truncate(MAX_NOTICES);
                self.set_counts(ticket_count, remaining_tickets)
            }
            ServerMessage::EventInfo { event: Some(event) } => {
                self.remaining = Some(event.remaining_tickets);
                Update::Remaining(event.remaining_tickets)
            }
            ServerMessage::EventInfo { event: None } | ServerMessage::Unknown => Update::Ignored,
        }
    }

    fn set_counts(&mut self, sold: i64, remaining: i64) -> Update {
        self.sold = sold;
        self.remaining = Some(remaining);
        Update::Counts { sold, remaining }
    }

    /// Drop notices older than the TTL. Returns true if anything was removed.
    pub fn purge(&mut self, now: u64) -> bool {
        let before = self.notices.len();
        self.notices
            .retain(|n| now.saturating_sub(n.received_at) < NOTICE_TTL_MS);
        self.notices.len() != before
    }

    /// Newest first
    pub fn notices(&self) -> impl Iterator<Item = &PurchaseNotice> {
        self.notices.iter()
    }

    pub fn availability(&self) -> Availability {
        Availability::from_remaining(self.remaining)
    }
}

/// Current wall-clock time in ms since the epoch
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventticket_wire::EventSnapshot;

    fn purchased(sold: i64, remaining: i64, user: &str) -> ServerMessage {
        ServerMessage::TicketPurchased {
            ticket_count: sold,
            remaining_tickets: remaining,
            user: user.to_string(),
        }
    }

    #[test]
    fn test_purchase_updates_counts_and_warns() {
        let mut state = TicketCountState {
            remaining: Some(15),
            ..Default::default()
        };
        assert_eq!(state.availability(), Availability::Available(15));

        let update = state.apply(purchased(41, 9, "ayse"), 1_000);
        assert_eq!(
            update,
            Update::Counts {
                sold: 41,
                remaining: 9
            }
        );
        assert!(update.notifies_parent());
        assert_eq!(state.sold, 41);
        assert_eq!(state.availability(), Availability::Low(9));
        assert_eq!(
            state.availability().warning().as_deref(),
            Some("Dikkat! Sadece 9 bilet kaldı!")
        );
        assert_eq!(state.notices().next().unwrap().user, "ayse");
    }

    #[test]
    fn test_zero_remaining_is_sold_out() {
        let mut state = TicketCountState::default();
        assert_eq!(state.availability(), Availability::Unknown);
        state.apply(
            ServerMessage::TicketCount {
                ticket_count: 100,
                remaining_tickets: 0,
            },
            0,
        );
        assert!(state.availability().is_sold_out());
        assert!(state.availability().warning().unwrap().starts_with("Tükendi!"));
    }

    #[test]
    fn test_event_info_sets_remaining_only() {
        let mut state = TicketCountState::default();
        state.sold = 3;
        let update = state.apply(
            ServerMessage::EventInfo {
                event: Some(EventSnapshot {
                    id: 1,
                    title: "T".into(),
                    price: 10.0,
                    available_tickets: 50,
                    remaining_tickets: 12,
                }),
            },
            0,
        );
        assert_eq!(update, Update::Remaining(12));
        assert!(!update.notifies_parent());
        assert_eq!(state.remaining, Some(12));
        assert_eq!(state.sold, 3);

        let before = state.clone();
        assert_eq!(
            state.apply(ServerMessage::EventInfo { event: None }, 0),
            Update::Ignored
        );
        assert_eq!(state.apply(ServerMessage::Unknown, 0), Update::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_notices_capped_newest_first() {
        let mut state = TicketCountState::default();
        for i in 0..8 {
            state.apply(purchased(i, 100 - i, &format!("u{}", i)), i as u64);
        }
        let users: Vec<_> = state.notices().map(|n| n.user.as_str()).collect();
        assert_eq!(users, vec!["u7", "u6", "u5", "u4", "u3"]);
    }

    #[test]
    fn test_purge_after_clock_advance() {
        let mut state = TicketCountState::default();
        state.apply(purchased(1, 9, "early"), 0);
        state.apply(purchased(2, 8, "late"), 20_000);

        assert!(!state.purge(25_000));
        assert_eq!(state.notices().count(), 2);

        assert!(state.purge(30_000));
        let users: Vec<_> = state.notices().map(|n| n.user.as_str()).collect();
        assert_eq!(users, vec!["late"]);

        state.purge(60_000);
        assert_eq!(state.notices().count(), 0);
    }

    #[test]
    fn test_notice_age() {
        let notice = PurchaseNotice {
            user: "x".into(),
            received_at: 10_000,
        };
        assert_eq!(notice.age_secs(22_500), 12);
        assert_eq!(notice.age_secs(0), 0);
    }
}
