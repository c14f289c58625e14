//! Wire types for the EventTicket storefront.
//!
//! This crate defines the JSON shapes that cross the boundary between the
//! storefront and its backend:
//! - the REST API (events, accounts, tickets, payments, admin statistics)
//! - the per-event WebSocket channel (ticket counters, purchase notices)
//!
//! # Modules
//! - [`event`] - Events and categories
//! - [`listing`] - Bare or paginated list responses
//! - [`account`] - Users and authentication payloads
//! - [`ticket`] - Purchased tickets and the QR payload
//! - [`payment`] - Payment intents and saved cards
//! - [`admin`] - Dashboard statistics and management listings
//! - [`socket`] - WebSocket protocol messages

pub mod account;
pub mod admin;
pub mod event;
pub mod listing;
pub mod payment;
pub mod socket;
pub mod ticket;

mod decimal;

// Re-export commonly used types at crate root
pub use account::{ApiErrorBody, AuthResponse, LoginRequest, RegisterRequest, User};
pub use admin::{
    CategoryStat, DashboardStats, ManagedUser, MonthlyRevenue, Overview, PopularEvent, RecentStats,
};
pub use event::{Category, Event};
pub use listing::Listing;
pub use payment::{
    CardDetails, ConfirmPaymentRequest, CreateIntentRequest, PaymentConfirmation, PaymentIntent,
    PaymentMethods, SavedCard,
};
pub use socket::{ClientMessage, EventSnapshot, ServerMessage};
pub use ticket::{Ticket, TicketQrPayload, TicketStatus};
