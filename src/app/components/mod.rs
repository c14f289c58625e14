//! Shared UI components: page chrome, dialogs and dashboard widgets.

pub mod charts;
pub mod event_card;
pub mod field;
pub mod footer;
pub mod guard;
pub mod layout;
pub mod live_tickets;
pub mod login_modal;
pub mod modal;
pub mod nav;
pub mod payment_modal;
pub mod purchase_modal;
pub mod qr_ticket;
pub mod recommendations;
pub mod seat_selection;
pub mod social;

pub use charts::{DoughnutView, LineChartView};
pub use event_card::EventCard;
pub use field::TextField;
pub use footer::Footer;
pub use guard::RequireAuth;
pub use layout::Layout;
pub use live_tickets::LiveTickets;
pub use login_modal::LoginModal;
pub use modal::Modal;
pub use nav::Nav;
pub use payment_modal::PaymentModal;
pub use purchase_modal::TicketPurchaseModal;
pub use qr_ticket::QrTicketModal;
pub use recommendations::Recommendations;
pub use seat_selection::SeatSelectionModal;
pub use social::SocialButtons;
