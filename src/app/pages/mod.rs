//! Routed pages.
//!
//! Each page wraps its content in `Layout`; pages that need a signed-in
//! user put their body under `RequireAuth`.

mod admin;
mod event_detail;
mod events;
mod home;
mod login;
mod profile;
mod register;

pub use admin::AdminDashboard;
pub use event_detail::EventDetail;
pub use events::Events;
pub use home::Home;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;
