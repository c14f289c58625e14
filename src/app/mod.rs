//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod session;
pub mod socket;

use pages::{AdminDashboard, EventDetail, Events, Home, Login, Profile, Register};
use session::use_session_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Session context at app root (token + cached user, shared by all pages)
    use_session_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/events")]
    Events {},
    #[route("/events/:id")]
    EventDetail { id: i64 },
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/admin")]
    AdminDashboard {},
}
