//! Session context shared by every page.
//!
//! One `SessionContext` is provided at the app root. It starts empty (the
//! server render has no browser storage) and is filled from local storage
//! once the client mounts; `ready` flips at that point so guarded pages do
//! not redirect before the stored token has been read.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::session::{Session, SessionStore};

#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    pub session: Signal<Session>,
    pub ready: Signal<bool>,
}

impl SessionContext {
    /// API client carrying the current token (subscribes the caller)
    pub fn api(&self) -> ApiClient {
        ApiClient::from_config().with_token(self.session.read().token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Record a fresh sign-in (already persisted by `auth`)
    pub fn signed_in(&mut self, session: Session) {
        self.session.set(session);
    }

    pub fn sign_out(&mut self) {
        crate::auth::logout(&SessionStore::browser());
        self.session.set(Session::default());
    }
}

/// Create the session context at the app root.
pub fn use_session_provider() -> SessionContext {
    let ctx = use_context_provider(|| SessionContext {
        session: Signal::new(Session::default()),
        ready: Signal::new(false),
    });

    // Load the persisted session once on mount (client only)
    use_effect(move || {
        let mut ctx = ctx;
        let stored = SessionStore::browser().load();
        tracing::debug!("Session loaded (authenticated: {})", stored.is_authenticated());
        ctx.session.set(stored);
        ctx.ready.set(true);
    });

    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
