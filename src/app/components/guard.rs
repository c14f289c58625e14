//! Token gate for account pages.

use dioxus::prelude::*;

use crate::app::session::use_session;
use crate::app::Route;

/// Renders `children` only with a session token; otherwise redirects to
/// the login page once the stored session has been read.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let ctx = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if (ctx.ready)() && !ctx.is_authenticated() {
            tracing::debug!("No session token, redirecting to login");
            navigator.replace(Route::Login {});
        }
    });

    if (ctx.ready)() && ctx.is_authenticated() {
        rsx! { {children} }
    } else {
        rsx! {
            div { class: "card p-6 m-8 text-center text-gray-500", aria_busy: "true", "Yükleniyor..." }
        }
    }
}
