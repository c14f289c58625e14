//! Social sign-in buttons. Providers are not connected yet, so each button
//! only reports a notice.

use dioxus::prelude::*;

use crate::forms::{social_login_notice, SocialIntent};

pub const PROVIDERS: [&str; 2] = ["Google", "Apple"];

#[component]
pub fn SocialButtons(intent: SocialIntent, on_notice: EventHandler<String>) -> Element {
    let verb = match intent {
        SocialIntent::SignIn => "Giriş Yap",
        SocialIntent::SignUp => "Kayıt Ol",
    };

    rsx! {
        div { class: "space-y-2",
            for provider in PROVIDERS {
                button {
                    key: "{provider}",
                    class: "btn btn-secondary w-full",
                    r#type: "button",
                    onclick: move |_| on_notice.call(social_login_notice(provider, intent)),
                    "{provider} ile {verb}"
                }
            }
            div { class: "text-center text-xs text-gray-400 py-2", "VEYA" }
        }
    }
}
