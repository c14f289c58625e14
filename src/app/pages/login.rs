//! Sign-in page.

use dioxus::prelude::*;

use crate::app::components::{Layout, SocialButtons, TextField};
use crate::app::session::use_session;
use crate::app::Route;
use crate::error::messages;
use crate::forms::{LoginForm, SocialIntent};
use crate::session::SessionStore;

#[component]
pub fn Login() -> Element {
    let mut ctx = use_session();
    let navigator = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        let current = form();

        spawn(async move {
            let result =
                crate::auth::login(&ctx.api(), &SessionStore::browser(), &current).await;
            loading.set(false);
            match result {
                Ok(session) => {
                    ctx.signed_in(session);
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.user_message(messages::LOGIN_FAILED)));
                }
            }
        });
    };

    let values = form();
    let submit_label = if loading() { "Giriş yapılıyor..." } else { "Giriş Yap" };

    rsx! {
        Layout {
            title: "Giriş Yap".to_string(),
            nav_active: "login".to_string(),

            div { class: "max-w-md mx-auto px-4 py-12",
                div { class: "card p-8",
                    h2 { class: "text-2xl font-bold text-center mb-6", "Giriş Yap" }

                    if let Some(msg) = error() {
                        div { class: "alert alert-danger mb-3", "{msg}" }
                    }

                    form { onsubmit: submit,
                        TextField {
                            label: "Kullanıcı Adı".to_string(),
                            value: values.username.clone(),
                            placeholder: "Kullanıcı adınızı girin".to_string(),
                            required: true,
                            on_input: move |v| form.write().username = v,
                        }
                        TextField {
                            label: "Şifre".to_string(),
                            value: values.password.clone(),
                            input_type: "password".to_string(),
                            placeholder: "Şifrenizi girin".to_string(),
                            required: true,
                            on_input: move |v| form.write().password = v,
                        }
                        button {
                            class: "btn btn-primary w-full text-lg mt-2",
                            r#type: "submit",
                            disabled: loading(),
                            "{submit_label}"
                        }
                    }

                    div { class: "my-6",
                        SocialButtons {
                            intent: SocialIntent::SignIn,
                            on_notice: move |msg| notice.set(Some(msg)),
                        }
                    }
                    if let Some(msg) = notice() {
                        div { class: "alert alert-info mb-3", "{msg}" }
                    }

                    p { class: "text-center text-sm",
                        span { class: "text-gray-500", "Hesabınız yok mu? " }
                        Link { class: "text-indigo-600 hover:underline", to: Route::Register {}, "Hesap Oluştur" }
                    }
                }
            }
        }
    }
}
