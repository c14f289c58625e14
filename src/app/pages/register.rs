//! Account creation page.

use dioxus::prelude::*;

use crate::app::components::{Layout, SocialButtons, TextField};
use crate::app::session::use_session;
use crate::app::Route;
use crate::error::messages;
use crate::forms::{RegisterForm, SocialIntent};
use crate::session::SessionStore;

#[component]
pub fn Register() -> Element {
    let mut ctx = use_session();
    let navigator = use_navigator();
    let mut form = use_signal(RegisterForm::default);
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
                crate::auth::register(&ctx.api(), &SessionStore::browser(), &current).await;
            loading.set(false);
            match result {
                Ok(session) => {
                    ctx.signed_in(session);
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.user_message(messages::REGISTER_FAILED)));
                }
            }
        });
    };

    let values = form();
    let submit_label = if loading() { "Kayıt olunuyor..." } else { "Kayıt Ol" };

    rsx! {
        Layout {
            title: "Kayıt Ol".to_string(),
            nav_active: "register".to_string(),

            div { class: "max-w-md mx-auto px-4 py-12",
                div { class: "card p-8",
                    h2 { class: "text-2xl font-bold text-center mb-6", "Hesap Oluştur" }

                    if let Some(msg) = error() {
                        div { class: "alert alert-danger mb-3", "{msg}" }
                    }

                    form { onsubmit: submit,
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                            TextField {
                                label: "Ad".to_string(),
                                value: values.first_name.clone(),
                                required: true,
                                on_input: move |v| form.write().first_name = v,
                            }
                            TextField {
                                label: "Soyad".to_string(),
                                value: values.last_name.clone(),
                                required: true,
                                on_input: move |v| form.write().last_name = v,
                            }
                        }
                        TextField {
                            label: "Kullanıcı Adı".to_string(),
                            value: values.username.clone(),
                            required: true,
                            on_input: move |v| form.write().username = v,
                        }
                        TextField {
                            label: "E-posta".to_string(),
                            value: values.email.clone(),
                            input_type: "email".to_string(),
                            required: true,
                            on_input: move |v| form.write().email = v,
                        }
                        TextField {
                            label: "Şifre".to_string(),
                            value: values.password.clone(),
                            input_type: "password".to_string(),
                            required: true,
                            on_input: move |v| form.write().password = v,
                        }
                        TextField {
                            label: "Şifre Tekrar".to_string(),
                            value: values.password_confirm.clone(),
                            input_type: "password".to_string(),
                            required: true,
                            on_input: move |v| form.write().password_confirm = v,
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
                            intent: SocialIntent::SignUp,
                            on_notice: move |msg| notice.set(Some(msg)),
                        }
                    }
                    if let Some(msg) = notice() {
                        div { class: "alert alert-info mb-3", "{msg}" }
                    }

                    p { class: "text-center text-sm",
                        span { class: "text-gray-500", "Zaten hesabınız var mı? " }
                        Link { class: "text-indigo-600 hover:underline", to: Route::Login {}, "Giriş Yap" }
                    }
                }
            }
        }
    }
}
