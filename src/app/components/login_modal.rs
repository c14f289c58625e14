//! Sign-in / sign-up dialog opened from the purchase flow.

use dioxus::prelude::*;

use super::field::TextField;
use super::modal::Modal;
use super::social::SocialButtons;
use crate::app::session::use_session;
use crate::error::messages;
use crate::forms::{LoginForm, RegisterForm, SocialIntent};
use crate::session::SessionStore;

#[derive(Props, Clone, PartialEq)]
pub struct LoginModalProps {
    pub on_close: EventHandler<()>,
    /// Fired once the session has been stored
    pub on_success: EventHandler<()>,
}

#[component]
pub fn LoginModal(props: LoginModalProps) -> Element {
    let mut ctx = use_session();
    let mut is_login = use_signal(|| true);
    let mut form = use_signal(RegisterForm::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let on_close = props.on_close;
    let on_success = props.on_success;

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        let current = form();
        let login_mode = is_login();

        spawn(async move {
            let api = ctx.api();
            let store = SessionStore::browser();
            let result = if login_mode {
                let login = LoginForm {
                    username: current.username.clone(),
                    password: current.password.clone(),
                };
                crate::auth::login(&api, &store, &login).await
            } else {
                crate::auth::register(&api, &store, &current).await
            };

            loading.set(false);
            match result {
                Ok(session) => {
                    ctx.signed_in(session);
                    on_success.call(());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!("Modal authentication failed: {}", e);
                    error.set(Some(e.user_message(messages::GENERIC)));
                }
            }
        });
    };

    let toggle_mode = move |_: MouseEvent| {
        is_login.toggle();
        form.set(RegisterForm::default());
        error.set(None);
        notice.set(None);
    };

    let values = form();
    let title = if is_login() { "Giriş Yap" } else { "Kayıt Ol" };
    let submit_label = if loading() { "İşleniyor..." } else { title };
    let toggle_label = if is_login() {
        "Hesabınız yok mu? Kayıt olun"
    } else {
        "Zaten hesabınız var mı? Giriş yapın"
    };

    rsx! {
        Modal {
            title: title.to_string(),
            on_close: move |_| on_close.call(()),

            div { class: "mb-4",
                SocialButtons {
                    intent: SocialIntent::SignIn,
                    on_notice: move |msg| notice.set(Some(msg)),
                }
            }

            if let Some(msg) = notice() {
                div { class: "alert alert-info mb-3", "{msg}" }
            }
            if let Some(msg) = error() {
                div { class: "alert alert-danger mb-3", "{msg}" }
            }

            form { onsubmit: submit,
                if !is_login() {
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
                }
                TextField {
                    label: "Kullanıcı Adı".to_string(),
                    value: values.username.clone(),
                    required: true,
                    on_input: move |v| form.write().username = v,
                }
                if !is_login() {
                    TextField {
                        label: "E-posta".to_string(),
                        value: values.email.clone(),
                        input_type: "email".to_string(),
                        required: true,
                        on_input: move |v| form.write().email = v,
                    }
                }
                TextField {
                    label: "Şifre".to_string(),
                    value: values.password.clone(),
                    input_type: "password".to_string(),
                    required: true,
                    on_input: move |v| form.write().password = v,
                }
                if !is_login() {
                    TextField {
                        label: "Şifre Tekrar".to_string(),
                        value: values.password_confirm.clone(),
                        input_type: "password".to_string(),
                        required: true,
                        on_input: move |v| form.write().password_confirm = v,
                    }
                }
                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    "{submit_label}"
                }
            }

            div { class: "text-center mt-3",
                button {
                    class: "text-indigo-600 hover:underline text-sm",
                    r#type: "button",
                    onclick: toggle_mode,
                    "{toggle_label}"
                }
            }
        }
    }
}
