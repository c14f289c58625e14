//! Secure payment dialog.
//!
//! Saved cards come from the API; the new-card field is mounted into
//! `#card-element` by the host page's gateway shim.

use dioxus::prelude::*;
use eventticket_wire::Event;

use super::modal::Modal;
use crate::app::session::use_session;
use crate::checkout::{checkout, default_gateway, CardChoice, Order, Receipt};
use crate::error::messages;
use crate::format;

/// Element id the gateway SDK mounts its card input into
pub const CARD_ELEMENT_ID: &str = "card-element";

#[derive(Props, Clone, PartialEq)]
pub struct PaymentModalProps {
    pub event: Event,
    pub order: Order,
    pub on_close: EventHandler<()>,
    pub on_success: EventHandler<Receipt>,
}

#[component]
pub fn PaymentModal(props: PaymentModalProps) -> Element {
    let ctx = use_session();
    let mut selected_card = use_signal(|| CardChoice::NewCard);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Saved cards are optional; a failure just leaves the list empty
    let saved_cards = use_resource(move || async move {
        match ctx.api().payment_methods().await {
            Ok(methods) => methods.payment_methods,
            Err(e) => {
                tracing::warn!("Failed to load saved cards: {}", e);
                Vec::new()
            }
        }
    });

    let on_close = props.on_close;
    let on_success = props.on_success;
    let order = props.order.clone();

    let pay = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        let order = order.clone();
        let card = selected_card();

        spawn(async move {
            let api = ctx.api();
            let gateway = default_gateway();
            let result = checkout(&api, gateway.as_ref(), &order, &card).await;
            loading.set(false);
            match result {
                Ok(receipt) => on_success.call(receipt),
                Err(e) => {
                    tracing::warn!("Checkout failed: {}", e);
                    error.set(Some(e.user_message(messages::PAYMENT_FAILED)));
                }
            }
        });
    };

    let cards: Vec<(String, String)> = saved_cards
        .read()
        .as_ref()
        .map(|cards| cards.iter().map(|c| (c.id.clone(), c.label())).collect())
        .unwrap_or_default();
    let choice = selected_card();
    let quantity = props.order.quantity();
    let unit = format::price(props.event.price);
    // The backend charges the event price per ticket, seat prices aside
    let total = format::price(props.order.charge());
    let pay_label = if loading() {
        "Ödeme İşleniyor...".to_string()
    } else {
        format!("{} Öde", total)
    };
    let seats = props.order.seat_number();

    rsx! {
        Modal {
            title: "Güvenli Ödeme".to_string(),
            size: "max-w-2xl".to_string(),
            on_close: move |_| on_close.call(()),

            if let Some(msg) = error() {
                div { class: "alert alert-danger mb-3", "{msg}" }
            }

            form { onsubmit: pay,
                h5 { class: "text-lg font-semibold mb-3", "Ödeme Bilgileri" }

                if !cards.is_empty() {
                    div { class: "mb-3 space-y-2",
                        h6 { class: "font-medium", "Kayıtlı Kartlar" }
                        for (id, label) in cards.iter() {
                            label { key: "{id}", class: "flex items-center gap-2 text-sm",
                                input {
                                    r#type: "radio",
                                    name: "savedCard",
                                    value: "{id}",
                                    checked: choice.form_value() == id.as_str(),
                                    onchange: move |e| selected_card.set(CardChoice::from_form_value(&e.value())),
                                }
                                "{label}"
                            }
                        }
                        label { class: "flex items-center gap-2 text-sm",
                            input {
                                r#type: "radio",
                                name: "savedCard",
                                value: "",
                                checked: choice == CardChoice::NewCard,
                                onchange: move |_| selected_card.set(CardChoice::NewCard),
                            }
                            "Yeni kart kullan"
                        }
                    }
                }

                if choice == CardChoice::NewCard {
                    div { id: CARD_ELEMENT_ID, class: "input py-3 mb-3" }
                }

                div { class: "bg-gray-50 rounded-lg p-3 text-sm space-y-1",
                    div { class: "flex justify-between",
                        span { "Etkinlik:" }
                        span { "{props.event.title}" }
                    }
                    div { class: "flex justify-between",
                        span { "Miktar:" }
                        span { "{quantity} bilet" }
                    }
                    if let Some(seats) = seats {
                        div { class: "flex justify-between",
                            span { "Koltuklar:" }
                            span { "{seats}" }
                        }
                    }
                    div { class: "flex justify-between",
                        span { "Birim Fiyat:" }
                        span { "{unit}" }
                    }
                    div { class: "flex justify-between font-bold",
                        span { "Toplam:" }
                        span { "{total}" }
                    }
                }

                button {
                    class: "btn btn-primary w-full mt-4",
                    r#type: "submit",
                    disabled: loading(),
                    "{pay_label}"
                }
            }

            p { class: "text-xs text-gray-500 mt-3",
                "🛡️ Ödeme bilgileriniz SSL ile şifrelenir ve güvenle işlenir."
            }
        }
    }
}
