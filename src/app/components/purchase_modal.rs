//! Ticket purchase dialog: quantity or seats, then the guest form or the
//! hand-off to payment.

use dioxus::prelude::*;
use eventticket_wire::Event;

use super::field::TextField;
use super::modal::Modal;
use super::seat_selection::SeatSelectionModal;
use crate::app::session::use_session;
use crate::checkout::Order;
use crate::error::messages;
use crate::format;
use crate::forms::GuestForm;
use crate::seating::seat_labels;

#[derive(Props, Clone, PartialEq)]
pub struct PurchaseModalProps {
    pub event: Event,
    pub on_close: EventHandler<()>,
    /// Guest asked to sign in (or filled the guest form)
    pub on_login: EventHandler<()>,
    /// Signed-in visitor is ready to pay for this order
    pub on_checkout: EventHandler<Order>,
}

#[component]
pub fn TicketPurchaseModal(props: PurchaseModalProps) -> Element {
    let ctx = use_session();
    let event_id = props.event.id;
    let unit_price = props.event.price;
    let mut order = use_signal(move || Order::new(event_id, unit_price));
    let mut guest = use_signal(GuestForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut show_seats = use_signal(|| false);

    let on_close = props.on_close;
    let on_login = props.on_login;
    let on_checkout = props.on_checkout;
    let is_logged_in = ctx.is_authenticated();

    let purchase = move |_: MouseEvent| {
        error.set(None);
        if !is_logged_in {
            // Checkout needs an account, so a valid guest is sent to sign in
            match guest.read().validate() {
                Ok(()) => on_login.call(()),
                Err(e) => error.set(Some(e.user_message(messages::REQUIRED_FIELDS))),
            }
            return;
        }
        on_checkout.call(order());
    };

    let current = order();
    let quantity = current.quantity();
    let total = format::price(current.total());
    let unit = format::price(unit_price);
    let charge = (current.total() != current.charge()).then(|| format::price(current.charge()));
    let seat_summary = current.has_seats().then(|| seat_labels(current.seats()));
    let date = format::date(&props.event.date);
    let time = format::time(&props.event.time);
    let guest_values = guest();

    rsx! {
        Modal {
            title: "Bilet Satın Al".to_string(),
            size: "max-w-3xl".to_string(),
            on_close: move |_| on_close.call(()),
            footer: rsx! {
                button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "İptal" }
                if !is_logged_in {
                    button { class: "btn btn-outline", onclick: move |_| on_login.call(()), "Üye Ol / Giriş Yap" }
                }
                button { class: "btn btn-primary", onclick: purchase, "Bilet Satın Al" }
            },

            div { class: "mb-4",
                h5 { class: "text-lg font-semibold", "{props.event.title}" }
                p { class: "text-sm text-gray-500", "📅 {date} - {time}" }
                p { class: "text-sm text-gray-500", "📍 {props.event.location}" }
            }

            if let Some(msg) = error() {
                div { class: "alert alert-danger mb-3", "{msg}" }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                div {
                    h6 { class: "font-semibold mb-2", "Bilet Bilgileri" }
                    if let Some(seats) = seat_summary.clone() {
                        p { class: "text-sm mb-2", "Seçilen koltuklar: {seats}" }
                        button {
                            class: "text-sm text-indigo-600 hover:underline mb-3",
                            onclick: move |_| order.write().set_seats(Vec::new()),
                            "Koltuk seçimini kaldır"
                        }
                    } else {
                        span { class: "block text-sm text-gray-700 mb-1", "Bilet Sayısı" }
                        div { class: "flex items-center gap-3 mb-3",
                            button {
                                class: "btn btn-secondary px-3 py-1",
                                "aria-label": "Azalt",
                                onclick: move |_| order.write().decrement(),
                                "-"
                            }
                            span { class: "text-lg font-semibold w-8 text-center", "{quantity}" }
                            button {
                                class: "btn btn-secondary px-3 py-1",
                                "aria-label": "Arttır",
                                onclick: move |_| order.write().increment(),
                                "+"
                            }
                        }
                    }
                    button {
                        class: "btn btn-outline w-full mb-4",
                        onclick: move |_| show_seats.set(true),
                        "🪑 Koltuk Seç"
                    }
                    div { class: "bg-gray-50 rounded-lg p-3 text-sm space-y-1",
                        div { class: "flex justify-between",
                            span { "Birim Fiyat:" }
                            span { "{unit}" }
                        }
                        div { class: "flex justify-between font-bold",
                            span { "Toplam:" }
                            span { "{total}" }
                        }
                        if let Some(charge) = charge {
                            div { class: "flex justify-between text-gray-500",
                                span { "Ödenecek Tutar:" }
                                span { "{charge}" }
                            }
                        }
                    }
                }
                div {
                    if is_logged_in {
                        h6 { class: "font-semibold mb-2", "Üye Bilgileri" }
                        p { class: "text-sm text-gray-500", "Biletler hesabınıza kaydedilecektir." }
                    } else {
                        h6 { class: "font-semibold mb-2", "Müşteri Bilgileri" }
                        TextField {
                            label: "Ad".to_string(),
                            value: guest_values.first_name.clone(),
                            required: true,
                            on_input: move |v| guest.write().first_name = v,
                        }
                        TextField {
                            label: "Soyad".to_string(),
                            value: guest_values.last_name.clone(),
                            required: true,
                            on_input: move |v| guest.write().last_name = v,
                        }
                        TextField {
                            label: "E-posta".to_string(),
                            value: guest_values.email.clone(),
                            input_type: "email".to_string(),
                            required: true,
                            on_input: move |v| guest.write().email = v,
                        }
                        TextField {
                            label: "Telefon".to_string(),
                            value: guest_values.phone.clone(),
                            input_type: "tel".to_string(),
                            on_input: move |v| guest.write().phone = v,
                        }
                    }
                }
            }
        }

        if show_seats() {
            SeatSelectionModal {
                on_close: move |_| show_seats.set(false),
                on_seats_selected: move |seats| order.write().set_seats(seats),
            }
        }
    }
}
