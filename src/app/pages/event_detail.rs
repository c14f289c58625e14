//! Event detail page with live counters, purchase flow and recommendations.

use dioxus::prelude::*;
use eventticket_wire::{Event, TicketQrPayload};

use crate::app::components::{
    Layout, LiveTickets, LoginModal, PaymentModal, QrTicketModal, Recommendations,
    TicketPurchaseModal,
};
use crate::app::session::use_session;
use crate::app::Route;
use crate::checkout::{Order, Receipt};
use crate::format;
use crate::live::{Availability, Update};

/// Which dialog is open. Only one is shown at a time.
#[derive(Clone, PartialEq)]
enum Dialog {
    Closed,
    Purchase,
    Login,
    Payment(Order),
    Ticket(TicketQrPayload),
}

/// Route entry. Keyed by id so navigating between events resets all state
/// and reopens the live channel.
#[component]
pub fn EventDetail(id: i64) -> Element {
    rsx! {
        EventDetailView { key: "{id}", id }
    }
}

#[component]
fn EventDetailView(id: i64) -> Element {
    let ctx = use_session();
    let event = use_resource(use_reactive!(|id| async move { ctx.api().get_event(id).await }));

    let title = match &*event.read() {
        Some(Ok(e)) => e.title.clone(),
        _ => "Etkinlik".to_string(),
    };

    let content = match &*event.read() {
        None => rsx! {
            div { class: "card p-6 text-center text-gray-500", aria_busy: "true", "Yükleniyor..." }
        },
        Some(Err(e)) => {
            tracing::warn!("Failed to load event {}: {}", id, e);
            rsx! {
                div { class: "max-w-7xl mx-auto px-4 py-16",
                    h4 { class: "text-xl font-semibold mb-4", "Etkinlik bulunamadı" }
                    Link { class: "btn btn-outline", to: Route::Events {}, "Etkinliklere Dön" }
                }
            }
        }
        Some(Ok(loaded)) => rsx! {
            EventBody { event: loaded.clone() }
        },
    };

    rsx! {
        Layout {
            title: title,
            nav_active: "events".to_string(),
            {content}
        }
    }
}

#[component]
fn EventBody(event: Event) -> Element {
    let mut dialog = use_signal(|| Dialog::Closed);
    let mut live_remaining = use_signal(|| None::<i64>);
    let mut notice = use_signal(|| None::<String>);

    let remaining = live_remaining().unwrap_or(event.remaining_tickets);
    let sold_out = Availability::from_remaining(Some(remaining)).is_sold_out();

    let image = event.image_url(800, 400);
    let date = format::date(&event.date);
    let time = format::time(&event.time);
    let price = format::price(event.price);
    let category = event.category_name().to_string();
    let category_slug = event.category_slug().map(str::to_string);
    let event_id = event.id;

    let on_live_update = move |update: Update| match update {
        Update::Counts { remaining, .. } => live_remaining.set(Some(remaining)),
        Update::Remaining(_) | Update::Ignored => {}
    };

    let dialog_view = match dialog() {
        Dialog::Closed => rsx! {},
        Dialog::Purchase => rsx! {
            TicketPurchaseModal {
                event: event.clone(),
                on_close: move |_| dialog.set(Dialog::Closed),
                on_login: move |_| dialog.set(Dialog::Login),
                on_checkout: move |order| dialog.set(Dialog::Payment(order)),
            }
        },
        // Signing in from the purchase flow returns to it
        Dialog::Login => rsx! {
            LoginModal {
                on_close: move |_| {
                    if dialog() == Dialog::Login {
                        dialog.set(Dialog::Closed);
                    }
                },
                on_success: move |_| dialog.set(Dialog::Purchase),
            }
        },
        Dialog::Payment(order) => {
            let paid_event = event.clone();
            let paid_order = order.clone();
            rsx! {
                PaymentModal {
                    event: event.clone(),
                    order: order,
                    on_close: move |_| dialog.set(Dialog::Closed),
                    on_success: move |receipt: Receipt| {
                        notice.set(Some(receipt.confirmation.message.clone()).filter(|m| !m.is_empty()));
                        let payload = paid_order.ticket_payload(
                            &paid_event,
                            &receipt,
                            format::now_rfc3339(),
                        );
                        dialog.set(Dialog::Ticket(payload));
                    },
                }
            }
        }
        Dialog::Ticket(payload) => rsx! {
            QrTicketModal {
                ticket: payload,
                on_close: move |_| dialog.set(Dialog::Closed),
            }
        },
    };

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
            if let Some(msg) = notice() {
                div { class: "alert alert-success mb-6", "✅ {msg}" }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                div { class: "lg:col-span-2 card overflow-hidden",
                    img { class: "w-full h-96 object-cover", src: "{image}", alt: "{event.title}" }
                    div { class: "p-8",
                        span { class: "badge bg-indigo-100 text-indigo-700 mb-3", "{category}" }
                        h1 { class: "text-3xl font-bold mb-3", "{event.title}" }
                        p { class: "text-gray-500", "📅 {date} - {time}" }
                        p { class: "text-gray-500 mb-4", "📍 {event.location}" }
                        p { class: "text-gray-700 whitespace-pre-line", "{event.description}" }
                    }
                }

                div { class: "space-y-6",
                    div { class: "card p-6",
                        h4 { class: "text-lg font-semibold", "Bilet Fiyatı" }
                        h3 { class: "text-3xl font-bold text-green-600 mb-4", "{price}" }
                        button {
                            class: "btn btn-primary w-full text-lg",
                            disabled: sold_out,
                            onclick: move |_| dialog.set(Dialog::Purchase),
                            if sold_out { "Tükendi" } else { "Bilet Satın Al" }
                        }
                    }
                    div { class: "card p-6",
                        LiveTickets { event_id, on_update: on_live_update }
                    }
                }
            }

            Recommendations {
                current_event_id: Some(event_id),
                category: category_slug,
            }
        }

        {dialog_view}
    }
}
