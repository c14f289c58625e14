//! Account page: profile card, purchased tickets and logout.

use dioxus::prelude::*;
use eventticket_wire::{Ticket, TicketQrPayload, TicketStatus};

use crate::app::components::{Layout, QrTicketModal, RequireAuth};
use crate::app::session::use_session;
use crate::app::Route;
use crate::error::messages;
use crate::format;

#[component]
pub fn Profile() -> Element {
    rsx! {
        Layout {
            title: "Profilim".to_string(),
            nav_active: "profile".to_string(),
            RequireAuth {
                ProfileBody {}
            }
        }
    }
}

#[component]
fn ProfileBody() -> Element {
    let mut ctx = use_session();
    let navigator = use_navigator();
    let mut qr_ticket = use_signal(|| None::<TicketQrPayload>);

    let profile = use_resource(move || async move { ctx.api().profile().await });
    let tickets = use_resource(move || async move { ctx.api().tickets().await });

    let logout = move |_: MouseEvent| {
        ctx.sign_out();
        navigator.push(Route::Home {});
    };

    let profile_card = match &*profile.read() {
        None => rsx! {
            div { class: "card p-6 text-center text-gray-500", aria_busy: "true", "Yükleniyor..." }
        },
        Some(Err(e)) => {
            tracing::warn!("Failed to load profile: {}", e);
            rsx! {
                div { class: "alert alert-danger", {messages::PROFILE_FAILED} }
            }
        }
        Some(Ok(user)) => {
            let initial = user.initial();
            let full_name = format!("{} {}", user.first_name, user.last_name);
            rsx! {
                div { class: "card p-8",
                    div { class: "text-center mb-6",
                        div { class: "w-20 h-20 mx-auto rounded-full hero text-3xl font-bold flex items-center justify-center",
                            "{initial}"
                        }
                        h2 { class: "text-2xl font-bold mt-3", "{full_name}" }
                        p { class: "text-gray-500", "@{user.username}" }
                    }
                    dl { class: "divide-y text-sm",
                        div { class: "flex justify-between py-2",
                            dt { class: "text-gray-500", "E-posta:" }
                            dd { "{user.email}" }
                        }
                        div { class: "flex justify-between py-2",
                            dt { class: "text-gray-500", "Kullanıcı Adı:" }
                            dd { "{user.username}" }
                        }
                        div { class: "flex justify-between py-2",
                            dt { class: "text-gray-500", "Ad Soyad:" }
                            dd { "{full_name}" }
                        }
                    }
                    div { class: "flex gap-2 mt-6",
                        Link { class: "btn btn-outline", to: Route::Events {}, "Etkinlikleri Görüntüle" }
                        button { class: "btn bg-red-600 text-white", onclick: logout, "Çıkış Yap" }
                    }
                }
            }
        }
    };

    let ticket_list = match &*tickets.read() {
        None => rsx! {
            div { class: "card p-6 text-center text-gray-500", aria_busy: "true", "Yükleniyor..." }
        },
        Some(Err(e)) => {
            tracing::warn!("Failed to load tickets: {}", e);
            rsx! {
                div { class: "alert alert-warning", "Biletler yüklenirken bir hata oluştu." }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            div { class: "alert alert-info", "Henüz biletiniz bulunmuyor." }
        },
        Some(Ok(list)) => rsx! {
            div { class: "space-y-3",
                for ticket in list.iter() {
                    TicketRow {
                        key: "{ticket.id}",
                        ticket: ticket.clone(),
                        on_show_qr: move |payload| qr_ticket.set(Some(payload)),
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "max-w-3xl mx-auto px-4 py-10 space-y-8",
            {profile_card}
            section {
                h3 { class: "text-xl font-bold mb-4", "🎫 Biletlerim" }
                {ticket_list}
            }
        }

        if let Some(payload) = qr_ticket() {
            QrTicketModal {
                ticket: payload,
                on_close: move |_| qr_ticket.set(None),
            }
        }
    }
}

#[component]
fn TicketRow(ticket: Ticket, on_show_qr: EventHandler<TicketQrPayload>) -> Element {
    let date = format::date(&ticket.event.date);
    let time = format::time(&ticket.event.time);
    let purchased = format::datetime(&ticket.purchase_date);
    let total = format::price(ticket.total_price);
    let status = ticket.status.label();
    let status_class = match ticket.status {
        TicketStatus::Active if !ticket.is_cancelled => "badge badge-ok",
        TicketStatus::Active | TicketStatus::Cancelled => "badge badge-err",
        TicketStatus::Used | TicketStatus::Expired => "badge badge-muted",
    };
    let show = ticket.status == TicketStatus::Active && !ticket.is_cancelled;
    let qr_source = ticket.clone();

    rsx! {
        div { class: "card p-4 flex flex-col md:flex-row md:items-center justify-between gap-3",
            div {
                div { class: "flex items-center gap-2",
                    h5 { class: "font-semibold", "{ticket.event.title}" }
                    span { class: "{status_class}", "{status}" }
                }
                p { class: "text-sm text-gray-500", "📅 {date} - {time} · 📍 {ticket.event.location}" }
                p { class: "text-xs text-gray-400", "Bilet No: {ticket.ticket_number} · {ticket.quantity} adet · {total} · {purchased}" }
            }
            if show {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        on_show_qr.call(TicketQrPayload::for_ticket(&qr_source, None, format::now_rfc3339()));
                    },
                    "QR Kodu"
                }
            }
        }
    }
}
