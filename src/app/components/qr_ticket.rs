//! QR ticket dialog with an SVG download.

use dioxus::prelude::*;
use eventticket_wire::TicketQrPayload;

use super::modal::Modal;
use crate::format;
use crate::qr;

#[derive(Props, Clone, PartialEq)]
pub struct QrTicketModalProps {
    pub ticket: TicketQrPayload,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn QrTicketModal(props: QrTicketModalProps) -> Element {
    let on_close = props.on_close;
    let ticket = props.ticket.clone();

    let svg = use_memo(use_reactive!(|ticket| qr::ticket_svg(&ticket, qr::QR_SIZE)));

    let rendered = svg();
    let download = rendered
        .as_ref()
        .ok()
        .map(|svg| (qr::svg_data_url(svg), qr::download_file_name(&ticket.ticket_number)));
    let date = format::date(&ticket.event_date);
    let time = format::time(&ticket.event_time);
    let price = format::price(ticket.price);

    rsx! {
        Modal {
            title: "Bilet QR Kodu".to_string(),
            on_close: move |_| on_close.call(()),
            footer: rsx! {
                button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "Kapat" }
                if let Some((href, file_name)) = download.clone() {
                    a { class: "btn btn-primary", href: "{href}", download: "{file_name}", "⬇ QR Kodu İndir" }
                }
            },

            div { class: "card p-6 text-center border",
                {match rendered {
                    Ok(markup) => rsx! {
                        div { class: "flex justify-center", dangerous_inner_html: "{markup}" }
                    },
                    Err(e) => {
                        tracing::warn!("QR rendering failed: {}", e);
                        rsx! {
                            div { class: "alert alert-danger", "QR kod oluşturulamadı." }
                        }
                    }
                }}
                div { class: "mt-4 space-y-1",
                    h5 { class: "text-lg font-semibold", "{ticket.event_title}" }
                    p { class: "text-sm text-gray-600", "📅 {date}" }
                    p { class: "text-sm text-gray-600", "🕒 {time}" }
                    if let Some(seat) = ticket.seat_number.clone() {
                        p { class: "text-sm text-gray-600", "🪑 Koltuk: {seat}" }
                    }
                    p { class: "font-semibold", "Bilet No: {ticket.ticket_number}" }
                    p { class: "text-indigo-600 font-bold", "{price}" }
                }
            }
        }
    }
}
