//! Live counters, purchase notices and stock warnings for one event.
//!
//! Two tasks are owned by the component: the socket loop feeding
//! `TicketCountState::apply`, and a purge tick that expires old notices and
//! refreshes their "N saniye önce" ages. Both stop when the view unmounts.

use dioxus::prelude::*;
use eventticket_wire::{ClientMessage, ServerMessage};

use crate::app::socket::{LiveSocket, SocketEvent};
use crate::config;
use crate::live::{now_millis, Availability, ConnectionState, TicketCountState, Update};

#[derive(Props, Clone, PartialEq)]
pub struct LiveTicketsProps {
    pub event_id: i64,
    /// Counter changes, forwarded so the page can gate the purchase button
    pub on_update: EventHandler<Update>,
}

#[component]
pub fn LiveTickets(props: LiveTicketsProps) -> Element {
    let event_id = props.event_id;
    let on_update = props.on_update;
    let mut state = use_signal(TicketCountState::default);
    let mut connection = use_signal(ConnectionState::default);
    let mut now = use_signal(now_millis);

    // Socket loop
    use_future(move || async move {
        let url = config::active().event_socket_url(event_id);
        let mut socket = match LiveSocket::connect(&url) {
            Ok(socket) => socket,
            Err(e) => {
                tracing::warn!("Live updates unavailable for event {}: {}", event_id, e);
                connection.set(ConnectionState::Disconnected);
                return;
            }
        };

        while let Some(event) = socket.next().await {
            match event {
                SocketEvent::Open => {
                    tracing::debug!("Live channel open for event {}", event_id);
                    connection.set(ConnectionState::Connected);
                    for message in ClientMessage::PRIMING {
                        socket.send(&message);
                    }
                }
                SocketEvent::Message(text) => match serde_json::from_str::<ServerMessage>(&text) {
                    Ok(message) => {
                        let kind = message.kind();
                        let update = state.write().apply(message, now_millis());
                        if update == Update::Ignored {
                            tracing::debug!("Ignoring {} message", kind);
                        } else if update.notifies_parent() {
                            on_update.call(update);
                        }
                    }
                    Err(e) => tracing::debug!("Ignoring malformed frame: {}", e),
                },
                SocketEvent::Error(e) => {
                    tracing::warn!("Live channel error for event {}: {}", event_id, e);
                }
                SocketEvent::Closed => break,
            }
        }
        connection.set(ConnectionState::Disconnected);
    });

    // Notice purge
    use_future(move || async move {
        while tick().await {
            let t = now_millis();
            state.write().purge(t);
            now.set(t);
        }
    });

    let current = state.read();
    let sold = current.sold;
    let remaining = current
        .remaining
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let availability = current.availability();
    let t = now();
    let notices: Vec<(String, u64)> = current
        .notices()
        .map(|n| (n.user.clone(), n.age_secs(t)))
        .collect();
    drop(current);

    let conn = connection();
    let conn_label = conn.label();
    let badge_class = match conn {
        ConnectionState::Connected => "badge badge-ok",
        ConnectionState::Disconnected => "badge badge-err",
        ConnectionState::Connecting => "badge badge-muted",
    };
    let remaining_class = if matches!(availability, Availability::Low(_) | Availability::SoldOut) {
        "font-semibold text-red-600"
    } else {
        "font-semibold"
    };

    rsx! {
        div { class: "space-y-3",
            span { class: "{badge_class}", "{conn_label}" }

            div { class: "grid grid-cols-2 gap-2 text-sm",
                div { class: "bg-gray-50 rounded p-2",
                    span { class: "block text-gray-500", "Satılan Bilet:" }
                    span { class: "font-semibold", "{sold}" }
                }
                div { class: "bg-gray-50 rounded p-2",
                    span { class: "block text-gray-500", "Kalan Bilet:" }
                    span { class: "{remaining_class}", "{remaining}" }
                }
            }

            if !notices.is_empty() {
                div { class: "alert alert-info",
                    h6 { class: "font-semibold mb-1", "⚡ Son Satın Almalar" }
                    for (i, (user, age)) in notices.iter().enumerate() {
                        div { key: "{i}", class: "text-sm",
                            span { "👤 {user}" }
                            small { class: "text-gray-500 ml-2", "{age} saniye önce" }
                        }
                    }
                }
            }

            if let Some(warning) = availability.warning() {
                div {
                    class: if availability.is_sold_out() { "alert alert-danger" } else { "alert alert-warning" },
                    "{warning}"
                }
            }
        }
    }
}

/// Wait one purge interval. Returns false where no timer exists (SSR).
#[cfg(target_arch = "wasm32")]
async fn tick() -> bool {
    gloo_timers::future::TimeoutFuture::new(crate::live::PURGE_INTERVAL_MS as u32).await;
    true
}

#[cfg(not(target_arch = "wasm32"))]
async fn tick() -> bool {
    false
}
