//! Landing page: hero banner and the first few events.

use dioxus::prelude::*;

use crate::api::EventQuery;
use crate::app::components::{EventCard, Layout};
use crate::app::session::use_session;
use crate::app::Route;

/// Events shown in the "Öne Çıkan Etkinlikler" row
const FEATURED_COUNT: usize = 3;

#[component]
pub fn Home() -> Element {
    let ctx = use_session();

    let events = use_resource(move || async move {
        match ctx.api().list_events(&EventQuery::default()).await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Failed to load events: {}", e);
                Vec::new()
            }
        }
    });

    let content = match &*events.read() {
        None => rsx! {
            div { class: "card p-6 text-center text-gray-500", aria_busy: "true", "Yükleniyor..." }
        },
        Some(list) if list.is_empty() => rsx! {
            div { class: "text-center py-10",
                h4 { class: "text-xl font-semibold", "Henüz etkinlik bulunmuyor" }
                p { class: "text-gray-500", "Yakında harika etkinlikler eklenecek!" }
            }
        },
        Some(list) => {
            let has_more = list.len() > FEATURED_COUNT;
            rsx! {
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    for event in list.iter().take(FEATURED_COUNT) {
                        EventCard { key: "{event.id}", event: event.clone() }
                    }
                }
                if has_more {
                    div { class: "text-center mt-8",
                        Link { class: "btn btn-outline", to: Route::Events {}, "Tüm Etkinlikleri Görüntüle" }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Ana Sayfa".to_string(),
            nav_active: "home".to_string(),

            section { class: "hero py-20",
                div { class: "max-w-7xl mx-auto px-4 text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold mb-4", "En İyi Etkinlikleri Keşfedin" }
                    p { class: "text-lg text-indigo-100 mb-8",
                        "Konserler, konferanslar, spor etkinlikleri ve daha fazlası. Biletlerinizi güvenle satın alın."
                    }
                    Link { class: "btn bg-white text-indigo-600 text-lg px-6 py-3", to: Route::Events {}, "Etkinlikleri Görüntüle" }
                }
            }

            section { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
                div { class: "text-center mb-10",
                    h2 { class: "text-3xl font-bold", "Öne Çıkan Etkinlikler" }
                    p { class: "text-gray-500", "En popüler ve yaklaşan etkinliklerimizi keşfedin" }
                }
                {content}
            }
        }
    }
}
