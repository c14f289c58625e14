//! "Size Özel Öneriler" block on the event detail page.

use dioxus::prelude::*;

use crate::api::EventQuery;
use crate::app::session::use_session;
use crate::app::Route;
use crate::error::messages;
use crate::format;
use crate::recommend::{self, Recommendation};

#[derive(Props, Clone, PartialEq)]
pub struct RecommendationsProps {
    #[props(default)]
    pub current_event_id: Option<i64>,
    /// Category slug to favour (also used as the API filter)
    #[props(default)]
    pub category: Option<String>,
    #[props(default = recommend::DEFAULT_LIMIT)]
    pub limit: usize,
}

#[component]
pub fn Recommendations(props: RecommendationsProps) -> Element {
    let ctx = use_session();
    let current_event_id = props.current_event_id;
    let category = props.category.clone();
    let limit = props.limit;

    let recommendations = use_resource(use_reactive!(|current_event_id, category, limit| async move {
        let query = category
            .as_deref()
            .map(EventQuery::category)
            .unwrap_or_default();
        let events = ctx.api().list_events(&query).await?;
        Ok::<_, crate::StoreError>(recommend::rank(
            events,
            current_event_id,
            category.as_deref(),
            limit,
        ))
    }));

    let content = match &*recommendations.read() {
        None => rsx! {
            div { class: "card p-6 text-center text-gray-500", aria_busy: "true", "Öneriler yükleniyor..." }
        },
        Some(Err(e)) => {
            tracing::warn!("Recommendations failed: {}", e);
            rsx! {
                div { class: "alert alert-warning", {messages::RECOMMENDATIONS_FAILED} }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            div { class: "alert alert-info", "ℹ️ Şu anda önerilebilecek etkinlik bulunmuyor." }
        },
        Some(Ok(list)) => rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for rec in list.iter() {
                    RecommendationCard { key: "{rec.event.id}", rec: rec.clone() }
                }
            }
        },
    };

    rsx! {
        section { class: "mt-12",
            h4 { class: "text-2xl font-bold", "⭐ Size Özel Öneriler" }
            p { class: "text-gray-500 mb-6", "İlginizi çekebilecek etkinlikler" }
            {content}
        }
    }
}

#[component]
fn RecommendationCard(rec: Recommendation) -> Element {
    let event = rec.event;
    let image = event.image_url(400, 200);
    let category = event.category_name().to_string();
    let description = format::truncate(&event.description, 100);
    let date = format::date(&event.date);
    let time = format::time(&event.time);
    let price = format::price(event.price);

    rsx! {
        div { class: "card overflow-hidden flex flex-col h-full",
            div { class: "relative",
                img { class: "w-full h-40 object-cover", src: "{image}", alt: "{event.title}" }
                span { class: "badge bg-yellow-400 text-gray-900 absolute top-2 left-2", "⭐ Önerilen" }
                span { class: "badge bg-white text-indigo-700 absolute top-2 right-2", "{category}" }
            }
            div { class: "p-4 flex flex-col flex-1",
                h5 { class: "font-semibold mb-1", "{event.title}" }
                p { class: "text-sm text-gray-600 mb-3", "{description}" }
                div { class: "text-xs text-gray-500 space-y-1 mb-3",
                    p { "📅 {date}" }
                    p { "🕒 {time}" }
                    p { "📍 {event.location}" }
                }
                div { class: "mt-auto flex items-center justify-between",
                    div {
                        span { class: "block font-bold text-indigo-600", "{price}" }
                        span { class: "text-xs text-gray-500", "{event.remaining_tickets} bilet kaldı" }
                    }
                    Link { class: "btn btn-primary text-sm", to: Route::EventDetail { id: event.id }, "Detayları Gör" }
                }
            }
        }
    }
}
