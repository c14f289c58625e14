//! Event summary card used by the home and events grids.

use dioxus::prelude::*;
use eventticket_wire::Event;

use crate::app::Route;
use crate::format;

/// Characters of description shown on a card
const DESCRIPTION_PREVIEW: usize = 100;

#[component]
pub fn EventCard(event: Event) -> Element {
    let image = event.image_url(400, 200);
    let date = format::date(&event.date);
    let time = format::time(&event.time);
    let price = format::price(event.price);
    let description = format::truncate(&event.description, DESCRIPTION_PREVIEW);
    let category = event.category_name().to_string();

    rsx! {
        div { class: "card overflow-hidden flex flex-col h-full",
            img { class: "w-full h-48 object-cover", src: "{image}", alt: "{event.title}" }
            div { class: "p-5 flex flex-col flex-1",
                if !category.is_empty() {
                    span { class: "badge bg-indigo-100 text-indigo-700 self-start mb-2", "{category}" }
                }
                h3 { class: "text-lg font-semibold mb-2", "{event.title}" }
                p { class: "text-sm text-gray-600 mb-3 flex-1", "{description}" }
                div { class: "text-sm text-gray-500 space-y-1 mb-4",
                    p { "📅 {date} - {time}" }
                    p { "📍 {event.location}" }
                }
                div { class: "flex items-center justify-between",
                    span { class: "text-xl font-bold text-indigo-600", "{price}" }
                    Link { class: "btn btn-primary", to: Route::EventDetail { id: event.id }, "Detayları Gör" }
                }
            }
        }
    }
}
