//! Event listing with a free-text search.

use dioxus::prelude::*;

use crate::api::EventQuery;
use crate::app::components::{EventCard, Layout};
use crate::app::session::use_session;

#[component]
pub fn Events() -> Element {
    let ctx = use_session();
    let mut search_input = use_signal(String::new);
    let mut query = use_signal(EventQuery::default);

    // Re-runs whenever the submitted query changes
    let events = use_resource(move || async move {
        let query = query();
        ctx.api().list_events(&query).await
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        query.set(EventQuery::search(&search_input()));
    };
    let clear = move |_: MouseEvent| {
        search_input.set(String::new());
        query.set(EventQuery::default());
    };

    let active_search = query.read().search.clone().filter(|s| !s.trim().is_empty());

    let content = match &*events.read() {
        None => rsx! {
            div { class: "card p-6 text-center text-gray-500", aria_busy: "true", "Yükleniyor..." }
        },
        Some(Err(e)) => {
            tracing::warn!("Failed to load events: {}", e);
            rsx! {
                div { class: "text-center py-10",
                    h4 { class: "text-xl font-semibold", "Henüz etkinlik bulunmuyor" }
                }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            div { class: "text-center py-10",
                if let Some(term) = active_search.clone() {
                    h4 { class: "text-xl font-semibold", "\"{term}\" için sonuç bulunamadı" }
                } else {
                    h4 { class: "text-xl font-semibold", "Henüz etkinlik bulunmuyor" }
                }
            }
        },
        Some(Ok(list)) => rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for event in list.iter() {
                    EventCard { key: "{event.id}", event: event.clone() }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Etkinlikler".to_string(),
            nav_active: "events".to_string(),

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
                h1 { class: "text-3xl font-bold text-center mb-8", "Etkinlikler" }

                form { class: "flex gap-2 max-w-2xl mx-auto mb-10", onsubmit: submit,
                    input {
                        class: "input",
                        r#type: "search",
                        placeholder: "Binlerce etkinlik ve mekan arasında aradığınızı bulun...",
                        value: "{search_input}",
                        oninput: move |e| search_input.set(e.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Ara" }
                    if active_search.is_some() {
                        button { class: "btn btn-secondary", r#type: "button", onclick: clear, "Temizle" }
                    }
                }

                {content}
            }
        }
    }
}
