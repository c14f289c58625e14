//! Seat picker dialog.
//!
//! Mounted only while open, so every opening draws a fresh grid.

use dioxus::prelude::*;

use super::modal::Modal;
use crate::format;
use crate::seating::{Seat, SeatCategory, SeatSelection};

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_SEATS_PER_ROW: u32 = 12;

#[derive(Props, Clone, PartialEq)]
pub struct SeatSelectionProps {
    #[props(default = DEFAULT_ROWS)]
    pub rows: usize,
    #[props(default = DEFAULT_SEATS_PER_ROW)]
    pub seats_per_row: u32,
    pub on_close: EventHandler<()>,
    pub on_seats_selected: EventHandler<Vec<Seat>>,
}

#[component]
pub fn SeatSelectionModal(props: SeatSelectionProps) -> Element {
    let rows = props.rows;
    let seats_per_row = props.seats_per_row;
    let mut selection = use_signal(move || {
        SeatSelection::generate(rows, seats_per_row, &mut rand::thread_rng())
    });

    let on_close = props.on_close;
    let on_seats_selected = props.on_seats_selected;

    let cancel = move |_: MouseEvent| {
        selection.write().cancel();
        on_close.call(());
    };
    let confirm = move |_: MouseEvent| {
        let seats = selection.write().confirm();
        tracing::debug!("Confirmed {} seats", seats.len());
        on_seats_selected.call(seats);
        on_close.call(());
    };

    let state = selection.read();
    let selected: Vec<Seat> = state.selected().to_vec();
    let total = format::price(f64::from(state.total_price()));
    let can_confirm = state.can_confirm();
    let count = selected.len();
    let free = state.available_count();
    let grid: Vec<(char, Vec<Seat>)> = state
        .rows()
        .into_iter()
        .map(|(row, seats)| (row, seats.into_iter().cloned().collect()))
        .collect();
    drop(state);

    let legend: Vec<(&'static str, String)> =
        [SeatCategory::Standard, SeatCategory::Premium, SeatCategory::Vip]
            .iter()
            .map(|c| (c.css_class(), format!("{} - ₺{}", c.label(), c.price())))
            .collect();

    rsx! {
        Modal {
            title: "Koltuk Seçimi".to_string(),
            size: "max-w-4xl".to_string(),
            on_close: move |_| {
                selection.write().cancel();
                on_close.call(());
            },
            footer: rsx! {
                button { class: "btn btn-secondary", onclick: cancel, "İptal" }
                button {
                    class: "btn btn-primary",
                    disabled: !can_confirm,
                    onclick: confirm,
                    "Seçimi Onayla ({count} koltuk)"
                }
            },

            div { class: "stage mb-2", "🎵 SAHNE" }
            p { class: "text-center text-xs text-gray-500 mb-6", "Müsait koltuk: {free}" }

            div { class: "overflow-x-auto mb-6",
                for (row, seats) in grid {
                    div { key: "{row}", class: "flex items-center justify-center",
                        span { class: "w-6 text-sm font-semibold text-gray-500", "{row}" }
                        for seat in seats {
                            SeatButton {
                                key: "{seat.id}",
                                seat: seat.clone(),
                                on_toggle: move |id: String| {
                                    selection.write().toggle(&id);
                                },
                            }
                        }
                    }
                }
            }

            div { class: "flex flex-wrap gap-4 justify-center text-sm mb-4",
                for (class, label) in legend.iter() {
                    div { class: "flex items-center gap-1",
                        span { class: "seat {class} inline-block" }
                        "{label}"
                    }
                }
                div { class: "flex items-center gap-1",
                    span { class: "seat seat-occupied inline-block" }
                    "Dolu"
                }
                div { class: "flex items-center gap-1",
                    span { class: "seat seat-selected inline-block" }
                    "Seçili"
                }
            }

            if !selected.is_empty() {
                div { class: "alert alert-info",
                    h6 { class: "font-semibold mb-2", "Seçilen Koltuklar:" }
                    div { class: "flex flex-wrap gap-2 mb-2",
                        for seat in selected.iter() {
                            span { key: "{seat.id}", class: "badge bg-indigo-600 text-white",
                                "{seat.id} - ₺{seat.price}"
                            }
                        }
                    }
                    strong { "Toplam: {total}" }
                }
            }
        }
    }
}

#[component]
fn SeatButton(seat: Seat, on_toggle: EventHandler<String>) -> Element {
    let class = if !seat.available {
        "seat seat-occupied".to_string()
    } else if seat.selected {
        "seat seat-selected".to_string()
    } else {
        format!("seat {}", seat.category.css_class())
    };
    let id = seat.id.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: !seat.available,
            title: "{seat.id} - ₺{seat.price}",
            onclick: move |_| on_toggle.call(id.clone()),
            "{seat.number}"
        }
    }
}
