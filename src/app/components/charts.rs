//! SVG chart components for the admin dashboard.

use dioxus::prelude::*;

use crate::charts::{doughnut, LineChart};
use crate::format;

const LINE_WIDTH: f64 = 600.0;
const LINE_HEIGHT: f64 = 260.0;
const LINE_PADDING: f64 = 40.0;
const GRID_LINES: usize = 4;

/// Filled line chart, one point per `(label, value)`
#[component]
pub fn LineChartView(series: Vec<(String, f64)>, #[props(default)] empty_text: String) -> Element {
    let chart = LineChart::new(&series, LINE_WIDTH, LINE_HEIGHT, LINE_PADDING);
    if chart.is_empty() {
        return rsx! {
            p { class: "text-sm text-gray-500 text-center py-10", "{empty_text}" }
        };
    }

    let line = chart.line_path();
    let area = chart.area_path();
    let grid: Vec<(f64, String)> = chart
        .grid_lines(GRID_LINES)
        .into_iter()
        .map(|(y, value)| (y, format::price(value)))
        .collect();
    let right = LINE_WIDTH - LINE_PADDING;
    let label_y = LINE_HEIGHT - LINE_PADDING / 3.0;

    rsx! {
        svg {
            class: "w-full h-auto",
            view_box: "0 0 {LINE_WIDTH} {LINE_HEIGHT}",
            role: "img",
            for (y, label) in grid {
                line { x1: "{LINE_PADDING}", x2: "{right}", y1: "{y}", y2: "{y}", stroke: "#e5e7eb" }
                text { x: "4", y: "{y}", "font-size": "9", fill: "#6b7280", "{label}" }
            }
            path { d: "{area}", fill: "rgba(102, 126, 234, 0.15)" }
            path { d: "{line}", fill: "none", stroke: "#667eea", "stroke-width": "2" }
            for point in chart.points.iter() {
                circle { cx: "{point.x}", cy: "{point.y}", r: "3.5", fill: "#667eea",
                    title { "{point.label}: {point.value}" }
                }
                text {
                    x: "{point.x}",
                    y: "{label_y}",
                    "text-anchor": "middle",
                    "font-size": "10",
                    fill: "#6b7280",
                    "{point.label}"
                }
            }
        }
    }
}

/// Doughnut with a legend underneath
#[component]
pub fn DoughnutView(items: Vec<(String, f64)>, #[props(default)] empty_text: String) -> Element {
    let slices = doughnut(&items, 100.0, 100.0, 90.0, 55.0);
    if slices.is_empty() {
        return rsx! {
            p { class: "text-sm text-gray-500 text-center py-10", "{empty_text}" }
        };
    }

    let legend: Vec<(&'static str, String)> = slices
        .iter()
        .map(|s| (s.color, format!("{} ({:.0}%)", s.label, s.percent)))
        .collect();

    rsx! {
        div { class: "flex flex-col items-center",
            svg { class: "w-48 h-48", view_box: "0 0 200 200", role: "img",
                for slice in slices.iter() {
                    path { d: "{slice.path}", fill: "{slice.color}",
                        title { "{slice.label}: {slice.value}" }
                    }
                }
            }
            ul { class: "mt-4 space-y-1 text-sm",
                for (color, label) in legend {
                    li { class: "flex items-center gap-2",
                        span { class: "inline-block w-3 h-3 rounded-sm", style: "background: {color}" }
                        "{label}"
                    }
                }
            }
        }
    }
}
