//! SVG geometry for the admin dashboard charts.
//!
//! Components only place the shapes computed here, so all of the math stays
//! testable without a DOM.

use std::f64::consts::{FRAC_PI_2, TAU};

use eventticket_wire::{CategoryStat, MonthlyRevenue};

use crate::format;

/// Slice colours, reused cyclically
pub const PALETTE: [&str; 5] = ["#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe"];

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub max_value: f64,
    pub points: Vec<LinePoint>,
}

impl LineChart {
    /// Lay out `series` left to right inside a `width × height` box
    pub fn new(series: &[(String, f64)], width: f64, height: f64, padding: f64) -> Self {
        let max_value = series
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0_f64, f64::max);
        let scale = if max_value > 0.0 { max_value } else { 1.0 };

        let inner_w = (width - 2.0 * padding).max(0.0);
        let inner_h = (height - 2.0 * padding).max(0.0);
        let step = if series.len() > 1 {
            inner_w / (series.len() - 1) as f64
        } else {
            0.0
        };

        let points = series
            .iter()
            .enumerate()
            .map(|(i, (label, value))| LinePoint {
                x: if series.len() > 1 {
                    padding + step * i as f64
                } else {
                    width / 2.0
                },
                y: padding + inner_h - (value.max(0.0) / scale) * inner_h,
                label: label.clone(),
                value: *value,
            })
            .collect();

        Self {
            width,
            height,
            padding,
            max_value,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// y coordinate of the x axis
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    /// Polyline through every point (`M x y L x y ...`)
    pub fn line_path(&self) -> String {
        let mut path = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{}{:.1} {:.1} ", cmd, p.x, p.y));
        }
        path.trim_end().to_string()
    }

    /// The line closed down to the baseline, for the shaded area
    pub fn area_path(&self) -> String {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => format!(
                "{} L{:.1} {:.1} L{:.1} {:.1} Z",
                self.line_path(),
                last.x,
                self.baseline(),
                first.x,
                self.baseline()
            ),
            _ => String::new(),
        }
    }

    /// Evenly spaced horizontal grid lines: (y, value)
    pub fn grid_lines(&self, count: usize) -> Vec<(f64, f64)> {
        if count == 0 {
            return Vec::new();
        }
        let inner_h = self.height - 2.0 * self.padding;
        (0..=count)
            .map(|i| {
                let frac = i as f64 / count as f64;
                (
                    self.baseline() - frac * inner_h,
                    self.max_value * frac,
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoughnutSlice {
    pub label: String,
    pub value: f64,
    pub percent: f64,
    pub color: &'static str,
    pub path: String,
}

/// Ring slices for `items`, clockwise from 12 o'clock.
///
/// Items with a non-positive value are skipped; an all-zero input yields no
/// slices.
pub fn doughnut(
    items: &[(String, f64)],
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
) -> Vec<DoughnutSlice> {
    let total: f64 = items.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    let mut slices = Vec::new();
    for (i, (label, value)) in items.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        // a full ring cannot be drawn as one arc
        let sweep = (fraction * TAU).min(TAU - 1e-4);
        let end = angle + sweep;

        slices.push(DoughnutSlice {
            label: label.clone(),
            value: *value,
            percent: fraction * 100.0,
            color: PALETTE[i % PALETTE.len()],
            path: ring_segment(cx, cy, outer, inner, angle, end),
        });
        angle = end;
    }
    slices
}

fn ring_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);
    format!(
        "M{:.2} {:.2} A{r:.2} {r:.2} 0 {large} 1 {:.2} {:.2} L{:.2} {:.2} A{ri:.2} {ri:.2} 0 {large} 0 {:.2} {:.2} Z",
        ox0,
        oy0,
        ox1,
        oy1,
        ix1,
        iy1,
        ix0,
        iy0,
        r = outer,
        ri = inner,
        large = large
    )
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Monthly revenue in chronological order, labelled `Tem 2024`
pub fn revenue_series(months: &[MonthlyRevenue]) -> Vec<(String, f64)> {
    let mut sorted: Vec<&MonthlyRevenue> = months.iter().collect();
    // `YYYY-MM` sorts lexicographically
    sorted.sort_by(|a, b| a.month.cmp(&b.month));
    sorted
        .into_iter()
        .map(|m| (format::month_label(&m.month), m.revenue))
        .collect()
}

/// Event count per category
pub fn category_series(stats: &[CategoryStat]) -> Vec<(String, f64)> {
    stats
        .iter()
        .map(|c| (c.name.clone(), c.event_count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<(String, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("m{}", i), *v))
            .collect()
    }

    #[test]
    fn test_line_chart_scaling() {
        let chart = LineChart::new(&series(&[0.0, 50.0, 100.0]), 220.0, 120.0, 10.0);
        assert_eq!(chart.max_value, 100.0);
        let ys: Vec<f64> = chart.points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![110.0, 60.0, 10.0]);
        let xs: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![10.0, 110.0, 210.0]);
        assert_eq!(chart.line_path(), "M10.0 110.0 L110.0 60.0 L210.0 10.0");
        assert!(chart.area_path().ends_with("L210.0 110.0 L10.0 110.0 Z"));
    }

    #[test]
    fn test_line_chart_all_zero_sits_on_baseline() {
        let chart = LineChart::new(&series(&[0.0, 0.0]), 100.0, 100.0, 10.0);
        assert!(chart.points.iter().all(|p| p.y == chart.baseline()));
        assert_eq!(chart.grid_lines(2).len(), 3);
    }

    #[test]
    fn test_empty_line_chart() {
        let chart = LineChart::new(&[], 100.0, 100.0, 10.0);
        assert!(chart.is_empty());
        assert_eq!(chart.area_path(), "");
    }

    #[test]
    fn test_doughnut_percentages() {
        let slices = doughnut(&series(&[1.0, 3.0, 0.0]), 50.0, 50.0, 40.0, 25.0);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].percent, 25.0);
        assert_eq!(slices[1].percent, 75.0);
        assert_eq!(slices[1].color, PALETTE[1]);
        // second slice spans more than half the ring
        assert!(slices[1].path.contains(" 0 1 1 "));
        assert!(slices[0].path.starts_with("M50.00 10.00"));
    }

    #[test]
    fn test_doughnut_single_and_empty() {
        let one = doughnut(&series(&[5.0]), 0.0, 0.0, 10.0, 5.0);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].percent, 100.0);
        assert!(doughnut(&series(&[0.0, 0.0]), 0.0, 0.0, 10.0, 5.0).is_empty());
    }

    #[test]
    fn test_revenue_series_is_chronological() {
        let months = vec![
            MonthlyRevenue { month: "2024-08".into(), revenue: 900.0 },
            MonthlyRevenue { month: "2023-12".into(), revenue: 100.0 },
            MonthlyRevenue { month: "2024-07".into(), revenue: 500.0 },
        ];
        let series = revenue_series(&months);
        let labels: Vec<&str> = series.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Ara 2023", "Tem 2024", "Ağu 2024"]);
        assert_eq!(series[2].1, 900.0);
    }

    #[test]
    fn test_category_series_uses_event_counts() {
        let stats = vec![CategoryStat {
            name: "Konser".into(),
            event_count: 4,
            ticket_count: 120,
        }];
        assert_eq!(category_series(&stats), vec![("Konser".to_string(), 4.0)]);
    }
}
