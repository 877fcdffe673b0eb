use dioxus::prelude::*;

use crate::domain::SavingsProjection;
use crate::ui::theme::{self, AXIS, COMBINED_SERIES};
use crate::util::{format_number, format_usd};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 256.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const Y_TICKS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub month: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    /// Stable render key; labels can repeat when two cards share a name.
    pub key: String,
    pub label: String,
    pub color: &'static str,
    pub dashed: bool,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// `points` attribute for an SVG polyline.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("{:.1},{:.1}", point.x, point.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn stroke_width(&self) -> &'static str {
        if self.dashed {
            "3"
        } else {
            "2"
        }
    }

    pub fn dash_array(&self) -> &'static str {
        if self.dashed {
            "5 5"
        } else {
            "none"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub y_max: f64,
    /// (label, y) from bottom to top.
    pub y_ticks: Vec<(String, f64)>,
    /// (label, x) Jan..Dec.
    pub x_ticks: Vec<(&'static str, f64)>,
    pub series: Vec<ChartSeries>,
}

/// Lays the projection out in a `WIDTH` x `HEIGHT` viewBox: one line per card
/// plus the combined line last, so it draws on top.
pub fn chart_geometry(projection: &SavingsProjection) -> ChartGeometry {
    let step = nice_step(projection.max_value() / Y_TICKS as f64);
    let y_max = step * Y_TICKS as f64;
    let plot_width = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_height = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let last_index = projection.points.len().saturating_sub(1).max(1) as f64;

    let x_at = |index: usize| PAD_LEFT + plot_width * index as f64 / last_index;
    let y_at = |value: f64| PAD_TOP + plot_height * (1.0 - (value / y_max).clamp(0.0, 1.0));

    let x_ticks = projection
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| (point.month, x_at(index)))
        .collect();

    let y_ticks = (0..=Y_TICKS)
        .map(|tick| {
            let value = step * tick as f64;
            (format!("${}", format_number(value)), y_at(value))
        })
        .collect();

    let build = |values: Vec<f64>| {
        values
            .into_iter()
            .zip(projection.points.iter())
            .enumerate()
            .map(|(index, (value, point))| ChartPoint {
                x: x_at(index),
                y: y_at(value),
                value,
                month: point.month,
            })
            .collect::<Vec<_>>()
    };

    let mut series = projection
        .cards
        .iter()
        .enumerate()
        .map(|(card_index, card)| ChartSeries {
            key: card.id.anchor(),
            label: format!("{} Rewards", card.card_name),
            color: theme::series_color(card_index),
            dashed: false,
            points: build(
                projection
                    .points
                    .iter()
                    .map(|point| point.per_card.get(card_index).copied().unwrap_or(0.0))
                    .collect(),
            ),
        })
        .collect::<Vec<_>>();

    series.push(ChartSeries {
        key: "combined".to_string(),
        label: "Combined Rewards".to_string(),
        color: COMBINED_SERIES,
        dashed: true,
        points: build(projection.points.iter().map(|point| point.combined).collect()),
    });

    ChartGeometry {
        y_max,
        y_ticks,
        x_ticks,
        series,
    }
}

/// Rounds a raw tick step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

#[component]
pub fn SavingsChart(projection: SavingsProjection) -> Element {
    let geometry = chart_geometry(&projection);
    let baseline = HEIGHT - PAD_BOTTOM;
    let right = WIDTH - PAD_RIGHT;
    let label_x = PAD_LEFT - 8.0;
    let month_y = HEIGHT - 8.0;

    rsx! {
        div { class: "h-64",
            svg {
                class: "w-full h-full",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                g { class: "chart-grid",
                    for (label, y) in geometry.y_ticks.iter() {
                        line { key: "{label}", x1: "{PAD_LEFT}", x2: "{right}", y1: "{y}", y2: "{y}" }
                    }
                }
                g { class: "chart-axis",
                    line { x1: "{PAD_LEFT}", x2: "{right}", y1: "{baseline}", y2: "{baseline}", stroke: AXIS }
                    for (label, y) in geometry.y_ticks.iter() {
                        text { key: "y-{label}", x: "{label_x}", y: "{y}", text_anchor: "end", dominant_baseline: "middle", "{label}" }
                    }
                    for (month, x) in geometry.x_ticks.iter() {
                        text { key: "x-{month}", x: "{x}", y: "{month_y}", text_anchor: "middle", "{month}" }
                    }
                }
                for series in geometry.series.iter() {
                    g { key: "{series.key}",
                        polyline {
                            class: "chart-series",
                            points: series.polyline(),
                            stroke: series.color,
                            stroke_width: series.stroke_width(),
                            stroke_dasharray: series.dash_array(),
                        }
                        for point in series.points.iter() {
                            circle {
                                key: "{point.month}",
                                cx: "{point.x}",
                                cy: "{point.y}",
                                r: "3",
                                fill: series.color,
                                title { "{series.label} · {point.month}: {format_usd(point.value)}" }
                            }
                        }
                    }
                }
            }
        }
        ChartLegend { series: geometry.series.clone() }
    }
}

#[component]
fn ChartLegend(series: Vec<ChartSeries>) -> Element {
    rsx! {
        div { class: "mt-4 flex flex-wrap justify-center gap-4 text-xs text-slate-300",
            for entry in series {
                div { key: "{entry.key}", class: "flex items-center gap-2",
                    span {
                        class: "inline-block h-0.5 w-5",
                        style: "background-color: {entry.color}",
                    }
                    span { "{entry.label}" }
                }
            }
        }
    }
}
