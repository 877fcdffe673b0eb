use dioxus::prelude::*;

use crate::domain::{score_rating, GaugeAnimation, GaugeArc, GaugeTick, SCORE_BANDS};

/// Drives a single count-up run. The timer task dies with the component.
fn use_gauge_animation(target: u32) -> Signal<GaugeAnimation> {
    let mut animation = use_signal(move || {
        let mut animation = GaugeAnimation::default();
        animation.start(target);
        animation
    });

    let task = use_hook(move || {
        spawn(async move {
            let interval = animation.peek().interval();
            loop {
                tokio::time::sleep(interval).await;
                if !animation.peek().is_running() {
                    break;
                }
                match animation.with_mut(|state| state.tick()) {
                    GaugeTick::Continue(_) => {}
                    GaugeTick::Done(value) => {
                        tracing::debug!(score = value, "score gauge settled");
                        break;
                    }
                    GaugeTick::Stopped => break,
                }
            }
        })
    });

    use_drop(move || {
        if let Ok(mut state) = animation.try_write() {
            state.cancel();
        }
        task.cancel();
    });

    animation
}

#[component]
pub fn ScoreGauge(target: u32) -> Element {
    let animation = use_gauge_animation(target);
    let displayed = animation.read().displayed();
    let arc = GaugeArc::new(displayed);
    let rating = score_rating(displayed);

    rsx! {
        div { class: "relative flex justify-center items-center mb-8",
            div { class: "relative w-48 h-48",
                svg {
                    class: "w-full h-full -rotate-90 transform",
                    view_box: "0 0 200 200",
                    circle {
                        class: "gauge-track",
                        cx: "100",
                        cy: "100",
                        r: "{arc.radius}",
                        stroke_width: "12",
                        fill: "none",
                    }
                    circle {
                        class: "gauge-progress",
                        cx: "100",
                        cy: "100",
                        r: "{arc.radius}",
                        stroke_width: "12",
                        fill: "none",
                        stroke_linecap: "round",
                        stroke: arc.color,
                        stroke_dasharray: "{arc.circumference}",
                        stroke_dashoffset: "{arc.offset}",
                    }
                }
                div { class: "absolute inset-0 flex items-center justify-center",
                    div { class: "text-center",
                        div { class: "text-5xl font-bold", "{displayed}" }
                        div { class: "text-sm text-gray-400 mt-2", "{rating}" }
                    }
                }
            }
        }
        ScoreLegend { displayed }
    }
}

#[component]
fn ScoreLegend(displayed: u32) -> Element {
    let entries = SCORE_BANDS
        .iter()
        .map(|band| {
            let opacity = if band.contains(displayed) { "1" } else { "0.5" };
            (band, opacity)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "grid grid-cols-2 gap-2 text-sm mb-6",
            for (band, opacity) in entries {
                div {
                    key: "{band.min}",
                    class: "flex items-center space-x-2",
                    style: "opacity: {opacity}",
                    div {
                        class: "w-3 h-3 rounded-full",
                        style: "background-color: {band.color}",
                    }
                    span { "{band.legend_label()}" }
                }
            }
        }
    }
}
