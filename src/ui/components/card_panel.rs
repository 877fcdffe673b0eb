use dioxus::prelude::*;

use super::card_info::CardInfo;
use crate::domain::{max_multiplier, PanelPhase, Recommendation, RecommendationId};
use crate::ui::theme::{pill_class, Pill};
use crate::util::format_number;

#[component]
pub fn CardPanel(
    recommendation: Recommendation,
    phase: PanelPhase,
    on_toggle: EventHandler<RecommendationId>,
) -> Element {
    let id = recommendation.id;
    let card = &recommendation.card_info;
    let fee = format!("${}/year", format_number(card.annual_fee));
    let min_score = format!("{}+ Credit Score", card.credit_card_score_min);
    let max_points = format!(
        "{}x Max Points",
        format_number(max_multiplier(&card.rewards.points_per_dollar))
    );
    let arrow = if phase.is_mounted() { "▲" } else { "▼" };
    let body_class = if phase.is_visible() {
        "card-panel-body is-open"
    } else {
        "card-panel-body is-closed"
    };

    rsx! {
        div {
            id: id.anchor(),
            class: "bg-slate-800/50 rounded-2xl transition-all duration-500 ease-in-out overflow-hidden",
            div {
                class: "p-6 cursor-pointer hover:bg-slate-800/70 transition-colors",
                onclick: move |_| on_toggle.call(id),
                div { class: "flex justify-between items-center mb-4",
                    div { class: "text-gray-400 text-xl", "{recommendation.display_name()}" }
                    div { class: "flex items-center gap-2",
                        div { class: "flex items-center gap-4 text-sm",
                            span { class: pill_class(Pill::Fee), "{fee}" }
                            span { class: pill_class(Pill::Score), "{min_score}" }
                            span { class: pill_class(Pill::Points), "{max_points}" }
                        }
                        span { class: "w-4 h-4 text-gray-400", "{arrow}" }
                    }
                }
            }
            if phase.is_mounted() {
                div { class: body_class,
                    div { class: "px-6 pb-6",
                        div { class: "border-t border-slate-700 pt-6",
                            CardInfo { recommendation: recommendation.clone() }
                        }
                    }
                }
            }
        }
    }
}
