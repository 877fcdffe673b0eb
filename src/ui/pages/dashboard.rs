use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    domain::{
        project_savings, scroll_script, AppState, DashboardPayload, ExpansionCommand,
        ExpansionController, RecommendationId, SavingsProjection, AVERAGE_MONTHLY_SPEND, COLLAPSE_DELAY, EXPAND_SETTLE_DELAY,
    },
    ui::{
        components::{
            card_panel::CardPanel, kpi_card::KpiCard, savings_chart::SavingsChart,
            score_gauge::ScoreGauge,
        },
        theme,
    },
    util::format_usd,
};

/// Card with the highest monthly value, by display name.
fn top_card(projection: &SavingsProjection) -> Option<(&str, f64)> {
    projection
        .cards
        .iter()
        .max_by(|a, b| a.monthly_value.total_cmp(&b.monthly_value))
        .map(|card| (card.card_name.as_str(), card.monthly_value))
}

/// Applies a click and schedules the follow-up transition. Timers that fire
/// after the panel moved on are ignored by the controller.
fn toggle_card(mut expansion: Signal<ExpansionController>, id: RecommendationId) {
    match expansion.with_mut(|ctl| ctl.toggle(id)) {
        ExpansionCommand::ScrollAndExpand { id } => {
            let _ = document::eval(&scroll_script(&id.anchor()));
            spawn(async move {
                tokio::time::sleep(EXPAND_SETTLE_DELAY).await;
                if !expansion.with_mut(|ctl| ctl.settle_open(id)) {
                    tracing::debug!(card = %id.anchor(), "stale expand timer ignored");
                }
            });
        }
        ExpansionCommand::BeginCollapse { id } => {
            spawn(async move {
                tokio::time::sleep(COLLAPSE_DELAY).await;
                if !expansion.with_mut(|ctl| ctl.finish_collapse(id)) {
                    tracing::debug!(card = %id.anchor(), "stale collapse timer ignored");
                }
            });
        }
    }
}

#[component]
pub fn DashboardPage(payload: Arc<DashboardPayload>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let expansion = use_signal(ExpansionController::new);

    use_drop(move || {
        if let Ok(mut st) = state.try_write() {
            st.discard_payload();
        }
    });

    let projection = project_savings(&payload.recommendations.recommendations, &AVERAGE_MONTHLY_SPEND);
    let annual = format_usd(projection.final_combined());
    let monthly = format_usd(projection.final_combined() / 12.0);
    let best = top_card(&projection)
        .map(|(name, value)| (name.to_string(), format!("{}/month", format_usd(value))));
    let controller = *expansion.read();
    let panels = payload
        .recommendations
        .recommendations
        .iter()
        .map(|recommendation| (controller.phase_of(recommendation.id), recommendation.clone()))
        .collect::<Vec<_>>();
    let score_panel = format!("col-span-12 lg:col-span-5 {}", theme::PANEL);
    let chart_panel = format!("col-span-12 lg:col-span-7 {}", theme::PANEL);

    rsx! {
        div { class: "grid grid-cols-12 gap-6",
            section { class: "{score_panel}",
                div { class: "flex justify-between items-center mb-6",
                    h2 { class: theme::SECTION_TITLE, "Credit Score" }
                    span { class: "text-sm text-gray-400", "{payload.user_info.username}" }
                }
                ScoreGauge { target: payload.user_info.credit_score }
            }

            section { class: "{chart_panel}",
                div { class: "flex justify-between items-center mb-6",
                    h2 { class: theme::SECTION_TITLE, "Projected Rewards Value" }
                }
                SavingsChart { projection: projection.clone() }
                div { class: "mt-6 grid gap-4 sm:grid-cols-3",
                    KpiCard {
                        title: "Combined, 12 months".to_string(),
                        value: annual,
                        description: Some("All recommended cards together".to_string()),
                    }
                    KpiCard {
                        title: "Combined, per month".to_string(),
                        value: monthly,
                        description: None,
                    }
                    if let Some((name, value)) = best {
                        KpiCard {
                            title: "Top earner".to_string(),
                            value,
                            description: Some(name),
                        }
                    }
                }
            }

            section { class: "col-span-12 flex flex-col items-center",
                h2 { class: "text-3xl font-semibold mb-6", "Credit Card Recommendation" }
                if !payload.recommendations.global_reasoning.is_empty() {
                    p { class: "mb-6 max-w-3xl text-center text-slate-300",
                        "{payload.recommendations.global_reasoning}"
                    }
                }
                div { class: "flex flex-col gap-6 w-full max-w-4xl",
                    for (phase, recommendation) in panels {
                        CardPanel {
                            key: "{recommendation.id.anchor()}",
                            phase,
                            recommendation: recommendation.clone(),
                            on_toggle: move |id| toggle_card(expansion, id),
                        }
                    }
                }
            }
        }
    }
}
