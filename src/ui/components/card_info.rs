use dioxus::prelude::*;

use crate::domain::{BonusUnits, Recommendation, SpendingCategory};
use crate::domain::entities::SignUpBonus;
use crate::util::{format_number, format_usd};

/// "60,000 points after spending $4,000.00 in the first 3 months".
pub fn bonus_summary(bonus: &SignUpBonus) -> String {
    if bonus.units == BonusUnits::None {
        return "No sign-up bonus".to_string();
    }
    let months = match bonus.time_frame_months {
        1 => "month".to_string(),
        n => format!("{n} months"),
    };
    format!(
        "{} after spending {} in the first {}",
        bonus.units,
        format_usd(bonus.minimum_spend),
        months
    )
}

/// Category rows for the rewards table, in category order; absent ones are skipped.
pub fn reward_rows(recommendation: &Recommendation) -> Vec<(&'static str, String)> {
    let rate = &recommendation.card_info.rewards.points_per_dollar;
    SpendingCategory::ALL
        .iter()
        .filter_map(|category| {
            rate.get(*category)
                .map(|multiplier| (category.label(), format!("{}x", format_number(multiplier))))
        })
        .collect()
}

#[component]
pub fn CardInfo(recommendation: Recommendation) -> Element {
    let card = recommendation.card_info.clone();
    let rows = reward_rows(&recommendation);
    let bonus = bonus_summary(&card.rewards.sign_up_bonus);
    let fee = format_usd(card.annual_fee);
    let difficulty = format_number(card.difficulty_rating);

    rsx! {
        div { class: "space-y-6 text-sm text-slate-300",
            if !recommendation.rec_reasoning.is_empty() {
                div { class: "rounded-xl border border-lime-400/20 bg-lime-400/5 p-4",
                    h4 { class: "text-xs font-semibold uppercase tracking-wide text-lime-400", "Why this card" }
                    p { class: "mt-2 text-slate-200", "{recommendation.rec_reasoning}" }
                }
            }
            div { class: "grid grid-cols-2 gap-4",
                InfoItem { label: "Issuer", value: card.issuer.clone() }
                InfoItem { label: "Card Type", value: card.card_type.clone() }
                InfoItem { label: "Annual Fee", value: fee }
                InfoItem { label: "APR", value: card.apr.clone() }
                InfoItem {
                    label: "Recommended Score",
                    value: format!("{}-{}", card.credit_card_score_min, card.credit_card_score_max),
                }
                InfoItem { label: "Approval Difficulty", value: format!("{difficulty}/5") }
                InfoItem { label: "Country", value: card.country_of_origin.clone() }
                InfoItem { label: "Sign-up Bonus", value: bonus }
            }
            div {
                h4 { class: "text-xs font-semibold uppercase tracking-wide text-slate-500", "Points per Dollar" }
                if rows.is_empty() {
                    p { class: "mt-2 text-slate-500", "No bonus categories; all spend earns the base rate." }
                } else {
                    ul { class: "mt-2 grid grid-cols-2 gap-2",
                        for (label, multiplier) in rows {
                            li { key: "{label}", class: "flex justify-between rounded-lg bg-slate-900/60 px-3 py-2",
                                span { "{label}" }
                                span { class: "font-semibold text-blue-400", "{multiplier}" }
                            }
                        }
                    }
                }
            }
            if !card.benefits.is_empty() {
                div {
                    h4 { class: "text-xs font-semibold uppercase tracking-wide text-slate-500", "Benefits" }
                    ul { class: "mt-2 space-y-1 list-disc pl-5",
                        for (index, benefit) in card.benefits.iter().enumerate() {
                            li { key: "{index}", "{benefit}" }
                        }
                    }
                }
            }
            if !card.link_to_apply.is_empty() {
                a {
                    class: "inline-flex items-center gap-2 rounded-lg bg-lime-400 px-4 py-2 font-semibold text-slate-900 hover:bg-lime-300",
                    href: "{card.link_to_apply}",
                    target: "_blank",
                    rel: "noreferrer",
                    "Apply Now →"
                }
            }
        }
    }
}

#[component]
fn InfoItem(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            p { class: "text-xs uppercase tracking-wide text-slate-500", "{label}" }
            p { class: "mt-1 text-slate-100", "{value}" }
        }
    }
}
