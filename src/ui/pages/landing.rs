use std::path::PathBuf;

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::{
    app::Route,
    domain::{AppState, DashboardPayload, UserProfile, MAX_SCORE},
    infra::{
        payload_file::{load_payload_file, load_transactions_file},
        recommendations::RecommendationClient,
    },
    ui::{
        components::toast::{push_toast, ToastKind, ToastQueue},
        theme,
    },
    util::config::save_settings,
};

/// Raw text of the profile inputs, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub income: String,
    pub age: String,
    pub oldest_account_years: String,
    pub credit_score: String,
    pub annual_fee_willingness: String,
}

pub fn parse_profile_form(form: &ProfileForm) -> Result<UserProfile, String> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err("Name is required".to_string());
    }
    let income: f64 = form
        .income
        .trim()
        .parse()
        .map_err(|_| "Annual income must be a number")?;
    if !income.is_finite() || income < 0.0 {
        return Err("Annual income cannot be negative".to_string());
    }
    let age: u32 = form
        .age
        .trim()
        .parse()
        .map_err(|_| "Age must be a whole number")?;
    if !(18..=120).contains(&age) {
        return Err("Age must be between 18 and 120".to_string());
    }
    let oldest_account_length_years: f64 = form
        .oldest_account_years
        .trim()
        .parse()
        .map_err(|_| "Oldest account age must be a number")?;
    if !oldest_account_length_years.is_finite() || oldest_account_length_years < 0.0 {
        return Err("Oldest account age cannot be negative".to_string());
    }
    let credit_score: u32 = form
        .credit_score
        .trim()
        .parse()
        .map_err(|_| "Credit score must be a whole number")?;
    if !(300..=MAX_SCORE).contains(&credit_score) {
        return Err(format!("Credit score must be between 300 and {MAX_SCORE}"));
    }
    let annual_fee_willingness: f64 = form
        .annual_fee_willingness
        .trim()
        .parse()
        .map_err(|_| "Annual fee willingness must be a number")?;
    if !annual_fee_willingness.is_finite() || annual_fee_willingness < 0.0 {
        return Err("Annual fee willingness cannot be negative".to_string());
    }

    Ok(UserProfile {
        username: username.to_string(),
        income,
        age,
        oldest_account_length_years,
        credit_score,
        annual_fee_willingness,
    })
}

/// Empty input means "no path given".
fn optional_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

fn open_dashboard(mut state: Signal<AppState>, nav: Navigator, payload: DashboardPayload) {
    state.with_mut(|st| st.accept_payload(payload));
    nav.push(Route::CreditDashboard {});
}

#[component]
pub fn LandingPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let nav = use_navigator();

    let mut form = use_signal(ProfileForm::default);
    let mut transactions_path = use_signal(String::new);
    let mut payload_path = use_signal(String::new);
    let mut endpoint_input = use_signal(|| state.peek().settings.recommendation_endpoint.clone());
    let mut busy = use_signal(|| false);

    let on_submit = move |_| {
        let profile = match parse_profile_form(&form.read()) {
            Ok(profile) => profile,
            Err(message) => {
                push_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        let transactions = match optional_path(&transactions_path.read()) {
            Some(path) => match load_transactions_file(&path) {
                Ok(rows) => rows,
                Err(err) => {
                    push_toast(toasts, ToastKind::Error, format!("Could not read transactions: {err}"));
                    return;
                }
            },
            None => Vec::new(),
        };
        let client = match RecommendationClient::from_settings(&state.peek().settings) {
            Ok(client) => client,
            Err(err) => {
                push_toast(toasts, ToastKind::Error, format!("Recommendation service unavailable: {err}"));
                return;
            }
        };

        busy.set(true);
        spawn(async move {
            let result = client.recommend(profile, transactions).await;
            busy.set(false);
            match result {
                Ok(payload) => open_dashboard(state, nav, payload),
                Err(err) => {
                    push_toast(toasts, ToastKind::Error, format!("Failed to get recommendations: {err}"));
                }
            }
        });
    };

    let on_open_saved = move |_| {
        let Some(path) = optional_path(&payload_path.read()) else {
            push_toast(toasts, ToastKind::Error, "Enter the path of a saved payload file.");
            return;
        };
        match load_payload_file(&path) {
            Ok(payload) => open_dashboard(state, nav, payload),
            Err(err) => push_toast(toasts, ToastKind::Error, format!("Could not open payload: {err}")),
        }
    };

    let on_save_endpoint = move |_| {
        let mut settings = state.peek().settings.clone();
        settings.recommendation_endpoint = endpoint_input.read().trim().to_string();
        if let Err(err) = settings.endpoint_url() {
            push_toast(toasts, ToastKind::Error, err.to_string());
            return;
        }
        if let Err(err) = save_settings(&settings) {
            push_toast(toasts, ToastKind::Error, format!("Failed to save settings: {err}"));
        } else {
            push_toast(toasts, ToastKind::Info, "Recommendation endpoint saved.");
        }
        state.with_mut(|st| st.settings = settings);
    };

    let submit_label = if busy() { "Requesting…" } else { "Get Recommendations" };

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-8",
            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Your Profile" }
                p { class: "mt-1 text-sm text-slate-400",
                    "Tell us about your credit history and we'll suggest cards that fit."
                }
                div { class: "mt-6 grid gap-4 sm:grid-cols-2",
                    FormField {
                        label: "Name",
                        value: form.read().username.clone(),
                        oninput: move |value| form.with_mut(|f| f.username = value),
                    }
                    FormField {
                        label: "Annual income ($)",
                        value: form.read().income.clone(),
                        oninput: move |value| form.with_mut(|f| f.income = value),
                    }
                    FormField {
                        label: "Age",
                        value: form.read().age.clone(),
                        oninput: move |value| form.with_mut(|f| f.age = value),
                    }
                    FormField {
                        label: "Oldest account (years)",
                        value: form.read().oldest_account_years.clone(),
                        oninput: move |value| form.with_mut(|f| f.oldest_account_years = value),
                    }
                    FormField {
                        label: "Credit score",
                        value: form.read().credit_score.clone(),
                        oninput: move |value| form.with_mut(|f| f.credit_score = value),
                    }
                    FormField {
                        label: "Max annual fee ($)",
                        value: form.read().annual_fee_willingness.clone(),
                        oninput: move |value| form.with_mut(|f| f.annual_fee_willingness = value),
                    }
                }
                div { class: "mt-4",
                    FormField {
                        label: "Transactions file (optional JSON)",
                        value: transactions_path(),
                        oninput: move |value| transactions_path.set(value),
                    }
                }
                div { class: "mt-6 flex justify-end",
                    button {
                        class: theme::BTN_PRIMARY,
                        disabled: busy(),
                        onclick: on_submit,
                        "{submit_label}"
                    }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Open Saved Recommendations" }
                div { class: "mt-4 flex items-end gap-3",
                    div { class: "flex-1",
                        FormField {
                            label: "Payload file",
                            value: payload_path(),
                            oninput: move |value| payload_path.set(value),
                        }
                    }
                    button { class: theme::BTN_SECONDARY, onclick: on_open_saved, "Open" }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Recommendation Service" }
                div { class: "mt-4 flex items-end gap-3",
                    div { class: "flex-1",
                        FormField {
                            label: "Endpoint URL",
                            value: endpoint_input(),
                            oninput: move |value| endpoint_input.set(value),
                        }
                    }
                    button { class: theme::BTN_SECONDARY, onclick: on_save_endpoint, "Save" }
                }
            }
        }
    }
}

#[component]
fn FormField(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: theme::LABEL, "{label}" }
            input {
                class: theme::INPUT,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
