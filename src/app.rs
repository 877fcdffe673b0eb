use dioxus::prelude::*;

use crate::{
    domain::{resolve_dashboard, AppState, DashboardView},
    ui::{
        components::toast::{Toast, ToastQueue},
        pages::{DashboardPage, LandingPage},
        shell::Shell,
    },
    util::{assets, config::load_settings},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/credit-dashboard")]
    CreditDashboard {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::with_settings(load_settings()));
    use_context_provider(|| state);

    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Landing() -> Element {
    rsx! { Shell { LandingPage {} } }
}

/// Without a payload nothing is rendered, not even the shell, and the
/// history entry is replaced with the landing page.
#[component]
pub fn CreditDashboard() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let view = resolve_dashboard(state.read().payload.as_ref());
    let redirect = matches!(view, DashboardView::Redirect);

    use_effect(move || {
        if redirect {
            tracing::info!("dashboard opened without recommendations; returning to landing");
            nav.replace(Route::Landing {});
        }
    });

    match view {
        DashboardView::Render(payload) => rsx! { Shell { DashboardPage { payload } } },
        DashboardView::Redirect => rsx! {},
    }
}
