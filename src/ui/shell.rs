use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let on_dashboard = matches!(current_route, Route::CreditDashboard {});
    let version = version_label();

    rsx! {
        div { class: theme::PAGE,
            nav { class: "flex items-center justify-between mb-8",
                div { class: "flex items-center space-x-8",
                    div { class: "text-xl font-semibold flex items-center",
                        div { class: "w-6 h-6 bg-lime-400 rounded-full mr-2" }
                        "{APP_NAME}"
                    }
                }
                div { class: "flex items-center gap-4 text-sm text-slate-400",
                    if on_dashboard {
                        button {
                            class: "hover:text-white transition-colors",
                            onclick: move |_| {
                                nav.push(Route::Landing {});
                            },
                            "← New search"
                        }
                    }
                    span { class: "text-xs text-slate-500", "{version}" }
                }
            }
            main { {children} }
        }
    }
}
