use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn theme(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// Newest last; the oldest entry is evicted once `TOAST_LIMIT` is reached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<ToastMessage>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: String) -> String {
        if self.entries.len() >= TOAST_LIMIT {
            self.entries.remove(0);
        }
        let id = generate_id("toast");
        self.entries.push(ToastMessage {
            id: id.clone(),
            kind,
            text,
        });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[ToastMessage] {
        &self.entries
    }
}

/// Queues a message for the overlay. Errors are logged as well as shown.
pub fn push_toast(mut toasts: Signal<ToastQueue>, kind: ToastKind, message: impl Into<String>) {
    let text = message.into();
    match kind {
        ToastKind::Error => tracing::warn!(message = %text, "surfacing error to user"),
        ToastKind::Info => tracing::debug!(message = %text, "toast"),
    }
    toasts.with_mut(|queue| queue.push(kind, text));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();
    let entries = toasts.read().entries().to_vec();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul { class: "space-y-3",
                for message in entries {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<ToastQueue>) -> Element {
    let mut toasts = toasts;
    let timer_id = message.id.clone();
    use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|queue| queue.dismiss(&id));
        }
    });

    let (theme, icon) = message.kind.theme();
    let dismiss_id = message.id.clone();
    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {theme}",
            span { class: "text-lg", "{icon}" }
            p { class: "text-sm font-medium", "{message.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| toasts.with_mut(|queue| queue.dismiss(&dismiss_id)),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_evicts_oldest_beyond_limit() {
        let mut queue = ToastQueue::default();
        for index in 0..7 {
            queue.push(ToastKind::Info, format!("message {index}"));
        }
        let texts = queue
            .entries()
            .iter()
            .map(|toast| toast.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec!["message 2", "message 3", "message 4", "message 5", "message 6"]
        );
    }

    #[test]
    fn dismiss_removes_only_matching_entry() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Error, "offline".to_string());
        queue.push(ToastKind::Info, "loaded".to_string());
        queue.dismiss(&first);
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].kind, ToastKind::Info);
    }
}
