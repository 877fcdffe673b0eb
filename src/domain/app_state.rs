use std::sync::Arc;

use super::entities::DashboardPayload;
use crate::util::config::Settings;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Handed from the landing page to the dashboard; `None` outside that hand-off.
    pub payload: Option<Arc<DashboardPayload>>,
    pub settings: Settings,
}

impl AppState {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            payload: None,
            settings,
        }
    }

    pub fn accept_payload(&mut self, payload: DashboardPayload) {
        tracing::info!(
            cards = payload.recommendations.recommendations.len(),
            transactions = payload.transaction_data.len(),
            "recommendation payload accepted"
        );
        self.payload = Some(Arc::new(payload));
    }

    pub fn discard_payload(&mut self) {
        if self.payload.take().is_some() {
            tracing::debug!("recommendation payload discarded");
        }
    }
}

/// What the dashboard route does on entry.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    Redirect,
    Render(Arc<DashboardPayload>),
}

pub fn resolve_dashboard(payload: Option<&Arc<DashboardPayload>>) -> DashboardView {
    match payload {
        Some(payload) => DashboardView::Render(Arc::clone(payload)),
        None => DashboardView::Redirect,
    }
}
