use std::time::Duration;

use super::entities::RecommendationId;

/// Delay before the open styles apply, so the height transition has a start frame.
pub const EXPAND_SETTLE_DELAY: Duration = Duration::from_millis(50);
/// Length of the closing transition before the panel body is dropped.
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(500);
/// Clicked card ends up this many pixels below the top of the viewport.
pub const SCROLL_TOP_OFFSET: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Collapsed,
    Opening,
    Open,
    Closing,
}

impl PanelPhase {
    /// Body is mounted (possibly mid-transition).
    pub fn is_mounted(&self) -> bool {
        !matches!(self, PanelPhase::Collapsed)
    }

    /// Body is at full height.
    pub fn is_visible(&self) -> bool {
        matches!(self, PanelPhase::Open)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionCommand {
    /// Scroll the card into place, then schedule `settle_open` after `EXPAND_SETTLE_DELAY`.
    ScrollAndExpand { id: RecommendationId },
    /// Schedule `finish_collapse` after `COLLAPSE_DELAY`.
    BeginCollapse { id: RecommendationId },
}

/// At most one card panel is expanded at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpansionController {
    current: Option<(RecommendationId, PanelPhase)>,
}

impl ExpansionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<RecommendationId> {
        self.current.map(|(id, _)| id)
    }

    pub fn phase_of(&self, id: RecommendationId) -> PanelPhase {
        match self.current {
            Some((current, phase)) if current == id => phase,
            _ => PanelPhase::Collapsed,
        }
    }

    /// Click handler. Clicking the expanded card collapses it; clicking any
    /// other card makes it the single expanded one.
    pub fn toggle(&mut self, id: RecommendationId) -> ExpansionCommand {
        match self.current {
            Some((current, _)) if current == id => {
                self.current = Some((id, PanelPhase::Closing));
                ExpansionCommand::BeginCollapse { id }
            }
            _ => {
                self.current = Some((id, PanelPhase::Opening));
                ExpansionCommand::ScrollAndExpand { id }
            }
        }
    }

    /// Returns false when the timer belongs to a panel that is no longer opening.
    pub fn settle_open(&mut self, id: RecommendationId) -> bool {
        match self.current {
            Some((current, PanelPhase::Opening)) if current == id => {
                self.current = Some((id, PanelPhase::Open));
                true
            }
            _ => false,
        }
    }

    /// Returns false when the card was reopened or replaced during the delay.
    pub fn finish_collapse(&mut self, id: RecommendationId) -> bool {
        match self.current {
            Some((current, PanelPhase::Closing)) if current == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// Smooth scroll so the element's top sits `SCROLL_TOP_OFFSET` below the viewport top.
pub fn scroll_script(anchor: &str) -> String {
    format!(
        "(function() {{ \
            const el = document.getElementById('{anchor}'); \
            if (!el) {{ return; }} \
            const top = el.getBoundingClientRect().top + window.scrollY - {SCROLL_TOP_OFFSET}; \
            window.scrollTo({{ top: top, behavior: 'smooth' }}); \
        }})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(controller: &mut ExpansionController, id: RecommendationId) {
        controller.toggle(id);
        controller.settle_open(id);
    }

    #[test]
    fn click_expands_then_settles_open() {
        let mut controller = ExpansionController::new();
        let id = RecommendationId::new();
        assert_eq!(controller.toggle(id), ExpansionCommand::ScrollAndExpand { id });
        assert_eq!(controller.phase_of(id), PanelPhase::Opening);
        assert!(controller.settle_open(id));
        assert_eq!(controller.phase_of(id), PanelPhase::Open);
    }

    #[test]
    fn second_click_collapses_after_delay() {
        let mut controller = ExpansionController::new();
        let id = RecommendationId::new();
        open(&mut controller, id);

        assert_eq!(controller.toggle(id), ExpansionCommand::BeginCollapse { id });
        assert_eq!(controller.phase_of(id), PanelPhase::Closing);
        assert_eq!(controller.expanded(), Some(id));

        assert!(controller.finish_collapse(id));
        assert_eq!(controller.expanded(), None);
        assert_eq!(controller.phase_of(id), PanelPhase::Collapsed);
    }

    #[test]
    fn never_two_expanded_cards() {
        let mut controller = ExpansionController::new();
        let first = RecommendationId::new();
        let second = RecommendationId::new();
        open(&mut controller, first);
        controller.toggle(second);

        assert_eq!(controller.expanded(), Some(second));
        assert_eq!(controller.phase_of(first), PanelPhase::Collapsed);
        assert!(controller.phase_of(second).is_mounted());
    }

    #[test]
    fn stale_collapse_timer_does_not_close_replacement() {
        let mut controller = ExpansionController::new();
        let first = RecommendationId::new();
        let second = RecommendationId::new();
        open(&mut controller, first);
        controller.toggle(first);
        controller.toggle(second);

        assert!(!controller.finish_collapse(first));
        assert_eq!(controller.expanded(), Some(second));
    }

    #[test]
    fn clicking_a_closing_card_keeps_it_closing() {
        let mut controller = ExpansionController::new();
        let id = RecommendationId::new();
        open(&mut controller, id);
        controller.toggle(id);
        assert_eq!(controller.toggle(id), ExpansionCommand::BeginCollapse { id });
        assert!(controller.finish_collapse(id));
        assert!(!controller.finish_collapse(id));
    }

    #[test]
    fn settle_is_ignored_after_replacement() {
        let mut controller = ExpansionController::new();
        let first = RecommendationId::new();
        let second = RecommendationId::new();
        controller.toggle(first);
        controller.toggle(second);
        assert!(!controller.settle_open(first));
        assert_eq!(controller.phase_of(second), PanelPhase::Opening);
    }

    #[test]
    fn scroll_script_targets_anchor_with_offset() {
        let script = scroll_script("card-abc");
        assert!(script.contains("getElementById('card-abc')"));
        assert!(script.contains("- 100"));
        assert!(script.contains("behavior: 'smooth'"));
    }
}
