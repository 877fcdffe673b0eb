//! Shared class strings and chart palette for the dashboard.

// ============================================
// SURFACES
// ============================================

pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-slate-900 to-slate-800 text-white p-6";
pub const PANEL: &str = "bg-slate-800/50 rounded-2xl p-6";
pub const SECTION_TITLE: &str = "text-xl font-semibold";

// ============================================
// PILLS
// ============================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pill {
    Fee,
    Score,
    Points,
}

pub fn pill_class(pill: Pill) -> &'static str {
    match pill {
        Pill::Fee => "px-2 py-1 rounded-full bg-lime-400/20 text-lime-400",
        Pill::Score => "px-2 py-1 rounded-full bg-yellow-400/20 text-yellow-400",
        Pill::Points => "px-2 py-1 rounded-full bg-blue-400/20 text-blue-400",
    }
}

// ============================================
// FORM
// ============================================

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-400";
pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-lime-400 focus:outline-none";
pub const BTN_PRIMARY: &str = "rounded-lg bg-lime-400 px-4 py-2 text-sm font-semibold text-slate-900 hover:bg-lime-300 disabled:opacity-50";
pub const BTN_SECONDARY: &str = "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800 disabled:opacity-50";

// ============================================
// CHART
// ============================================

const CARD_SERIES: [&str; 3] = ["#84cc16", "#60a5fa", "#f87171"];
pub const COMBINED_SERIES: &str = "#a855f7";
pub const AXIS: &str = "#94a3b8";

/// Line color for the card at `index` in upstream order.
pub fn series_color(index: usize) -> &'static str {
    CARD_SERIES[index % CARD_SERIES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), "#84cc16");
        assert_eq!(series_color(2), "#f87171");
        assert_eq!(series_color(3), series_color(0));
    }
}
