pub mod card_info;
pub mod card_panel;
pub mod kpi_card;
pub mod savings_chart;
pub mod score_gauge;
pub mod toast;
