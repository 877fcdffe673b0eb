//! Recommendation presenter logic: score bands, reward projection and view state.

pub mod app_state;
pub mod entities;
pub mod expansion;
pub mod gauge;
pub mod savings;
pub mod score;

#[allow(unused_imports)]
pub use app_state::{resolve_dashboard, AppState, DashboardView};
#[allow(unused_imports)]
pub use entities::{
    BonusUnits, CardProfile, DashboardPayload, Recommendation, RecommendationId,
    RecommendationResponse, RewardRate, SpendingCategory, TransactionRecord, TransactionValue,
    UserProfile,
};
#[allow(unused_imports)]
pub use expansion::{
    scroll_script, ExpansionCommand, ExpansionController, PanelPhase, COLLAPSE_DELAY,
    EXPAND_SETTLE_DELAY,
};
#[allow(unused_imports)]
pub use gauge::{GaugeAnimation, GaugeArc, GaugeTick};
#[allow(unused_imports)]
pub use savings::{max_multiplier, project_savings, SavingsProjection, AVERAGE_MONTHLY_SPEND};
#[allow(unused_imports)]
pub use score::{classify, score_rating, ScoreBand, MAX_SCORE, SCORE_BANDS};
