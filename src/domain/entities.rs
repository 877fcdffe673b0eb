use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Spending buckets a card can award bonus points on. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpendingCategory {
    Travel,
    Dining,
    OnlineGrocery,
    Streaming,
    Other,
    Hotel,
    RentalCar,
    VacationRental,
}

impl SpendingCategory {
    pub const ALL: [SpendingCategory; 8] = [
        SpendingCategory::Travel,
        SpendingCategory::Dining,
        SpendingCategory::OnlineGrocery,
        SpendingCategory::Streaming,
        SpendingCategory::Other,
        SpendingCategory::Hotel,
        SpendingCategory::RentalCar,
        SpendingCategory::VacationRental,
    ];

    /// Key used by the recommendation service.
    pub fn key(&self) -> &'static str {
        match self {
            SpendingCategory::Travel => "travel",
            SpendingCategory::Dining => "dining",
            SpendingCategory::OnlineGrocery => "onlineGrocery",
            SpendingCategory::Streaming => "streaming",
            SpendingCategory::Other => "other",
            SpendingCategory::Hotel => "hotel",
            SpendingCategory::RentalCar => "rentalCar",
            SpendingCategory::VacationRental => "vacationRental",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpendingCategory::Travel => "Travel",
            SpendingCategory::Dining => "Dining",
            SpendingCategory::OnlineGrocery => "Online Grocery",
            SpendingCategory::Streaming => "Streaming",
            SpendingCategory::Other => "Everything Else",
            SpendingCategory::Hotel => "Hotels",
            SpendingCategory::RentalCar => "Rental Cars",
            SpendingCategory::VacationRental => "Vacation Rentals",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

/// Points earned per dollar, per category. Absent categories are simply not stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<f64>>", into = "BTreeMap<String, Option<f64>>")]
pub struct RewardRate {
    rates: BTreeMap<SpendingCategory, f64>,
}

impl RewardRate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter. Negative or non-finite multipliers are dropped.
    pub fn with(mut self, category: SpendingCategory, multiplier: f64) -> Self {
        self.set(category, multiplier);
        self
    }

    pub fn set(&mut self, category: SpendingCategory, multiplier: f64) {
        if multiplier.is_finite() && multiplier >= 0.0 {
            self.rates.insert(category, multiplier);
        } else {
            tracing::warn!(
                category = category.key(),
                multiplier,
                "ignoring invalid reward multiplier"
            );
            self.rates.remove(&category);
        }
    }

    pub fn get(&self, category: SpendingCategory) -> Option<f64> {
        self.rates.get(&category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Present categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SpendingCategory, f64)> + '_ {
        self.rates.iter().map(|(category, rate)| (*category, *rate))
    }
}

impl From<BTreeMap<String, Option<f64>>> for RewardRate {
    fn from(raw: BTreeMap<String, Option<f64>>) -> Self {
        let mut rate = RewardRate::default();
        for (key, value) in raw {
            let Some(category) = SpendingCategory::from_key(&key) else {
                tracing::debug!(key = %key, "skipping unknown reward category");
                continue;
            };
            if let Some(multiplier) = value {
                rate.set(category, multiplier);
            }
        }
        rate
    }
}

impl From<RewardRate> for BTreeMap<String, Option<f64>> {
    fn from(rate: RewardRate) -> Self {
        rate.rates
            .into_iter()
            .map(|(category, multiplier)| (category.key().to_string(), Some(multiplier)))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BonusUnits {
    Points(u64),
    Miles(u64),
    None,
}

impl fmt::Display for BonusUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusUnits::Points(amount) => write!(f, "{} points", group_thousands(*amount)),
            BonusUnits::Miles(amount) => write!(f, "{} miles", group_thousands(*amount)),
            BonusUnits::None => write!(f, "No bonus"),
        }
    }
}

/// Informational only; never enters the projection math.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SignUpBonusWire", into = "SignUpBonusWire")]
pub struct SignUpBonus {
    pub units: BonusUnits,
    pub minimum_spend: f64,
    pub time_frame_months: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpBonusWire {
    #[serde(default, deserialize_with = "optional_whole_u64", skip_serializing_if = "Option::is_none")]
    points: Option<u64>,
    #[serde(default, deserialize_with = "optional_whole_u64", skip_serializing_if = "Option::is_none")]
    miles: Option<u64>,
    #[serde(default, deserialize_with = "number_or_zero")]
    minimum_spend: f64,
    #[serde(default, deserialize_with = "optional_whole_u32")]
    time_frame_months: u32,
}

impl TryFrom<SignUpBonusWire> for SignUpBonus {
    type Error = String;

    fn try_from(wire: SignUpBonusWire) -> Result<Self, Self::Error> {
        let units = match (wire.points, wire.miles) {
            (Some(_), Some(_)) => {
                return Err("sign-up bonus lists both points and miles".to_string())
            }
            (Some(points), None) => BonusUnits::Points(points),
            (None, Some(miles)) => BonusUnits::Miles(miles),
            (None, None) => BonusUnits::None,
        };
        Ok(SignUpBonus {
            units,
            minimum_spend: wire.minimum_spend,
            time_frame_months: wire.time_frame_months,
        })
    }
}

impl From<SignUpBonus> for SignUpBonusWire {
    fn from(bonus: SignUpBonus) -> Self {
        let (points, miles) = match bonus.units {
            BonusUnits::Points(points) => (Some(points), None),
            BonusUnits::Miles(miles) => (None, Some(miles)),
            BonusUnits::None => (None, None),
        };
        SignUpBonusWire {
            points,
            miles,
            minimum_spend: bonus.minimum_spend,
            time_frame_months: bonus.time_frame_months,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rewards {
    pub points_per_dollar: RewardRate,
    pub sign_up_bonus: SignUpBonus,
}

/// Card metadata as delivered by the recommendation service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProfile {
    pub card_name: String,
    pub card_type: String,
    pub issuer: String,
    pub annual_fee: f64,
    #[serde(rename = "APR")]
    pub apr: String,
    pub rewards: Rewards,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(deserialize_with = "whole_u32")]
    pub credit_card_score_min: u32,
    #[serde(deserialize_with = "whole_u32")]
    pub credit_card_score_max: u32,
    pub link_to_apply: String,
    pub country_of_origin: String,
    #[serde(rename = "difficulty_rating")]
    pub difficulty_rating: f64,
}

/// Opaque per-recommendation key. Display names may collide; ids never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecommendationId(Uuid);

impl RecommendationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// DOM anchor for scroll targeting.
    pub fn anchor(&self) -> String {
        format!("card-{}", self.0.simple())
    }
}

impl Default for RecommendationId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(skip, default)]
    pub id: RecommendationId,
    pub rec_reasoning: String,
    #[serde(default)]
    pub card_name: String,
    pub card_info: CardProfile,
}

impl Recommendation {
    pub fn display_name(&self) -> &str {
        &self.card_info.card_name
    }
}

/// Upstream order is render order; never re-sorted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub global_reasoning: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub income: f64,
    #[serde(deserialize_with = "whole_u32")]
    pub age: u32,
    pub oldest_account_length_years: f64,
    #[serde(deserialize_with = "whole_u32")]
    pub credit_score: u32,
    pub annual_fee_willingness: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionValue {
    Number(f64),
    Text(String),
}

/// Raw upstream transaction row. Carried along, never used in projections.
pub type TransactionRecord = BTreeMap<String, TransactionValue>;

/// Everything the dashboard needs, handed over on navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub recommendations: RecommendationResponse,
    pub user_info: UserProfile,
    #[serde(default)]
    pub transaction_data: Vec<TransactionRecord>,
}

// Upstream sends plain JSON numbers; `742.0` is as valid as `742`.

fn whole(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.round().clamp(0.0, max)
    } else {
        0.0
    }
}

fn whole_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(whole(value, f64::from(u32::MAX)) as u32)
}

fn optional_whole_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map_or(0, |value| whole(value, f64::from(u32::MAX)) as u32))
}

fn optional_whole_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map(|value| whole(value, u64::MAX as f64) as u64))
}

fn number_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|value| value.is_finite()).unwrap_or(0.0))
}

pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
