use time::Month;

use super::entities::{Recommendation, RecommendationId, RewardRate, SpendingCategory};

/// Redemption value of a single point, in dollars.
pub const POINT_VALUE_USD: f64 = 0.01;
pub const PROJECTION_MONTHS: usize = 12;

/// Baseline monthly spend per category. Not user specific.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpendTable {
    pub travel: f64,
    pub dining: f64,
    pub online_grocery: f64,
    pub streaming: f64,
    pub other: f64,
    pub hotel: f64,
    pub rental_car: f64,
    pub vacation_rental: f64,
}

impl SpendTable {
    pub fn spend(&self, category: SpendingCategory) -> f64 {
        match category {
            SpendingCategory::Travel => self.travel,
            SpendingCategory::Dining => self.dining,
            SpendingCategory::OnlineGrocery => self.online_grocery,
            SpendingCategory::Streaming => self.streaming,
            SpendingCategory::Other => self.other,
            SpendingCategory::Hotel => self.hotel,
            SpendingCategory::RentalCar => self.rental_car,
            SpendingCategory::VacationRental => self.vacation_rental,
        }
    }
}

pub static AVERAGE_MONTHLY_SPEND: SpendTable = SpendTable {
    travel: 500.0,
    dining: 400.0,
    online_grocery: 600.0,
    streaming: 50.0,
    other: 1000.0,
    hotel: 200.0,
    rental_car: 100.0,
    vacation_rental: 200.0,
};

/// How a category missing from a card's reward rate is valued.
/// The dashboard always projects with `BaseRate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AbsentRate {
    /// Spend still earns the base 1 point per dollar.
    #[default]
    BaseRate,
    /// Spend in the category earns nothing.
    Excluded,
}

impl AbsentRate {
    fn multiplier(&self) -> f64 {
        match self {
            AbsentRate::BaseRate => 1.0,
            AbsentRate::Excluded => 0.0,
        }
    }
}

/// Points earned in one month. A category missing from `rate` earns the base 1x.
pub fn monthly_points(rate: &RewardRate, spend: &SpendTable) -> f64 {
    monthly_points_with(rate, spend, AbsentRate::BaseRate)
}

pub fn monthly_points_with(rate: &RewardRate, spend: &SpendTable, absent: AbsentRate) -> f64 {
    SpendingCategory::ALL
        .iter()
        .map(|category| {
            let multiplier = rate.get(*category).unwrap_or_else(|| absent.multiplier());
            spend.spend(*category) * multiplier
        })
        .sum()
}

pub fn monthly_value(rate: &RewardRate, spend: &SpendTable) -> f64 {
    monthly_value_with(rate, spend, AbsentRate::BaseRate)
}

pub fn monthly_value_with(rate: &RewardRate, spend: &SpendTable, absent: AbsentRate) -> f64 {
    monthly_points_with(rate, spend, absent) * POINT_VALUE_USD
}

/// Highest multiplier among present categories, 0 when none are present.
pub fn max_multiplier(rate: &RewardRate) -> f64 {
    rate.iter().map(|(_, multiplier)| multiplier).fold(0.0, f64::max)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardSeries {
    pub id: RecommendationId,
    pub card_name: String,
    pub monthly_value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SavingsPoint {
    pub month: &'static str,
    /// Cumulative value per card, in the same order as `SavingsProjection::cards`.
    pub per_card: Vec<f64>,
    pub combined: f64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SavingsProjection {
    pub cards: Vec<CardSeries>,
    pub points: Vec<SavingsPoint>,
}

impl SavingsProjection {
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.combined)
            .fold(0.0, f64::max)
    }

    pub fn final_combined(&self) -> f64 {
        self.points.last().map(|point| point.combined).unwrap_or(0.0)
    }
}

/// Cumulative month-by-month value for each card plus the combined line.
pub fn project_savings(recommendations: &[Recommendation], spend: &SpendTable) -> SavingsProjection {
    project_savings_with(recommendations, spend, AbsentRate::BaseRate)
}

pub fn project_savings_with(
    recommendations: &[Recommendation],
    spend: &SpendTable,
    absent: AbsentRate,
) -> SavingsProjection {
    let cards = recommendations
        .iter()
        .map(|rec| CardSeries {
            id: rec.id,
            card_name: rec.display_name().to_string(),
            monthly_value: monthly_value_with(
                &rec.card_info.rewards.points_per_dollar,
                spend,
                absent,
            ),
        })
        .collect::<Vec<_>>();

    let points = month_labels()
        .into_iter()
        .enumerate()
        .map(|(index, month)| {
            let factor = (index + 1) as f64;
            let per_card = cards
                .iter()
                .map(|card| card.monthly_value * factor)
                .collect::<Vec<_>>();
            let combined: f64 = per_card.iter().sum();
            SavingsPoint {
                month,
                per_card,
                combined,
            }
        })
        .collect();

    SavingsProjection { cards, points }
}

/// Jan..Dec, synthetic; not tied to the current date.
pub fn month_labels() -> [&'static str; PROJECTION_MONTHS] {
    let mut labels = [""; PROJECTION_MONTHS];
    let mut month = Month::January;
    for label in labels.iter_mut() {
        *label = short_month(month);
        month = month.next();
    }
    labels
}

fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BonusUnits, CardProfile, Rewards, SignUpBonus};

    fn sapphire_rate() -> RewardRate {
        RewardRate::new()
            .with(SpendingCategory::Travel, 5.0)
            .with(SpendingCategory::Dining, 3.0)
            .with(SpendingCategory::OnlineGrocery, 3.0)
            .with(SpendingCategory::Streaming, 3.0)
            .with(SpendingCategory::Other, 1.0)
    }

    fn recommendation(name: &str, rate: RewardRate) -> Recommendation {
        Recommendation {
            id: RecommendationId::new(),
            rec_reasoning: String::new(),
            card_name: name.to_string(),
            card_info: CardProfile {
                card_name: name.to_string(),
                card_type: "Travel".to_string(),
                issuer: "Issuer".to_string(),
                annual_fee: 0.0,
                apr: "20%".to_string(),
                rewards: Rewards {
                    points_per_dollar: rate,
                    sign_up_bonus: SignUpBonus {
                        units: BonusUnits::None,
                        minimum_spend: 0.0,
                        time_frame_months: 0,
                    },
                },
                benefits: Vec::new(),
                credit_card_score_min: 670,
                credit_card_score_max: 850,
                link_to_apply: String::new(),
                country_of_origin: "USA".to_string(),
                difficulty_rating: 2.0,
            },
        }
    }

    #[test]
    fn sapphire_scenario_matches_hand_calculation() {
        let spend = &AVERAGE_MONTHLY_SPEND;
        let points = monthly_points_with(&sapphire_rate(), spend, AbsentRate::Excluded);
        assert!((points - 6650.0).abs() < 1e-9);
        let value = monthly_value_with(&sapphire_rate(), spend, AbsentRate::Excluded);
        assert!((value - 66.5).abs() < 1e-9);

        let projection = project_savings_with(
            &[recommendation("Sapphire", sapphire_rate())],
            spend,
            AbsentRate::Excluded,
        );
        assert!((projection.points[11].per_card[0] - 798.0).abs() < 1e-9);
    }

    #[test]
    fn absent_categories_earn_base_rate() {
        // hotel, rentalCar, vacationRental absent -> 500 points at 1x on top of 6650
        let points = monthly_points(&sapphire_rate(), &AVERAGE_MONTHLY_SPEND);
        assert!((points - 7150.0).abs() < 1e-9);
    }

    #[test]
    fn explicit_zero_multiplier_is_kept() {
        let rate = RewardRate::new().with(SpendingCategory::Other, 0.0);
        let with_zero = monthly_points(&rate, &AVERAGE_MONTHLY_SPEND);
        let without = monthly_points(&RewardRate::new(), &AVERAGE_MONTHLY_SPEND);
        assert!((without - with_zero - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn raising_a_multiplier_never_lowers_value() {
        let base = sapphire_rate();
        let base_value = monthly_value(&base, &AVERAGE_MONTHLY_SPEND);
        for category in SpendingCategory::ALL {
            let current = base.get(category).unwrap_or(1.0);
            for bump in [0.0, 0.5, 1.0, 4.0] {
                let raised = base.clone().with(category, current + bump);
                assert!(monthly_value(&raised, &AVERAGE_MONTHLY_SPEND) >= base_value - 1e-9);
            }
        }
    }

    #[test]
    fn cumulative_values_scale_with_month_index() {
        let projection = project_savings(
            &[recommendation("A", sapphire_rate()), recommendation("B", RewardRate::new())],
            &AVERAGE_MONTHLY_SPEND,
        );
        assert_eq!(projection.points.len(), PROJECTION_MONTHS);
        let first = projection.points[0].clone();
        for (index, point) in projection.points.iter().enumerate() {
            let k = (index + 1) as f64;
            for (card, value) in point.per_card.iter().enumerate() {
                assert!((value - k * first.per_card[card]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn combined_series_is_sum_of_cards() {
        let projection = project_savings(
            &[
                recommendation("A", sapphire_rate()),
                recommendation("B", RewardRate::new().with(SpendingCategory::Dining, 4.0)),
                recommendation("C", RewardRate::new()),
            ],
            &AVERAGE_MONTHLY_SPEND,
        );
        let last = &projection.points[11];
        let sum: f64 = last.per_card.iter().sum();
        assert!((last.combined - sum).abs() < 1e-9);
        assert!((projection.final_combined() - sum).abs() < 1e-9);
        assert_eq!(projection.cards[1].card_name, "B");
    }

    #[test]
    fn empty_recommendations_project_zero() {
        let projection = project_savings(&[], &AVERAGE_MONTHLY_SPEND);
        assert_eq!(projection.points.len(), PROJECTION_MONTHS);
        assert_eq!(projection.max_value(), 0.0);
    }

    #[test]
    fn max_multiplier_of_present_categories() {
        let rate = RewardRate::new()
            .with(SpendingCategory::Travel, 5.0)
            .with(SpendingCategory::Dining, 3.0)
            .with(SpendingCategory::Other, 1.0);
        assert_eq!(max_multiplier(&rate), 5.0);
        assert_eq!(max_multiplier(&RewardRate::new()), 0.0);
    }

    #[test]
    fn month_labels_run_jan_to_dec() {
        let labels = month_labels();
        assert_eq!(labels[0], "Jan");
        assert_eq!(labels[5], "Jun");
        assert_eq!(labels[11], "Dec");
    }
}
