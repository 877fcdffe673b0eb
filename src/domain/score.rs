//! Credit score bands and their display colors.

/// Highest score any bureau reports; the gauge fills against this.
pub const MAX_SCORE: u32 = 850;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBand {
    pub min: u32,
    pub max: u32,
    pub color: &'static str,
    pub rating: &'static str,
}

impl ScoreBand {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }

    pub fn legend_label(&self) -> String {
        format!("{}-{}: {}", self.min, self.max, self.rating)
    }
}

/// Matched top to bottom; the last entry doubles as the fallback.
pub static SCORE_BANDS: [ScoreBand; 6] = [
    ScoreBand { min: 760, max: 850, color: "#00b300", rating: "Excellent" },
    ScoreBand { min: 620, max: 659, color: "#FFA07A", rating: "Below Average" },
    ScoreBand { min: 700, max: 759, color: "#90EE90", rating: "Very Good" },
    ScoreBand { min: 580, max: 619, color: "#FF8C00", rating: "Poor" },
    ScoreBand { min: 660, max: 699, color: "#FFFF00", rating: "Good" },
    ScoreBand { min: 300, max: 579, color: "#FF0000", rating: "Very Poor" },
];

pub fn fallback_band() -> &'static ScoreBand {
    &SCORE_BANDS[SCORE_BANDS.len() - 1]
}

pub fn classify(score: u32) -> &'static ScoreBand {
    SCORE_BANDS
        .iter()
        .find(|band| band.contains(score))
        .unwrap_or_else(fallback_band)
}

pub fn score_color(score: u32) -> &'static str {
    classify(score).color
}

pub fn score_rating(score: u32) -> &'static str {
    classify(score).rating
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_scores_fall_back_to_very_poor() {
        for score in [0, 120, 299, 851, 900, u32::MAX] {
            let band = classify(score);
            assert_eq!(band.rating, "Very Poor", "score {score}");
            assert_eq!(band.color, "#FF0000");
        }
    }

    #[test]
    fn every_declared_score_maps_to_its_band() {
        for band in SCORE_BANDS.iter() {
            for score in band.min..=band.max {
                assert_eq!(classify(score), band, "score {score}");
            }
        }
    }

    #[test]
    fn excellent_boundaries() {
        assert_eq!(score_rating(760), "Excellent");
        assert_eq!(score_rating(850), "Excellent");
        assert_eq!(score_color(760), "#00b300");
        assert_eq!(score_rating(759), "Very Good");
    }

    #[test]
    fn mid_range_lookups() {
        assert_eq!(score_rating(300), "Very Poor");
        assert_eq!(score_rating(600), "Poor");
        assert_eq!(score_rating(640), "Below Average");
        assert_eq!(score_color(680), "#FFFF00");
    }

    #[test]
    fn legend_label_format() {
        assert_eq!(SCORE_BANDS[0].legend_label(), "760-850: Excellent");
    }
}
