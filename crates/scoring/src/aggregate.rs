//! Folding signed impacts into per-industry risk and opportunity scores.

use types::{IndustryScore, Level};

use crate::round2;

/// Ceiling on summed risk contributions at nationwide scope.
pub const NATIONWIDE_RISK_CAP: f64 = 0.8;
/// Ceiling on summed opportunity contributions at nationwide scope.
pub const NATIONWIDE_OPP_CAP: f64 = 0.85;
/// Ceiling on either sum at district scope.
pub const DISTRICT_CAP: f64 = 1.0;

/// How many driver headlines to keep per score.
const TOP_DRIVERS: usize = 3;

/// Aggregate `(impact, headline)` pairs into one industry score.
///
/// Positive impacts sum into opportunity; zero and negative impacts sum
/// into risk by magnitude. Each sum is clamped at its cap, levels come
/// from the clamped sums, and the strongest drivers by absolute impact
/// are kept with ties resolved by encounter order.
pub fn aggregate_impacts(impacts: &[(f64, String)], risk_cap: f64, opp_cap: f64) -> IndustryScore {
    let mut risk_raw = 0.0;
    let mut opp_raw = 0.0;
    for (impact, _) in impacts {
        if *impact > 0.0 {
            opp_raw += *impact;
        } else {
            risk_raw += impact.abs();
        }
    }
    let risk = risk_raw.min(risk_cap);
    let opp = opp_raw.min(opp_cap);

    let mut ranked: Vec<&(f64, String)> = impacts.iter().collect();
    ranked.sort_by(|a, b| {
        b.0.abs()
            .partial_cmp(&a.0.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    IndustryScore {
        risk_score: round2(risk),
        opp_score: round2(opp),
        risk_level: Level::from_score(risk),
        opp_level: Level::from_score(opp),
        top_drivers: ranked
            .iter()
            .take(TOP_DRIVERS)
            .map(|(_, title)| title.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(impacts: &[(f64, &str)]) -> Vec<(f64, String)> {
        impacts.iter().map(|(i, t)| (*i, t.to_string())).collect()
    }

    #[test]
    fn test_buckets_split_by_sign() {
        let score = aggregate_impacts(
            &pairs(&[(0.2, "up"), (-0.25, "down"), (0.1, "up2")]),
            NATIONWIDE_RISK_CAP,
            NATIONWIDE_OPP_CAP,
        );
        assert_eq!(score.risk_score, 0.25);
        assert_eq!(score.opp_score, 0.3);
        assert_eq!(score.risk_level, Level::Low);
        assert_eq!(score.opp_level, Level::Medium);
    }

    #[test]
    fn test_zero_impacts_count_as_risk_entries() {
        let score = aggregate_impacts(
            &pairs(&[(0.0, "neutral")]),
            NATIONWIDE_RISK_CAP,
            NATIONWIDE_OPP_CAP,
        );
        assert_eq!(score.risk_score, 0.0);
        assert_eq!(score.opp_score, 0.0);
        assert_eq!(score.top_drivers, vec!["neutral"]);
    }

    #[test]
    fn test_risk_sum_clamps_at_cap() {
        // Raw risk 1.3 against a 0.8 ceiling.
        let score = aggregate_impacts(
            &pairs(&[(-0.7, "a"), (-0.6, "b")]),
            NATIONWIDE_RISK_CAP,
            NATIONWIDE_OPP_CAP,
        );
        assert_eq!(score.risk_score, 0.8);
        assert_eq!(score.risk_level, Level::High);
    }

    #[test]
    fn test_district_caps_allow_full_unit() {
        let score = aggregate_impacts(
            &pairs(&[(-0.7, "a"), (-0.6, "b")]),
            DISTRICT_CAP,
            DISTRICT_CAP,
        );
        assert_eq!(score.risk_score, 1.0);
    }

    #[test]
    fn test_top_drivers_ranked_by_magnitude() {
        let score = aggregate_impacts(
            &pairs(&[(0.9, "e1"), (-0.95, "e2"), (0.2, "e3"), (-0.1, "e4"), (0.05, "e5")]),
            NATIONWIDE_RISK_CAP,
            NATIONWIDE_OPP_CAP,
        );
        assert_eq!(score.top_drivers, vec!["e2", "e1", "e3"]);
    }

    #[test]
    fn test_top_drivers_ties_keep_encounter_order() {
        let score = aggregate_impacts(
            &pairs(&[(0.2, "first"), (-0.2, "second"), (0.2, "third"), (0.3, "big")]),
            NATIONWIDE_RISK_CAP,
            NATIONWIDE_OPP_CAP,
        );
        assert_eq!(score.top_drivers, vec!["big", "first", "second"]);
    }

    #[test]
    fn test_empty_impacts_score_zero() {
        let score = aggregate_impacts(&[], NATIONWIDE_RISK_CAP, NATIONWIDE_OPP_CAP);
        assert_eq!(score, IndustryScore::zero());
    }
}
