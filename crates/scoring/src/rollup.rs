//! District-level roll-up across industry scores.

use types::{DistrictSummary, IndustryScore, Level};

use crate::round2;

/// Average the industry scores of one district into a district summary.
///
/// The mean is unweighted across whatever industries were scored; a
/// district with none reports zeros and Low tiers rather than erroring.
pub fn summarize_district(scores: &[IndustryScore]) -> DistrictSummary {
    if scores.is_empty() {
        return DistrictSummary {
            risk_score: 0.0,
            opp_score: 0.0,
            risk_level: Level::Low,
            opp_level: Level::Low,
            event_count: 0,
        };
    }

    let n = scores.len() as f64;
    let avg_risk = round2(scores.iter().map(|s| s.risk_score).sum::<f64>() / n);
    let avg_opp = round2(scores.iter().map(|s| s.opp_score).sum::<f64>() / n);

    DistrictSummary {
        risk_score: avg_risk,
        opp_score: avg_opp,
        risk_level: Level::from_score(avg_risk),
        opp_level: Level::from_score(avg_opp),
        event_count: scores.len(),
    }
}
