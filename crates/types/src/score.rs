//! Score output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above this is High.
pub const HIGH_THRESHOLD: f64 = 0.6;

/// Score at or above this (and below [`HIGH_THRESHOLD`]) is Medium.
pub const MEDIUM_THRESHOLD: f64 = 0.3;

// =============================================================================
// Level
// =============================================================================

/// Discrete tier for a risk or opportunity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Classify a score: >= 0.6 High, >= 0.3 Medium, else Low.
    pub fn from_score(score: f64) -> Level {
        if score >= HIGH_THRESHOLD {
            Level::High
        } else if score >= MEDIUM_THRESHOLD {
            Level::Medium
        } else {
            Level::Low
        }
    }

    /// The tier name (also the wire value).
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// IndustryScore
// =============================================================================

/// Aggregated risk/opportunity for one (industry, scope) pair.
///
/// Recomputed from scratch each pipeline run; no incremental state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryScore {
    /// Capped sum of negative impact magnitudes, rounded to 2 decimals.
    pub risk_score: f64,

    /// Capped sum of positive impacts, rounded to 2 decimals.
    pub opp_score: f64,

    /// Tier for `risk_score`.
    pub risk_level: Level,

    /// Tier for `opp_score`.
    pub opp_level: Level,

    /// Up to 3 originating event titles, ranked by absolute contributed
    /// impact (stable on ties).
    pub top_drivers: Vec<String>,
}

impl IndustryScore {
    /// A zero score (no contributing events).
    pub fn zero() -> Self {
        Self {
            risk_score: 0.0,
            opp_score: 0.0,
            risk_level: Level::Low,
            opp_level: Level::Low,
            top_drivers: Vec::new(),
        }
    }
}

// =============================================================================
// DistrictSummary
// =============================================================================

/// District-level roll-up across its industry scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictSummary {
    /// Unweighted mean of industry risk scores, rounded to 2 decimals.
    pub risk_score: f64,

    /// Unweighted mean of industry opportunity scores, rounded to 2 decimals.
    pub opp_score: f64,

    /// Tier for `risk_score`.
    pub risk_level: Level,

    /// Tier for `opp_score`.
    pub opp_level: Level,

    /// Number of industry entries averaged.
    pub event_count: usize,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::from_score(0.0), Level::Low);
        assert_eq!(Level::from_score(0.29), Level::Low);
        assert_eq!(Level::from_score(0.3), Level::Medium);
        assert_eq!(Level::from_score(0.59), Level::Medium);
        assert_eq!(Level::from_score(0.6), Level::High);
        assert_eq!(Level::from_score(1.0), Level::High);
    }

    #[test]
    fn test_level_serde() {
        assert_eq!(serde_json::to_string(&Level::Medium).unwrap(), "\"Medium\"");
        let back: Level = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(back, Level::High);
    }

    #[test]
    fn test_zero_score() {
        let s = IndustryScore::zero();
        assert_eq!(s.risk_score, 0.0);
        assert_eq!(s.risk_level, Level::Low);
        assert!(s.top_drivers.is_empty());
    }
}
