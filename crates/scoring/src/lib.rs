//! Scoring: severity and industry impact mechanics for the risk pipeline.
//!
//! This crate provides the numeric core between classification and the
//! final report:
//! - Severity estimation with recency decay and weather intensity
//! - The category x industry sensitivity model, validated at load
//! - Industry footprints and exposure corrections
//! - Impact propagation at nationwide and district scope
//! - Risk/opportunity aggregation and district roll-up

mod aggregate;
mod error;
mod footprint;
mod impact;
mod rollup;
mod sensitivity;
mod severity;

pub use aggregate::{aggregate_impacts, DISTRICT_CAP, NATIONWIDE_OPP_CAP, NATIONWIDE_RISK_CAP};
pub use error::{Result, ScoringError};
pub use footprint::{exposure_correction, operating_provinces};
pub use impact::{
    district_impact, district_location_factor, nationwide_impact, nationwide_location_factor,
};
pub use rollup::summarize_district;
pub use sensitivity::SensitivityModel;
pub use severity::{
    apply_severity, category_weight, compute_severity, recency_weight, source_weight, trend_score,
    weather_intensity, SEVERITY_CAP,
};

/// Round a score to the 2-decimal precision used throughout the reports.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
