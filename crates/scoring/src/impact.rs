//! Signed per-event impact on an industry, at nationwide or district scope.
//!
//! `impact = severity x coefficient x location_factor / k`, where `k` is 2
//! for nationwide scoring and 1 for district scoring, followed by the
//! industry's exposure correction. The nationwide divisor offsets the fact
//! that its location factor already sweeps every affected district.

use types::{District, Event, Industry, NATIONWIDE};

use crate::footprint::{exposure_correction, operating_provinces};
use crate::sensitivity::SensitivityModel;

/// Location relevance of an event for nationwide scoring.
///
/// Events with no district, or tagged only as national, carry diffuse
/// relevance. Otherwise the strongest factor across the affected districts
/// wins: 1.0 inside the industry's footprint, 0.3 elsewhere in the
/// country. Unknown district names contribute nothing.
pub fn nationwide_location_factor(industry: Industry, districts: &[String]) -> f64 {
    if districts.is_empty() || districts == [NATIONWIDE] {
        return 0.6;
    }

    let provinces = operating_provinces(industry);
    let mut max_factor: f64 = 0.1;
    for name in districts {
        let Some(district) = District::from_name(name) else {
            continue;
        };
        let factor = if provinces.contains(&district.province()) {
            1.0
        } else {
            0.3
        };
        max_factor = max_factor.max(factor);
    }
    max_factor
}

/// Location relevance when scoring one specific district: full effect in
/// the industry's footprint, partial elsewhere.
pub fn district_location_factor(industry: Industry, district: District) -> f64 {
    if operating_provinces(industry).contains(&district.province()) {
        1.0
    } else {
        0.4
    }
}

/// Nationwide impact of one event on one industry, or `None` when the
/// event's category has no sensitivity coverage.
pub fn nationwide_impact(
    model: &SensitivityModel,
    event: &Event,
    industry: Industry,
) -> Option<f64> {
    let coefficient = model.coefficient(event.category?, industry)?;
    let severity = event.severity.unwrap_or(0.0);
    let location = nationwide_location_factor(industry, &event.districts);
    let base = (severity * coefficient * location) / 2.0;
    Some(base * exposure_correction(industry))
}

/// Impact of one event on one industry within a single district, or `None`
/// when the event's category has no sensitivity coverage.
pub fn district_impact(
    model: &SensitivityModel,
    event: &Event,
    industry: Industry,
    district: District,
) -> Option<f64> {
    let coefficient = model.coefficient(event.category?, industry)?;
    let severity = event.severity.unwrap_or(0.0);
    let location = district_location_factor(industry, district);
    Some(severity * coefficient * location * exposure_correction(industry))
}
