//! Severity estimation for classified events.
//!
//! Severity folds six signals into one bounded value: source trust,
//! category weight, trend strength, classification confidence, raw weather
//! intensity, and recency decay. Missing inputs degrade to neutral
//! contributions rather than erroring.

use chrono::{DateTime, NaiveDateTime, Utc};
use types::{Category, Event, SourceType};

use crate::round2;

/// Upper bound on severity, leaving headroom below the theoretical max.
pub const SEVERITY_CAP: f64 = 0.85;

/// Reliability weight of a source feed.
pub fn source_weight(source: SourceType) -> f64 {
    match source {
        SourceType::Gov => 1.0,
        SourceType::Weather => 0.9,
        SourceType::Rss => 0.8,
        SourceType::GoogleNews => 0.75,
        SourceType::News => 0.7,
        SourceType::Gdelt => 0.6,
        SourceType::Youtube => 0.5,
        SourceType::General => 0.5,
    }
}

/// Base weight of a category: how disruptive this kind of event tends to
/// be before any per-event signal is considered.
pub fn category_weight(category: Category) -> f64 {
    match category {
        Category::Flood | Category::Landslide | Category::Cyclone => 1.0,
        Category::HealthAlert => 0.85,
        Category::HeavyRain | Category::FuelPriceIncrease => 0.8,
        Category::Strike => 0.75,
        Category::StrongWind => 0.7,
        Category::FactoryIncident => 0.65,
        Category::Lightning
        | Category::Drought
        | Category::TransportDisruption
        | Category::TrainIssue
        | Category::BusIssue
        | Category::PortDisruption
        | Category::AirportIssue
        | Category::PowerCut
        | Category::WaterSupplyIssue => 0.6,
        Category::PolicyChange | Category::EconomicUpdate => 0.5,
        Category::CrimeEvent => 0.4,
        Category::Tourism | Category::PoliticalEvent => 0.3,
        Category::CurrencyFluctuation | Category::Protest | Category::General => 0.2,
    }
}

/// Trend contribution from headline clustering: saturates at 0.4 once a
/// story has been repeated widely.
pub fn trend_score(trend_strength: u32) -> f64 {
    (trend_strength.saturating_sub(1) as f64 / 15.0).min(0.4)
}

/// Raw signal strength from attached weather readings. 30 mm/h of rain or
/// 70 km/h of wind counts as maximal.
pub fn weather_intensity(event: &Event) -> f64 {
    let rain_intensity = (event.readings.rain() / 30.0).min(1.0);
    let wind_intensity = (event.readings.wind() / 70.0).min(1.0);
    rain_intensity.max(wind_intensity)
}

/// Step-decay weight for event age relative to `now`.
///
/// Missing or unparseable timestamps are treated as maximally fresh.
pub fn recency_weight(timestamp: Option<&str>, now: DateTime<Utc>) -> f64 {
    let Some(raw) = timestamp else { return 1.0 };
    if raw.is_empty() {
        return 1.0;
    }
    let Some(ts) = parse_timestamp(raw) else { return 1.0 };

    let hours_old = (now - ts).num_seconds() as f64 / 3600.0;
    if hours_old < 1.0 {
        1.0
    } else if hours_old < 6.0 {
        0.8
    } else if hours_old < 24.0 {
        0.6
    } else if hours_old < 72.0 {
        0.3
    } else {
        0.1
    }
}

/// Lenient ISO-8601 parse: offset-carrying timestamps (including `Z`) are
/// converted to UTC, naive ones are assumed UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

/// Severity of one event in [0, 0.85], rounded to 2 decimals.
pub fn compute_severity(event: &Event, now: DateTime<Utc>) -> f64 {
    let source_w = source_weight(event.source_type);
    let category_w = category_weight(event.category.unwrap_or(Category::General));
    let trend = trend_score(event.trend_strength);
    let intensity = weather_intensity(event);
    let recency = recency_weight(event.timestamp.as_deref(), now);

    let severity = 0.30 * source_w
        + 0.25 * category_w
        + 0.15 * trend
        + 0.15 * event.confidence
        + 0.10 * intensity
        + 0.05 * recency;

    round2(severity.min(SEVERITY_CAP))
}

/// Score a whole batch in place, writing `severity` on every event.
pub fn apply_severity(events: &mut [Event], now: DateTime<Utc>) {
    for event in events.iter_mut() {
        event.severity = Some(compute_severity(event, now));
    }
}
