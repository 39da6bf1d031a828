//! Pipeline runner executing the staged batch transformation.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use classify::classify_events;
use scoring::{
    aggregate_impacts, apply_severity, district_impact, nationwide_impact, summarize_district,
    SensitivityModel, DISTRICT_CAP, NATIONWIDE_OPP_CAP, NATIONWIDE_RISK_CAP,
};
use tracing::{debug, info};
use types::{District, Event, Industry, IndustryScore};

use crate::report::{DistrictReport, RiskReport};

/// The scoring pipeline.
///
/// Holds the validated sensitivity model; everything else is per-run input.
/// One run mutates each derived event field exactly once:
///
/// 1. Cluster headlines, classify, fill trend strength and confidence
/// 2. Score severity against the `now` snapshot
/// 3. Aggregate nationwide impacts per industry
/// 4. Aggregate per-district impacts and roll up each district
pub struct Pipeline {
    sensitivity: SensitivityModel,
}

impl Pipeline {
    /// Create a pipeline, validating the compiled-in sensitivity table.
    /// A defective table makes every downstream score unusable, so this
    /// fails fast instead of scoring around the hole.
    pub fn new() -> scoring::Result<Self> {
        Ok(Self {
            sensitivity: SensitivityModel::load()?,
        })
    }

    /// Run one batch, filling each event's derived fields in place. The
    /// same `now` drives every recency computation so identical inputs
    /// produce byte-identical reports.
    pub fn run(&self, events: &mut [Event], now: DateTime<Utc>) -> RiskReport {
        // Phase 1: classification (clustering, category, trend, confidence)
        classify_events(events);
        debug!("classified {} events", events.len());

        // Phase 2: severity
        apply_severity(events, now);

        // Phase 3: nationwide aggregation
        let nationwide = self.score_nationwide(events);

        // Phase 4: per-district aggregation and roll-up
        let districts = self.score_districts(events);

        info!(
            "scored {} events across {} districts",
            events.len(),
            districts.len()
        );

        RiskReport {
            generated_at: now.to_rfc3339_opts(SecondsFormat::Micros, true),
            nationwide,
            districts,
        }
    }

    fn score_nationwide(&self, events: &[Event]) -> BTreeMap<Industry, IndustryScore> {
        Industry::ALL
            .iter()
            .map(|&industry| {
                let impacts: Vec<(f64, String)> = events
                    .iter()
                    .filter_map(|ev| {
                        nationwide_impact(&self.sensitivity, ev, industry)
                            .map(|impact| (impact, ev.title.clone()))
                    })
                    .collect();
                let score = aggregate_impacts(&impacts, NATIONWIDE_RISK_CAP, NATIONWIDE_OPP_CAP);
                (industry, score)
            })
            .collect()
    }

    fn score_districts(&self, events: &[Event]) -> BTreeMap<District, DistrictReport> {
        District::ALL
            .iter()
            .map(|&district| {
                let local: Vec<&Event> =
                    events.iter().filter(|ev| ev.affects(district)).collect();
                let industries: BTreeMap<Industry, IndustryScore> = Industry::ALL
                    .iter()
                    .map(|&industry| {
                        let impacts: Vec<(f64, String)> = local
                            .iter()
                            .filter_map(|ev| {
                                district_impact(&self.sensitivity, ev, industry, district)
                                    .map(|impact| (impact, ev.title.clone()))
                            })
                            .collect();
                        (industry, aggregate_impacts(&impacts, DISTRICT_CAP, DISTRICT_CAP))
                    })
                    .collect();

                let scores: Vec<IndustryScore> = industries.values().cloned().collect();
                let summary = summarize_district(&scores);
                (district, DistrictReport { industries, summary })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use types::{EventId, Level, SourceType};

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn fresh_event(id: &str, title: &str, districts: &[&str]) -> Event {
        Event::new(EventId::from(id), SourceType::News, "Ada Derana", title, "")
            .with_timestamp("2025-06-01T11:30:00Z")
            .with_districts(districts.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_new_validates_shipped_table() {
        assert!(Pipeline::new().is_ok());
    }

    #[test]
    fn test_empty_run_yields_full_zeroed_report() {
        let pipeline = Pipeline::new().unwrap();
        let report = pipeline.run(&mut [], at_noon());
        assert_eq!(report.nationwide.len(), Industry::ALL.len());
        assert_eq!(report.districts.len(), District::ALL.len());
        for score in report.nationwide.values() {
            assert_eq!(*score, IndustryScore::zero());
        }
        for district in report.districts.values() {
            assert_eq!(district.summary.risk_score, 0.0);
            assert_eq!(district.summary.risk_level, Level::Low);
            // Every industry is still reported, so the roll-up averages
            // a full set of zero entries.
            assert_eq!(district.summary.event_count, Industry::ALL.len());
        }
    }

    #[test]
    fn test_flood_event_scores_its_district() {
        let pipeline = Pipeline::new().unwrap();
        let mut events = vec![fresh_event(
            "EVT-1",
            "Flood submerges low areas of Kalutara",
            &["Kalutara"],
        )];
        let report = pipeline.run(&mut events, at_noon());
        // Derived fields were written back onto the event.
        assert_eq!(events[0].category, Some(types::Category::Flood));
        assert!(events[0].severity.is_some());

        let kalutara = &report.districts[&District::Kalutara];
        // Flood hurts logistics and benefits water services.
        assert!(kalutara.industries[&Industry::Logistics].risk_score > 0.0);
        assert!(kalutara.industries[&Industry::Water].opp_score > 0.0);
        assert!(kalutara.industries[&Industry::Logistics]
            .top_drivers
            .contains(&"Flood submerges low areas of Kalutara".to_string()));

        // A district the event does not name stays untouched.
        let jaffna = &report.districts[&District::Jaffna];
        assert_eq!(jaffna.industries[&Industry::Logistics].risk_score, 0.0);
    }

    #[test]
    fn test_nationwide_scope_sees_district_events() {
        let pipeline = Pipeline::new().unwrap();
        let mut events = vec![fresh_event(
            "EVT-1",
            "Flood submerges low areas of Kalutara",
            &["Kalutara"],
        )];
        let report = pipeline.run(&mut events, at_noon());
        // Nationwide magnitude is halved and exposure-corrected, so it is
        // smaller than the district figure but still present.
        let national = report.nationwide[&Industry::Logistics].risk_score;
        let district = report.districts[&District::Kalutara].industries[&Industry::Logistics]
            .risk_score;
        assert!(national > 0.0);
        assert!(national < district);
    }

    #[test]
    fn test_uncovered_category_contributes_nothing() {
        let pipeline = Pipeline::new().unwrap();
        let mut events = vec![fresh_event(
            "EVT-1",
            "Protest march through Colombo",
            &["Colombo"],
        )];
        let report = pipeline.run(&mut events, at_noon());
        for score in report.districts[&District::Colombo].industries.values() {
            assert_eq!(score.risk_score, 0.0);
            assert_eq!(score.opp_score, 0.0);
        }
    }

    #[test]
    fn test_preassigned_category_survives_the_run() {
        let pipeline = Pipeline::new().unwrap();
        let mut events = vec![
            fresh_event("EVT-1", "Heavy rain alert in Ratnapura", &["Ratnapura"])
                .with_category(types::Category::HeavyRain),
        ];
        let report = pipeline.run(&mut events, at_noon());
        // Heavy rain hits agriculture in the named district.
        assert!(
            report.districts[&District::Ratnapura].industries[&Industry::Agriculture].risk_score
                > 0.0
        );
    }
}
