//! Report output types.

use std::collections::BTreeMap;

use serde::Serialize;
use types::{District, DistrictSummary, Industry, IndustryScore};

/// Scores for one district: per-industry entries with the roll-up summary
/// fields inline in the same JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct DistrictReport {
    #[serde(flatten)]
    pub industries: BTreeMap<Industry, IndustryScore>,

    #[serde(flatten)]
    pub summary: DistrictSummary,
}

/// Output of one pipeline run.
///
/// BTreeMap keys keep serialization order deterministic, so identical inputs
/// and an identical `now` produce byte-identical reports.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    /// The `now` snapshot the run was scored against.
    pub generated_at: String,

    /// Nationwide score per industry.
    pub nationwide: BTreeMap<Industry, IndustryScore>,

    /// Per-district scores and roll-ups, all 25 districts.
    pub districts: BTreeMap<District, DistrictReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Level;

    #[test]
    fn test_district_report_flattens_summary_inline() {
        let mut industries = BTreeMap::new();
        industries.insert(Industry::Apparel, IndustryScore::zero());
        let report = DistrictReport {
            industries,
            summary: DistrictSummary {
                risk_score: 0.4,
                opp_score: 0.1,
                risk_level: Level::Medium,
                opp_level: Level::Low,
                event_count: 1,
            },
        };
        let value = serde_json::to_value(&report).unwrap();
        let obj = value.as_object().unwrap();
        // Industry entries and roll-up fields share one object.
        assert!(obj.contains_key("Apparel"));
        assert_eq!(obj["risk_score"], 0.4);
        assert_eq!(obj["risk_level"], "Medium");
        assert_eq!(obj["event_count"], 1);
    }

    #[test]
    fn test_industry_keys_serialize_as_labels() {
        let mut nationwide = BTreeMap::new();
        nationwide.insert(Industry::It, IndustryScore::zero());
        nationwide.insert(Industry::FoodBeverage, IndustryScore::zero());
        let report = RiskReport {
            generated_at: "2025-06-01T12:00:00.000000Z".to_string(),
            nationwide,
            districts: BTreeMap::new(),
        };
        let value = serde_json::to_value(&report).unwrap();
        let keys: Vec<&String> = value["nationwide"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["FoodBeverage", "IT"]);
    }

    #[test]
    fn test_district_keys_use_display_names() {
        let mut districts = BTreeMap::new();
        districts.insert(
            District::NuwaraEliya,
            DistrictReport {
                industries: BTreeMap::new(),
                summary: DistrictSummary {
                    risk_score: 0.0,
                    opp_score: 0.0,
                    risk_level: Level::Low,
                    opp_level: Level::Low,
                    event_count: 0,
                },
            },
        );
        let report = RiskReport {
            generated_at: "2025-06-01T12:00:00.000000Z".to_string(),
            nationwide: BTreeMap::new(),
            districts,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["districts"].as_object().unwrap().contains_key("Nuwara Eliya"));
    }
}
