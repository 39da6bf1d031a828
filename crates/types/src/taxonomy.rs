//! The fixed event taxonomy.
//!
//! Every event is assigned exactly one [`Category`] by the classifier.
//! The wire format uses the human-readable labels ("Heavy Rain", ...) so
//! processed event files stay readable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Taxonomy category for a classified event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Flood,
    #[serde(rename = "Heavy Rain")]
    HeavyRain,
    Landslide,
    Drought,
    #[serde(rename = "Strong Wind")]
    StrongWind,
    Cyclone,
    Lightning,
    #[serde(rename = "Train Issue")]
    TrainIssue,
    #[serde(rename = "Bus Issue")]
    BusIssue,
    #[serde(rename = "Transport Disruption")]
    TransportDisruption,
    #[serde(rename = "Port Disruption")]
    PortDisruption,
    #[serde(rename = "Airport Issue")]
    AirportIssue,
    #[serde(rename = "Fuel Price Increase")]
    FuelPriceIncrease,
    #[serde(rename = "Policy Change")]
    PolicyChange,
    #[serde(rename = "Economic Update")]
    EconomicUpdate,
    #[serde(rename = "Currency Fluctuation")]
    CurrencyFluctuation,
    Strike,
    #[serde(rename = "Crime Event")]
    CrimeEvent,
    Protest,
    #[serde(rename = "Political Event")]
    PoliticalEvent,
    #[serde(rename = "Health Alert")]
    HealthAlert,
    Tourism,
    #[serde(rename = "Factory Incident")]
    FactoryIncident,
    #[serde(rename = "Power Cut")]
    PowerCut,
    #[serde(rename = "Water Supply Issue")]
    WaterSupplyIssue,
    /// Catch-all for events no rule matched.
    General,
}

impl Category {
    /// Every category, in classifier priority order (`General` last).
    pub const ALL: &'static [Category] = &[
        Category::Flood,
        Category::HeavyRain,
        Category::Landslide,
        Category::Drought,
        Category::StrongWind,
        Category::Cyclone,
        Category::Lightning,
        Category::TrainIssue,
        Category::BusIssue,
        Category::TransportDisruption,
        Category::PortDisruption,
        Category::AirportIssue,
        Category::FuelPriceIncrease,
        Category::PolicyChange,
        Category::EconomicUpdate,
        Category::CurrencyFluctuation,
        Category::Strike,
        Category::CrimeEvent,
        Category::Protest,
        Category::PoliticalEvent,
        Category::HealthAlert,
        Category::Tourism,
        Category::FactoryIncident,
        Category::PowerCut,
        Category::WaterSupplyIssue,
        Category::General,
    ];

    /// Human-readable label (also the wire value).
    pub fn label(self) -> &'static str {
        match self {
            Category::Flood => "Flood",
            Category::HeavyRain => "Heavy Rain",
            Category::Landslide => "Landslide",
            Category::Drought => "Drought",
            Category::StrongWind => "Strong Wind",
            Category::Cyclone => "Cyclone",
            Category::Lightning => "Lightning",
            Category::TrainIssue => "Train Issue",
            Category::BusIssue => "Bus Issue",
            Category::TransportDisruption => "Transport Disruption",
            Category::PortDisruption => "Port Disruption",
            Category::AirportIssue => "Airport Issue",
            Category::FuelPriceIncrease => "Fuel Price Increase",
            Category::PolicyChange => "Policy Change",
            Category::EconomicUpdate => "Economic Update",
            Category::CurrencyFluctuation => "Currency Fluctuation",
            Category::Strike => "Strike",
            Category::CrimeEvent => "Crime Event",
            Category::Protest => "Protest",
            Category::PoliticalEvent => "Political Event",
            Category::HealthAlert => "Health Alert",
            Category::Tourism => "Tourism",
            Category::FactoryIncident => "Factory Incident",
            Category::PowerCut => "Power Cut",
            Category::WaterSupplyIssue => "Water Supply Issue",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_category_once() {
        assert_eq!(Category::ALL.len(), 26);
        let mut seen = std::collections::HashSet::new();
        for &cat in Category::ALL {
            assert!(seen.insert(cat), "duplicate in ALL: {}", cat);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::HeavyRain).unwrap();
        assert_eq!(json, "\"Heavy Rain\"");
        let back: Category = serde_json::from_str("\"Fuel Price Increase\"").unwrap();
        assert_eq!(back, Category::FuelPriceIncrease);
    }

    #[test]
    fn test_general_is_last_in_priority_order() {
        assert_eq!(Category::ALL.last(), Some(&Category::General));
    }
}
