//! Category-by-industry sensitivity coefficients.
//!
//! Each covered category carries one signed coefficient per industry:
//! negative values lean toward risk, positive toward opportunity. Not every
//! category is covered; events in uncovered categories (for example
//! `General`) simply do not move industry scores. A covered category with a
//! missing or duplicated industry cell is a configuration defect and fails
//! the load.

use std::collections::HashMap;

use types::{Category, Industry};

use crate::error::{Result, ScoringError};

type Row = (Category, &'static [(Industry, f64)]);

const SENSITIVITY_ROWS: &[Row] = &[
    // Weather
    (Category::Flood, &[
        (Industry::Apparel, -0.55),
        (Industry::FoodBeverage, 0.10),
        (Industry::Water, 0.65),
        (Industry::Retail, -0.10),
        (Industry::Tourism, -0.40),
        (Industry::It, -0.05),
        (Industry::Agriculture, -0.55),
        (Industry::Logistics, -0.70),
        (Industry::Energy, -0.10),
        (Industry::Banking, -0.05),
    ]),
    (Category::HeavyRain, &[
        (Industry::Apparel, -0.30),
        (Industry::FoodBeverage, 0.05),
        (Industry::Water, 0.40),
        (Industry::Retail, -0.05),
        (Industry::Tourism, -0.20),
        (Industry::It, -0.02),
        (Industry::Agriculture, -0.35),
        (Industry::Logistics, -0.40),
        (Industry::Energy, -0.05),
        (Industry::Banking, -0.02),
    ]),
    (Category::Landslide, &[
        (Industry::Apparel, -0.45),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.20),
        (Industry::Retail, -0.10),
        (Industry::Tourism, -0.30),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.45),
        (Industry::Logistics, -0.60),
        (Industry::Energy, -0.05),
        (Industry::Banking, 0.00),
    ]),
    (Category::Cyclone, &[
        (Industry::Apparel, -0.60),
        (Industry::FoodBeverage, 0.10),
        (Industry::Water, 0.50),
        (Industry::Retail, -0.10),
        (Industry::Tourism, -0.35),
        (Industry::It, -0.10),
        (Industry::Agriculture, -0.45),
        (Industry::Logistics, -0.65),
        (Industry::Energy, -0.05),
        (Industry::Banking, -0.05),
    ]),
    (Category::StrongWind, &[
        (Industry::Apparel, -0.20),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.10),
        (Industry::Retail, -0.05),
        (Industry::Tourism, -0.25),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.25),
        (Industry::Logistics, -0.30),
        (Industry::Energy, -0.05),
        (Industry::Banking, 0.00),
    ]),
    (Category::Lightning, &[
        (Industry::Apparel, -0.20),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.00),
        (Industry::Retail, 0.00),
        (Industry::Tourism, -0.10),
        (Industry::It, -0.10),
        (Industry::Agriculture, -0.10),
        (Industry::Logistics, -0.10),
        (Industry::Energy, -0.15),
        (Industry::Banking, 0.00),
    ]),
    (Category::Drought, &[
        (Industry::Apparel, -0.05),
        (Industry::FoodBeverage, -0.20),
        (Industry::Water, 0.70),
        (Industry::Retail, -0.10),
        (Industry::Tourism, -0.10),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.70),
        (Industry::Logistics, -0.10),
        (Industry::Energy, -0.10),
        (Industry::Banking, 0.00),
    ]),
    // Health
    (Category::HealthAlert, &[
        (Industry::Apparel, -0.05),
        (Industry::FoodBeverage, 0.10),
        (Industry::Water, 0.25),
        (Industry::Retail, 0.30),
        (Industry::Tourism, -0.40),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.10),
        (Industry::Logistics, -0.15),
        (Industry::Energy, 0.00),
        (Industry::Banking, 0.00),
    ]),
    // Transport
    (Category::TransportDisruption, &[
        (Industry::Apparel, -0.30),
        (Industry::FoodBeverage, -0.05),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.20),
        (Industry::Tourism, -0.30),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.20),
        (Industry::Logistics, -0.80),
        (Industry::Energy, -0.10),
        (Industry::Banking, -0.05),
    ]),
    (Category::TrainIssue, &[
        (Industry::Apparel, -0.40),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.15),
        (Industry::Tourism, -0.25),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.10),
        (Industry::Logistics, -0.50),
        (Industry::Energy, 0.00),
        (Industry::Banking, -0.05),
    ]),
    (Category::BusIssue, &[
        (Industry::Apparel, -0.30),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.10),
        (Industry::Tourism, -0.20),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.05),
        (Industry::Logistics, -0.25),
        (Industry::Energy, 0.00),
        (Industry::Banking, -0.05),
    ]),
    (Category::PortDisruption, &[
        (Industry::Apparel, -0.20),
        (Industry::FoodBeverage, -0.10),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.10),
        (Industry::Tourism, -0.20),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.10),
        (Industry::Logistics, -0.70),
        (Industry::Energy, -0.05),
        (Industry::Banking, -0.10),
    ]),
    (Category::AirportIssue, &[
        (Industry::Apparel, 0.00),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.00),
        (Industry::Retail, 0.00),
        (Industry::Tourism, -0.50),
        (Industry::It, 0.00),
        (Industry::Agriculture, 0.00),
        (Industry::Logistics, -0.30),
        (Industry::Energy, 0.00),
        (Industry::Banking, 0.00),
    ]),
    // Economy
    (Category::FuelPriceIncrease, &[
        (Industry::Apparel, -0.30),
        (Industry::FoodBeverage, -0.15),
        (Industry::Water, -0.05),
        (Industry::Retail, -0.20),
        (Industry::Tourism, -0.45),
        (Industry::It, -0.05),
        (Industry::Agriculture, -0.20),
        (Industry::Logistics, -0.90),
        (Industry::Energy, 0.45),
        (Industry::Banking, 0.15),
    ]),
    (Category::PolicyChange, &[
        (Industry::Apparel, -0.10),
        (Industry::FoodBeverage, -0.05),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.15),
        (Industry::Tourism, -0.10),
        (Industry::It, -0.05),
        (Industry::Agriculture, -0.05),
        (Industry::Logistics, -0.10),
        (Industry::Energy, -0.05),
        (Industry::Banking, 0.30),
    ]),
    (Category::EconomicUpdate, &[
        (Industry::Apparel, -0.05),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.00),
        (Industry::Retail, 0.00),
        (Industry::Tourism, -0.10),
        (Industry::It, 0.10),
        (Industry::Agriculture, -0.10),
        (Industry::Logistics, -0.10),
        (Industry::Energy, 0.15),
        (Industry::Banking, 0.40),
    ]),
    // Social
    (Category::Strike, &[
        (Industry::Apparel, -0.20),
        (Industry::FoodBeverage, -0.10),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.15),
        (Industry::Tourism, -0.30),
        (Industry::It, -0.05),
        (Industry::Agriculture, -0.10),
        (Industry::Logistics, -0.40),
        (Industry::Energy, -0.10),
        (Industry::Banking, -0.10),
    ]),
    (Category::CrimeEvent, &[
        (Industry::Apparel, -0.05),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.05),
        (Industry::Tourism, -0.15),
        (Industry::It, 0.00),
        (Industry::Agriculture, 0.00),
        (Industry::Logistics, -0.05),
        (Industry::Energy, 0.00),
        (Industry::Banking, -0.05),
    ]),
    (Category::PoliticalEvent, &[
        (Industry::Apparel, 0.00),
        (Industry::FoodBeverage, 0.00),
        (Industry::Water, 0.00),
        (Industry::Retail, 0.00),
        (Industry::Tourism, -0.05),
        (Industry::It, 0.00),
        (Industry::Agriculture, 0.00),
        (Industry::Logistics, 0.00),
        (Industry::Energy, 0.00),
        (Industry::Banking, 0.10),
    ]),
    // Industrial and utilities
    (Category::FactoryIncident, &[
        (Industry::Apparel, -0.50),
        (Industry::FoodBeverage, -0.30),
        (Industry::Water, -0.10),
        (Industry::Retail, -0.15),
        (Industry::Tourism, 0.00),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.10),
        (Industry::Logistics, -0.20),
        (Industry::Energy, 0.00),
        (Industry::Banking, 0.00),
    ]),
    (Category::PowerCut, &[
        (Industry::Apparel, -0.10),
        (Industry::FoodBeverage, -0.10),
        (Industry::Water, 0.00),
        (Industry::Retail, -0.10),
        (Industry::Tourism, -0.15),
        (Industry::It, -0.15),
        (Industry::Agriculture, 0.00),
        (Industry::Logistics, -0.15),
        (Industry::Energy, -0.25),
        (Industry::Banking, -0.10),
    ]),
    (Category::WaterSupplyIssue, &[
        (Industry::Apparel, 0.00),
        (Industry::FoodBeverage, -0.10),
        (Industry::Water, -0.60),
        (Industry::Retail, -0.10),
        (Industry::Tourism, 0.00),
        (Industry::It, 0.00),
        (Industry::Agriculture, -0.20),
        (Industry::Logistics, -0.05),
        (Industry::Energy, 0.00),
        (Industry::Banking, 0.00),
    ]),
];

/// Validated coefficient lookup, built once at pipeline start.
#[derive(Debug, Clone)]
pub struct SensitivityModel {
    table: HashMap<Category, HashMap<Industry, f64>>,
}

impl SensitivityModel {
    /// Build the model from the static rows, verifying that every covered
    /// category has exactly one coefficient per industry.
    pub fn load() -> Result<Self> {
        Self::from_rows(SENSITIVITY_ROWS)
    }

    fn from_rows(rows: &[Row]) -> Result<Self> {
        let mut table = HashMap::new();
        for (category, cells) in rows {
            let mut row = HashMap::new();
            for (industry, coefficient) in *cells {
                if row.insert(*industry, *coefficient).is_some() {
                    return Err(ScoringError::DuplicateSensitivity {
                        category: *category,
                        industry: *industry,
                    });
                }
            }
            for &industry in Industry::ALL {
                if !row.contains_key(&industry) {
                    return Err(ScoringError::MissingSensitivity {
                        category: *category,
                        industry,
                    });
                }
            }
            table.insert(*category, row);
        }
        Ok(Self { table })
    }

    /// True when the category has a sensitivity row at all.
    pub fn covers(&self, category: Category) -> bool {
        self.table.contains_key(&category)
    }

    /// Coefficient for one cell, or `None` for uncovered categories.
    pub fn coefficient(&self, category: Category, industry: Industry) -> Option<f64> {
        self.table
            .get(&category)
            .and_then(|row| row.get(&industry).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_succeeds_and_covers_expected_categories() {
        let model = SensitivityModel::load().unwrap();
        assert!(model.covers(Category::Flood));
        assert!(model.covers(Category::WaterSupplyIssue));
        // Uncovered categories stay uncovered rather than defaulting.
        assert!(!model.covers(Category::General));
        assert!(!model.covers(Category::Tourism));
        assert!(!model.covers(Category::CurrencyFluctuation));
        assert!(!model.covers(Category::Protest));
    }

    #[test]
    fn test_known_coefficients() {
        let model = SensitivityModel::load().unwrap();
        assert_eq!(model.coefficient(Category::Flood, Industry::Water), Some(0.65));
        assert_eq!(model.coefficient(Category::Flood, Industry::Logistics), Some(-0.70));
        assert_eq!(
            model.coefficient(Category::FuelPriceIncrease, Industry::Energy),
            Some(0.45)
        );
        assert_eq!(model.coefficient(Category::General, Industry::Banking), None);
    }

    #[test]
    fn test_every_covered_row_is_complete() {
        let model = SensitivityModel::load().unwrap();
        for (category, _) in SENSITIVITY_ROWS {
            for &industry in Industry::ALL {
                assert!(
                    model.coefficient(*category, industry).is_some(),
                    "missing {} x {}",
                    category,
                    industry
                );
            }
        }
    }

    #[test]
    fn test_missing_cell_fails_load() {
        let holed: &[Row] = &[(Category::Flood, &[(Industry::Apparel, -0.55)])];
        let err = SensitivityModel::from_rows(holed).unwrap_err();
        match err {
            ScoringError::MissingSensitivity { category, .. } => {
                assert_eq!(category, Category::Flood);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_cell_fails_load() {
        let doubled: &[Row] = &[(
            Category::Flood,
            &[(Industry::Apparel, -0.55), (Industry::Apparel, 0.10)],
        )];
        let err = SensitivityModel::from_rows(doubled).unwrap_err();
        assert_eq!(
            err,
            ScoringError::DuplicateSensitivity {
                category: Category::Flood,
                industry: Industry::Apparel,
            }
        );
    }
}
