//! The fixed industry list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten tracked industries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Industry {
    Apparel,
    FoodBeverage,
    Water,
    Retail,
    Tourism,
    #[serde(rename = "IT")]
    It,
    Agriculture,
    Logistics,
    Energy,
    Banking,
}

impl Industry {
    /// All ten industries, in reporting order.
    pub const ALL: &'static [Industry] = &[
        Industry::Apparel,
        Industry::FoodBeverage,
        Industry::Water,
        Industry::Retail,
        Industry::Tourism,
        Industry::It,
        Industry::Agriculture,
        Industry::Logistics,
        Industry::Energy,
        Industry::Banking,
    ];

    /// Human-readable label (also the wire value).
    pub fn label(self) -> &'static str {
        match self {
            Industry::Apparel => "Apparel",
            Industry::FoodBeverage => "FoodBeverage",
            Industry::Water => "Water",
            Industry::Retail => "Retail",
            Industry::Tourism => "Tourism",
            Industry::It => "IT",
            Industry::Agriculture => "Agriculture",
            Industry::Logistics => "Logistics",
            Industry::Energy => "Energy",
            Industry::Banking => "Banking",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
