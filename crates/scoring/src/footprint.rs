//! Industry operating footprints and exposure corrections.

use types::{Industry, Province};

/// Provinces where an industry mainly operates. Events touching these
/// provinces hit the industry at full strength.
pub fn operating_provinces(industry: Industry) -> &'static [Province] {
    match industry {
        // Factory zones around Colombo plus the regional garment belts.
        Industry::Apparel => &[
            Province::Western,
            Province::NorthWestern,
            Province::Central,
            Province::Southern,
        ],
        Industry::FoodBeverage => &[
            Province::Western,
            Province::Southern,
            Province::NorthWestern,
            Province::Central,
            Province::Sabaragamuwa,
        ],
        Industry::Water => &[
            Province::Western,
            Province::Central,
            Province::Sabaragamuwa,
            Province::Southern,
        ],
        Industry::Retail => &[
            Province::Western,
            Province::Central,
            Province::Southern,
            Province::NorthWestern,
            Province::Sabaragamuwa,
        ],
        Industry::Tourism => &[
            Province::Western,
            Province::Southern,
            Province::Central,
            Province::Eastern,
            Province::NorthWestern,
            Province::Northern,
            Province::Uva,
        ],
        Industry::It => &[Province::Western, Province::Central],
        Industry::Agriculture => &[
            Province::NorthCentral,
            Province::Uva,
            Province::Eastern,
            Province::Central,
            Province::NorthWestern,
            Province::Southern,
        ],
        // Ports at Colombo and Hambantota plus inland distribution hubs.
        Industry::Logistics => &[
            Province::Western,
            Province::Southern,
            Province::NorthWestern,
            Province::Central,
        ],
        Industry::Energy => &[
            Province::Central,
            Province::Western,
            Province::Southern,
            Province::Northern,
        ],
        Industry::Banking => &[
            Province::Western,
            Province::Central,
            Province::Southern,
            Province::NorthWestern,
        ],
    }
}

/// Fixed exposure correction applied to every impact. Dampens industries
/// that ride out local disruption and amplifies the weather-bound ones.
pub fn exposure_correction(industry: Industry) -> f64 {
    match industry {
        Industry::It => 0.25,
        Industry::Banking => 0.5,
        Industry::Energy => 0.7,
        Industry::Tourism => 0.8,
        Industry::Retail => 0.9,
        Industry::Apparel | Industry::FoodBeverage | Industry::Logistics => 1.0,
        Industry::Agriculture | Industry::Water => 1.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_industry_has_a_footprint() {
        for &industry in Industry::ALL {
            assert!(
                !operating_provinces(industry).is_empty(),
                "{} has no operating provinces",
                industry
            );
        }
    }

    #[test]
    fn test_footprint_membership() {
        assert!(operating_provinces(Industry::It).contains(&Province::Western));
        assert!(!operating_provinces(Industry::It).contains(&Province::Northern));
        assert!(operating_provinces(Industry::Agriculture).contains(&Province::NorthCentral));
        assert!(!operating_provinces(Industry::Banking).contains(&Province::Uva));
    }

    #[test]
    fn test_exposure_correction_spread() {
        assert_eq!(exposure_correction(Industry::It), 0.25);
        assert_eq!(exposure_correction(Industry::FoodBeverage), 1.0);
        assert_eq!(exposure_correction(Industry::Water), 1.2);
    }
}
