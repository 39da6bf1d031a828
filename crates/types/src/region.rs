//! The district/province region model.
//!
//! Districts partition into provinces: every district belongs to exactly one
//! province, enforced by the total match in [`District::province`]. Free text
//! resolves to districts via [`District::scan`] (case-insensitive substring
//! search), and an event with no resolvable location carries the
//! [`NATIONWIDE`] sentinel instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel district-list entry meaning "nationwide / ungeolocated".
pub const NATIONWIDE: &str = "NATIONAL";

// =============================================================================
// Province
// =============================================================================

/// Administrative province (the region grouping used by industry footprints).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Province {
    Western,
    Central,
    Southern,
    Northern,
    Eastern,
    #[serde(rename = "North Western")]
    NorthWestern,
    #[serde(rename = "North Central")]
    NorthCentral,
    Uva,
    Sabaragamuwa,
}

impl Province {
    /// All nine provinces.
    pub const ALL: &'static [Province] = &[
        Province::Western,
        Province::Central,
        Province::Southern,
        Province::Northern,
        Province::Eastern,
        Province::NorthWestern,
        Province::NorthCentral,
        Province::Uva,
        Province::Sabaragamuwa,
    ];

    /// Human-readable name (also the wire value).
    pub fn name(self) -> &'static str {
        match self {
            Province::Western => "Western",
            Province::Central => "Central",
            Province::Southern => "Southern",
            Province::Northern => "Northern",
            Province::Eastern => "Eastern",
            Province::NorthWestern => "North Western",
            Province::NorthCentral => "North Central",
            Province::Uva => "Uva",
            Province::Sabaragamuwa => "Sabaragamuwa",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// District
// =============================================================================

/// One of the 25 districts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum District {
    Colombo,
    Gampaha,
    Kalutara,
    Kandy,
    Matale,
    #[serde(rename = "Nuwara Eliya")]
    NuwaraEliya,
    Galle,
    Matara,
    Hambantota,
    Jaffna,
    Kilinochchi,
    Mannar,
    Vavuniya,
    Mullaitivu,
    Batticaloa,
    Trincomalee,
    Ampara,
    Badulla,
    Monaragala,
    Kurunegala,
    Puttalam,
    Anuradhapura,
    Polonnaruwa,
    Ratnapura,
    Kegalle,
}

impl District {
    /// All 25 districts in canonical order.
    pub const ALL: &'static [District] = &[
        District::Colombo,
        District::Gampaha,
        District::Kalutara,
        District::Kandy,
        District::Matale,
        District::NuwaraEliya,
        District::Galle,
        District::Matara,
        District::Hambantota,
        District::Jaffna,
        District::Kilinochchi,
        District::Mannar,
        District::Vavuniya,
        District::Mullaitivu,
        District::Batticaloa,
        District::Trincomalee,
        District::Ampara,
        District::Badulla,
        District::Monaragala,
        District::Kurunegala,
        District::Puttalam,
        District::Anuradhapura,
        District::Polonnaruwa,
        District::Ratnapura,
        District::Kegalle,
    ];

    /// Canonical district name (also the wire value).
    pub fn name(self) -> &'static str {
        match self {
            District::Colombo => "Colombo",
            District::Gampaha => "Gampaha",
            District::Kalutara => "Kalutara",
            District::Kandy => "Kandy",
            District::Matale => "Matale",
            District::NuwaraEliya => "Nuwara Eliya",
            District::Galle => "Galle",
            District::Matara => "Matara",
            District::Hambantota => "Hambantota",
            District::Jaffna => "Jaffna",
            District::Kilinochchi => "Kilinochchi",
            District::Mannar => "Mannar",
            District::Vavuniya => "Vavuniya",
            District::Mullaitivu => "Mullaitivu",
            District::Batticaloa => "Batticaloa",
            District::Trincomalee => "Trincomalee",
            District::Ampara => "Ampara",
            District::Badulla => "Badulla",
            District::Monaragala => "Monaragala",
            District::Kurunegala => "Kurunegala",
            District::Puttalam => "Puttalam",
            District::Anuradhapura => "Anuradhapura",
            District::Polonnaruwa => "Polonnaruwa",
            District::Ratnapura => "Ratnapura",
            District::Kegalle => "Kegalle",
        }
    }

    /// The enclosing province. Total: every district has exactly one.
    pub fn province(self) -> Province {
        match self {
            District::Colombo | District::Gampaha | District::Kalutara => Province::Western,
            District::Kandy | District::Matale | District::NuwaraEliya => Province::Central,
            District::Galle | District::Matara | District::Hambantota => Province::Southern,
            District::Jaffna
            | District::Kilinochchi
            | District::Mannar
            | District::Vavuniya
            | District::Mullaitivu => Province::Northern,
            District::Batticaloa | District::Trincomalee | District::Ampara => Province::Eastern,
            District::Kurunegala | District::Puttalam => Province::NorthWestern,
            District::Anuradhapura | District::Polonnaruwa => Province::NorthCentral,
            District::Badulla | District::Monaragala => Province::Uva,
            District::Ratnapura | District::Kegalle => Province::Sabaragamuwa,
        }
    }

    /// Resolve a district by name, case-insensitively.
    ///
    /// Unknown names yield `None`: downstream treats that as no regional
    /// affinity, never as an error.
    pub fn from_name(name: &str) -> Option<District> {
        let name = name.trim();
        District::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// All districts whose names occur in the text (case-insensitive
    /// substring match), in canonical order. Empty when none are mentioned.
    pub fn scan(text: &str) -> Vec<District> {
        if text.is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();
        District::ALL
            .iter()
            .copied()
            .filter(|d| lower.contains(&d.name().to_lowercase()))
            .collect()
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
