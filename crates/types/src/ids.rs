//! Event identifier type.

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an event record.
///
/// Assigned once at normalization and immutable afterwards. The canonical
/// format is `EVT-` followed by 12 uppercase hex characters, but the type
/// accepts any non-empty string so externally normalized feeds round-trip
/// unchanged.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, From, Into,
)]
pub struct EventId(pub String);

impl EventId {
    /// Borrow the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
