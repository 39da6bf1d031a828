//! The event record.
//!
//! # Lifecycle
//!
//! An event is created at normalization with its identifying fields fixed.
//! One pipeline pass then writes each derived field exactly once:
//!
//! ```text
//! normalize: id, source, title, summary, timestamp, districts, readings
//! classify:  category (unless pre-assigned), trend_strength, confidence
//! score:     severity
//! ```

use serde::{Deserialize, Serialize};

use crate::ids::EventId;
use crate::region::NATIONWIDE;
use crate::source::SourceType;
use crate::taxonomy::Category;

// =============================================================================
// WeatherReadings
// =============================================================================

/// Raw sensor numbers attached to weather events.
///
/// Only intensity scoring reads these; all fields are optional and absent
/// readings contribute zero intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WeatherReadings {
    /// Rainfall over the last hour, millimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain_1h: Option<f64>,

    /// Rainfall over the last three hours, millimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain_3h: Option<f64>,

    /// Wind speed, km/h.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,

    /// Air temperature, degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Relative humidity, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl WeatherReadings {
    /// Whether no reading is present at all.
    pub fn is_empty(&self) -> bool {
        self.rain_1h.is_none()
            && self.rain_3h.is_none()
            && self.wind_speed.is_none()
            && self.temperature.is_none()
            && self.humidity.is_none()
    }

    /// Effective rainfall in mm. A zero 1-hour reading falls through to the
    /// 3-hour window.
    pub fn rain(&self) -> f64 {
        self.rain_1h
            .filter(|r| *r > 0.0)
            .or(self.rain_3h)
            .unwrap_or(0.0)
    }

    /// Effective wind speed in km/h.
    pub fn wind(&self) -> f64 {
        self.wind_speed.unwrap_or(0.0)
    }
}

// =============================================================================
// Event
// =============================================================================

/// One observed occurrence, normalized from a raw feed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, assigned at normalization.
    pub id: EventId,

    /// Enumerated provenance.
    pub source_type: SourceType,

    /// Free-text provenance label (e.g. "Disaster Management Centre").
    #[serde(default)]
    pub raw_source: String,

    /// Headline text.
    pub title: String,

    /// Body text; synthesized from structured fields when the feed had none.
    #[serde(default)]
    pub summary: String,

    /// Link to the source item, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// ISO-8601 observation time. Kept as text so unparseable values degrade
    /// to "fresh" at scoring time instead of failing deserialization.
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Canonical district names, or the `NATIONAL` sentinel.
    #[serde(default)]
    pub districts: Vec<String>,

    /// Taxonomy category; `None` until classified.
    #[serde(default)]
    pub category: Option<Category>,

    /// Severity in [0, 0.85]; `None` until scored.
    #[serde(default)]
    pub severity: Option<f64>,

    /// Near-duplicate headline cluster size, at least 1.
    #[serde(default = "default_trend_strength")]
    pub trend_strength: u32,

    /// Classification/clustering certainty in [0, 1].
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// Free-form labels from normalization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Raw sensor numbers, for intensity scoring.
    #[serde(default, skip_serializing_if = "WeatherReadings::is_empty")]
    pub readings: WeatherReadings,
}

fn default_trend_strength() -> u32 {
    1
}

fn default_confidence() -> f64 {
    0.5
}

impl Event {
    /// Create an event with identifying fields set and derived fields at
    /// their pre-pipeline defaults.
    pub fn new(
        id: impl Into<EventId>,
        source_type: SourceType,
        raw_source: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_type,
            raw_source: raw_source.into(),
            title: title.into(),
            summary: summary.into(),
            url: None,
            timestamp: None,
            districts: Vec::new(),
            category: None,
            severity: None,
            trend_strength: 1,
            confidence: 0.5,
            tags: Vec::new(),
            readings: WeatherReadings::default(),
        }
    }

    /// Set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the observation timestamp (ISO-8601 text).
    pub fn with_timestamp(mut self, ts: impl Into<String>) -> Self {
        self.timestamp = Some(ts.into());
        self
    }

    /// Set the affected district names.
    pub fn with_districts(mut self, districts: Vec<String>) -> Self {
        self.districts = districts;
        self
    }

    /// Pre-assign a category (weather alerts arrive classified).
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set normalization tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Attach raw sensor readings.
    pub fn with_readings(mut self, readings: WeatherReadings) -> Self {
        self.readings = readings;
        self
    }

    /// Combined title + summary text used for classification and district
    /// detection.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.summary).trim().to_string()
    }

    /// Whether the event has only diffuse national relevance: no district
    /// at all, or exactly the `NATIONAL` sentinel.
    pub fn is_nationwide(&self) -> bool {
        self.districts.is_empty() || self.districts == [NATIONWIDE]
    }

    /// Whether the event's district list names this district.
    pub fn affects(&self, district: crate::region::District) -> bool {
        self.districts.iter().any(|name| name == district.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
