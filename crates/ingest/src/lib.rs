//! Feed ingestion: raw feed loading, normalization into canonical events,
//! and batch retention.
//!
//! The three upstream feeds (government bulletins, aggregated media
//! articles, per-district weather readings) arrive as loosely shaped JSON.
//! This crate turns them into [`types::Event`] records with ids, districts,
//! tags, and timestamps filled in, ready for classification and scoring.

// =============================================================================
// Module Declarations
// =============================================================================

mod error;
mod ids;
mod normalize;
mod raw;
mod retention;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{IngestError, IngestResult};
pub use ids::EventIdGenerator;
pub use normalize::{
    normalize_articles, normalize_bulletins, normalize_feeds, normalize_weather, now_iso,
    HEAVY_RAIN_ALERT_MM, STRONG_WIND_ALERT_KMH,
};
pub use raw::{RawArticle, RawBulletin, RawFeeds, RawWeather};
pub use retention::{trim_stale, MAX_AGE_HOURS};
