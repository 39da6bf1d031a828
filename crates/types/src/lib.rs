//! Core types for the event risk engine.
//!
//! This crate provides all shared data types used across the pipeline:
//! event records, the category taxonomy, source provenance, the district
//! and province region model, the industry list, and score outputs.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod event;
pub mod ids;
pub mod industry;
pub mod region;
pub mod score;
pub mod source;
pub mod taxonomy;

// =============================================================================
// Re-exports
// =============================================================================

pub use event::{Event, WeatherReadings};
pub use ids::EventId;
pub use industry::Industry;
pub use region::{District, Province, NATIONWIDE};
pub use score::{DistrictSummary, IndustryScore, Level};
pub use source::SourceType;
pub use taxonomy::Category;
