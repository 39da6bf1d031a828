//! Pipeline crate: the staged batch run over one snapshot of events.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │              Pipeline.run()                │
//! │                                            │
//! │  1. Cluster headlines, classify events     │
//! │  2. Score severity (shared `now` snapshot) │
//! │  3. Aggregate nationwide per industry      │
//! │  4. Aggregate per district, then roll up   │
//! │                                            │
//! └────────────────────────────────────────────┘
//! ```
//!
//! The run is single-threaded and idempotent: identical events plus an
//! identical `now` yield a byte-identical serialized [`RiskReport`].

// =============================================================================
// Module Declarations
// =============================================================================

mod report;
mod runner;

// =============================================================================
// Re-exports
// =============================================================================

pub use report::{DistrictReport, RiskReport};
pub use runner::Pipeline;
