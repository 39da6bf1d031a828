//! Event classification for the risk pipeline.
//!
//! This crate provides:
//! - **Rules**: The priority-ordered trilingual keyword table
//! - **Classifier**: Category assignment plus confidence scoring
//! - **Cluster**: Greedy headline clustering for trend strength
//!
//! # Usage
//!
//! ```ignore
//! use classify::classify_events;
//!
//! // Fills category, trend_strength, and confidence on each event.
//! classify_events(&mut events);
//! ```
//!
//! Classification is deterministic: the same batch always produces the
//! same categories, trend strengths, and confidences.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod classifier;
pub mod cluster;
pub mod rules;

// =============================================================================
// Re-exports
// =============================================================================

pub use classifier::{classify, classify_events, confidence, source_bonus, FUZZY_THRESHOLD};
pub use cluster::{cluster_headlines, cluster_sizes, CLUSTER_THRESHOLD};
pub use rules::{Rule, RULES};
