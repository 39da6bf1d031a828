//! Command-line configuration for a scoring run.

use std::path::PathBuf;

use clap::Parser;

/// Event impact scoring over Sri Lanka news, bulletin, and weather feeds.
#[derive(Parser, Debug)]
#[command(name = "event-risk-engine")]
#[command(about = "Scores event impact per industry, nationwide and per district")]
#[command(version)]
pub struct Args {
    /// Normalized events JSON (array of event records)
    #[arg(long, env = "RISK_EVENTS")]
    pub events: Option<PathBuf>,

    /// Directory holding the three raw feed files to normalize
    #[arg(long, env = "RISK_RAW")]
    pub raw: Option<PathBuf>,

    /// Report destination (stdout when omitted)
    #[arg(long, env = "RISK_OUT")]
    pub out: Option<PathBuf>,

    /// Drop events older than the retention window before scoring
    #[arg(long, env = "RISK_TRIM")]
    pub trim: bool,

    /// Seed for deterministic event ids
    #[arg(long, env = "RISK_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RISK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// At least one input source must be named.
    pub fn validate(&self) -> Result<(), String> {
        if self.events.is_none() && self.raw.is_none() {
            return Err("no input events: pass --events and/or --raw".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_an_input() {
        let args = Args::parse_from(["event-risk-engine"]);
        assert!(args.validate().is_err());
        let args = Args::parse_from(["event-risk-engine", "--raw", "data/raw"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_seed_defaults_to_zero() {
        let args = Args::parse_from(["event-risk-engine", "--events", "events.json"]);
        assert_eq!(args.seed, 0);
        assert!(!args.trim);
    }
}
