//! Event Risk Engine - main binary
//!
//! Loads events (already-normalized JSON, raw feed files, or both), runs the
//! scoring pipeline once over the batch, and writes the combined report:
//!
//! ```text
//! raw feeds ──► normalize ──┐
//!                           ├──► trim ──► classify ──► score ──► report
//! events.json ─────────────┘
//! ```

mod config;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;
use clap::Parser;
use ingest::{normalize_feeds, trim_stale, EventIdGenerator, RawFeeds};
use pipeline::{Pipeline, RiskReport};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use types::{Event, Level};

pub use config::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("configuration error: {}", e);
        std::process::exit(1);
    }

    let now = Utc::now();

    let mut events = match &args.events {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };
    let loaded = events.len();

    let mut normalized = 0;
    if let Some(dir) = &args.raw {
        let feeds = RawFeeds::load_dir(dir)?;
        let mut ids = EventIdGenerator::new(args.seed);
        let fresh = normalize_feeds(&feeds, &mut ids, now);
        normalized = fresh.len();
        info!(
            "normalized {} events from {} raw records",
            normalized,
            feeds.len()
        );
        events.extend(fresh);
    }

    if args.trim {
        let before = events.len();
        events = trim_stale(events, now);
        info!("retention dropped {} stale events", before - events.len());
    }

    print_run_banner(loaded, normalized, events.len(), &args);

    let pipeline = Pipeline::new()?;
    let report = pipeline.run(&mut events, now);

    print_summary(&events, &report);

    let json = serde_json::to_string_pretty(&report)?;
    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            info!("report written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn load_events(path: &Path) -> anyhow::Result<Vec<Event>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_run_banner(loaded: usize, normalized: usize, total: usize, args: &Args) {
    eprintln!("╔════════════════════════════════════════════════════════════╗");
    eprintln!("║  Event Risk Engine                                         ║");
    eprintln!("╠════════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Loaded: {:5}  │  Normalized: {:5}  │  Scoring: {:5}    ║",
        loaded, normalized, total
    );
    eprintln!(
        "║  Trim: {:3}  │  Seed: {:<10}                              ║",
        if args.trim { "on" } else { "off" },
        args.seed
    );
    eprintln!("╚════════════════════════════════════════════════════════════╝");
}

fn print_summary(events: &[Event], report: &RiskReport) {
    let categories: HashSet<_> = events.iter().filter_map(|ev| ev.category).collect();
    let high_risk: Vec<&str> = report
        .nationwide
        .iter()
        .filter(|(_, score)| score.risk_level == Level::High)
        .map(|(industry, _)| industry.label())
        .collect();
    let high_districts = report
        .districts
        .values()
        .filter(|d| d.summary.risk_level == Level::High)
        .count();

    eprintln!();
    eprintln!("╔════════════════════════════════════════════════════════════╗");
    eprintln!("║  Scoring Complete                                          ║");
    eprintln!("╠════════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Events: {:5}  │  Categories hit: {:3}                     ║",
        events.len(),
        categories.len()
    );
    eprintln!(
        "║  High-risk districts: {:3}                                  ║",
        high_districts
    );
    if high_risk.is_empty() {
        eprintln!("║  High-risk industries: none                                ║");
    } else {
        eprintln!("║  High-risk industries: {:<35} ║", high_risk.join(", "));
    }
    eprintln!("╚════════════════════════════════════════════════════════════╝");
}
