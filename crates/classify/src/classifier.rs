//! Rule-driven event categorization and confidence scoring.

use types::{Category, Event, SourceType};

use crate::cluster::cluster_sizes;
use crate::rules::RULES;

/// Minimum partial-similarity score for a multi-word phrase to count as a
/// fuzzy match.
pub const FUZZY_THRESHOLD: u32 = 80;

/// True when any keyword is a literal substring of the text, or a
/// multi-word phrase scores at least [`FUZZY_THRESHOLD`] against it.
///
/// `text` must already be lowercased.
fn keyword_match(text: &str, keywords: &[&str]) -> bool {
    for kw in keywords {
        if text.contains(kw) {
            return true;
        }
        if kw.contains(' ') && textsim::partial_ratio(kw, text) >= FUZZY_THRESHOLD {
            return true;
        }
    }
    false
}

/// Assign a category to free text. Rules are tried in priority order and the
/// first match wins; text matching no rule falls back to
/// [`Category::General`].
pub fn classify(text: &str) -> Category {
    let text = text.to_lowercase();
    for rule in RULES {
        if keyword_match(&text, rule.keywords) {
            return rule.category;
        }
    }
    Category::General
}

/// Reliability bonus by source type. Official feeds rank highest, sensor
/// feeds next, aggregated news next, social and bulk feeds lowest.
pub fn source_bonus(source: SourceType) -> f64 {
    match source {
        SourceType::Gov => 0.4,
        SourceType::Weather => 0.3,
        SourceType::Rss | SourceType::GoogleNews | SourceType::News => 0.2,
        SourceType::Youtube | SourceType::Gdelt => 0.1,
        SourceType::General => 0.0,
    }
}

/// Classification confidence in [0, 1]: a 0.5 base, plus 0.05 per extra
/// near-duplicate headline (up to five), plus the source reliability bonus.
pub fn confidence(trend_strength: u32, source: SourceType) -> f64 {
    let trend = 0.05 * trend_strength.saturating_sub(1).min(5) as f64;
    let conf = 0.5 + trend + source_bonus(source);
    round2(conf.min(1.0))
}

/// Classify a batch in place: cluster headlines for trend strength, then
/// fill in `category`, `trend_strength`, and `confidence` on each event.
///
/// Events that arrive with a category already set (weather alerts are
/// emitted pre-categorized) keep it; trend and confidence are still
/// refreshed from the batch.
pub fn classify_events(events: &mut [Event]) {
    let titles: Vec<String> = events.iter().map(|ev| ev.title.clone()).collect();
    let sizes = cluster_sizes(&titles);

    for event in events.iter_mut() {
        if event.category.is_none() {
            event.category = Some(classify(&event.text()));
        }
        let trend = sizes.get(&event.title).copied().unwrap_or(1) as u32;
        event.trend_strength = trend;
        event.confidence = confidence(trend, event.source_type);
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
