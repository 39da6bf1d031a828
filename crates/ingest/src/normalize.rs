//! Feed record normalization.
//!
//! Converts the three raw feed shapes into canonical [`Event`] records:
//! government bulletins, aggregated media articles, and per-district weather
//! readings. Weather readings additionally mint pre-classified alert events
//! when rainfall or wind crosses the alert thresholds.

use chrono::{DateTime, SecondsFormat, Utc};
use types::{Category, District, Event, SourceType, WeatherReadings, NATIONWIDE};

use crate::ids::EventIdGenerator;
use crate::raw::{RawArticle, RawBulletin, RawFeeds, RawWeather};

/// 3-hour rainfall at or above this mints a heavy rain alert event.
pub const HEAVY_RAIN_ALERT_MM: f64 = 20.0;

/// Wind speed at or above this mints a strong wind alert event.
pub const STRONG_WIND_ALERT_KMH: f64 = 40.0;

/// Normalize all feeds into one batch, in feed order: government bulletins,
/// then media articles, then weather readings.
pub fn normalize_feeds(
    feeds: &RawFeeds,
    ids: &mut EventIdGenerator,
    now: DateTime<Utc>,
) -> Vec<Event> {
    let mut events = normalize_bulletins(&feeds.bulletins, ids, now);
    events.extend(normalize_articles(&feeds.articles, ids, now));
    events.extend(normalize_weather(&feeds.weather, ids, now));
    events
}

/// Government bulletins. Records with no body text get a synthesized
/// summary so district detection and classification still have something
/// to read.
pub fn normalize_bulletins(
    bulletins: &[RawBulletin],
    ids: &mut EventIdGenerator,
    now: DateTime<Utc>,
) -> Vec<Event> {
    bulletins
        .iter()
        .map(|raw| {
            let mut summary = body_text(&[
                raw.summary.as_deref(),
                raw.description.as_deref(),
                raw.content.as_deref(),
            ]);
            if summary.trim().is_empty() {
                summary = format!("Government event reported: {}", raw.title);
            }
            let districts = detect_districts(&format!("{} {}", raw.title, summary));
            let timestamp = first_filled(&[raw.published.as_deref(), raw.fetched_at.as_deref()])
                .map(str::to_string)
                .unwrap_or_else(|| now_iso(now));

            let mut ev = Event::new(
                ids.next_id(),
                SourceType::Gov,
                raw.source.clone().unwrap_or_else(|| "Government".to_string()),
                raw.title.trim(),
                summary.trim(),
            )
            .with_timestamp(timestamp)
            .with_districts(districts)
            .with_tags(vec!["government".to_string(), "official".to_string()]);
            if let Some(url) = &raw.url {
                ev = ev.with_url(url.clone());
            }
            ev
        })
        .collect()
}

/// Media articles. The record's `source` tag names both the enumerated
/// source type and the free-text provenance label.
pub fn normalize_articles(
    articles: &[RawArticle],
    ids: &mut EventIdGenerator,
    now: DateTime<Utc>,
) -> Vec<Event> {
    articles
        .iter()
        .map(|raw| {
            let mut summary = body_text(&[
                raw.summary.as_deref(),
                raw.description.as_deref(),
                raw.content.as_deref(),
            ]);
            if summary.trim().is_empty() {
                summary = format!("News event: {}", raw.title);
            }
            let districts = detect_districts(&format!("{} {}", raw.title, summary));
            let timestamp = first_filled(&[raw.published.as_deref()])
                .map(str::to_string)
                .unwrap_or_else(|| now_iso(now));
            let tag = raw.source.clone().unwrap_or_else(|| "news".to_string());

            let mut ev = Event::new(
                ids.next_id(),
                SourceType::from_tag(&tag),
                tag,
                raw.title.trim(),
                summary.trim(),
            )
            .with_timestamp(timestamp)
            .with_districts(districts)
            .with_tags(vec!["news".to_string()]);
            if let Some(link) = &raw.link {
                ev = ev.with_url(link.clone());
            }
            ev
        })
        .collect()
}

/// Weather readings. Every reading yields a base update event; readings at
/// or above the alert thresholds yield additional pre-classified alert
/// events carrying the same sensor numbers.
pub fn normalize_weather(
    readings: &[RawWeather],
    ids: &mut EventIdGenerator,
    now: DateTime<Utc>,
) -> Vec<Event> {
    let mut events = Vec::new();
    for raw in readings {
        let district = raw.district.clone().unwrap_or_else(|| "Unknown".to_string());
        let summary = weather_summary(raw);
        let sensors = WeatherReadings {
            rain_1h: raw.rain_1h,
            rain_3h: raw.rain_3h,
            wind_speed: raw.wind_speed,
            temperature: raw.temperature,
            humidity: raw.humidity,
        };

        events.push(
            Event::new(
                ids.next_id(),
                SourceType::Weather,
                "OpenWeather",
                format!("Weather update for {district}"),
                summary.clone(),
            )
            .with_timestamp(now_iso(now))
            .with_districts(vec![district.clone()])
            .with_tags(vec!["weather".to_string()])
            .with_readings(sensors.clone()),
        );

        if raw.rain_3h.unwrap_or(0.0) >= HEAVY_RAIN_ALERT_MM {
            events.push(
                Event::new(
                    ids.next_id(),
                    SourceType::Weather,
                    "OpenWeather",
                    format!("Heavy rain alert in {district}"),
                    summary.clone(),
                )
                .with_timestamp(now_iso(now))
                .with_category(Category::HeavyRain)
                .with_districts(vec![district.clone()])
                .with_tags(vec!["weather".to_string(), "rain".to_string()])
                .with_readings(sensors.clone()),
            );
        }

        if raw.wind_speed.unwrap_or(0.0) >= STRONG_WIND_ALERT_KMH {
            events.push(
                Event::new(
                    ids.next_id(),
                    SourceType::Weather,
                    "OpenWeather",
                    format!("Strong wind alert in {district}"),
                    summary.clone(),
                )
                .with_timestamp(now_iso(now))
                .with_category(Category::StrongWind)
                .with_districts(vec![district.clone()])
                .with_tags(vec!["weather".to_string(), "wind".to_string()])
                .with_readings(sensors.clone()),
            );
        }
    }
    events
}

/// Render `now` in the ISO form the feeds themselves use.
pub fn now_iso(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// First candidate that is present and non-empty. Whitespace-only text
/// counts as present; the summary fallback handles that case separately.
fn first_filled<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find_map(|c| c.filter(|s| !s.is_empty()))
}

fn body_text(candidates: &[Option<&str>]) -> String {
    first_filled(candidates).unwrap_or("").to_string()
}

/// District names mentioned in the text, or the `NATIONAL` sentinel when
/// none are.
fn detect_districts(text: &str) -> Vec<String> {
    let found: Vec<String> = District::scan(text)
        .into_iter()
        .map(|d| d.name().to_string())
        .collect();
    if found.is_empty() {
        vec![NATIONWIDE.to_string()]
    } else {
        found
    }
}

fn weather_summary(raw: &RawWeather) -> String {
    let warnings = if raw.warnings.is_empty() {
        "None".to_string()
    } else {
        raw.warnings.join(", ")
    };
    format!(
        "Temp: {}°C, Wind: {} km/h, Rain1h: {} mm, Rain3h: {} mm, Humidity: {}%, Warnings: {}",
        reading_text(raw.temperature),
        reading_text(raw.wind_speed),
        reading_text(raw.rain_1h),
        reading_text(raw.rain_3h),
        reading_text(raw.humidity),
        warnings,
    )
}

fn reading_text(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_bulletin_fallback_summary() {
        let raw = RawBulletin {
            title: "Relief supplies dispatched".to_string(),
            ..Default::default()
        };
        let mut ids = EventIdGenerator::new(1);
        let events = normalize_bulletins(&[raw], &mut ids, at_noon());
        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.source_type, SourceType::Gov);
        assert_eq!(ev.raw_source, "Government");
        assert_eq!(
            ev.summary,
            "Government event reported: Relief supplies dispatched"
        );
        assert_eq!(ev.tags, vec!["government", "official"]);
        assert_eq!(ev.timestamp.as_deref(), Some("2025-06-01T12:00:00.000000Z"));
    }

    #[test]
    fn test_bulletin_body_chain_skips_empty_candidates() {
        let raw = RawBulletin {
            title: "Notice".to_string(),
            summary: Some(String::new()),
            description: Some("Full advisory text".to_string()),
            published: Some("2025-06-01T08:00:00Z".to_string()),
            source: Some("DMC".to_string()),
            ..Default::default()
        };
        let mut ids = EventIdGenerator::new(1);
        let ev = &normalize_bulletins(&[raw], &mut ids, at_noon())[0];
        assert_eq!(ev.summary, "Full advisory text");
        assert_eq!(ev.raw_source, "DMC");
        assert_eq!(ev.timestamp.as_deref(), Some("2025-06-01T08:00:00Z"));
    }

    #[test]
    fn test_districts_detected_from_title_and_summary() {
        let raw = RawBulletin {
            title: "Flood warning".to_string(),
            summary: Some("Evacuations in Galle and Matara districts".to_string()),
            ..Default::default()
        };
        let mut ids = EventIdGenerator::new(1);
        let ev = &normalize_bulletins(&[raw], &mut ids, at_noon())[0];
        assert_eq!(ev.districts, vec!["Galle", "Matara"]);
    }

    #[test]
    fn test_unlocated_event_gets_national_sentinel() {
        let raw = RawArticle {
            title: "Cabinet reshuffle announced".to_string(),
            ..Default::default()
        };
        let mut ids = EventIdGenerator::new(1);
        let ev = &normalize_articles(&[raw], &mut ids, at_noon())[0];
        assert_eq!(ev.districts, vec![NATIONWIDE]);
    }

    #[test]
    fn test_article_source_tag_sets_type_and_label() {
        let raw = RawArticle {
            title: "Fuel price revision".to_string(),
            summary: Some("Prices revised islandwide".to_string()),
            source: Some("google_news".to_string()),
            link: Some("https://news.example/fuel".to_string()),
            ..Default::default()
        };
        let mut ids = EventIdGenerator::new(1);
        let ev = &normalize_articles(&[raw], &mut ids, at_noon())[0];
        assert_eq!(ev.source_type, SourceType::GoogleNews);
        assert_eq!(ev.raw_source, "google_news");
        assert_eq!(ev.url.as_deref(), Some("https://news.example/fuel"));
        assert_eq!(ev.tags, vec!["news"]);
        assert_eq!(ev.summary, "Prices revised islandwide");
    }

    #[test]
    fn test_weather_reading_below_thresholds_yields_base_event_only() {
        let raw = RawWeather {
            district: Some("Galle".to_string()),
            temperature: Some(28.5),
            wind_speed: Some(20.0),
            rain_1h: Some(0.0),
            rain_3h: Some(5.0),
            humidity: Some(80.0),
            warnings: Vec::new(),
        };
        let mut ids = EventIdGenerator::new(1);
        let events = normalize_weather(&[raw], &mut ids, at_noon());
        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.title, "Weather update for Galle");
        assert_eq!(
            ev.summary,
            "Temp: 28.5°C, Wind: 20 km/h, Rain1h: 0 mm, Rain3h: 5 mm, \
             Humidity: 80%, Warnings: None"
        );
        assert_eq!(ev.districts, vec!["Galle"]);
        assert!(ev.category.is_none());
        assert_eq!(ev.readings.rain_3h, Some(5.0));
    }

    #[test]
    fn test_weather_thresholds_mint_preclassified_alerts() {
        let raw = RawWeather {
            district: Some("Ratnapura".to_string()),
            wind_speed: Some(40.0),
            rain_3h: Some(20.0),
            warnings: vec!["thunderstorm".to_string()],
            ..Default::default()
        };
        let mut ids = EventIdGenerator::new(1);
        let events = normalize_weather(&[raw], &mut ids, at_noon());
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].title, "Heavy rain alert in Ratnapura");
        assert_eq!(events[1].category, Some(Category::HeavyRain));
        assert_eq!(events[1].tags, vec!["weather", "rain"]);
        assert_eq!(events[2].title, "Strong wind alert in Ratnapura");
        assert_eq!(events[2].category, Some(Category::StrongWind));
        assert_eq!(events[2].tags, vec!["weather", "wind"]);
        // Alerts carry the same sensor numbers as the base update.
        assert_eq!(events[1].readings, events[0].readings);
    }

    #[test]
    fn test_missing_weather_district_reads_unknown() {
        let raw = RawWeather {
            rain_3h: Some(30.0),
            ..Default::default()
        };
        let mut ids = EventIdGenerator::new(1);
        let events = normalize_weather(&[raw], &mut ids, at_noon());
        assert_eq!(events[0].title, "Weather update for Unknown");
        assert_eq!(events[1].title, "Heavy rain alert in Unknown");
        assert!(events[0]
            .summary
            .contains("Temp: None°C, Wind: None km/h, Rain1h: None mm, Rain3h: 30 mm"));
    }

    #[test]
    fn test_feed_order_is_gov_media_weather() {
        let feeds = RawFeeds {
            bulletins: vec![RawBulletin {
                title: "Bulletin".to_string(),
                ..Default::default()
            }],
            articles: vec![RawArticle {
                title: "Article".to_string(),
                ..Default::default()
            }],
            weather: vec![RawWeather {
                district: Some("Kandy".to_string()),
                ..Default::default()
            }],
        };
        let mut ids = EventIdGenerator::new(1);
        let events = normalize_feeds(&feeds, &mut ids, at_noon());
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].source_type, SourceType::Gov);
        assert_eq!(events[1].title, "Article");
        assert_eq!(events[2].source_type, SourceType::Weather);
    }

    #[test]
    fn test_same_seed_yields_identical_batches() {
        let feeds = RawFeeds {
            articles: vec![RawArticle {
                title: "Strike at Colombo port".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let batch_a = normalize_feeds(&feeds, &mut EventIdGenerator::new(9), at_noon());
        let batch_b = normalize_feeds(&feeds, &mut EventIdGenerator::new(9), at_noon());
        assert_eq!(batch_a, batch_b);
    }
}
