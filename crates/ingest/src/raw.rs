//! Raw feed records as collected upstream, before normalization.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::IngestResult;

/// One item from the government bulletin feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBulletin {
    #[serde(default)]
    pub title: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub published: Option<String>,
    pub fetched_at: Option<String>,
}

/// One item from the aggregated media feed (RSS, Google News, YouTube,
/// GDELT). The record's `source` tag doubles as its source type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
}

/// One per-district weather reading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeather {
    pub district: Option<String>,
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub rain_1h: Option<f64>,
    pub rain_3h: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// All raw feeds for one run.
#[derive(Debug, Clone, Default)]
pub struct RawFeeds {
    pub bulletins: Vec<RawBulletin>,
    pub articles: Vec<RawArticle>,
    pub weather: Vec<RawWeather>,
}

impl RawFeeds {
    /// Load the three feed files from a raw-data directory. Absent files
    /// read as empty feeds; malformed files are errors.
    pub fn load_dir(dir: &Path) -> IngestResult<Self> {
        Ok(Self {
            bulletins: load_feed(&dir.join("government_news.json"))?,
            articles: load_feed(&dir.join("sri_lanka_news.json"))?,
            weather: load_feed(&dir.join("srilanka_weather.json"))?,
        })
    }

    /// Total number of raw records across feeds.
    pub fn len(&self) -> usize {
        self.bulletins.len() + self.articles.len() + self.weather.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_feed<T: DeserializeOwned>(path: &Path) -> IngestResult<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
