//! Event source provenance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an event record came from.
///
/// The wire format uses the raw feed tags (`gov`, `google_news`, ...), so
/// externally produced event files deserialize without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Official government notice.
    Gov,
    /// Weather observation or derived alert.
    Weather,
    /// RSS feed item.
    Rss,
    /// Google News aggregate item.
    GoogleNews,
    /// Direct news site item.
    News,
    /// Video/social channel item.
    Youtube,
    /// Global event index item.
    Gdelt,
    /// Unknown provenance.
    #[default]
    General,
}

impl SourceType {
    /// All source types, in trust order (most trusted first).
    pub const ALL: &'static [SourceType] = &[
        SourceType::Gov,
        SourceType::Weather,
        SourceType::Rss,
        SourceType::GoogleNews,
        SourceType::News,
        SourceType::Gdelt,
        SourceType::Youtube,
        SourceType::General,
    ];

    /// The wire tag for this source type.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Gov => "gov",
            SourceType::Weather => "weather",
            SourceType::Rss => "rss",
            SourceType::GoogleNews => "google_news",
            SourceType::News => "news",
            SourceType::Youtube => "youtube",
            SourceType::Gdelt => "gdelt",
            SourceType::General => "general",
        }
    }

    /// Parse a raw feed tag, falling back to `General` for anything unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "gov" => SourceType::Gov,
            "weather" => SourceType::Weather,
            "rss" => SourceType::Rss,
            "google_news" => SourceType::GoogleNews,
            "news" => SourceType::News,
            "youtube" => SourceType::Youtube,
            "gdelt" => SourceType::Gdelt,
            _ => SourceType::General,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_roundtrip() {
        for &source in SourceType::ALL {
            assert_eq!(SourceType::from_tag(source.as_str()), source);
        }
    }

    #[test]
    fn test_from_tag_unknown_falls_back() {
        assert_eq!(SourceType::from_tag("carrier_pigeon"), SourceType::General);
        assert_eq!(SourceType::from_tag(""), SourceType::General);
    }

    #[test]
    fn test_from_tag_is_case_insensitive() {
        assert_eq!(SourceType::from_tag("GOV"), SourceType::Gov);
        assert_eq!(SourceType::from_tag(" Google_News "), SourceType::GoogleNews);
    }
}
