//! Data types for TuneIn directory responses.
//!
//! The profiles API uses PascalCase keys (`GuideId`, `ContentInfo`,
//! `SEOInfo`); the OPML resolver uses snake_case (`media_type`, `url`).
//! Field names here follow Rust conventions and are mapped with serde renames.
//!
//! Each favorite carries a `*Cell` object with `GuideId`, an optional
//! `ContentInfo` and an optional `SEOInfo`. The cell itself stays a raw
//! `serde_json::Value` until its guards pass (see
//! [`favorites::classify`](crate::favorites::classify)); only the blocks
//! below are deserialized.

use serde::Deserialize;
use std::fmt;

/// `ContentInfo` object of a cell.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentInfo {
    #[serde(rename = "Type")]
    pub content_type: ContentType,
}

/// `SEOInfo` object of a cell. Carries the display title.
#[derive(Debug, Clone, Deserialize)]
pub struct SeoInfo {
    #[serde(rename = "Title")]
    pub title: String,
}

/// Discriminator from `ContentInfo.Type`.
///
/// Only stations stream directly. Audiobooks are not playable through the
/// resolver. Anything else (`Show`, `Podcast`, `Topic`...) is serial
/// content whose latest episode is streamed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ContentType {
    Station,
    Audiobook,
    Other(String),
}

impl ContentType {
    /// Raw type string as sent by the API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Station => "Station",
            Self::Audiobook => "Audiobook",
            Self::Other(s) => s,
        }
    }

    /// Whether the identifier must be swapped for the latest episode before tuning.
    pub fn is_serial(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Station" => Self::Station,
            "Audiobook" => Self::Audiobook,
            _ => Self::Other(s),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One playable candidate from `Tune.ashx`.
///
/// API JSON fields: `media_type` (`mp3`, `aac`, `hls`...), `url`. Other
/// fields (`bitrate`, `reliability`, `is_direct`...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamDescriptor {
    #[serde(default)]
    pub media_type: String,
    pub url: String,
}

/// A child item that passed every skip check and can be tuned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub title: String,
    pub guide_id: String,
    /// `None` when the cell has no `ContentInfo`; such items are tuned directly.
    pub content_type: Option<ContentType>,
}

/// Outcome of classifying one child item of a favorites container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// No key ending in `Cell`.
    NoCell,
    /// Cell without `GuideId`.
    NoGuideId,
    /// Cell without `SEOInfo`.
    NoSeoInfo { guide_id: String },
    /// Audiobooks cannot be tuned.
    Audiobook { guide_id: String },
    Playable(Favorite),
}
