use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::interface::quality::MediaKind;

/// One quality record as the remote API returns it. Every field is
/// treated as optional no matter what the provider documents; the shape
/// has drifted across its revisions.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub id: i64,
    #[serde(default, rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub format_note: Option<String>,
    #[serde(default)]
    pub bitrate: Option<u64>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub size: Option<SizeField>,
    // #[serde(default)]
    // pub fps: Option<u32>,
    // #[serde(default)]
    // pub audio_channels: Option<u32>,
}

impl RawFormat {
    /// `quality`, then `format_note`, then the literal "Unknown".
    pub fn quality_label(&self) -> String {
        self.quality
            .clone()
            .filter(|q| !q.is_empty())
            .or_else(|| self.format_note.clone().filter(|q| !q.is_empty()))
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn bitrate_bps(&self) -> u64 {
        self.bitrate.unwrap_or(0)
    }

    pub fn size_bytes(&self) -> Option<f64> {
        self.size.as_ref().and_then(SizeField::as_bytes)
    }

    /// Convert a response array record by record, so one malformed entry
    /// cannot take down the whole listing.
    pub fn parse_list(items: Vec<Value>) -> Vec<RawFormat> {
        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<RawFormat>(item) {
                Ok(format) => Some(format),
                Err(e) => {
                    log::warn!("Skipping malformed format record: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// The remote `size` field has been observed both as a byte count and as
/// a stringified number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    Bytes(f64),
    Text(String),
}

impl SizeField {
    pub fn as_bytes(&self) -> Option<f64> {
        match self {
            SizeField::Bytes(bytes) => Some(*bytes),
            SizeField::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Metadata payload. Field names and value shapes differ between provider
/// revisions, so every field carries an alias or an untagged enum.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVideoInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ThumbnailField>,
    #[serde(default)]
    pub duration: Option<DurationField>,
    #[serde(default, alias = "viewCount")]
    pub view_count: Option<CountField>,
    #[serde(default, alias = "isShort")]
    pub is_short: Option<bool>,
    // #[serde(default)]
    // pub description: Option<String>,
    // #[serde(default)]
    // pub channel: Option<String>,
}

/// A single URL in older revisions, a list of sized variants in newer
/// ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThumbnailField {
    Url(String),
    Variants(Vec<ThumbnailVariant>),
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailVariant {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl ThumbnailField {
    /// Largest variant by pixel area when the provider sends a list.
    pub fn best_url(&self) -> Option<String> {
        match self {
            ThumbnailField::Url(url) => Some(url.clone()).filter(|u| !u.is_empty()),
            ThumbnailField::Variants(variants) => variants
                .iter()
                .max_by_key(|v| u64::from(v.width) * u64::from(v.height))
                .map(|v| v.url.clone())
                .filter(|u| !u.is_empty()),
        }
    }
}

/// Seconds in some revisions, a preformatted label in others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    Seconds(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountField {
    Number(u64),
    Text(String),
}

impl CountField {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            CountField::Number(n) => Some(*n),
            CountField::Text(text) => text.trim().parse().ok(),
        }
    }
}
