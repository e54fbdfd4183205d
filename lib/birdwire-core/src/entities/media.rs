use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attached media (photo, video, GIF).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    /// Media key referenced from tweet attachments.
    pub media_key: String,
    /// `photo`, `video` or `animated_gif`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Direct URL (photos).
    pub url: Option<String>,
    /// Preview image URL (videos).
    pub preview_image_url: Option<String>,
    /// Duration in milliseconds (videos).
    pub duration_ms: Option<u64>,
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Alternative text.
    pub alt_text: Option<String>,
}

/// A poll attached to a tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poll {
    /// Poll id.
    pub id: String,
    /// Choices.
    pub options: Vec<PollOption>,
    /// Duration in minutes.
    pub duration_minutes: Option<u32>,
    /// Closing time.
    pub end_datetime: Option<DateTime<Utc>>,
    /// `open` or `closed`.
    pub voting_status: Option<String>,
}

/// One poll choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollOption {
    /// 1-based position.
    pub position: u32,
    /// Label.
    pub label: String,
    /// Votes so far.
    pub votes: u64,
}

/// A tagged place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    /// Place id.
    pub id: String,
    /// Long name.
    pub full_name: String,
    /// Short name.
    pub name: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// `city`, `poi`...
    pub place_type: Option<String>,
    /// GeoJSON bounding box.
    pub geo: Option<serde_json::Value>,
}
