use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// What a compliance job checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceJobKind {
    /// Tweet ids.
    #[default]
    #[display("tweets")]
    Tweets,
    /// User ids.
    #[display("users")]
    Users,
}

/// A batch compliance job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceJob {
    /// Job id.
    pub id: String,
    /// `created`, `in_progress`, `failed`, `complete`, `expired`.
    pub status: String,
    /// Job kind.
    #[serde(rename = "type")]
    pub kind: ComplianceJobKind,
    /// Optional name.
    pub name: Option<String>,
    /// Whether the upload can be resumed.
    pub resumable: Option<bool>,
    /// Where to upload the ids.
    pub upload_url: Option<String>,
    /// Where to download results.
    pub download_url: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Upload URL expiry.
    pub upload_expires_at: Option<DateTime<Utc>>,
    /// Download URL expiry.
    pub download_expires_at: Option<DateTime<Utc>>,
}
