use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An audio space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    /// Space id.
    pub id: String,
    /// `live`, `scheduled` or `ended`.
    pub state: String,
    /// Title.
    pub title: Option<String>,
    /// Creator user id.
    pub creator_id: Option<String>,
    /// Language.
    pub lang: Option<String>,
    /// Host user ids.
    pub host_ids: Vec<String>,
    /// Speaker user ids.
    pub speaker_ids: Vec<String>,
    /// Invited user ids.
    pub invited_user_ids: Vec<String>,
    /// Ticketed space.
    pub is_ticketed: Option<bool>,
    /// Current participants.
    pub participant_count: Option<u64>,
    /// Users subscribed to a scheduled space.
    pub subscriber_count: Option<u64>,
    /// Planned start.
    pub scheduled_start: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Actual start.
    pub started_at: Option<DateTime<Utc>>,
    /// Last update.
    pub updated_at: Option<DateTime<Utc>>,
    /// End time.
    pub ended_at: Option<DateTime<Utc>>,
}
