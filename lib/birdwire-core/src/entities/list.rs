use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-curated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    /// List id.
    pub id: String,
    /// Name.
    pub name: String,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Description.
    pub description: Option<String>,
    /// Number of followers.
    pub follower_count: Option<u64>,
    /// Number of members.
    pub member_count: Option<u64>,
    /// Owner user id.
    pub owner_id: Option<String>,
    /// Private list.
    pub private: Option<bool>,
}
