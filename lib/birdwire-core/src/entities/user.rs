use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Handle, without `@`.
    pub username: String,
    /// Account creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Profile bio.
    pub description: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
    /// Pinned tweet id.
    pub pinned_tweet_id: Option<String>,
    /// Avatar URL.
    pub profile_image_url: Option<String>,
    /// Protected (private) account.
    pub protected: Option<bool>,
    /// Follower/following/tweet counters.
    pub public_metrics: Option<UserPublicMetrics>,
    /// Profile URL.
    pub url: Option<String>,
    /// Verified badge.
    pub verified: Option<bool>,
}

/// Public counters of a user.
#[allow(clippy::struct_field_names)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPublicMetrics {
    /// Followers.
    pub followers_count: u64,
    /// Followed accounts.
    pub following_count: u64,
    /// Tweets posted.
    pub tweet_count: u64,
    /// Lists the user is on.
    pub listed_count: u64,
}
