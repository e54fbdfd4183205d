use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a write action (like, follow, pin, delete...).
///
/// Each endpoint sets only the flag it is about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionStatus {
    /// Like / unlike.
    pub liked: Option<bool>,
    /// Retweet / unretweet.
    pub retweeted: Option<bool>,
    /// Hide / unhide reply.
    pub hidden: Option<bool>,
    /// Follow user or list.
    pub following: Option<bool>,
    /// Follow request awaiting approval (protected accounts).
    pub pending_follow: Option<bool>,
    /// Block / unblock.
    pub blocking: Option<bool>,
    /// Mute / unmute.
    pub muting: Option<bool>,
    /// Add / remove list member.
    pub is_member: Option<bool>,
    /// Pin / unpin list.
    pub pinned: Option<bool>,
    /// Bookmark / remove bookmark.
    pub bookmarked: Option<bool>,
    /// Update list.
    pub updated: Option<bool>,
    /// Delete tweet or list.
    pub deleted: Option<bool>,
}

/// Tweet volume over one time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetCount {
    /// Bucket start.
    pub start: DateTime<Utc>,
    /// Bucket end.
    pub end: DateTime<Utc>,
    /// Matching tweets in the bucket.
    pub tweet_count: u64,
}
