use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweet {
    /// Tweet id.
    pub id: String,
    /// Text content.
    pub text: String,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Author user id.
    pub author_id: Option<String>,
    /// Id of the tweet that started the conversation.
    pub conversation_id: Option<String>,
    /// Id of the user being replied to.
    pub in_reply_to_user_id: Option<String>,
    /// Replied-to, quoted and retweeted tweets.
    pub referenced_tweets: Vec<ReferencedTweet>,
    /// Media keys and poll ids, keyed by kind.
    pub attachments: Option<serde_json::Map<String, serde_json::Value>>,
    /// Topic annotations.
    pub context_annotations: Vec<ContextAnnotation>,
    /// Parsed entities (hashtags, mentions, urls...).
    pub entities: Option<TweetEntities>,
    /// Detected language (BCP47).
    pub lang: Option<String>,
    /// Engagement counters.
    pub public_metrics: Option<TweetPublicMetrics>,
    /// Sensitive content flag.
    pub possibly_sensitive: Option<bool>,
    /// Who can reply.
    pub reply_settings: Option<String>,
    /// Client used to post.
    pub source: Option<String>,
}

/// Reference from a tweet to another tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencedTweet {
    /// `replied_to`, `quoted` or `retweeted`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Referenced tweet id.
    pub id: String,
}

/// Annotation pairing a domain and an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAnnotation {
    /// Domain.
    pub domain: ContextEntity,
    /// Entity.
    pub entity: ContextEntity,
}

/// Domain or entity of a [`ContextAnnotation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextEntity {
    /// Id.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// Entities parsed from a tweet text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetEntities {
    /// `#hashtags`.
    pub hashtags: Vec<EntityTag>,
    /// `$cashtags`.
    pub cashtags: Vec<EntityTag>,
    /// `@mentions`.
    pub mentions: Vec<Mention>,
    /// Links.
    pub urls: Vec<UrlEntity>,
}

/// A hashtag or cashtag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTag {
    /// Start offset.
    pub start: u32,
    /// End offset.
    pub end: u32,
    /// Tag text without the sigil.
    pub tag: String,
}

/// A user mention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mention {
    /// Start offset.
    pub start: u32,
    /// End offset.
    pub end: u32,
    /// Mentioned username.
    pub username: String,
    /// Mentioned user id.
    pub id: Option<String>,
}

/// A link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlEntity {
    /// Start offset.
    pub start: u32,
    /// End offset.
    pub end: u32,
    /// Shortened URL.
    pub url: String,
    /// Full URL.
    pub expanded_url: Option<String>,
    /// URL as displayed.
    pub display_url: Option<String>,
    /// Final URL after redirects.
    pub unwound_url: Option<String>,
}

/// Public engagement counters of a tweet.
#[allow(clippy::struct_field_names)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetPublicMetrics {
    /// Retweets.
    pub retweet_count: u64,
    /// Replies.
    pub reply_count: u64,
    /// Likes.
    pub like_count: u64,
    /// Quote tweets.
    pub quote_count: u64,
}
