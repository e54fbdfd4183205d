//! Entity records returned by the API.
//!
//! These are plain data: every field that the API may omit (depending on
//! the requested `*.fields` and `expansions`) is optional or defaulted.

mod action;
mod compliance;
mod list;
mod media;
mod space;
mod tweet;
mod user;

pub use action::{ActionStatus, TweetCount};
pub use compliance::{ComplianceJob, ComplianceJobKind};
pub use list::List;
pub use media::{Media, Place, Poll, PollOption};
pub use space::Space;
pub use tweet::{
    ContextAnnotation, ContextEntity, EntityTag, Mention, ReferencedTweet, Tweet, TweetEntities,
    TweetPublicMetrics, UrlEntity,
};
pub use user::{User, UserPublicMetrics};
