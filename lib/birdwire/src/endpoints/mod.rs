//! Endpoint descriptors and the typed `Client` methods built on them.
//!
//! Each endpoint is a `const` [`EndpointSpec`]; the method next to it only
//! fills path arguments and required parameters before handing off to
//! [`Client::call`](crate::Client::call) or
//! [`Client::call_paged`](crate::Client::call_paged).

use birdwire_core::EndpointSpec;

pub mod compliance;
pub mod lists;
pub mod spaces;
pub mod tweets;
pub mod users;

/// Every endpoint known to the client.
pub const ALL: &[EndpointSpec] = &[
    tweets::TWEET,
    tweets::TWEETS,
    tweets::CREATE_TWEET,
    tweets::DELETE_TWEET,
    tweets::USER_TWEETS,
    tweets::USER_MENTIONS,
    tweets::HOME_TIMELINE,
    tweets::SEARCH_RECENT,
    tweets::SEARCH_ALL,
    tweets::COUNTS_RECENT,
    tweets::COUNTS_ALL,
    tweets::LIKING_USERS,
    tweets::LIKED_TWEETS,
    tweets::LIKE,
    tweets::UNLIKE,
    tweets::RETWEETED_BY,
    tweets::RETWEET,
    tweets::UNRETWEET,
    tweets::QUOTE_TWEETS,
    tweets::HIDE_REPLY,
    tweets::BOOKMARKS,
    tweets::BOOKMARK,
    tweets::REMOVE_BOOKMARK,
    users::USER,
    users::USERS,
    users::USER_BY_USERNAME,
    users::USERS_BY_USERNAMES,
    users::ME,
    users::FOLLOWERS,
    users::FOLLOWING,
    users::FOLLOW,
    users::UNFOLLOW,
    users::BLOCKING,
    users::BLOCK,
    users::UNBLOCK,
    users::MUTING,
    users::MUTE,
    users::UNMUTE,
    lists::LIST,
    lists::OWNED_LISTS,
    lists::LIST_MEMBERS,
    lists::LIST_MEMBERSHIPS,
    lists::LIST_FOLLOWERS,
    lists::FOLLOWED_LISTS,
    lists::PINNED_LISTS,
    lists::LIST_TWEETS,
    lists::CREATE_LIST,
    lists::UPDATE_LIST,
    lists::DELETE_LIST,
    lists::ADD_LIST_MEMBER,
    lists::REMOVE_LIST_MEMBER,
    lists::FOLLOW_LIST,
    lists::UNFOLLOW_LIST,
    lists::PIN_LIST,
    lists::UNPIN_LIST,
    spaces::SPACE,
    spaces::SPACES,
    spaces::SPACES_BY_CREATORS,
    spaces::SEARCH_SPACES,
    spaces::SPACE_BUYERS,
    spaces::SPACE_TWEETS,
    compliance::COMPLIANCE_JOB,
    compliance::COMPLIANCE_JOBS,
    compliance::CREATE_COMPLIANCE_JOB,
];

/// Looks up an endpoint by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static EndpointSpec> {
    ALL.iter().find(|spec| spec.name == name)
}
