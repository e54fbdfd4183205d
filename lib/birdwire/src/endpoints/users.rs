//! User endpoints: lookup, follows, blocks and mutes.

use birdwire_core::entities::{ActionStatus, User};
use birdwire_core::{
    AuthMode, Cursor, EndpointSpec, Envelope, HttpClient, Method, Params, PathTemplate, Result,
};

use crate::client::{Client, Page};

const USER_PARAMS: &[&str] = &["expansions", "tweet.fields", "user.fields"];

const USER_PAGE_PARAMS: &[&str] = &[
    "expansions",
    "max_results",
    "pagination_token",
    "tweet.fields",
    "user.fields",
];

/// `GET users/{id}`
pub const USER: EndpointSpec = EndpointSpec::new(
    "user",
    Method::Get,
    PathTemplate::new("users/{id}"),
    USER_PARAMS,
    AuthMode::Unset,
);

/// `GET users`
pub const USERS: EndpointSpec = EndpointSpec::new(
    "users",
    Method::Get,
    PathTemplate::new("users"),
    &["expansions", "ids", "tweet.fields", "user.fields"],
    AuthMode::Unset,
);

/// `GET users/by/username/{username}`
pub const USER_BY_USERNAME: EndpointSpec = EndpointSpec::new(
    "user_by_username",
    Method::Get,
    PathTemplate::new("users/by/username/{username}"),
    USER_PARAMS,
    AuthMode::Unset,
);

/// `GET users/by`
pub const USERS_BY_USERNAMES: EndpointSpec = EndpointSpec::new(
    "users_by_usernames",
    Method::Get,
    PathTemplate::new("users/by"),
    &["expansions", "tweet.fields", "user.fields", "usernames"],
    AuthMode::Unset,
);

/// `GET users/me`
pub const ME: EndpointSpec = EndpointSpec::new(
    "me",
    Method::Get,
    PathTemplate::new("users/me"),
    USER_PARAMS,
    AuthMode::UserContext,
);

/// `GET users/{id}/followers`
pub const FOLLOWERS: EndpointSpec = EndpointSpec::new(
    "followers",
    Method::Get,
    PathTemplate::new("users/{id}/followers"),
    USER_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET users/{id}/following`
pub const FOLLOWING: EndpointSpec = EndpointSpec::new(
    "following",
    Method::Get,
    PathTemplate::new("users/{id}/following"),
    USER_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `POST users/{id}/following`
pub const FOLLOW: EndpointSpec = EndpointSpec::new(
    "follow",
    Method::Post,
    PathTemplate::new("users/{id}/following"),
    &["target_user_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{source_user_id}/following/{target_user_id}`
pub const UNFOLLOW: EndpointSpec = EndpointSpec::new(
    "unfollow",
    Method::Delete,
    PathTemplate::new("users/{source_user_id}/following/{target_user_id}"),
    &[],
    AuthMode::UserContext,
);

/// `GET users/{id}/blocking`
pub const BLOCKING: EndpointSpec = EndpointSpec::new(
    "blocking",
    Method::Get,
    PathTemplate::new("users/{id}/blocking"),
    USER_PAGE_PARAMS,
    AuthMode::UserContext,
)
.paginated(Cursor::PaginationToken);

/// `POST users/{id}/blocking`
pub const BLOCK: EndpointSpec = EndpointSpec::new(
    "block",
    Method::Post,
    PathTemplate::new("users/{id}/blocking"),
    &["target_user_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{source_user_id}/blocking/{target_user_id}`
pub const UNBLOCK: EndpointSpec = EndpointSpec::new(
    "unblock",
    Method::Delete,
    PathTemplate::new("users/{source_user_id}/blocking/{target_user_id}"),
    &[],
    AuthMode::UserContext,
);

/// `GET users/{id}/muting`
pub const MUTING: EndpointSpec = EndpointSpec::new(
    "muting",
    Method::Get,
    PathTemplate::new("users/{id}/muting"),
    USER_PAGE_PARAMS,
    AuthMode::UserContext,
)
.paginated(Cursor::PaginationToken);

/// `POST users/{id}/muting`
pub const MUTE: EndpointSpec = EndpointSpec::new(
    "mute",
    Method::Post,
    PathTemplate::new("users/{id}/muting"),
    &["target_user_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{source_user_id}/muting/{target_user_id}`
pub const UNMUTE: EndpointSpec = EndpointSpec::new(
    "unmute",
    Method::Delete,
    PathTemplate::new("users/{source_user_id}/muting/{target_user_id}"),
    &[],
    AuthMode::UserContext,
);

impl<C: HttpClient> Client<C> {
    /// A user by id.
    pub async fn user(&self, id: &str, params: Params) -> Result<Envelope<User>> {
        self.call(&USER, &[id], &params).await
    }

    /// Users by ids (up to 100).
    pub async fn users(&self, ids: &[&str], params: Params) -> Result<Envelope<Vec<User>>> {
        self.call(&USERS, &[], &params.with("ids", ids.to_vec()))
            .await
    }

    /// A user by username.
    pub async fn user_by_username(&self, username: &str, params: Params) -> Result<Envelope<User>> {
        self.call(&USER_BY_USERNAME, &[username], &params).await
    }

    /// Users by usernames (up to 100).
    pub async fn users_by_usernames(
        &self,
        usernames: &[&str],
        params: Params,
    ) -> Result<Envelope<Vec<User>>> {
        self.call(
            &USERS_BY_USERNAMES,
            &[],
            &params.with("usernames", usernames.to_vec()),
        )
        .await
    }

    /// The authenticated user.
    pub async fn me(&self, params: Params) -> Result<Envelope<User>> {
        self.call(&ME, &[], &params).await
    }

    /// Followers of a user.
    pub async fn followers(&self, user_id: &str, params: Params) -> Result<Page<User, C>> {
        self.call_paged(&FOLLOWERS, &[user_id], params).await
    }

    /// Users a user follows.
    pub async fn following(&self, user_id: &str, params: Params) -> Result<Page<User, C>> {
        self.call_paged(&FOLLOWING, &[user_id], params).await
    }

    /// Follows a user; `pending_follow` is set for protected accounts.
    pub async fn follow(&self, target_user_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(
            &FOLLOW,
            &[me],
            &Params::new().with("target_user_id", target_user_id),
        )
        .await
    }

    /// Unfollows a user.
    pub async fn unfollow(&self, target_user_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&UNFOLLOW, &[me, target_user_id], &Params::new())
            .await
    }

    /// Users blocked by the authenticated user.
    pub async fn blocking(&self, params: Params) -> Result<Page<User, C>> {
        let me = self.user_id()?;
        self.call_paged(&BLOCKING, &[me], params).await
    }

    /// Blocks a user.
    pub async fn block(&self, target_user_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(
            &BLOCK,
            &[me],
            &Params::new().with("target_user_id", target_user_id),
        )
        .await
    }

    /// Unblocks a user.
    pub async fn unblock(&self, target_user_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&UNBLOCK, &[me, target_user_id], &Params::new())
            .await
    }

    /// Users muted by the authenticated user.
    pub async fn muting(&self, params: Params) -> Result<Page<User, C>> {
        let me = self.user_id()?;
        self.call_paged(&MUTING, &[me], params).await
    }

    /// Mutes a user.
    pub async fn mute(&self, target_user_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(
            &MUTE,
            &[me],
            &Params::new().with("target_user_id", target_user_id),
        )
        .await
    }

    /// Unmutes a user.
    pub async fn unmute(&self, target_user_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&UNMUTE, &[me, target_user_id], &Params::new())
            .await
    }
}
