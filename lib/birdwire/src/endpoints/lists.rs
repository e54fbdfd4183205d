//! List endpoints.

use birdwire_core::entities::{ActionStatus, List, Tweet, User};
use birdwire_core::{
    AuthMode, Cursor, EndpointSpec, Envelope, HttpClient, Method, Params, PathTemplate, Result,
};

use crate::client::{Client, Page};

const LIST_PAGE_PARAMS: &[&str] = &[
    "expansions",
    "list.fields",
    "max_results",
    "pagination_token",
    "user.fields",
];

const USER_PAGE_PARAMS: &[&str] = &[
    "expansions",
    "max_results",
    "pagination_token",
    "tweet.fields",
    "user.fields",
];

const LIST_WRITE_PARAMS: &[&str] = &["description", "name", "private"];

/// `GET lists/{id}`
pub const LIST: EndpointSpec = EndpointSpec::new(
    "list",
    Method::Get,
    PathTemplate::new("lists/{id}"),
    &["expansions", "list.fields", "user.fields"],
    AuthMode::Unset,
);

/// `GET users/{id}/owned_lists`
pub const OWNED_LISTS: EndpointSpec = EndpointSpec::new(
    "owned_lists",
    Method::Get,
    PathTemplate::new("users/{id}/owned_lists"),
    LIST_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET lists/{id}/members`
pub const LIST_MEMBERS: EndpointSpec = EndpointSpec::new(
    "list_members",
    Method::Get,
    PathTemplate::new("lists/{id}/members"),
    USER_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET users/{id}/list_memberships`
pub const LIST_MEMBERSHIPS: EndpointSpec = EndpointSpec::new(
    "list_memberships",
    Method::Get,
    PathTemplate::new("users/{id}/list_memberships"),
    LIST_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET lists/{id}/followers`
pub const LIST_FOLLOWERS: EndpointSpec = EndpointSpec::new(
    "list_followers",
    Method::Get,
    PathTemplate::new("lists/{id}/followers"),
    USER_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET users/{id}/followed_lists`
pub const FOLLOWED_LISTS: EndpointSpec = EndpointSpec::new(
    "followed_lists",
    Method::Get,
    PathTemplate::new("users/{id}/followed_lists"),
    LIST_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET users/{id}/pinned_lists`
pub const PINNED_LISTS: EndpointSpec = EndpointSpec::new(
    "pinned_lists",
    Method::Get,
    PathTemplate::new("users/{id}/pinned_lists"),
    &["expansions", "list.fields", "user.fields"],
    AuthMode::UserContext,
);

/// `GET lists/{id}/tweets`
pub const LIST_TWEETS: EndpointSpec = EndpointSpec::new(
    "list_tweets",
    Method::Get,
    PathTemplate::new("lists/{id}/tweets"),
    &[
        "expansions",
        "max_results",
        "media.fields",
        "pagination_token",
        "place.fields",
        "poll.fields",
        "tweet.fields",
        "user.fields",
    ],
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `POST lists`
pub const CREATE_LIST: EndpointSpec = EndpointSpec::new(
    "create_list",
    Method::Post,
    PathTemplate::new("lists"),
    LIST_WRITE_PARAMS,
    AuthMode::UserContext,
);

/// `PUT lists/{id}`
pub const UPDATE_LIST: EndpointSpec = EndpointSpec::new(
    "update_list",
    Method::Put,
    PathTemplate::new("lists/{id}"),
    LIST_WRITE_PARAMS,
    AuthMode::UserContext,
);

/// `DELETE lists/{id}`
pub const DELETE_LIST: EndpointSpec = EndpointSpec::new(
    "delete_list",
    Method::Delete,
    PathTemplate::new("lists/{id}"),
    &[],
    AuthMode::UserContext,
);

/// `POST lists/{id}/members`
pub const ADD_LIST_MEMBER: EndpointSpec = EndpointSpec::new(
    "add_list_member",
    Method::Post,
    PathTemplate::new("lists/{id}/members"),
    &["user_id"],
    AuthMode::UserContext,
);

/// `DELETE lists/{id}/members/{user_id}`
pub const REMOVE_LIST_MEMBER: EndpointSpec = EndpointSpec::new(
    "remove_list_member",
    Method::Delete,
    PathTemplate::new("lists/{id}/members/{user_id}"),
    &[],
    AuthMode::UserContext,
);

/// `POST users/{id}/followed_lists`
pub const FOLLOW_LIST: EndpointSpec = EndpointSpec::new(
    "follow_list",
    Method::Post,
    PathTemplate::new("users/{id}/followed_lists"),
    &["list_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{id}/followed_lists/{list_id}`
pub const UNFOLLOW_LIST: EndpointSpec = EndpointSpec::new(
    "unfollow_list",
    Method::Delete,
    PathTemplate::new("users/{id}/followed_lists/{list_id}"),
    &[],
    AuthMode::UserContext,
);

/// `POST users/{id}/pinned_lists`
pub const PIN_LIST: EndpointSpec = EndpointSpec::new(
    "pin_list",
    Method::Post,
    PathTemplate::new("users/{id}/pinned_lists"),
    &["list_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{id}/pinned_lists/{list_id}`
pub const UNPIN_LIST: EndpointSpec = EndpointSpec::new(
    "unpin_list",
    Method::Delete,
    PathTemplate::new("users/{id}/pinned_lists/{list_id}"),
    &[],
    AuthMode::UserContext,
);

impl<C: HttpClient> Client<C> {
    /// A list by id.
    pub async fn list(&self, id: &str, params: Params) -> Result<Envelope<List>> {
        self.call(&LIST, &[id], &params).await
    }

    /// Lists owned by a user.
    pub async fn owned_lists(&self, user_id: &str, params: Params) -> Result<Page<List, C>> {
        self.call_paged(&OWNED_LISTS, &[user_id], params).await
    }

    /// Members of a list.
    pub async fn list_members(&self, list_id: &str, params: Params) -> Result<Page<User, C>> {
        self.call_paged(&LIST_MEMBERS, &[list_id], params).await
    }

    /// Lists a user is a member of.
    pub async fn list_memberships(&self, user_id: &str, params: Params) -> Result<Page<List, C>> {
        self.call_paged(&LIST_MEMBERSHIPS, &[user_id], params).await
    }

    /// Followers of a list.
    pub async fn list_followers(&self, list_id: &str, params: Params) -> Result<Page<User, C>> {
        self.call_paged(&LIST_FOLLOWERS, &[list_id], params).await
    }

    /// Lists a user follows.
    pub async fn followed_lists(&self, user_id: &str, params: Params) -> Result<Page<List, C>> {
        self.call_paged(&FOLLOWED_LISTS, &[user_id], params).await
    }

    /// Lists pinned by the authenticated user.
    pub async fn pinned_lists(&self, params: Params) -> Result<Envelope<Vec<List>>> {
        let me = self.user_id()?;
        self.call(&PINNED_LISTS, &[me], &params).await
    }

    /// Tweets of a list's members.
    pub async fn list_tweets(&self, list_id: &str, params: Params) -> Result<Page<Tweet, C>> {
        self.call_paged(&LIST_TWEETS, &[list_id], params).await
    }

    /// Creates a list; `params` may set `description` and `private`.
    pub async fn create_list(&self, name: &str, params: Params) -> Result<Envelope<List>> {
        self.call(&CREATE_LIST, &[], &params.with("name", name))
            .await
    }

    /// Updates a list's name, description or visibility.
    pub async fn update_list(&self, id: &str, params: Params) -> Result<Envelope<ActionStatus>> {
        self.call(&UPDATE_LIST, &[id], &params).await
    }

    /// Deletes a list.
    pub async fn delete_list(&self, id: &str) -> Result<Envelope<ActionStatus>> {
        self.call(&DELETE_LIST, &[id], &Params::new()).await
    }

    /// Adds a member to a list.
    pub async fn add_list_member(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> Result<Envelope<ActionStatus>> {
        self.call(
            &ADD_LIST_MEMBER,
            &[list_id],
            &Params::new().with("user_id", user_id),
        )
        .await
    }

    /// Removes a member from a list.
    pub async fn remove_list_member(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> Result<Envelope<ActionStatus>> {
        self.call(&REMOVE_LIST_MEMBER, &[list_id, user_id], &Params::new())
            .await
    }

    /// Follows a list.
    pub async fn follow_list(&self, list_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&FOLLOW_LIST, &[me], &Params::new().with("list_id", list_id))
            .await
    }

    /// Unfollows a list.
    pub async fn unfollow_list(&self, list_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&UNFOLLOW_LIST, &[me, list_id], &Params::new())
            .await
    }

    /// Pins a list.
    pub async fn pin_list(&self, list_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&PIN_LIST, &[me], &Params::new().with("list_id", list_id))
            .await
    }

    /// Unpins a list.
    pub async fn unpin_list(&self, list_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&UNPIN_LIST, &[me, list_id], &Params::new())
            .await
    }
}
