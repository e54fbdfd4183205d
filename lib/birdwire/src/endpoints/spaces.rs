//! Spaces endpoints.

use birdwire_core::entities::{Space, Tweet, User};
use birdwire_core::{AuthMode, EndpointSpec, Envelope, HttpClient, Method, Params, PathTemplate, Result};

use crate::client::Client;

/// `GET spaces/{id}`
pub const SPACE: EndpointSpec = EndpointSpec::new(
    "space",
    Method::Get,
    PathTemplate::new("spaces/{id}"),
    &["expansions", "space.fields", "topic.fields", "user.fields"],
    AuthMode::Unset,
);

/// `GET spaces`
pub const SPACES: EndpointSpec = EndpointSpec::new(
    "spaces",
    Method::Get,
    PathTemplate::new("spaces"),
    &["expansions", "ids", "space.fields", "topic.fields", "user.fields"],
    AuthMode::Unset,
);

/// `GET spaces/by/creator_ids`
pub const SPACES_BY_CREATORS: EndpointSpec = EndpointSpec::new(
    "spaces_by_creators",
    Method::Get,
    PathTemplate::new("spaces/by/creator_ids"),
    &[
        "expansions",
        "space.fields",
        "topic.fields",
        "user.fields",
        "user_ids",
    ],
    AuthMode::Unset,
);

/// `GET spaces/search`
pub const SEARCH_SPACES: EndpointSpec = EndpointSpec::new(
    "search_spaces",
    Method::Get,
    PathTemplate::new("spaces/search"),
    &[
        "expansions",
        "max_results",
        "query",
        "space.fields",
        "state",
        "topic.fields",
        "user.fields",
    ],
    AuthMode::Unset,
);

/// `GET spaces/{id}/buyers`
pub const SPACE_BUYERS: EndpointSpec = EndpointSpec::new(
    "space_buyers",
    Method::Get,
    PathTemplate::new("spaces/{id}/buyers"),
    &[
        "expansions",
        "media.fields",
        "place.fields",
        "poll.fields",
        "tweet.fields",
        "user.fields",
    ],
    AuthMode::UserContext,
);

/// `GET spaces/{id}/tweets`
pub const SPACE_TWEETS: EndpointSpec = EndpointSpec::new(
    "space_tweets",
    Method::Get,
    PathTemplate::new("spaces/{id}/tweets"),
    &[
        "expansions",
        "max_results",
        "media.fields",
        "place.fields",
        "poll.fields",
        "tweet.fields",
        "user.fields",
    ],
    AuthMode::Unset,
);

impl<C: HttpClient> Client<C> {
    /// A space by id.
    pub async fn space(&self, id: &str, params: Params) -> Result<Envelope<Space>> {
        self.call(&SPACE, &[id], &params).await
    }

    /// Spaces by ids.
    pub async fn spaces(&self, ids: &[&str], params: Params) -> Result<Envelope<Vec<Space>>> {
        self.call(&SPACES, &[], &params.with("ids", ids.to_vec()))
            .await
    }

    /// Live or scheduled spaces created by the given users.
    pub async fn spaces_by_creators(
        &self,
        user_ids: &[&str],
        params: Params,
    ) -> Result<Envelope<Vec<Space>>> {
        self.call(
            &SPACES_BY_CREATORS,
            &[],
            &params.with("user_ids", user_ids.to_vec()),
        )
        .await
    }

    /// Spaces whose title matches `query`; `state` may narrow to `live` or `scheduled`.
    pub async fn search_spaces(&self, query: &str, params: Params) -> Result<Envelope<Vec<Space>>> {
        self.call(&SEARCH_SPACES, &[], &params.with("query", query))
            .await
    }

    /// Users who bought a ticket to a space.
    pub async fn space_buyers(&self, space_id: &str, params: Params) -> Result<Envelope<Vec<User>>> {
        self.call(&SPACE_BUYERS, &[space_id], &params).await
    }

    /// Tweets shared in a space.
    pub async fn space_tweets(&self, space_id: &str, params: Params) -> Result<Envelope<Vec<Tweet>>> {
        self.call(&SPACE_TWEETS, &[space_id], &params).await
    }
}
