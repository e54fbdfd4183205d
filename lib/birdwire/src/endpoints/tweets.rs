//! Tweet endpoints: lookup, publishing, timelines, search, counts,
//! likes, retweets, quotes, hidden replies and bookmarks.

use birdwire_core::entities::{ActionStatus, Tweet, TweetCount, User};
use birdwire_core::{
    AuthMode, Cursor, EndpointSpec, Envelope, HttpClient, Method, Params, PathTemplate, Result,
};

use crate::client::{Client, Page};

/// `GET tweets/{id}`
pub const TWEET: EndpointSpec = EndpointSpec::new(
    "tweet",
    Method::Get,
    PathTemplate::new("tweets/{id}"),
    &[
        "expansions",
        "media.fields",
        "place.fields",
        "poll.fields",
        "tweet.fields",
        "user.fields",
    ],
    AuthMode::Unset,
);

/// `GET tweets`
pub const TWEETS: EndpointSpec = EndpointSpec::new(
    "tweets",
    Method::Get,
    PathTemplate::new("tweets"),
    &[
        "expansions",
        "ids",
        "media.fields",
        "place.fields",
        "poll.fields",
        "tweet.fields",
        "user.fields",
    ],
    AuthMode::Unset,
);

/// `POST tweets`
pub const CREATE_TWEET: EndpointSpec = EndpointSpec::new(
    "create_tweet",
    Method::Post,
    PathTemplate::new("tweets"),
    &[
        "direct_message_deep_link",
        "for_super_followers_only",
        "geo",
        "media",
        "poll",
        "quote_tweet_id",
        "reply",
        "reply_settings",
        "text",
    ],
    AuthMode::UserContext,
);

/// `DELETE tweets/{id}`
pub const DELETE_TWEET: EndpointSpec = EndpointSpec::new(
    "delete_tweet",
    Method::Delete,
    PathTemplate::new("tweets/{id}"),
    &[],
    AuthMode::UserContext,
);

const TIMELINE_PARAMS: &[&str] = &[
    "end_time",
    "exclude",
    "expansions",
    "max_results",
    "media.fields",
    "pagination_token",
    "place.fields",
    "poll.fields",
    "since_id",
    "start_time",
    "tweet.fields",
    "until_id",
    "user.fields",
];

/// `GET users/{id}/tweets`
pub const USER_TWEETS: EndpointSpec = EndpointSpec::new(
    "user_tweets",
    Method::Get,
    PathTemplate::new("users/{id}/tweets"),
    TIMELINE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET users/{id}/mentions`
pub const USER_MENTIONS: EndpointSpec = EndpointSpec::new(
    "user_mentions",
    Method::Get,
    PathTemplate::new("users/{id}/mentions"),
    &[
        "end_time",
        "expansions",
        "max_results",
        "media.fields",
        "pagination_token",
        "place.fields",
        "poll.fields",
        "since_id",
        "start_time",
        "tweet.fields",
        "until_id",
        "user.fields",
    ],
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET users/{id}/timelines/reverse_chronological`
pub const HOME_TIMELINE: EndpointSpec = EndpointSpec::new(
    "home_timeline",
    Method::Get,
    PathTemplate::new("users/{id}/timelines/reverse_chronological"),
    TIMELINE_PARAMS,
    AuthMode::UserContext,
)
.paginated(Cursor::PaginationToken);

const SEARCH_PARAMS: &[&str] = &[
    "end_time",
    "expansions",
    "max_results",
    "media.fields",
    "next_token",
    "place.fields",
    "poll.fields",
    "query",
    "since_id",
    "sort_order",
    "start_time",
    "tweet.fields",
    "until_id",
    "user.fields",
];

/// `GET tweets/search/recent`
pub const SEARCH_RECENT: EndpointSpec = EndpointSpec::new(
    "search_recent",
    Method::Get,
    PathTemplate::new("tweets/search/recent"),
    SEARCH_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::NextToken);

/// `GET tweets/search/all` (academic access, app context only)
pub const SEARCH_ALL: EndpointSpec = EndpointSpec::new(
    "search_all",
    Method::Get,
    PathTemplate::new("tweets/search/all"),
    SEARCH_PARAMS,
    AuthMode::AppContext,
)
.paginated(Cursor::NextToken);

/// `GET tweets/counts/recent`
pub const COUNTS_RECENT: EndpointSpec = EndpointSpec::new(
    "counts_recent",
    Method::Get,
    PathTemplate::new("tweets/counts/recent"),
    &[
        "end_time",
        "granularity",
        "query",
        "since_id",
        "start_time",
        "until_id",
    ],
    AuthMode::AppContext,
);

/// `GET tweets/counts/all`
pub const COUNTS_ALL: EndpointSpec = EndpointSpec::new(
    "counts_all",
    Method::Get,
    PathTemplate::new("tweets/counts/all"),
    &[
        "end_time",
        "granularity",
        "next_token",
        "query",
        "since_id",
        "start_time",
        "until_id",
    ],
    AuthMode::AppContext,
)
.paginated(Cursor::NextToken);

const USERS_OF_TWEET_PARAMS: &[&str] = &[
    "expansions",
    "max_results",
    "pagination_token",
    "tweet.fields",
    "user.fields",
];

const TWEETS_PAGE_PARAMS: &[&str] = &[
    "expansions",
    "max_results",
    "media.fields",
    "pagination_token",
    "place.fields",
    "poll.fields",
    "tweet.fields",
    "user.fields",
];

/// `GET tweets/{id}/liking_users`
pub const LIKING_USERS: EndpointSpec = EndpointSpec::new(
    "liking_users",
    Method::Get,
    PathTemplate::new("tweets/{id}/liking_users"),
    USERS_OF_TWEET_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `GET users/{id}/liked_tweets`
pub const LIKED_TWEETS: EndpointSpec = EndpointSpec::new(
    "liked_tweets",
    Method::Get,
    PathTemplate::new("users/{id}/liked_tweets"),
    TWEETS_PAGE_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `POST users/{id}/likes`
pub const LIKE: EndpointSpec = EndpointSpec::new(
    "like",
    Method::Post,
    PathTemplate::new("users/{id}/likes"),
    &["tweet_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{id}/likes/{tweet_id}`
pub const UNLIKE: EndpointSpec = EndpointSpec::new(
    "unlike",
    Method::Delete,
    PathTemplate::new("users/{id}/likes/{tweet_id}"),
    &[],
    AuthMode::UserContext,
);

/// `GET tweets/{id}/retweeted_by`
pub const RETWEETED_BY: EndpointSpec = EndpointSpec::new(
    "retweeted_by",
    Method::Get,
    PathTemplate::new("tweets/{id}/retweeted_by"),
    USERS_OF_TWEET_PARAMS,
    AuthMode::Unset,
)
.paginated(Cursor::PaginationToken);

/// `POST users/{id}/retweets`
pub const RETWEET: EndpointSpec = EndpointSpec::new(
    "retweet",
    Method::Post,
    PathTemplate::new("users/{id}/retweets"),
    &["tweet_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{id}/retweets/{source_tweet_id}`
pub const UNRETWEET: EndpointSpec = EndpointSpec::new(
    "unretweet",
    Method::Delete,
    PathTemplate::new("users/{id}/retweets/{source_tweet_id}"),
    &[],
    AuthMode::UserContext,
);

/// `GET tweets/{id}/quote_tweets`
pub const QUOTE_TWEETS: EndpointSpec = EndpointSpec::new(
    "quote_tweets",
    Method::Get,
    PathTemplate::new("tweets/{id}/quote_tweets"),
    &[
        "exclude",
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

/// `PUT tweets/{id}/hidden`
pub const HIDE_REPLY: EndpointSpec = EndpointSpec::new(
    "hide_reply",
    Method::Put,
    PathTemplate::new("tweets/{id}/hidden"),
    &["hidden"],
    AuthMode::UserContext,
);

/// `GET users/{id}/bookmarks`
pub const BOOKMARKS: EndpointSpec = EndpointSpec::new(
    "bookmarks",
    Method::Get,
    PathTemplate::new("users/{id}/bookmarks"),
    TWEETS_PAGE_PARAMS,
    AuthMode::UserContext,
)
.paginated(Cursor::PaginationToken);

/// `POST users/{id}/bookmarks`
pub const BOOKMARK: EndpointSpec = EndpointSpec::new(
    "bookmark",
    Method::Post,
    PathTemplate::new("users/{id}/bookmarks"),
    &["tweet_id"],
    AuthMode::UserContext,
);

/// `DELETE users/{id}/bookmarks/{tweet_id}`
pub const REMOVE_BOOKMARK: EndpointSpec = EndpointSpec::new(
    "remove_bookmark",
    Method::Delete,
    PathTemplate::new("users/{id}/bookmarks/{tweet_id}"),
    &[],
    AuthMode::UserContext,
);

impl<C: HttpClient> Client<C> {
    /// A tweet by id.
    pub async fn tweet(&self, id: &str, params: Params) -> Result<Envelope<Tweet>> {
        self.call(&TWEET, &[id], &params).await
    }

    /// Tweets by ids (up to 100).
    pub async fn tweets(&self, ids: &[&str], params: Params) -> Result<Envelope<Vec<Tweet>>> {
        self.call(&TWEETS, &[], &params.with("ids", ids.to_vec()))
            .await
    }

    /// Publishes a tweet.
    ///
    /// `params` may carry `reply`, `poll`, `media`... as object values.
    pub async fn create_tweet(&self, text: &str, params: Params) -> Result<Envelope<Tweet>> {
        self.call(&CREATE_TWEET, &[], &params.with("text", text))
            .await
    }

    /// Deletes a tweet of the authenticated user.
    pub async fn delete_tweet(&self, id: &str) -> Result<Envelope<ActionStatus>> {
        self.call(&DELETE_TWEET, &[id], &Params::new()).await
    }

    /// Tweets posted by a user, most recent first.
    pub async fn user_tweets(&self, user_id: &str, params: Params) -> Result<Page<Tweet, C>> {
        self.call_paged(&USER_TWEETS, &[user_id], params).await
    }

    /// Tweets mentioning a user.
    pub async fn user_mentions(&self, user_id: &str, params: Params) -> Result<Page<Tweet, C>> {
        self.call_paged(&USER_MENTIONS, &[user_id], params).await
    }

    /// Home timeline of the authenticated user.
    pub async fn home_timeline(&self, params: Params) -> Result<Page<Tweet, C>> {
        let me = self.user_id()?;
        self.call_paged(&HOME_TIMELINE, &[me], params).await
    }

    /// Searches tweets of the last seven days.
    pub async fn search_recent(&self, query: &str, params: Params) -> Result<Page<Tweet, C>> {
        self.call_paged(&SEARCH_RECENT, &[], params.with("query", query))
            .await
    }

    /// Searches the full archive.
    pub async fn search_all(&self, query: &str, params: Params) -> Result<Page<Tweet, C>> {
        self.call_paged(&SEARCH_ALL, &[], params.with("query", query))
            .await
    }

    /// Tweet counts over the last seven days; `meta.total_tweet_count` holds the sum.
    pub async fn counts_recent(
        &self,
        query: &str,
        params: Params,
    ) -> Result<Envelope<Vec<TweetCount>>> {
        self.call(&COUNTS_RECENT, &[], &params.with("query", query))
            .await
    }

    /// Tweet counts over the full archive.
    pub async fn counts_all(&self, query: &str, params: Params) -> Result<Page<TweetCount, C>> {
        self.call_paged(&COUNTS_ALL, &[], params.with("query", query))
            .await
    }

    /// Users who liked a tweet.
    pub async fn liking_users(&self, tweet_id: &str, params: Params) -> Result<Page<User, C>> {
        self.call_paged(&LIKING_USERS, &[tweet_id], params).await
    }

    /// Tweets liked by a user.
    pub async fn liked_tweets(&self, user_id: &str, params: Params) -> Result<Page<Tweet, C>> {
        self.call_paged(&LIKED_TWEETS, &[user_id], params).await
    }

    /// Likes a tweet as the authenticated user.
    pub async fn like(&self, tweet_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&LIKE, &[me], &Params::new().with("tweet_id", tweet_id))
            .await
    }

    /// Removes a like of the authenticated user.
    pub async fn unlike(&self, tweet_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&UNLIKE, &[me, tweet_id], &Params::new()).await
    }

    /// Users who retweeted a tweet.
    pub async fn retweeted_by(&self, tweet_id: &str, params: Params) -> Result<Page<User, C>> {
        self.call_paged(&RETWEETED_BY, &[tweet_id], params).await
    }

    /// Retweets a tweet as the authenticated user.
    pub async fn retweet(&self, tweet_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&RETWEET, &[me], &Params::new().with("tweet_id", tweet_id))
            .await
    }

    /// Undoes a retweet of the authenticated user.
    pub async fn unretweet(&self, tweet_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&UNRETWEET, &[me, tweet_id], &Params::new()).await
    }

    /// Quote tweets of a tweet.
    pub async fn quote_tweets(&self, tweet_id: &str, params: Params) -> Result<Page<Tweet, C>> {
        self.call_paged(&QUOTE_TWEETS, &[tweet_id], params).await
    }

    /// Hides or unhides a reply to a conversation of the authenticated user.
    pub async fn hide_reply(&self, tweet_id: &str, hidden: bool) -> Result<Envelope<ActionStatus>> {
        self.call(&HIDE_REPLY, &[tweet_id], &Params::new().with("hidden", hidden))
            .await
    }

    /// Bookmarks of the authenticated user.
    pub async fn bookmarks(&self, params: Params) -> Result<Page<Tweet, C>> {
        let me = self.user_id()?;
        self.call_paged(&BOOKMARKS, &[me], params).await
    }

    /// Bookmarks a tweet.
    pub async fn bookmark(&self, tweet_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&BOOKMARK, &[me], &Params::new().with("tweet_id", tweet_id))
            .await
    }

    /// Removes a bookmark.
    pub async fn remove_bookmark(&self, tweet_id: &str) -> Result<Envelope<ActionStatus>> {
        let me = self.user_id()?;
        self.call(&REMOVE_BOOKMARK, &[me, tweet_id], &Params::new())
            .await
    }
}
