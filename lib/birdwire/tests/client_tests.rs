//! End-to-end tests of the endpoint pipeline against a wiremock server.

use assert2::{check, let_assert};
use birdwire::entities::{ComplianceJobKind, User};
use birdwire::middleware::ConcurrencyLimitLayer;
use birdwire::{AuthMode, Client, Credentials, Error, HyperTransport, Params};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string, header, header_regex, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_only(server: &MockServer) -> Client {
    let credentials = Credentials::bearer("app-token").expect("credentials");
    Client::builder()
        .credentials(credentials)
        .base_url(format!("{}/2", server.uri()))
        .token_url(format!("{}/oauth2/token", server.uri()))
        .build()
        .expect("client")
}

fn full(server: &MockServer) -> Client {
    let credentials = Credentials::builder()
        .consumer("ckey", "csecret")
        .access("42-atoken", "asecret")
        .bearer_token("app-token")
        .build()
        .expect("credentials");
    Client::builder()
        .credentials(credentials)
        .base_url(format!("{}/2", server.uri()))
        .build()
        .expect("client")
}

#[tokio::test]
async fn lookup_decodes_data_and_includes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/tweets/20"))
        .and(query_param("expansions", "author_id"))
        .and(header("Authorization", "Bearer app-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "20", "text": "just setting up my twttr", "author_id": "12"},
            "includes": {"users": [{"id": "12", "name": "jack", "username": "jack"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = app_only(&server);
    let envelope = client
        .tweet("20", Params::new().with("expansions", ["author_id"]))
        .await
        .expect("envelope");

    check!(envelope.is_success());
    let_assert!(Some(tweet) = envelope.data());
    check!(tweet.text == "just setting up my twttr");
    let_assert!(Some(author) = envelope.includes().user("12"));
    check!(author.username == "jack");
}

#[tokio::test]
async fn underscore_field_names_are_sent_dotted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/users/by/username/jack"))
        .and(query_param("user.fields", "created_at,protected"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "12", "name": "jack", "username": "jack", "protected": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = app_only(&server);
    let envelope = client
        .user_by_username(
            "jack",
            Params::new().with("user_fields", ["created_at", "protected"]),
        )
        .await
        .expect("envelope");

    let_assert!(Some(user) = envelope.into_data());
    check!(user.protected == Some(false));
}

#[tokio::test]
async fn unknown_parameter_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = app_only(&server);
    let result = client
        .tweet("20", Params::new().with("bogus", "x"))
        .await;

    let_assert!(Err(Error::UnsupportedParameter { endpoint, name }) = result);
    check!(endpoint == "tweet");
    check!(name == "bogus");
}

#[tokio::test]
async fn pages_follow_pagination_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/users/12/followers"))
        .and(query_param("max_results", "2"))
        .and(query_param_is_missing("pagination_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "1", "name": "One", "username": "one"},
                {"id": "2", "name": "Two", "username": "two"}
            ],
            "meta": {"result_count": 2, "next_token": "PAGE2"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2/users/12/followers"))
        .and(query_param("max_results", "2"))
        .and(query_param("pagination_token", "PAGE2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "3", "name": "Three", "username": "three"}],
            "meta": {"result_count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = app_only(&server);
    let first = client
        .followers("12", Params::new().with("max_results", 2))
        .await
        .expect("first page");
    check!(first.items().len() == 2);
    check!(first.has_next());

    let second = first.next_page().await.expect("second page");
    let names = second
        .items()
        .iter()
        .map(|user: &User| user.username.as_str())
        .collect::<Vec<_>>();
    check!(names == ["three"]);
    check!(!second.has_next());

    let_assert!(Err(Error::NoNextPage) = second.next_page().await);
}

#[tokio::test]
async fn search_pages_follow_next_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/tweets/search/recent"))
        .and(query_param("query", "from:jack"))
        .and(query_param("next_token", "b26v89c19zqg8o3f"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "7", "text": "older"}],
            "meta": {"result_count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2/tweets/search/recent"))
        .and(query_param("query", "from:jack"))
        .and(query_param_is_missing("next_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "9", "text": "newer"}],
            "meta": {"result_count": 1, "next_token": "b26v89c19zqg8o3f"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = app_only(&server);
    let first = client
        .search_recent("from:jack", Params::new())
        .await
        .expect("first page");
    let second = first.next_page().await.expect("second page");

    let_assert!([tweet] = second.items());
    check!(tweet.text == "older");
    check!(second.binding().params().contains("next_token"));
}

#[tokio::test]
async fn rate_limited_call_keeps_counters_and_problem() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/tweets/search/recent"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-rate-limit-limit", "450")
                .insert_header("x-rate-limit-remaining", "0")
                .insert_header("x-rate-limit-reset", "1700000000")
                .set_body_json(json!({
                    "title": "Too Many Requests",
                    "detail": "Too Many Requests",
                    "type": "about:blank",
                    "status": 429
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = app_only(&server);
    let page = client
        .search_recent("rust", Params::new())
        .await
        .expect("envelope, not an error");

    check!(page.status() == 429);
    check!(page.items().is_empty());
    let limits = page.rate_limits();
    check!(limits.limit == 450);
    check!(limits.is_exhausted());
    let_assert!([problem] = page.errors());
    check!(problem.description() == "Too Many Requests");
}

#[tokio::test]
async fn me_routes_are_signed_with_oauth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/users/42/likes"))
        .and(header_regex("Authorization", r#"^OAuth oauth_consumer_key="ckey", "#))
        .and(header_regex("Content-Type", "^application/json"))
        .and(body_json(json!({"tweet_id": "20"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"liked": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = full(&server);
    let envelope = client.like("20").await.expect("envelope");
    let_assert!(Some(status) = envelope.data());
    check!(status.liked == Some(true));
}

#[tokio::test]
async fn as_user_override_is_kept_across_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/users/12/following"))
        .and(query_param_is_missing("pagination_token"))
        .and(header_regex("Authorization", "^OAuth "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "1", "name": "One", "username": "one"}],
            "meta": {"result_count": 1, "next_token": "NEXT"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2/users/12/following"))
        .and(query_param("pagination_token", "NEXT"))
        .and(header_regex("Authorization", "^OAuth "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": {"result_count": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = full(&server).as_user();
    check!(client.auth_override() == Some(AuthMode::UserContext));

    let first = client.following("12", Params::new()).await.expect("first page");
    let second = first.next_page().await.expect("second page");
    check!(second.items().is_empty());
}

#[tokio::test]
async fn me_route_without_user_id_fails_locally() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = app_only(&server);
    let_assert!(Err(Error::Configuration(_)) = client.unlike("20").await);
}

#[tokio::test]
async fn compliance_jobs_send_their_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/compliance/jobs"))
        .and(query_param("type", "tweets"))
        .and(header("Authorization", "Bearer app-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "1382081613278814209",
                "type": "tweets",
                "status": "in_progress",
                "resumable": false,
                "name": "my job"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = full(&server);
    let envelope = client
        .compliance_jobs(ComplianceJobKind::Tweets, Params::new())
        .await
        .expect("envelope");
    let_assert!([job] = envelope.items());
    check!(job.kind == ComplianceJobKind::Tweets);
}

#[tokio::test]
async fn bearer_token_is_fetched_once_and_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("Authorization", "Basic Y2tleTpjc2VjcmV0"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "access_token": "fresh-token"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2/tweets/counts/recent"))
        .and(query_param("query", "rust"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"start": "2023-11-14T00:00:00.000Z", "end": "2023-11-15T00:00:00.000Z", "tweet_count": 12}],
            "meta": {"total_tweet_count": 12}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::builder()
        .consumer("ckey", "csecret")
        .access("42-atoken", "asecret")
        .build()
        .expect("credentials");
    let client = Client::builder()
        .credentials(credentials)
        .base_url(format!("{}/2", server.uri()))
        .token_url(format!("{}/oauth2/token", server.uri()))
        .build()
        .expect("client")
        .ensure_bearer_token()
        .await
        .expect("token exchange");
    check!(client.credentials().bearer_token() == Some("fresh-token"));

    let again = client.ensure_bearer_token().await.expect("no second exchange");
    let counts = again
        .counts_recent("rust", Params::new())
        .await
        .expect("counts");
    check!(counts.meta().total_tweet_count == Some(12));
    let_assert!([bucket] = counts.items());
    check!(bucket.tweet_count == 12);
}

#[tokio::test]
async fn client_on_a_concurrency_limited_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/tweets/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "1", "text": "hello"}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let transport = HyperTransport::builder()
        .layer(ConcurrencyLimitLayer::new(4))
        .build();
    let client = Client::builder()
        .credentials(Credentials::bearer("app-token").expect("credentials"))
        .base_url(format!("{}/2", server.uri()))
        .transport(transport)
        .build()
        .expect("client");

    let (first, second) = tokio::join!(
        client.tweet("1", Params::new()),
        client.tweet("1", Params::new())
    );
    for envelope in [first, second] {
        let envelope = envelope.expect("envelope");
        let_assert!(Some(tweet) = envelope.data());
        check!(tweet.text == "hello");
    }
}
