//! Mock GraphQL server wiring and the fetch run under test.

use std::num::NonZeroU32;
use std::time::Duration;

use bonfire_posts::graphql::DEFAULT_REQUEST_TIMEOUT;
use bonfire_posts::pagination::PaginationPolicy;
use bonfire_posts::{AppError, Credentials, HttpExecutor, NoopObserver, Session};
use bonfire_posts::{authenticate, fetch_all_posts};
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use super::state::PostsState;

pub(crate) const GRAPHQL_PATH: &str = "/api/graphql";

/// Policy with delays short enough for real-time scenarios.
pub(crate) fn test_policy() -> PaginationPolicy {
    PaginationPolicy::new(NonZeroU32::new(2).unwrap_or(NonZeroU32::MIN))
        .with_inter_page_delay(Duration::from_millis(1))
        .with_retry_base_delay(Duration::from_millis(5))
}

pub(crate) fn cursor_for(page: u32) -> String {
    format!("cursor-{page}")
}

/// Response body for one page of the `posts` connection.
pub(crate) fn posts_page(page: u32, per_page: u32, has_next_page: bool) -> Value {
    let edges: Vec<Value> = (1..=per_page)
        .map(|index| {
            json!({
                "cursor": format!("edge-{page}-{index}"),
                "node": {
                    "id": format!("post-{page}-{index}"),
                    "postContent": {
                        "name": format!("Post {page}.{index}"),
                        "summary": null,
                        "htmlBody": "<p>body</p>"
                    }
                }
            })
        })
        .collect();

    json!({
        "data": {
            "posts": {
                "edges": edges,
                "pageInfo": { "hasNextPage": has_next_page, "endCursor": cursor_for(page) }
            }
        }
    })
}

/// Matches `GetPosts` requests for `page`; page 1 matches any cursor at a
/// lower priority.
pub(crate) fn posts_request(page: u32) -> MockBuilder {
    let builder = Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "operationName": "GetPosts" })));

    if page > 1 {
        builder.and(body_partial_json(
            json!({ "variables": { "after": cursor_for(page - 1) } }),
        ))
    } else {
        builder
    }
}

/// Mounts `pages` pages of `per_page` posts, optionally requiring a bearer token.
pub(crate) fn mount_pages(state: &PostsState, pages: u32, per_page: u32, bearer: Option<&str>) {
    for page in 1..=pages {
        let builder = posts_request(page);
        let builder = match bearer {
            Some(token) => builder.and(header("authorization", format!("Bearer {token}").as_str())),
            None => builder,
        };
        let priority = if page == 1 { 10 } else { 5 };
        let mock = builder
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_page(
                page,
                per_page,
                page < pages,
            )))
            .with_priority(priority);
        mount(state, mock);
    }
}

pub(crate) fn mount(state: &PostsState, mock: Mock) {
    let runtime = state.shared_runtime();
    state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

/// Runs a fetch against the mock server the way the CLI does.
pub(crate) fn run_fetch(state: &PostsState, credentials: Option<&Credentials>) {
    let runtime = state.shared_runtime();
    let uri = state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server not initialised"));
    let endpoint = Url::parse(&format!("{uri}{GRAPHQL_PATH}"))
        .unwrap_or_else(|error| panic!("invalid mock endpoint: {error}"));
    let policy = state.policy.get().unwrap_or_else(test_policy);

    let result = runtime.block_on(async {
        let anonymous = Session::new(endpoint);
        let session = match credentials {
            Some(credentials) => {
                let login_executor = HttpExecutor::for_session(&anonymous, DEFAULT_REQUEST_TIMEOUT)?;
                authenticate(&login_executor, &anonymous, credentials).await?
            }
            None => anonymous,
        };
        let executor = HttpExecutor::for_session(&session, DEFAULT_REQUEST_TIMEOUT)?;
        Ok::<_, AppError>(fetch_all_posts(&executor, &policy, &NoopObserver).await)
    });

    match result {
        Ok(outcome) => {
            let _had_previous_error = state.error.take().is_some();
            state.outcome.set(outcome);
        }
        Err(error) => {
            let _had_previous_outcome = state.outcome.take().is_some();
            state.error.set(error);
        }
    }
}

/// Counts `GetPosts` requests the server has seen.
pub(crate) fn posts_queries_received(state: &PostsState) -> usize {
    let runtime = state.shared_runtime();
    let requests = state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .unwrap_or_else(|| panic!("mock server not initialised"))
        .unwrap_or_else(|| panic!("request recording is not enabled"));

    requests
        .iter()
        .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
        .filter(|body| body.get("operationName") == Some(&json!("GetPosts")))
        .count()
}
