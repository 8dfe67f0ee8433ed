//! Steps shared by the post-fetching feature files.

use bonfire_posts::Completion;
use rstest_bdd_macros::then;

use super::harness::posts_queries_received;
use super::state::PostsState;

#[then("{count:usize} posts are returned")]
fn assert_post_count(posts_state: &PostsState, count: usize) {
    let error = posts_state.error.with_ref(ToString::to_string);
    let actual = posts_state
        .outcome
        .with_ref(|outcome| outcome.items.len())
        .unwrap_or_else(|| panic!("fetch outcome missing (error: {error:?})"));

    assert_eq!(actual, count, "post count mismatch");
}

#[then("the server received {count:usize} posts queries")]
fn assert_posts_query_count(posts_state: &PostsState, count: usize) {
    assert_eq!(
        posts_queries_received(posts_state),
        count,
        "unexpected number of GetPosts requests"
    );
}

#[then("the run fetched every page")]
fn assert_exhausted(posts_state: &PostsState) {
    let completion = posts_state
        .outcome
        .with_ref(|outcome| outcome.completion.clone())
        .unwrap_or_else(|| panic!("fetch outcome missing"));

    assert_eq!(completion, Completion::Exhausted, "expected a complete run");
}
