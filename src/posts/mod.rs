//! Fetching posts from the `posts` connection.

mod model;
mod query;

pub use model::{Post, PostContent};
pub use query::{GET_POSTS_DOCUMENT, GetPosts, GetPostsVariables, PostsData, PostsSource};

use crate::graphql::RequestExecutor;
use crate::pagination::{FetchOutcome, PaginationPolicy, fetch_all};
use crate::telemetry::FetchObserver;

/// Fetches every post reachable within `policy`.
///
/// Never fails; see [`fetch_all`] for how errors are absorbed.
pub async fn fetch_all_posts<E>(
    executor: &E,
    policy: &PaginationPolicy,
    observer: &dyn FetchObserver,
) -> FetchOutcome<Post>
where
    E: RequestExecutor + ?Sized,
{
    fetch_all(&PostsSource::new(executor), policy, observer).await
}
