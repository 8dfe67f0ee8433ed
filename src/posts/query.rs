//! The `GetPosts` query and the page source built on it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::graphql::{Document, ExecError, Operation, RequestExecutor, run_query};
use crate::pagination::{Connection, ConnectionSource};

use super::model::Post;

/// Document for the `posts` connection query.
pub const GET_POSTS_DOCUMENT: Document = Document::new(
    "GetPosts",
    r"query GetPosts($first: Int, $after: String) {
  posts(first: $first, after: $after) {
    edges {
      cursor
      node {
        id
        postContent {
          name
          summary
          htmlBody
        }
      }
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}",
);

/// The `GetPosts` query.
#[derive(Debug, Clone, Copy)]
pub struct GetPosts;

/// Variables for [`GetPosts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPostsVariables {
    /// Page size.
    pub first: u32,
    /// Cursor to continue from; omitted for the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Data returned by [`GetPosts`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostsData {
    /// The connection; null when the server has nothing to offer.
    #[serde(default = "Option::default")]
    pub posts: Option<Connection<Post>>,
}

impl Operation for GetPosts {
    type Variables = GetPostsVariables;
    type Data = PostsData;

    const DOCUMENT: Document = GET_POSTS_DOCUMENT;
}

/// Serves pages of the `posts` connection through a [`RequestExecutor`].
#[derive(Debug)]
pub struct PostsSource<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: ?Sized> PostsSource<'a, E> {
    /// Wraps `executor`.
    #[must_use]
    pub const fn new(executor: &'a E) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E> ConnectionSource for PostsSource<'_, E>
where
    E: RequestExecutor + ?Sized,
{
    type Node = Post;

    async fn fetch_page(
        &self,
        first: u32,
        after: Option<String>,
    ) -> Result<Option<Connection<Post>>, ExecError> {
        let variables = GetPostsVariables { first, after };
        let data = run_query::<GetPosts, E>(self.executor, &variables).await?;
        Ok(data.posts)
    }
}
