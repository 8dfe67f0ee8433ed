//! Page sources driven by [`super::fetch_all`].

use async_trait::async_trait;

use crate::graphql::ExecError;

use super::connection::Connection;

/// Something that can fetch one page of a connection.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    /// Node type carried by the connection.
    type Node: Send;

    /// Fetches up to `first` nodes after `after` (`None` = from the start).
    ///
    /// `Ok(None)` means the connection itself was null.
    async fn fetch_page(
        &self,
        first: u32,
        after: Option<String>,
    ) -> Result<Option<Connection<Self::Node>>, ExecError>;
}
