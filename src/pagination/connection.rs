//! Relay-style connection types.

use serde::Deserialize;

/// One page of a cursor-paginated connection.
///
/// Both the edge list and individual edges are nullable on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Edges on this page.
    #[serde(default = "Option::default")]
    pub edges: Option<Vec<Option<Edge<T>>>>,
    /// Navigation state for the page.
    #[serde(default)]
    pub page_info: PageInfo,
}

/// A connection entry pairing a cursor with a node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge<T> {
    /// Position of this edge within the connection.
    #[serde(default)]
    pub cursor: Option<String>,
    /// The domain item, if the server could resolve it.
    #[serde(default = "Option::default")]
    pub node: Option<T>,
}

/// Forward-pagination state of a connection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether the server reports more pages after this one.
    #[serde(default)]
    pub has_next_page: bool,
    /// Cursor of the last edge on this page.
    #[serde(default)]
    pub end_cursor: Option<String>,
}

impl<T> Connection<T> {
    /// Creates a connection page.
    #[must_use]
    pub const fn new(edges: Option<Vec<Option<Edge<T>>>>, page_info: PageInfo) -> Self {
        Self { edges, page_info }
    }

    /// Returns true when the edge list is present and non-empty.
    ///
    /// Null edges count: a page made only of null edges still has edges.
    #[must_use]
    pub fn has_edges(&self) -> bool {
        self.edges.as_ref().is_some_and(|edges| !edges.is_empty())
    }

    /// Returns the cursor to continue from, if the page says there is more.
    ///
    /// A page claiming another page without supplying a cursor cannot be
    /// continued and yields `None`.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if self.page_info.has_next_page {
            self.page_info.end_cursor.as_deref()
        } else {
            None
        }
    }

    /// Consumes the page, yielding its non-null nodes in edge order.
    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges
            .into_iter()
            .flatten()
            .flatten()
            .filter_map(|edge| edge.node)
    }
}

impl<T> Edge<T> {
    /// Creates an edge.
    #[must_use]
    pub const fn new(cursor: Option<String>, node: Option<T>) -> Self {
        Self { cursor, node }
    }
}

impl PageInfo {
    /// Creates page info.
    #[must_use]
    pub const fn new(has_next_page: bool, end_cursor: Option<String>) -> Self {
        Self {
            has_next_page,
            end_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{Connection, Edge, PageInfo};

    #[test]
    fn decodes_camel_case_wire_shape() {
        let connection: Connection<u32> = serde_json::from_value(json!({
            "edges": [
                { "cursor": "c1", "node": 1 },
                null,
                { "cursor": "c3", "node": null }
            ],
            "pageInfo": { "hasNextPage": true, "endCursor": "c3" }
        }))
        .expect("connection should decode");

        assert_eq!(
            connection,
            Connection::new(
                Some(vec![
                    Some(Edge::new(Some("c1".to_owned()), Some(1))),
                    None,
                    Some(Edge::new(Some("c3".to_owned()), None)),
                ]),
                PageInfo::new(true, Some("c3".to_owned())),
            )
        );
    }

    #[test]
    fn into_nodes_skips_null_edges_and_nodes() {
        let connection = Connection::new(
            Some(vec![
                Some(Edge::new(None, Some("a"))),
                None,
                Some(Edge::new(None, None)),
                Some(Edge::new(None, Some("b"))),
            ]),
            PageInfo::default(),
        );

        assert!(connection.has_edges());
        assert_eq!(connection.into_nodes().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[rstest]
    #[case::absent(None, false)]
    #[case::empty(Some(vec![]), false)]
    #[case::only_null_edges(Some(vec![None]), true)]
    fn has_edges_reflects_the_edge_list(
        #[case] edges: Option<Vec<Option<Edge<u8>>>>,
        #[case] expected: bool,
    ) {
        assert_eq!(
            Connection::new(edges, PageInfo::default()).has_edges(),
            expected
        );
    }

    #[rstest]
    #[case::more_with_cursor(true, Some("c"), Some("c"))]
    #[case::more_without_cursor(true, None, None)]
    #[case::no_more(false, Some("c"), None)]
    fn next_cursor_requires_flag_and_cursor(
        #[case] has_next_page: bool,
        #[case] end_cursor: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let connection: Connection<u8> = Connection::new(
            Some(vec![]),
            PageInfo::new(has_next_page, end_cursor.map(ToOwned::to_owned)),
        );

        assert_eq!(connection.next_cursor(), expected);
    }
}
