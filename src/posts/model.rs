//! Post records as returned by the `posts` connection.

use serde::Deserialize;

/// A single post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned identifier.
    pub id: String,
    /// Title and body; null for posts without content.
    #[serde(default)]
    pub post_content: Option<PostContent>,
}

/// Textual content attached to a [`Post`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    /// Post title.
    #[serde(default)]
    pub name: Option<String>,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Rendered HTML body.
    #[serde(default)]
    pub html_body: Option<String>,
}

impl Post {
    /// Returns the post title when one is set and non-blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.post_content
            .as_ref()
            .and_then(|content| content.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// Returns the summary, falling back to the HTML body.
    #[must_use]
    pub fn excerpt(&self) -> Option<&str> {
        let content = self.post_content.as_ref()?;
        content
            .summary
            .as_deref()
            .filter(|summary| !summary.trim().is_empty())
            .or_else(|| {
                content
                    .html_body
                    .as_deref()
                    .filter(|body| !body.trim().is_empty())
            })
    }
}
