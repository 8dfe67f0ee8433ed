//! Rendering of run summaries and failure guidance.

use std::io::{self, Write};

use crate::error::AppError;
use crate::graphql::truncate_for_message;
use crate::pagination::{Completion, FetchOutcome};
use crate::posts::Post;

/// Characters kept from each summary and body in the sample listing.
pub const EXCERPT_CHARS: usize = 100;

/// Writes the post count, how the run ended, and a sample of posts.
///
/// `sample_size` limits how many posts are listed; `None` lists all of them.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the writer fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    outcome: &FetchOutcome<Post>,
    sample_size: Option<usize>,
) -> Result<(), AppError> {
    if outcome.items.is_empty() {
        writeln!(writer, "No posts were fetched.").map_err(|e| io_error(&e))?;
    } else {
        let count = outcome.items.len();
        let pages_fetched = outcome.pages_fetched;
        writeln!(
            writer,
            "Fetched {count} {} across {pages_fetched} {}.",
            plural(count == 1, "post", "posts"),
            plural(pages_fetched == 1, "page", "pages")
        )
        .map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "{}", describe_completion(&outcome.completion)).map_err(|e| io_error(&e))?;

    let limit = sample_size.unwrap_or(outcome.items.len());
    if outcome.items.is_empty() || limit == 0 {
        return Ok(());
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "Sample posts:").map_err(|e| io_error(&e))?;
    for (index, post) in outcome.items.iter().take(limit).enumerate() {
        write_post(writer, index.saturating_add(1), post)?;
    }

    Ok(())
}

fn write_post<W: Write>(writer: &mut W, position: usize, post: &Post) -> Result<(), AppError> {
    let content = post.post_content.as_ref();
    let summary = content.and_then(|c| c.summary.as_deref());
    let body = content.and_then(|c| c.html_body.as_deref());

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "{position}. Post ID: {}", post.id).map_err(|e| io_error(&e))?;
    writeln!(writer, "   Title: {}", post.title().unwrap_or("(no title)"))
        .map_err(|e| io_error(&e))?;
    writeln!(writer, "   Summary: {}", excerpt(summary, "(no summary)")).map_err(|e| io_error(&e))?;
    writeln!(writer, "   HTML Body: {}", excerpt(body, "(no HTML body)")).map_err(|e| io_error(&e))
}

const fn plural(singular: bool, one: &'static str, many: &'static str) -> &'static str {
    if singular { one } else { many }
}

fn excerpt(text: Option<&str>, fallback: &str) -> String {
    text.filter(|value| !value.trim().is_empty())
        .map_or_else(|| fallback.to_owned(), |value| truncate_for_message(value, EXCERPT_CHARS))
}

fn describe_completion(completion: &Completion) -> String {
    match completion {
        Completion::Exhausted => "All available pages were fetched.".to_owned(),
        Completion::CapReached { max_pages } => format!(
            "Stopped at the page limit ({max_pages}); more posts may be available."
        ),
        Completion::PageFailed {
            page,
            attempts,
            error,
        } => format!(
            "Page {page} failed after {attempts} attempts ({error}); showing posts fetched before it."
        ),
    }
}

/// Writes the error and troubleshooting steps for a failed run.
///
/// `authenticated` selects guidance for runs that were configured with
/// credentials.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the writer fails.
pub fn write_failure<W: Write>(
    writer: &mut W,
    error: &AppError,
    authenticated: bool,
) -> Result<(), AppError> {
    writeln!(writer, "Error: {error}").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "Troubleshooting:").map_err(|e| io_error(&e))?;

    let steps: &[&str] = if authenticated {
        &[
            "Check that BONFIRE_USERNAME and BONFIRE_PASSWORD are correct",
            "Verify the GraphQL endpoint is reachable",
            "Ensure the account is allowed to read posts",
        ]
    } else {
        &[
            "Verify the GraphQL endpoint is reachable",
            "Check whether the API requires authentication",
            "If it does, set BONFIRE_USERNAME and BONFIRE_PASSWORD",
        ]
    };
    for (index, step) in steps.iter().enumerate() {
        writeln!(writer, "{}. {step}", index.saturating_add(1)).map_err(|e| io_error(&e))?;
    }

    Ok(())
}

fn io_error(error: &io::Error) -> AppError {
    AppError::Io {
        message: error.to_string(),
    }
}
