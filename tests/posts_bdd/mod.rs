//! Support modules for the post-fetching BDD tests.

pub(crate) mod harness;
pub(crate) mod runtime;
pub(crate) mod state;
pub(crate) mod steps;

pub(crate) use state::{PostsState, posts_state};
