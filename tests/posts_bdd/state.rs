//! Scenario state for the post-fetching BDD tests.

use bonfire_posts::{AppError, FetchOutcome, Post};
use bonfire_posts::pagination::PaginationPolicy;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime_and_server};

#[derive(ScenarioState, Default)]
pub(crate) struct PostsState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) policy: Slot<PaginationPolicy>,
    pub(crate) outcome: Slot<FetchOutcome<Post>>,
    pub(crate) error: Slot<AppError>,
}

#[fixture]
pub(crate) fn posts_state() -> PostsState {
    PostsState::default()
}

impl PostsState {
    /// Starts the runtime and mock server on first use.
    pub(crate) fn shared_runtime(&self) -> SharedRuntime {
        ensure_runtime_and_server(&self.runtime, &self.server)
            .unwrap_or_else(|error| panic!("failed to initialise runtime: {error}"))
    }
}
