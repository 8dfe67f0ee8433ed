//! Tokio runtime and mock server shared across the steps of one scenario.

use std::cell::RefCell;
use std::future::Future;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::{Builder, Runtime};
use wiremock::MockServer;

/// Runtime handle that can live in an `rstest-bdd` slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn start() -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self(Rc::new(RefCell::new(runtime))))
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Fills the runtime and server slots on first use and returns the runtime.
///
/// # Errors
///
/// Returns an error when the Tokio runtime cannot be built.
pub(crate) fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> io::Result<SharedRuntime> {
    let shared = match runtime.get() {
        Some(existing) => existing,
        None => {
            let started = SharedRuntime::start()?;
            runtime.set(started.clone());
            started
        }
    };

    if server.with_ref(|_| ()).is_none() {
        server.set(shared.block_on(MockServer::start()));
    }

    Ok(shared)
}
