//! GraphQL request execution.
//!
//! This module defines the executor seam used by the rest of the crate: a
//! trait that runs a query or mutation against an endpoint and hands back the
//! `data` member of the response or an [`ExecError`]. The reqwest-backed
//! [`HttpExecutor`] is the production implementation; tests substitute the
//! mockall-generated mock.

mod error;
mod executor;
mod http_executor;
mod operation;

pub use error::ExecError;
pub(crate) use error::truncate_for_message;
pub use executor::{RequestExecutor, run_mutation, run_query};
pub use http_executor::{DEFAULT_REQUEST_TIMEOUT, HttpExecutor};
pub use operation::{Document, Operation};

#[cfg(test)]
pub use executor::MockRequestExecutor;
