//! The request executor seam and typed helpers built on top of it.

use async_trait::async_trait;
use serde_json::Value;

use super::error::ExecError;
use super::operation::{Document, Operation};

/// Runs GraphQL operations against an endpoint.
///
/// Implementations return the `data` member of a successful response. A
/// response that reports errors, or that carries no data, is an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Executes a query document.
    async fn query(&self, document: &Document, variables: Value) -> Result<Value, ExecError>;

    /// Executes a mutation document.
    async fn mutate(&self, document: &Document, variables: Value) -> Result<Value, ExecError>;
}

/// Runs a typed query and decodes its data.
///
/// # Errors
///
/// Returns [`ExecError::Encode`] when the variables cannot be serialised,
/// [`ExecError::Decode`] when the data does not match `O::Data`, and any error
/// the executor reports.
pub async fn run_query<O, E>(executor: &E, variables: &O::Variables) -> Result<O::Data, ExecError>
where
    O: Operation,
    E: RequestExecutor + ?Sized,
{
    let payload = encode_variables(variables)?;
    let data = executor.query(&O::DOCUMENT, payload).await?;
    decode_data::<O>(data)
}

/// Runs a typed mutation and decodes its data.
///
/// # Errors
///
/// Same failure modes as [`run_query`].
pub async fn run_mutation<O, E>(
    executor: &E,
    variables: &O::Variables,
) -> Result<O::Data, ExecError>
where
    O: Operation,
    E: RequestExecutor + ?Sized,
{
    let payload = encode_variables(variables)?;
    let data = executor.mutate(&O::DOCUMENT, payload).await?;
    decode_data::<O>(data)
}

fn encode_variables<V: serde::Serialize>(variables: &V) -> Result<Value, ExecError> {
    serde_json::to_value(variables).map_err(|error| ExecError::Encode {
        message: error.to_string(),
    })
}

fn decode_data<O: Operation>(data: Value) -> Result<O::Data, ExecError> {
    serde_json::from_value(data).map_err(|error| ExecError::Decode {
        message: format!(
            "{operation}: {error}",
            operation = O::DOCUMENT.operation_name()
        ),
    })
}
