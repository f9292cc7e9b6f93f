use anyhow::Error as AnyError;
use thiserror::Error;

/// Harness runtime errors.
///
/// Every error aborts the current benchmark run; there is no retry policy
/// anywhere in the harness. Backend resources are released before any of
/// these propagate out of a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {}", _0)]
    InvalidArgument(&'static str),

    /// The module byte buffer was rejected by the backend's parser.
    #[error("Module parse error: {}", _0)]
    Parse(String),

    /// Import resolution, linking, or memory-budget failure while creating
    /// an instance.
    #[error("Instantiation error: {}", _0)]
    Instantiation(String),

    /// An attempt to look up an export by its symbol name failed.
    #[error("Symbol not found: {}", _0)]
    SymbolNotFound(String),

    /// A method call attempted to use linear memory the instance does not
    /// have, or could not be given within its budget.
    #[error("No linear memory available: {}", _0)]
    NoLinearMemory(String),

    /// Host-side data injection failed before the first timed call.
    #[error("Hook error: {}", _0)]
    Hook(String),

    /// The guest trapped or exited during a call. Carries the backend's
    /// trap message.
    #[error("Guest call failed: {}", _0)]
    Call(String),

    #[error("Instance limits exceeded: {}", _0)]
    LimitsExceeded(String),

    /// An unsupported feature was used.
    #[error("Unsupported feature: {}", _0)]
    Unsupported(String),

    /// A catch-all for internal errors that are likely unrecoverable by the
    /// harness user.
    #[error("Internal error: {}", _0)]
    Internal(#[source] AnyError),
}
