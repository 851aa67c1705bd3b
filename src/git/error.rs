//! Error types for the git backend.

use crate::utils::exec::ExecError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced by git backend operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` invocation failed to spawn or exited with a non-zero status.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// A listing wrote bytes that are not valid UTF-8.
    #[error("`git {0}` produced output that is not valid UTF-8")]
    Decode(String, #[source] FromUtf8Error),
}
