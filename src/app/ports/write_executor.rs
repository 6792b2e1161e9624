use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{InsertStatement, WriteOutcome};

/// Faults raised by a write transport. The gateway catches these and folds
/// them into a failed [`crate::domain::ExecutionResult`]; they never cross
/// the gateway boundary as raw errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("statement failed: {0}")]
    StatementFailed(String),
    #[error("statement timed out")]
    Timeout,
    #[error("command not found: {0}")]
    CommandNotFound(String),
}

/// The borrowed connection seam. An implementation owns one open session
/// (or, for subprocess transports, the means to open one per call); the
/// gateway never opens, pools, or closes anything behind this trait.
///
/// Each call is one statement in its own transaction, committed on success.
#[async_trait]
pub trait WriteExecutor: Send + Sync {
    async fn execute_insert(
        &self,
        statement: &InsertStatement,
    ) -> Result<WriteOutcome, ExecutionError>;
}
