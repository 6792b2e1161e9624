/// Port-level success data for one executed INSERT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub rows_affected: u64,
    pub generated_id: Option<i64>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidSpec,
    Execution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

/// Outcome of one gateway call, error-as-value. Execution faults are folded
/// in here so a batch caller can keep going past individual failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub success: bool,
    pub rows_affected: Option<u64>,
    pub generated_id: Option<i64>,
    pub error: Option<ErrorInfo>,
}

impl ExecutionResult {
    pub fn success(outcome: &WriteOutcome) -> Self {
        Self {
            success: true,
            rows_affected: Some(outcome.rows_affected),
            generated_id: outcome.generated_id,
            error: None,
        }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            rows_affected: None,
            generated_id: None,
            error: Some(ErrorInfo {
                kind,
                message: message.into(),
            }),
        }
    }
}
