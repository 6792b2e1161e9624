use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::app::ports::{ExecutionError, WriteExecutor};
use crate::domain::{InsertStatement, WriteOutcome};
use crate::infra::utils::render_statement;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Driver-less write transport: one `psql` subprocess per statement.
///
/// psql runs each `-c` statement in its own implicit transaction, so success
/// means committed (commit-per-call). `RETURNING id` is appended to capture
/// the auto-generated primary key every table in the schema carries.
pub struct PsqlExecutor {
    dsn: String,
    timeout_secs: u64,
}

impl PsqlExecutor {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(dsn: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            dsn: dsn.into(),
            timeout_secs,
        }
    }

    async fn run_statement(&self, sql: &str) -> Result<(String, String), ExecutionError> {
        let mut child = Command::new("psql")
            .arg(&self.dsn)
            .arg("-X") // Ignore .psqlrc to avoid unexpected output
            .arg("-v")
            .arg("ON_ERROR_STOP=1") // Exit with non-zero on SQL errors
            .arg("-t") // Tuples only
            .arg("-A") // Unaligned output
            .arg("-c")
            .arg(sql)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true) // Ensure child process is killed on timeout/drop
            .spawn()
            .map_err(|e| ExecutionError::CommandNotFound(e.to_string()))?;

        // Read stdout/stderr BEFORE wait() to prevent pipe buffer deadlock
        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        let result = timeout(Duration::from_secs(self.timeout_secs), async {
            let (stdout_result, stderr_result) = tokio::join!(
                async {
                    let mut buf = Vec::new();
                    if let Some(ref mut out) = stdout_handle {
                        out.read_to_end(&mut buf).await?;
                    }
                    Ok::<_, std::io::Error>(String::from_utf8_lossy(&buf).into_owned())
                },
                async {
                    let mut buf = Vec::new();
                    if let Some(ref mut err) = stderr_handle {
                        err.read_to_end(&mut buf).await?;
                    }
                    Ok::<_, std::io::Error>(String::from_utf8_lossy(&buf).into_owned())
                }
            );

            let stdout = stdout_result?;
            let stderr = stderr_result?;
            let status = child.wait().await?;

            Ok::<_, std::io::Error>((status, stdout, stderr))
        })
        .await
        .map_err(|_| ExecutionError::Timeout)?
        .map_err(|e| ExecutionError::ConnectionFailed(e.to_string()))?;

        let (status, stdout, stderr) = result;

        if !status.success() {
            let stderr = stderr.trim().to_string();
            if stderr.contains("could not connect") || stderr.contains("Connection refused") {
                return Err(ExecutionError::ConnectionFailed(stderr));
            }
            return Err(ExecutionError::StatementFailed(stderr));
        }

        Ok((stdout, stderr))
    }

    /// Affected row count from the trailing command tag (`INSERT 0 1`).
    fn parse_command_tag(stdout: &str) -> Option<u64> {
        stdout.lines().rev().find_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.first() == Some(&"INSERT") {
                parts.last()?.parse().ok()
            } else {
                None
            }
        })
    }

    /// With `-t -A` the RETURNING row is the bare id on its own line,
    /// before the command tag.
    fn parse_generated_id(stdout: &str) -> Option<i64> {
        stdout
            .lines()
            .map(str::trim)
            .find_map(|line| line.parse().ok())
    }
}

#[async_trait]
impl WriteExecutor for PsqlExecutor {
    async fn execute_insert(
        &self,
        statement: &InsertStatement,
    ) -> Result<WriteOutcome, ExecutionError> {
        let rendered = render_statement(statement).ok_or_else(|| {
            ExecutionError::StatementFailed("placeholder index out of range".to_string())
        })?;
        let sql = format!("{} RETURNING id", rendered);

        let start = Instant::now();
        let (stdout, _stderr) = self.run_statement(&sql).await?;
        let elapsed = start.elapsed().as_millis() as u64;

        let rows_affected = Self::parse_command_tag(&stdout).ok_or_else(|| {
            ExecutionError::StatementFailed("failed to parse affected row count".to_string())
        })?;

        Ok(WriteOutcome {
            rows_affected,
            generated_id: Self::parse_generated_id(&stdout),
            execution_time_ms: elapsed,
        })
    }
}
