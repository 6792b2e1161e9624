pub mod write_executor;

pub use write_executor::{ExecutionError, WriteExecutor};
