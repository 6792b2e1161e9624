pub mod entity;
pub mod execution;
pub mod insert_spec;
pub mod schema;
pub mod value;

pub use entity::{Category, NewsArticle, NewsImage, NewsSummary, Publisher, PublisherFields, Reporter};
pub use execution::{ErrorInfo, ErrorKind, ExecutionResult, WriteOutcome};
pub use insert_spec::{InsertSpec, InsertStatement, InvalidSpecError, build_statement};
pub use schema::TableDef;
pub use value::SqlValue;
