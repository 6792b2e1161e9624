use thiserror::Error;

use super::schema;
use super::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSpecError {
    #[error("unknown table: {0}")]
    UnknownTable(String),
    #[error("unknown column {column} on table {table}")]
    UnknownColumn { table: String, column: String },
    #[error("column/value count mismatch: {columns} columns, {values} values")]
    ColumnValueCountMismatch { columns: usize, values: usize },
    #[error("insert spec has no columns")]
    NoColumns,
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid URL (expected http:// or https://): {0}")]
    InvalidUrl(String),
    #[error("invalid datetime (expected YYYY-MM-DD HH:MM:SS): {0}")]
    InvalidTimestamp(String),
    #[error("{field} must be a positive id, got {value}")]
    NonPositiveId { field: &'static str, value: i64 },
}

/// Ordered description of one row to insert. Constructed fresh per call,
/// consumed by [`build_statement`], never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertSpec {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<SqlValue>,
}

impl InsertSpec {
    pub fn new(
        table: impl Into<String>,
        columns: Vec<String>,
        values: Vec<SqlValue>,
    ) -> Self {
        Self {
            table: table.into(),
            columns,
            values,
        }
    }
}

/// A built statement: SQL text with `$1..$n` positional placeholders plus the
/// values to bind, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Validate a spec against the schema allow-list and assemble its INSERT.
///
/// Identifiers are checked before any text assembly, so an unknown table or
/// column never reaches statement text. Values travel separately as bound
/// parameters. Deterministic: the same spec always yields byte-identical SQL.
pub fn build_statement(spec: &InsertSpec) -> Result<InsertStatement, InvalidSpecError> {
    let table = schema::lookup(&spec.table)
        .ok_or_else(|| InvalidSpecError::UnknownTable(spec.table.clone()))?;

    if spec.columns.is_empty() {
        return Err(InvalidSpecError::NoColumns);
    }
    if spec.columns.len() != spec.values.len() {
        return Err(InvalidSpecError::ColumnValueCountMismatch {
            columns: spec.columns.len(),
            values: spec.values.len(),
        });
    }
    for column in &spec.columns {
        if !table.has_column(column) {
            return Err(InvalidSpecError::UnknownColumn {
                table: table.name.to_string(),
                column: column.clone(),
            });
        }
    }

    let column_list = spec
        .columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholder_list = (1..=spec.values.len())
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(InsertStatement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_ident(table.name),
            column_list,
            placeholder_list
        ),
        values: spec.values.clone(),
    })
}
