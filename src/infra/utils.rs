//! SQL quoting and placeholder rendering for the psql transport.
//!
//! psql has no bind API, so bound values are rendered into quoted literals
//! immediately before the subprocess is spawned. Escaping follows
//! PostgreSQL's doubling rules and never leaves this module.

use crate::domain::{InsertStatement, SqlValue};

/// Quote identifier for safe SQL representation (PostgreSQL style).
/// Doubles any embedded double quotes and wraps in double quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Escape string literal for safe SQL interpolation (PostgreSQL quote_literal
/// equivalent). Doubles any embedded single quotes and wraps in single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn render_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Int(n) => n.to_string(),
        SqlValue::Text(s) => quote_literal(s),
    }
}

/// Substitute `$1..$n` placeholders with rendered literals.
///
/// Scans left to right so `$10` is read as one index, never as `$1` plus a
/// trailing zero. Returns `None` when a placeholder index has no matching
/// bound value; callers treat that as a failed statement, not a panic.
pub fn render_statement(statement: &InsertStatement) -> Option<String> {
    let sql = &statement.sql;
    let mut out = String::with_capacity(sql.len() + statement.values.len() * 16);
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let mut index = 0usize;
        let mut digits = 0usize;
        while let Some(d) = chars.peek() {
            if let Some(v) = d.to_digit(10) {
                index = index * 10 + v as usize;
                digits += 1;
                chars.next();
            } else {
                break;
            }
        }
        if digits == 0 {
            out.push('$');
            continue;
        }
        let value = statement.values.get(index.checked_sub(1)?)?;
        out.push_str(&render_value(value));
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod quoting {
        use super::*;

        #[test]
        fn quote_ident_simple() {
            assert_eq!(quote_ident("news"), "\"news\"");
        }

        #[test]
        fn quote_ident_with_double_quote() {
            assert_eq!(quote_ident("news\"table"), "\"news\"\"table\"");
        }

        #[test]
        fn quote_literal_simple() {
            assert_eq!(quote_literal("hello"), "'hello'");
        }

        #[test]
        fn quote_literal_with_single_quote() {
            assert_eq!(quote_literal("Ronaldo's"), "'Ronaldo''s'");
        }

        #[test]
        fn quote_literal_empty() {
            assert_eq!(quote_literal(""), "''");
        }
    }

    mod render_statement {
        use super::*;

        fn statement(sql: &str, values: Vec<SqlValue>) -> InsertStatement {
            InsertStatement {
                sql: sql.to_string(),
                values,
            }
        }

        #[test]
        fn substitutes_in_order() {
            let stmt = statement(
                "INSERT INTO \"categories\" (\"name\", \"description\") VALUES ($1, $2)",
                vec![SqlValue::from("International"), SqlValue::from("World")],
            );
            assert_eq!(
                render_statement(&stmt).unwrap(),
                "INSERT INTO \"categories\" (\"name\", \"description\") \
                 VALUES ('International', 'World')"
            );
        }

        #[test]
        fn integers_render_bare() {
            let stmt = statement("VALUES ($1, $2)", vec![SqlValue::Int(1), SqlValue::from("x")]);
            assert_eq!(render_statement(&stmt).unwrap(), "VALUES (1, 'x')");
        }

        #[test]
        fn embedded_quote_is_escaped() {
            let stmt = statement("VALUES ($1)", vec![SqlValue::from("it's'); DROP TABLE news;--")]);
            assert_eq!(
                render_statement(&stmt).unwrap(),
                "VALUES ('it''s''); DROP TABLE news;--')"
            );
        }

        #[test]
        fn two_digit_placeholder_reads_as_one_index() {
            let values: Vec<SqlValue> = (1..=10).map(SqlValue::Int).collect();
            let stmt = statement("($1, $10)", values);
            assert_eq!(render_statement(&stmt).unwrap(), "(1, 10)");
        }

        #[test]
        fn out_of_range_placeholder_returns_none() {
            let stmt = statement("VALUES ($1, $2)", vec![SqlValue::Int(1)]);
            assert!(render_statement(&stmt).is_none());
        }

        #[test]
        fn zero_placeholder_returns_none() {
            let stmt = statement("VALUES ($0)", vec![SqlValue::Int(1)]);
            assert!(render_statement(&stmt).is_none());
        }

        #[test]
        fn lone_dollar_passes_through() {
            let stmt = statement("SELECT '$' || $1", vec![SqlValue::from("x")]);
            assert_eq!(render_statement(&stmt).unwrap(), "SELECT '$' || 'x'");
        }
    }
}
