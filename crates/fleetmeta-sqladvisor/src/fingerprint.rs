//! SQL fingerprinting and statement splitting.
//!
//! A fingerprint is the first statement of the input with every literal
//! elided, rendered in a canonical lowercase form. The SQL-ID is a stable
//! checksum derived from the fingerprint.

use std::ops::ControlFlow;

use md5::{Digest, Md5};
use sqlparser::ast::{Expr, Statement, Value, visit_expressions_mut};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::{Token, Tokenizer};

use fleetmeta_common::MetaError;

/// Extract the first statement of `sql` with its original text preserved.
///
/// Only the first statement of multi-statement input is advised; the rest
/// is dropped, not rejected. Syntax errors surface as Advisor errors.
pub fn first_statement(sql: &str) -> Result<String, MetaError> {
    let dialect = MySqlDialect {};
    let tokens = Tokenizer::new(&dialect, sql)
        .tokenize()
        .map_err(|err| MetaError::Advisor(format!("sql tokenize error: {err}")))?;

    let mut first = String::new();
    for token in tokens {
        if token == Token::SemiColon {
            break;
        }
        first.push_str(&token.to_string());
    }
    let first = first.trim().to_string();
    if first.is_empty() {
        return Err(MetaError::Advisor("empty sql statement".to_string()));
    }

    // surface syntax errors here rather than from the external tool
    Parser::parse_sql(&dialect, &first)
        .map_err(|err| MetaError::Advisor(format!("sql parse error: {err}")))?;

    Ok(first)
}

/// Literal-insensitive structural fingerprint of the first statement.
pub fn fingerprint(sql: &str) -> Result<String, MetaError> {
    let dialect = MySqlDialect {};
    let statements = Parser::parse_sql(&dialect, sql)
        .map_err(|err| MetaError::Advisor(format!("sql parse error: {err}")))?;
    let mut statement = statements
        .into_iter()
        .next()
        .ok_or_else(|| MetaError::Advisor("empty sql statement".to_string()))?;

    elide_literals(&mut statement);

    let rendered = statement.to_string().to_lowercase();
    Ok(rendered.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Stable SQL-ID: the first 16 hex characters of the MD5 of the
/// fingerprint, uppercased.
pub fn sql_id(sql: &str) -> Result<String, MetaError> {
    let fingerprint = fingerprint(sql)?;
    let digest = Md5::digest(fingerprint.as_bytes());
    let mut id = const_hex::encode_upper(digest);
    id.truncate(16);
    Ok(id)
}

fn elide_literals(statement: &mut Statement) {
    let _ = visit_expressions_mut(statement, |expr| {
        if let Expr::Value(value) = expr {
            *value = Value::Placeholder("?".to_string());
        }
        ControlFlow::<()>::Continue(())
    });
}
