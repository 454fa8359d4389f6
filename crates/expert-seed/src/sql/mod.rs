//! SQL literal rendering.
//!
//! Values are rendered as literals for a multi-row `INSERT`. Text is wrapped
//! in single quotes with embedded quotes doubled; nested structures are
//! encoded as JSON text first.

mod insert;
mod profiles;

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;

pub use insert::InsertStatement;
pub use profiles::{
    PROFILE_COLUMNS, PROFILE_TABLE, ProfileRow, ProfileStatement, profile_row, profile_statement,
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Timestamp formatting error: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// A single SQL literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    /// Emitted verbatim, e.g. `NOW()`.
    Expr(&'static str),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    /// JSON-encodes `value` and wraps it as text.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, RenderError> {
        Ok(SqlValue::Text(serde_json::to_string(value)?))
    }

    pub fn timestamp(
        value: PrimitiveDateTime,
        format: &[BorrowedFormatItem<'_>],
    ) -> Result<Self, RenderError> {
        Ok(SqlValue::Text(value.format(format)?))
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::text)
    }
}

impl From<u32> for SqlValue {
    fn from(value: u32) -> Self {
        SqlValue::Int(value.into())
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Int(v) => write!(f, "{v}"),
            SqlValue::Float(v) => write!(f, "{v}"),
            SqlValue::Text(s) => write!(f, "'{}'", escape(s)),
            SqlValue::Expr(e) => f.write_str(e),
        }
    }
}

/// Escapes a string for use inside single quotes.
pub fn escape(s: &str) -> String {
    s.replace('\'', "''")
}

/// Renders a value tuple, e.g. `(1, 'a', NULL)`.
pub fn render_row(values: &[SqlValue]) -> String {
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("({})", rendered.join(", "))
}

/// Splits a rendered tuple into its top-level values.
///
/// Commas inside quoted text or nested parentheses do not split.
pub fn split_row(row: &str) -> Vec<&str> {
    let inner = row
        .trim()
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .unwrap_or(row);

    let mut values = Vec::new();
    let mut depth = 0usize;
    let mut in_text = false;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            // A doubled quote toggles twice and stays in text
            '\'' => in_text = !in_text,
            '(' if !in_text => depth += 1,
            ')' if !in_text => depth = depth.saturating_sub(1),
            ',' if !in_text && depth == 0 => {
                values.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if !inner.trim().is_empty() {
        values.push(inner[start..].trim());
    }

    values
}
