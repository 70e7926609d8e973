//! Pattern parsing and row-level interpolation.
//!
//! A pattern is an opaque string carrying zero or more `{variable}` tokens.
//! This module scans token boundaries, extracts variable names, interpolates
//! patterns against data rows and models the atomic-token cursor behavior
//! used by editing surfaces.

pub mod cursor;
pub mod token;

pub use cursor::{apply_edit, variable_at, variable_ending_at, variable_starting_at};
pub use cursor::{EditIntent, EditOutcome};
pub use token::{PatternToken, scan_tokens};

use crate::data::DataRow;

/// Extracts the variable names referenced by a pattern, in order of
/// appearance, duplicates preserved.
pub fn extract_variables(pattern: &str) -> Vec<String> {
    scan_tokens(pattern)
        .into_iter()
        .map(|t| t.name.to_string())
        .collect()
}

/// Substitutes each `{variable}` with the coerced row value.
///
/// Lookup is a case-sensitive exact match on the column name. Tokens whose
/// key is absent from the row are left untouched, so previews visibly show
/// missing-column problems instead of silently producing blank ads.
pub fn interpolate(pattern: &str, row: &DataRow) -> String {
    let tokens = scan_tokens(pattern);
    if tokens.is_empty() {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len());
    let mut cursor = 0;
    for token in &tokens {
        out.push_str(&pattern[cursor..token.start]);
        match row.get(token.name) {
            Some(value) => out.push_str(&coerce_value(value)),
            None => out.push_str(&pattern[token.start..token.end]),
        }
        cursor = token.end;
    }
    out.push_str(&pattern[cursor..]);
    out
}

/// Replaces every token with a fixed string. Used by the URL validator to
/// substitute a neutral placeholder before syntactic parsing.
pub fn neutralize(pattern: &str, replacement: &str) -> String {
    let tokens = scan_tokens(pattern);
    if tokens.is_empty() {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len());
    let mut cursor = 0;
    for token in &tokens {
        out.push_str(&pattern[cursor..token.start]);
        out.push_str(replacement);
        cursor = token.end;
    }
    out.push_str(&pattern[cursor..]);
    out
}

/// Coerces any row value to its string form.
///
/// Total by contract: null becomes the empty string, integer-valued numbers
/// drop the trailing fraction, arrays and objects render as compact JSON.
/// No value can make interpolation panic.
pub fn coerce_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
