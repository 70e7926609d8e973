//! Multi-category validation engine.
//!
//! Runs character-limit, URL-format and variable-reference rules over a
//! hierarchy config against the selected platforms and sample data. Every
//! finding is an advisory [`ValidationItem`] value; nothing here throws, and
//! the hierarchy stays computable with errors pending. The [`Validator`]
//! wrapper adds result caching and deterministic debounce scheduling.

pub mod limits;
pub mod report;
pub mod rules;
pub mod validator;

pub use limits::{DEFAULT_FIELD_LIMIT, FieldLimits, LimitTable, Platform, PlatformLimitSpec};
pub use report::ValidationReport;
pub use rules::RuleContext;
pub use validator::{DEBOUNCE_DELAY, ValidationInputs, Validator};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory severity of one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The editing step a validation item points back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationStep {
    Campaign,
    AdGroups,
    Ads,
}

/// One advisory finding.
///
/// Items are produced, never mutated after creation; they are collected into
/// arrays and never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationItem {
    pub field: String,
    pub message: String,
    pub step: ValidationStep,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_group_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_index: Option<usize>,
    pub severity: Severity,
}
