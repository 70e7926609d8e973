use super::{Severity, ValidationItem};
use serde::Serialize;

/// Validation items sorted into presentation buckets.
///
/// Categorization matches on the message text itself, decoupled from how the
/// item was produced, so caller-supplied items (e.g. platform-specific
/// required settings) bucket the same way as engine-produced ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub character_limits: Vec<ValidationItem>,
    pub url_format: Vec<ValidationItem>,
    pub required_fields: Vec<ValidationItem>,
    pub variable_references: Vec<ValidationItem>,
}

impl ValidationReport {
    /// Buckets items by substring matching on their message text.
    ///
    /// character/exceed → character limits; URL/HTTPS → URL format;
    /// "required" → required fields; Variable/"not found" → variable
    /// references; anything unmatched defaults to character limits. The
    /// character check runs first so a message like "Display URL exceeds the
    /// character limit" stays a length finding.
    pub fn categorize<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ValidationItem>,
    {
        let mut report = Self::default();
        for item in items {
            let message = item.message.as_str();
            if message.contains("character") || message.contains("exceed") {
                report.character_limits.push(item);
            } else if message.contains("URL") || message.contains("HTTPS") {
                report.url_format.push(item);
            } else if message.contains("required") {
                report.required_fields.push(item);
            } else if message.contains("Variable") || message.contains("not found") {
                report.variable_references.push(item);
            } else {
                report.character_limits.push(item);
            }
        }
        report
    }

    /// All items across the buckets.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationItem> {
        self.character_limits
            .iter()
            .chain(&self.url_format)
            .chain(&self.required_fields)
            .chain(&self.variable_references)
    }

    pub fn len(&self) -> usize {
        self.character_limits.len()
            + self.url_format.len()
            + self.required_fields.len()
            + self.variable_references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn error_count(&self) -> usize {
        self.iter()
            .filter(|item| item.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.iter()
            .filter(|item| item.severity == Severity::Warning)
            .count()
    }

    /// The warning-severity items across all buckets.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationItem> {
        self.iter()
            .filter(|item| item.severity == Severity::Warning)
    }
}
