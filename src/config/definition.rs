use crate::error::ConfigError;
use crate::validation::Platform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// A single templated ad. Every field is a pattern that may contain
/// `{variable}` placeholders resolved per data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDefinition {
    pub id: String,
    pub headline: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
}

/// A templated ad group owning its ads and an optional keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupDefinition {
    pub id: String,
    pub name_pattern: String,
    pub ads: Vec<AdDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// The templated hierarchy: every ad group definition expands against every
/// data row. A floor of at least one ad group with one ad is a UI concern,
/// not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyConfig {
    pub ad_groups: Vec<AdGroupDefinition>,
}

/// The campaign-level name template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignConfig {
    pub name_pattern: String,
}

/// The canonical on-disk plan: campaign template, hierarchy template and the
/// advertising platforms the plan targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPlan {
    pub campaign: CampaignConfig,
    pub hierarchy: HierarchyConfig,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl CampaignPlan {
    /// Load a plan from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parse a plan from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))
    }
}

/// Enumerates the pattern-bearing fields of an [`AdDefinition`].
///
/// Validation and interpolation iterate this enumeration instead of probing
/// struct fields ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdField {
    Headline,
    Description,
    DisplayUrl,
    FinalUrl,
}

impl AdField {
    pub const ALL: [AdField; 4] = [
        AdField::Headline,
        AdField::Description,
        AdField::DisplayUrl,
        AdField::FinalUrl,
    ];

    /// The wire name used in validation items, matching the plan JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            AdField::Headline => "headline",
            AdField::Description => "description",
            AdField::DisplayUrl => "displayUrl",
            AdField::FinalUrl => "finalUrl",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            AdField::Headline => "Headline",
            AdField::Description => "Description",
            AdField::DisplayUrl => "Display URL",
            AdField::FinalUrl => "Final URL",
        }
    }
}

impl fmt::Display for AdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl AdDefinition {
    /// The pattern stored for `field`, if the field is set.
    pub fn pattern(&self, field: AdField) -> Option<&str> {
        match field {
            AdField::Headline => Some(&self.headline),
            AdField::Description => Some(&self.description),
            AdField::DisplayUrl => self.display_url.as_deref(),
            AdField::FinalUrl => self.final_url.as_deref(),
        }
    }
}
