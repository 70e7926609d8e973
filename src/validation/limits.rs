use crate::config::AdField;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An advertising platform whose constraints the validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Google,
    Reddit,
    Facebook,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Google => write!(f, "google"),
            Platform::Reddit => write!(f, "reddit"),
            Platform::Facebook => write!(f, "facebook"),
        }
    }
}

/// Per-field caps declared by one platform. `None` means the platform
/// publishes no explicit limit for the field and [`DEFAULT_FIELD_LIMIT`]
/// applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformLimitSpec {
    pub headline: Option<usize>,
    pub description: Option<usize>,
    pub display_url: Option<usize>,
}

/// Resolved character caps after combining the selected platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub headline: usize,
    pub description: usize,
    pub display_url: usize,
}

impl FieldLimits {
    /// The cap for a pattern field, if the field has one. Final URLs have no
    /// character cap.
    pub fn cap(&self, field: AdField) -> Option<usize> {
        match field {
            AdField::Headline => Some(self.headline),
            AdField::Description => Some(self.description),
            AdField::DisplayUrl => Some(self.display_url),
            AdField::FinalUrl => None,
        }
    }
}

/// Cap applied when a platform declares no explicit limit for a field.
pub const DEFAULT_FIELD_LIMIT: usize = 100;

/// The platform limit table.
///
/// The built-in entries cover the supported platforms; callers may override
/// or extend the table per validator instance.
#[derive(Debug, Clone)]
pub struct LimitTable {
    entries: AHashMap<Platform, PlatformLimitSpec>,
}

impl Default for LimitTable {
    fn default() -> Self {
        let mut entries = AHashMap::new();
        entries.insert(
            Platform::Google,
            PlatformLimitSpec {
                headline: Some(30),
                description: Some(90),
                display_url: Some(15),
            },
        );
        entries.insert(
            Platform::Reddit,
            PlatformLimitSpec {
                headline: Some(300),
                description: None,
                display_url: None,
            },
        );
        entries.insert(
            Platform::Facebook,
            PlatformLimitSpec {
                headline: Some(40),
                description: Some(125),
                display_url: None,
            },
        );
        Self { entries }
    }
}

impl LimitTable {
    /// Replaces or adds the limit entry for a platform.
    pub fn set(&mut self, platform: Platform, spec: PlatformLimitSpec) {
        self.entries.insert(platform, spec);
    }

    pub fn get(&self, platform: Platform) -> PlatformLimitSpec {
        self.entries.get(&platform).copied().unwrap_or_default()
    }

    /// The most restrictive cap per field across the selected platforms.
    ///
    /// With no platform selected the Google limits apply. A field a platform
    /// leaves unspecified falls back to [`DEFAULT_FIELD_LIMIT`].
    pub fn most_restrictive(&self, selected: &[Platform]) -> FieldLimits {
        const GOOGLE_ONLY: [Platform; 1] = [Platform::Google];
        let platforms: &[Platform] = if selected.is_empty() {
            &GOOGLE_ONLY
        } else {
            selected
        };

        let mut limits = FieldLimits {
            headline: usize::MAX,
            description: usize::MAX,
            display_url: usize::MAX,
        };
        for platform in platforms {
            let spec = self.get(*platform);
            limits.headline = limits
                .headline
                .min(spec.headline.unwrap_or(DEFAULT_FIELD_LIMIT));
            limits.description = limits
                .description
                .min(spec.description.unwrap_or(DEFAULT_FIELD_LIMIT));
            limits.display_url = limits
                .display_url
                .min(spec.display_url.unwrap_or(DEFAULT_FIELD_LIMIT));
        }
        limits
    }
}
