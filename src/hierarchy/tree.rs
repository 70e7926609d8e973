use serde::Serialize;

/// One interpolated ad.
///
/// Identity for deduplication is `(headline, description)` only; the URL
/// fields are excluded from the identity key, so two ads differing only in
/// URLs collapse to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAd {
    pub headline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
}

impl GeneratedAd {
    /// The dedup key for this ad within its ad group.
    pub fn identity(&self) -> String {
        ad_identity(&self.headline, &self.description)
    }
}

/// Builds a collision-safe dedup key from an ad's content fields.
///
/// Each field is prefixed with its byte length and the pair is joined with a
/// NUL byte, so no `(headline, description)` pair can produce the same key
/// as a different pair. Joining with a visible delimiter would collide on
/// content that legitimately contains it, e.g. `|` in filter patterns like
/// `{brand|uppercase}`.
pub fn ad_identity(headline: &str, description: &str) -> String {
    format!(
        "{}:{}\u{0}{}:{}",
        headline.len(),
        headline,
        description.len(),
        description
    )
}

/// A generated ad group holding its deduplicated ads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAdGroup {
    pub name: String,
    pub ads: Vec<GeneratedAd>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// A generated campaign keyed by its interpolated name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCampaign {
    pub name: String,
    pub ad_groups: Vec<GeneratedAdGroup>,
}

/// Counters reported alongside the resolved tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveStats {
    pub campaigns: usize,
    /// Unique ad groups across all campaigns.
    pub ad_groups: usize,
    /// Unique ads after per-group deduplication.
    pub ads: usize,
    pub rows_processed: usize,
    pub rows_skipped: usize,
}

/// The full resolved hierarchy plus statistics.
///
/// The resolver always returns the complete deduplicated set; bounding the
/// number of children shown per parent is a presentation concern left to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHierarchy {
    pub campaigns: Vec<GeneratedCampaign>,
    pub stats: ResolveStats,
}
