//! Keyword combination engine.
//!
//! Expands prefix/core/suffix term lists into keywords according to a set of
//! enabled combination modes, with order-preserving deduplication and a
//! session-local exclusion overlay.

pub mod selection;

pub use selection::{FilteredKeywords, KeywordSelection};

use crate::data::DataRow;
use crate::pattern;
use ahash::AHashSet;
use itertools::{Itertools, iproduct};
use serde::{Deserialize, Serialize};

/// Which cartesian slices of the term lists to emit as keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CombinationMode {
    CoreOnly,
    PrefixCore,
    CoreSuffix,
    Full,
}

impl CombinationMode {
    pub const ALL: [CombinationMode; 4] = [
        CombinationMode::CoreOnly,
        CombinationMode::PrefixCore,
        CombinationMode::CoreSuffix,
        CombinationMode::Full,
    ];
}

/// The three term lists feeding the combinator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermLists {
    pub prefixes: Vec<String>,
    pub cores: Vec<String>,
    pub suffixes: Vec<String>,
}

impl TermLists {
    /// Parses three line-delimited term blocks. Terms are trimmed; blank
    /// lines are dropped.
    pub fn parse(prefixes: &str, cores: &str, suffixes: &str) -> Self {
        Self {
            prefixes: parse_terms(prefixes),
            cores: parse_terms(cores),
            suffixes: parse_terms(suffixes),
        }
    }
}

fn parse_terms(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The modes whose prerequisite term lists are non-empty.
///
/// A mode missing its prerequisite is force-disabled regardless of the
/// stored user preference for it: no core terms means no keywords at all,
/// and prefix/suffix modes additionally require their respective list.
pub fn available_modes(terms: &TermLists) -> AHashSet<CombinationMode> {
    let mut modes = AHashSet::new();
    if terms.cores.is_empty() {
        return modes;
    }
    modes.insert(CombinationMode::CoreOnly);
    if !terms.prefixes.is_empty() {
        modes.insert(CombinationMode::PrefixCore);
    }
    if !terms.suffixes.is_empty() {
        modes.insert(CombinationMode::CoreSuffix);
    }
    if !terms.prefixes.is_empty() && !terms.suffixes.is_empty() {
        modes.insert(CombinationMode::Full);
    }
    modes
}

/// Expands the term lists into a keyword list.
///
/// For each non-blank core term, in fixed order: the core alone, then every
/// prefix+core, then every core+suffix, then every prefix+core+suffix, each
/// gated on its mode being enabled and available. Parts are joined with
/// single spaces. The overall result is deduplicated preserving first-seen
/// order.
pub fn combine(terms: &TermLists, enabled: &AHashSet<CombinationMode>) -> Vec<String> {
    let available = available_modes(terms);
    let active =
        |mode: CombinationMode| enabled.contains(&mode) && available.contains(&mode);

    let mut keywords = Vec::new();
    for core in &terms.cores {
        let core = core.trim();
        if core.is_empty() {
            continue;
        }
        if active(CombinationMode::CoreOnly) {
            keywords.push(core.to_string());
        }
        if active(CombinationMode::PrefixCore) {
            for prefix in &terms.prefixes {
                keywords.push(format!("{} {}", prefix, core));
            }
        }
        if active(CombinationMode::CoreSuffix) {
            for suffix in &terms.suffixes {
                keywords.push(format!("{} {}", core, suffix));
            }
        }
        if active(CombinationMode::Full) {
            for (prefix, suffix) in iproduct!(&terms.prefixes, &terms.suffixes) {
                keywords.push(format!("{} {} {}", prefix, core, suffix));
            }
        }
    }
    keywords.into_iter().unique().collect()
}

/// Interpolates each keyword against a sample row for display.
///
/// Preview only: the non-interpolated list remains the primary output
/// reported to callers.
pub fn preview(keywords: &[String], row: &DataRow) -> Vec<String> {
    keywords
        .iter()
        .map(|keyword| pattern::interpolate(keyword, row))
        .collect()
}
