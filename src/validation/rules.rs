//! The individual validation rules.
//!
//! Each rule is independent and non-blocking: it appends advisory items and
//! never prevents the hierarchy from being resolved.

use super::limits::FieldLimits;
use super::{Severity, ValidationItem, ValidationStep};
use crate::config::{AdField, CampaignConfig, HierarchyConfig};
use crate::data::{DataRow, DataSourceColumn};
use crate::pattern;
use ahash::AHashSet;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Everything one validation run depends on. Limits arrive already resolved
/// to the most restrictive cap across the selected platforms.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a HierarchyConfig,
    pub campaign: &'a CampaignConfig,
    pub columns: &'a [DataSourceColumn],
    pub rows: &'a [DataRow],
    pub limits: FieldLimits,
}

/// Warning once a pattern reaches this share of its cap.
const APPROACH_RATIO: f64 = 0.80;
/// Stronger warning once a pattern reaches this share of its cap.
const NEAR_RATIO: f64 = 0.95;

/// Neutral stand-in substituted for `{var}` segments before URL parsing.
const URL_PLACEHOLDER: &str = "placeholder";

static BARE_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{[^}]+\}$").expect("bare variable regex"));

/// Whether a pattern is nothing but a single variable reference.
///
/// Such patterns have no knowable static length: the character-limit rule
/// skips the static check and measures each interpolated sample row instead.
pub fn is_bare_variable(pattern: &str) -> bool {
    BARE_VARIABLE.is_match(pattern.trim())
}

/// Runs every rule over the context.
pub fn run_all(ctx: &RuleContext) -> Vec<ValidationItem> {
    let mut items = check_variable_references(ctx);
    items.extend(check_character_limits(ctx));
    items.extend(check_url_formats(ctx));
    items
}

/// Flags `{variable}` references that name no data source column.
///
/// Column matching is case-insensitive; the interpolation engine itself is
/// case-sensitive, so a case mismatch still renders as literal text but is
/// not reported as missing here.
pub fn check_variable_references(ctx: &RuleContext) -> Vec<ValidationItem> {
    let known: AHashSet<String> = ctx
        .columns
        .iter()
        .map(|c| c.name.to_lowercase())
        .collect();
    let mut items = Vec::new();

    for name in missing_variables(&ctx.campaign.name_pattern, &known) {
        items.push(missing_variable_item(
            "campaignName",
            &name,
            ValidationStep::Campaign,
            None,
            None,
        ));
    }

    for (gi, group) in ctx.config.ad_groups.iter().enumerate() {
        for name in missing_variables(&group.name_pattern, &known) {
            items.push(missing_variable_item(
                "adGroupName",
                &name,
                ValidationStep::AdGroups,
                Some(gi),
                None,
            ));
        }
        for (ai, ad) in group.ads.iter().enumerate() {
            for field in AdField::ALL {
                let Some(pattern) = ad.pattern(field) else {
                    continue;
                };
                for name in missing_variables(pattern, &known) {
                    items.push(missing_variable_item(
                        field.name(),
                        &name,
                        ValidationStep::Ads,
                        Some(gi),
                        Some(ai),
                    ));
                }
            }
        }
    }
    items
}

fn missing_variables(pattern: &str, known: &AHashSet<String>) -> Vec<String> {
    pattern::extract_variables(pattern)
        .into_iter()
        .unique()
        .filter(|name| !known.contains(&name.to_lowercase()))
        .collect()
}

fn missing_variable_item(
    field: &str,
    name: &str,
    step: ValidationStep,
    ad_group_index: Option<usize>,
    ad_index: Option<usize>,
) -> ValidationItem {
    ValidationItem {
        field: field.to_string(),
        message: format!("Variable \"{}\" not found in data source columns", name),
        step,
        ad_group_index,
        ad_index,
        severity: Severity::Error,
    }
}

/// Checks every capped ad field against the resolved character limits.
///
/// Static patterns are measured as written; a length exactly at the cap is
/// fine, one past it is an error, and the 80%/95% warning thresholds are
/// inclusive. Bare single-variable patterns are instead interpolated against
/// every sample row and reported as one aggregated item counting the
/// overflowing rows.
pub fn check_character_limits(ctx: &RuleContext) -> Vec<ValidationItem> {
    let mut items = Vec::new();

    for (gi, group) in ctx.config.ad_groups.iter().enumerate() {
        for (ai, ad) in group.ads.iter().enumerate() {
            for field in AdField::ALL {
                let Some(limit) = ctx.limits.cap(field) else {
                    continue;
                };
                let Some(pattern) = ad.pattern(field) else {
                    continue;
                };
                if pattern.trim().is_empty() {
                    continue;
                }

                let item = |message: String, severity: Severity| ValidationItem {
                    field: field.name().to_string(),
                    message,
                    step: ValidationStep::Ads,
                    ad_group_index: Some(gi),
                    ad_index: Some(ai),
                    severity,
                };

                if is_bare_variable(pattern) {
                    let over = ctx
                        .rows
                        .iter()
                        .filter(|row| {
                            pattern::interpolate(pattern, row).chars().count() > limit
                        })
                        .count();
                    if over > 0 {
                        items.push(item(
                            format!(
                                "{} rows exceed {} limit ({} chars)",
                                over,
                                field.label().to_lowercase(),
                                limit
                            ),
                            Severity::Error,
                        ));
                    }
                    continue;
                }

                let len = pattern.chars().count();
                let ratio = len as f64 / limit as f64;
                if len > limit {
                    items.push(item(
                        format!(
                            "{} exceeds the {} character limit ({}/{} chars)",
                            field.label(),
                            limit,
                            len,
                            limit
                        ),
                        Severity::Error,
                    ));
                } else if ratio >= NEAR_RATIO {
                    items.push(item(
                        format!(
                            "{} is within 5% of the {} character limit ({}/{} chars)",
                            field.label(),
                            limit,
                            len,
                            limit
                        ),
                        Severity::Warning,
                    ));
                } else if ratio >= APPROACH_RATIO {
                    items.push(item(
                        format!(
                            "{} is approaching the {} character limit ({}/{} chars)",
                            field.label(),
                            limit,
                            len,
                            limit
                        ),
                        Severity::Warning,
                    ));
                }
            }
        }
    }
    items
}

/// Checks final URL patterns for protocol and syntactic validity.
///
/// Empty values and bare variable references are valid. Anything else must
/// start with `https://` and parse once `{var}` segments are substituted
/// with a neutral placeholder. Display URLs carry no protocol requirement;
/// their length is covered by the character-limit rule.
pub fn check_url_formats(ctx: &RuleContext) -> Vec<ValidationItem> {
    let mut items = Vec::new();

    for (gi, group) in ctx.config.ad_groups.iter().enumerate() {
        for (ai, ad) in group.ads.iter().enumerate() {
            let Some(raw) = ad.pattern(AdField::FinalUrl) else {
                continue;
            };
            let trimmed = raw.trim();
            if trimmed.is_empty() || is_bare_variable(trimmed) {
                continue;
            }

            let item = |message: String| ValidationItem {
                field: AdField::FinalUrl.name().to_string(),
                message,
                step: ValidationStep::Ads,
                ad_group_index: Some(gi),
                ad_index: Some(ai),
                severity: Severity::Error,
            };

            if !trimmed.starts_with("https://") {
                items.push(item(format!(
                    "Final URL must start with HTTPS (\"{}\")",
                    trimmed
                )));
                continue;
            }

            let candidate = pattern::neutralize(trimmed, URL_PLACEHOLDER);
            if Url::parse(&candidate).is_err() {
                items.push(item(format!("Final URL is not a valid URL (\"{}\")", trimmed)));
            }
        }
    }
    items
}
