//! Tests for the validation rules, categorization, caching and debounce.
mod common;
use adweave::prelude::*;
use adweave::validation::{DEBOUNCE_DELAY, Severity, ValidationStep};
use common::*;
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn single_ad_hierarchy(ad: AdDefinition) -> HierarchyConfig {
    HierarchyConfig {
        ad_groups: vec![AdGroupDefinition {
            id: "g".to_string(),
            name_pattern: "Shoes".to_string(),
            ads: vec![ad],
            keywords: vec![],
        }],
    }
}

fn plain_ad(headline: &str, description: &str) -> AdDefinition {
    AdDefinition {
        id: "a".to_string(),
        headline: headline.to_string(),
        description: description.to_string(),
        display_url: None,
        final_url: None,
    }
}

fn url_ad(final_url: &str) -> AdDefinition {
    AdDefinition {
        id: "a".to_string(),
        headline: "Run Fast".to_string(),
        description: "Best shoe ever".to_string(),
        display_url: None,
        final_url: Some(final_url.to_string()),
    }
}

#[test]
fn test_unknown_variable_is_reported() {
    let config = single_ad_hierarchy(plain_ad("{missing_col} sale", "text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));

    assert_eq!(report.variable_references.len(), 1);
    let item = &report.variable_references[0];
    assert_eq!(
        item.message,
        "Variable \"missing_col\" not found in data source columns"
    );
    assert_eq!(item.field, "headline");
    assert_eq!(item.step, ValidationStep::Ads);
    assert_eq!(item.ad_group_index, Some(0));
    assert_eq!(item.ad_index, Some(0));
    assert_eq!(item.severity, Severity::Error);
}

#[test]
fn test_variable_match_is_case_insensitive() {
    // Interpolation is case-sensitive, but the schema check is not: a case
    // mismatch renders literally without being flagged as missing.
    let config = single_ad_hierarchy(plain_ad("{BRAND} sale", "text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert!(report.variable_references.is_empty());
}

#[test]
fn test_campaign_and_group_patterns_are_checked() {
    let mut inputs = validation_inputs(
        HierarchyConfig {
            ad_groups: vec![AdGroupDefinition {
                id: "g".to_string(),
                name_pattern: "{nope}".to_string(),
                ads: vec![plain_ad("ok", "ok")],
                keywords: vec![],
            }],
        },
        vec![Platform::Google],
    );
    inputs.campaign = CampaignConfig {
        name_pattern: "{also_nope}".to_string(),
    };

    let mut validator = Validator::new();
    let report = validator.validate(&inputs);
    assert_eq!(report.variable_references.len(), 2);
    assert_eq!(report.variable_references[0].step, ValidationStep::Campaign);
    assert_eq!(report.variable_references[0].field, "campaignName");
    assert_eq!(report.variable_references[1].step, ValidationStep::AdGroups);
    assert_eq!(report.variable_references[1].field, "adGroupName");
}

#[test]
fn test_length_at_limit_is_not_an_error() {
    // Google headline cap is 30; exactly 30 chars must not error.
    let config = single_ad_hierarchy(plain_ad(&"a".repeat(30), "short text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert_eq!(report.error_count(), 0);

    // One past the cap errors.
    let config = single_ad_hierarchy(plain_ad(&"a".repeat(31), "short text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert_eq!(report.error_count(), 1);
    let item = &report.character_limits[0];
    assert!(item.message.contains("exceed"));
    assert!(item.message.contains("character"));
}

#[test]
fn test_warning_thresholds_are_inclusive() {
    // 24/30 is exactly 80%: the approach warning fires.
    let config = single_ad_hierarchy(plain_ad(&"a".repeat(24), "short text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert_eq!(report.warning_count(), 1);

    // 23/30 is below 80%: silence.
    let config = single_ad_hierarchy(plain_ad(&"a".repeat(23), "short text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert_eq!(report.warning_count(), 0);

    // 29/30 crosses 95%: still a warning, not an error.
    let config = single_ad_hierarchy(plain_ad(&"a".repeat(29), "short text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.error_count(), 0);
}

#[test]
fn test_bare_variable_checked_per_row() {
    // "{product}" has no static length; each sample row is measured instead.
    let config = single_ad_hierarchy(plain_ad("{product}", "short text"));
    let mut inputs = validation_inputs(config, vec![Platform::Google]);
    inputs.rows = vec![
        row(&[("product", json!("x".repeat(31)))]),
        row(&[("product", json!("x".repeat(40)))]),
        row(&[("product", json!("x".repeat(30)))]), // exactly at the cap: fine
    ];

    let mut validator = Validator::new();
    let report = validator.validate(&inputs);
    assert_eq!(report.character_limits.len(), 1);
    assert_eq!(
        report.character_limits[0].message,
        "2 rows exceed headline limit (30 chars)"
    );
    assert_eq!(report.character_limits[0].severity, Severity::Error);
}

#[test]
fn test_most_restrictive_limit_across_platforms() {
    // Reddit allows 300 headline chars but the default description cap (100)
    // combined with Google's 90 keeps the minimum at 90. A 95-char
    // description passes on Reddit alone and fails with Google selected.
    let description = "d".repeat(95);
    let config = single_ad_hierarchy(plain_ad("ok", &description));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config.clone(), vec![Platform::Reddit]));
    assert_eq!(report.error_count(), 0);

    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(
        config,
        vec![Platform::Reddit, Platform::Google],
    ));
    assert_eq!(report.error_count(), 1);
}

#[test]
fn test_no_platform_selection_defaults_to_google() {
    let config = single_ad_hierarchy(plain_ad(&"a".repeat(31), "short text"));
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![]));
    assert_eq!(report.error_count(), 1);
}

#[test]
fn test_final_url_validity_table() {
    let cases: &[(&str, bool)] = &[
        ("", true),
        ("{final_url}", true),
        ("https://x.com/{path}", true),
        ("https://x.com", true),
        ("http://x.com", false),
        ("not a url", false),
    ];
    for (url, valid) in cases {
        let config = single_ad_hierarchy(url_ad(url));
        let mut validator = Validator::new();
        let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
        assert_eq!(
            report.url_format.is_empty(),
            *valid,
            "final_url {:?} should be {}",
            url,
            if *valid { "valid" } else { "invalid" }
        );
    }
}

#[test]
fn test_display_url_has_no_protocol_rule_but_a_cap() {
    // 15 chars fits Google's display URL cap exactly, no protocol needed.
    let mut ad = plain_ad("ok", "short text");
    ad.display_url = Some("www.example.com".to_string());
    let config = single_ad_hierarchy(ad);
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert!(report.url_format.is_empty());
    assert_eq!(report.error_count(), 0);

    // One char past the cap is a character-limit error, not a URL error.
    let mut ad = plain_ad("ok", "short text");
    ad.display_url = Some("www.example1.com".to_string());
    let config = single_ad_hierarchy(ad);
    let mut validator = Validator::new();
    let report = validator.validate(&validation_inputs(config, vec![Platform::Google]));
    assert!(report.url_format.is_empty());
    assert_eq!(report.character_limits.len(), 1);
}

#[test]
fn test_categorizer_buckets_caller_supplied_items() {
    let items = vec![
        ValidationItem {
            field: "budget".to_string(),
            message: "Campaign budget is required".to_string(),
            step: ValidationStep::Campaign,
            ad_group_index: None,
            ad_index: None,
            severity: Severity::Error,
        },
        ValidationItem {
            field: "headline".to_string(),
            message: "Headline exceeds the 30 character limit (31/30 chars)".to_string(),
            step: ValidationStep::Ads,
            ad_group_index: Some(0),
            ad_index: Some(0),
            severity: Severity::Error,
        },
        ValidationItem {
            field: "finalUrl".to_string(),
            message: "Final URL must start with HTTPS (\"http://x.com\")".to_string(),
            step: ValidationStep::Ads,
            ad_group_index: Some(0),
            ad_index: Some(0),
            severity: Severity::Error,
        },
        ValidationItem {
            field: "headline".to_string(),
            message: "Variable \"brand\" not found in data source columns".to_string(),
            step: ValidationStep::Ads,
            ad_group_index: Some(0),
            ad_index: Some(0),
            severity: Severity::Error,
        },
        ValidationItem {
            field: "other".to_string(),
            message: "Something unclassifiable happened".to_string(),
            step: ValidationStep::Ads,
            ad_group_index: None,
            ad_index: None,
            severity: Severity::Warning,
        },
    ];

    let report = ValidationReport::categorize(items);
    assert_eq!(report.required_fields.len(), 1);
    // The unmatched message defaults into the character-limits bucket.
    assert_eq!(report.character_limits.len(), 2);
    assert_eq!(report.url_format.len(), 1);
    assert_eq!(report.variable_references.len(), 1);
    assert_eq!(report.len(), 5);
    assert_eq!(report.error_count(), 4);
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn test_cache_skips_recomputation_for_identical_inputs() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let mut validator = Validator::new().with_evaluator(move |_ctx| {
        seen.set(seen.get() + 1);
        vec![]
    });

    let inputs = validation_inputs(simple_hierarchy(), vec![Platform::Google]);
    let first = validator.validate(&inputs);
    let second = validator.validate(&inputs);

    assert_eq!(calls.get(), 1);
    assert_eq!(validator.runs(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_cache_invalidated_by_platform_change() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let mut validator = Validator::new().with_evaluator(move |_ctx| {
        seen.set(seen.get() + 1);
        vec![]
    });

    validator.validate(&validation_inputs(simple_hierarchy(), vec![Platform::Google]));
    validator.validate(&validation_inputs(simple_hierarchy(), vec![Platform::Reddit]));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_debounce_supersedes_pending_runs() {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let mut validator = Validator::new().with_evaluator(move |_ctx| {
        seen.set(seen.get() + 1);
        vec![]
    });

    let t0 = Instant::now();
    validator.schedule(
        validation_inputs(simple_hierarchy(), vec![Platform::Google]),
        t0,
    );
    assert!(validator.has_pending());

    // Not due yet.
    assert!(validator.poll(t0 + Duration::from_millis(100)).is_none());

    // A newer change supersedes the pending run before it fires.
    let t1 = t0 + Duration::from_millis(200);
    validator.schedule(
        validation_inputs(simple_hierarchy(), vec![Platform::Reddit]),
        t1,
    );

    // The superseded deadline passing fires nothing.
    assert!(validator.poll(t0 + DEBOUNCE_DELAY).is_none());

    // The newest deadline fires exactly once.
    let report = validator.poll(t1 + DEBOUNCE_DELAY);
    assert!(report.is_some());
    assert!(!validator.has_pending());
    assert_eq!(calls.get(), 1);

    // Nothing left to fire.
    assert!(validator.poll(t1 + Duration::from_secs(10)).is_none());
}
