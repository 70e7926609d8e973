//! Common test utilities for building campaign plans and sample data.
use adweave::prelude::*;
use serde_json::json;

/// Builds a data row from key/value pairs.
#[allow(dead_code)]
pub fn row(pairs: &[(&str, serde_json::Value)]) -> DataRow {
    let mut row = DataRow::new();
    for (key, value) in pairs {
        row.insert(key.to_string(), value.clone());
    }
    row
}

/// The column schema used by most tests.
#[allow(dead_code)]
pub fn shoe_columns() -> Vec<DataSourceColumn> {
    ["brand", "product", "category", "price", "final_url"]
        .iter()
        .map(|name| DataSourceColumn {
            name: name.to_string(),
            column_type: if *name == "price" {
                ColumnType::Number
            } else {
                ColumnType::String
            },
            sample_values: None,
        })
        .collect()
}

/// Three distinct product rows for one brand.
#[allow(dead_code)]
pub fn shoe_rows() -> Vec<DataRow> {
    vec![
        row(&[
            ("brand", json!("Acme")),
            ("product", json!("Running Shoes")),
            ("category", json!("running")),
            ("price", json!(89.0)),
            ("final_url", json!("https://example.com/running")),
        ]),
        row(&[
            ("brand", json!("Acme")),
            ("product", json!("Trail Shoes")),
            ("category", json!("trail")),
            ("price", json!(119.0)),
            ("final_url", json!("https://example.com/trail")),
        ]),
        row(&[
            ("brand", json!("Acme")),
            ("product", json!("Court Sneakers")),
            ("category", json!("court")),
            ("price", json!(99.0)),
            ("final_url", json!("https://example.com/court")),
        ]),
    ]
}

/// Builds an ad with only the content fields set.
#[allow(dead_code)]
pub fn ad(id: &str, headline: &str, description: &str) -> AdDefinition {
    AdDefinition {
        id: id.to_string(),
        headline: headline.to_string(),
        description: description.to_string(),
        display_url: None,
        final_url: None,
    }
}

/// Builds an ad group without keywords.
#[allow(dead_code)]
pub fn ad_group(id: &str, name_pattern: &str, ads: Vec<AdDefinition>) -> AdGroupDefinition {
    AdGroupDefinition {
        id: id.to_string(),
        name_pattern: name_pattern.to_string(),
        ads,
        keywords: vec![],
    }
}

/// A single-group hierarchy templating the product fields.
#[allow(dead_code)]
pub fn simple_hierarchy() -> HierarchyConfig {
    HierarchyConfig {
        ad_groups: vec![ad_group(
            "group-1",
            "{category}",
            vec![ad("ad-1", "{product}", "Buy {product} from {brand}")],
        )],
    }
}

/// The campaign name template used by most tests.
#[allow(dead_code)]
pub fn campaign() -> CampaignConfig {
    CampaignConfig {
        name_pattern: "{brand} Campaign".to_string(),
    }
}

/// Bundles validation inputs from the shared builders.
#[allow(dead_code)]
pub fn validation_inputs(
    config: HierarchyConfig,
    platforms: Vec<Platform>,
) -> ValidationInputs {
    ValidationInputs {
        config,
        campaign: campaign(),
        columns: shoe_columns(),
        rows: shoe_rows(),
        platforms,
    }
}
