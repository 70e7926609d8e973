use crate::error::ConfigError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;

/// A single row of the tabular data source. Keys are column names
/// (case-sensitive); values are arbitrary scalars. Rows are read-only inputs
/// and are never mutated by the engines.
pub type DataRow = AHashMap<String, serde_json::Value>;

/// The declared type of a data source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    String,
    Number,
    Boolean,
    Date,
}

/// Schema entry for one column of the data source, supplied externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_values: Option<Vec<String>>,
}

/// Represents the sample data structure, matching the expected JSON format:
/// a column schema plus the rows the templates are previewed against.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SampleData {
    pub columns: Vec<DataSourceColumn>,
    pub rows: Vec<DataRow>,
}

impl SampleData {
    /// Load sample data from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::JsonParseError(e.to_string()))
    }

    /// Creates default mock data when no file is provided.
    pub fn default() -> Self {
        let columns = vec![
            DataSourceColumn {
                name: "brand".to_string(),
                column_type: ColumnType::String,
                sample_values: None,
            },
            DataSourceColumn {
                name: "product".to_string(),
                column_type: ColumnType::String,
                sample_values: None,
            },
            DataSourceColumn {
                name: "price".to_string(),
                column_type: ColumnType::Number,
                sample_values: None,
            },
        ];

        let mut first = DataRow::new();
        first.insert("brand".to_string(), json!("Acme"));
        first.insert("product".to_string(), json!("Running Shoes"));
        first.insert("price".to_string(), json!(89.0));

        let mut second = DataRow::new();
        second.insert("brand".to_string(), json!("Acme"));
        second.insert("product".to_string(), json!("Trail Shoes"));
        second.insert("price".to_string(), json!(119.0));

        Self {
            columns,
            rows: vec![first, second],
        }
    }
}
