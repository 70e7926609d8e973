use thiserror::Error;

/// Errors that can occur while loading or parsing a campaign plan or sample data file.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to parse plan JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read file '{path}': {message}")]
    FileReadError { path: String, message: String },
}

/// Errors that can occur when converting a custom user format into an adweave `CampaignPlan`.
#[derive(Error, Debug, Clone)]
pub enum PlanConversionError {
    #[error("Invalid custom plan data: {0}")]
    ValidationError(String),
}
