//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! the adweave crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use adweave::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a campaign plan and sample data
//! let plan = CampaignPlan::from_file("path/to/plan.json")?;
//! let data = SampleData::from_file("path/to/data.json")?;
//!
//! // Expand the hierarchy and inspect the statistics
//! let resolver = Resolver::builder(&plan.hierarchy, &plan.campaign).build();
//! let resolved = resolver.resolve(&data.rows);
//!
//! println!("Resolved: {:?}", resolved.stats);
//! # Ok(())
//! # }
//! ```

// Core resolution and validation
pub use crate::hierarchy::{ResolvedHierarchy, Resolver, ResolverBuilder};
pub use crate::validation::{ValidationInputs, Validator};

// Configuration and plan types
pub use crate::config::{
    AdDefinition, AdField, AdGroupDefinition, CampaignConfig, CampaignPlan, HierarchyConfig,
    IntoPlan,
};

// Data structures
pub use crate::data::{ColumnType, DataRow, DataSourceColumn, SampleData};

// Generated tree and statistics
pub use crate::hierarchy::{GeneratedAd, GeneratedAdGroup, GeneratedCampaign, ResolveStats};

// Pattern engine
pub use crate::pattern::{EditIntent, EditOutcome, extract_variables, interpolate};

// Keyword combination engine
pub use crate::keyword::{
    CombinationMode, FilteredKeywords, KeywordSelection, TermLists, available_modes, combine,
};

// Validation surface
pub use crate::validation::{
    FieldLimits, LimitTable, Platform, Severity, ValidationItem, ValidationReport, ValidationStep,
};

// Error types
pub use crate::error::{ConfigError, PlanConversionError};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
