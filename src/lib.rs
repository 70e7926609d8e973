//! # Adweave - Campaign Template Expansion and Validation Engine
//!
//! **Adweave** expands a templated advertising-campaign hierarchy
//! (Campaign → Ad Group → Ad → Keywords) against a tabular data source and
//! validates the result against per-platform constraints. Templates carry
//! `{variable}` placeholders which are substituted row by row; the expanded
//! tree is deduplicated with collision-safe content keys, and a cached,
//! debounced validator reports character-limit, URL-format and
//! variable-reference problems as advisory items.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical `CampaignPlan`
//! model. The primary workflow is:
//!
//! 1.  **Load Your Plan**: Parse your own campaign format into your own Rust
//!     structs, or load the canonical JSON form via `CampaignPlan::from_file`.
//! 2.  **Convert to Adweave's Model**: Implement the `IntoPlan` trait for
//!     custom formats to provide a translation layer into `CampaignPlan`.
//! 3.  **Resolve**: Use `Resolver::builder` to expand the plan against every
//!     sample row into a deduplicated campaign tree with statistics.
//! 4.  **Validate**: Run a `Validator` over the plan, schema and sample rows
//!     to collect categorized, non-blocking validation items.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use adweave::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the canonical plan and sample data from JSON files.
//!     let plan = CampaignPlan::from_file("path/to/plan.json")?;
//!     let data = SampleData::from_file("path/to/data.json")?;
//!
//!     // 2. Expand the template against every row.
//!     let resolver = Resolver::builder(&plan.hierarchy, &plan.campaign).build();
//!     let resolved = resolver.resolve(&data.rows);
//!     println!(
//!         "{} campaigns, {} ad groups, {} unique ads",
//!         resolved.stats.campaigns, resolved.stats.ad_groups, resolved.stats.ads
//!     );
//!
//!     // 3. Validate against the selected platforms.
//!     let mut validator = Validator::new();
//!     let report = validator.validate(&ValidationInputs {
//!         config: plan.hierarchy.clone(),
//!         campaign: plan.campaign.clone(),
//!         columns: data.columns.clone(),
//!         rows: data.rows.clone(),
//!         platforms: plan.platforms.clone(),
//!     });
//!     for item in report.iter() {
//!         println!("[{}] {}: {}", item.severity, item.field, item.message);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod hierarchy;
pub mod keyword;
pub mod pattern;
pub mod prelude;
pub mod validation;
