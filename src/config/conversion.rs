use super::definition::CampaignPlan;
use crate::error::PlanConversionError;

/// A trait for custom data models that can be converted into an adweave [`CampaignPlan`].
///
/// This is the primary extension point for making adweave format-agnostic. By
/// implementing this trait on your own configuration structs, you provide a
/// translation layer that allows the resolver and validator to process your
/// custom campaign format.
///
/// # Example
///
/// ```rust,no_run
/// use adweave::config::{
///     AdDefinition, AdGroupDefinition, CampaignConfig, CampaignPlan, HierarchyConfig, IntoPlan,
/// };
/// use adweave::error::PlanConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyAdRow { title: String, body: String }
/// struct MyCampaignSheet { campaign_title: String, ads: Vec<MyAdRow> }
///
/// // 2. Implement `IntoPlan` for your top-level struct.
/// impl IntoPlan for MyCampaignSheet {
///     fn into_plan(self) -> Result<CampaignPlan, PlanConversionError> {
///         let ads = self
///             .ads
///             .into_iter()
///             .enumerate()
///             .map(|(i, ad)| AdDefinition {
///                 id: format!("ad-{i}"),
///                 headline: ad.title,
///                 description: ad.body,
///                 display_url: None,
///                 final_url: None,
///             })
///             .collect();
///
///         Ok(CampaignPlan {
///             campaign: CampaignConfig { name_pattern: self.campaign_title },
///             hierarchy: HierarchyConfig {
///                 ad_groups: vec![AdGroupDefinition {
///                     id: "group-0".to_string(),
///                     name_pattern: "{category}".to_string(),
///                     ads,
///                     keywords: vec![],
///                 }],
///             },
///             platforms: vec![],
///         })
///     }
/// }
/// ```
pub trait IntoPlan {
    /// Consumes the object and converts it into an adweave-compatible plan.
    fn into_plan(self) -> Result<CampaignPlan, PlanConversionError>;
}
