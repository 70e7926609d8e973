//! Hierarchy resolution.
//!
//! Expands every ad group definition against every data row, grouping the
//! generated ads into campaigns and ad groups by interpolated name and
//! deduplicating ads per group with a collision-safe content key.

pub mod tree;

pub use tree::{
    GeneratedAd, GeneratedAdGroup, GeneratedCampaign, ResolveStats, ResolvedHierarchy,
    ad_identity,
};

use crate::config::{CampaignConfig, HierarchyConfig};
use crate::data::DataRow;
use crate::pattern;
use ahash::{AHashMap, AHashSet};

type RowFilter<'a> = Box<dyn Fn(&DataRow) -> bool + 'a>;

/// Expands a hierarchy template against sample rows.
///
/// Create with [`Resolver::builder`]. Resolution is pure: the same config
/// and rows always produce the same tree, and generated entities are rebuilt
/// from scratch on every call, never patched incrementally.
pub struct Resolver<'a> {
    config: &'a HierarchyConfig,
    campaign: &'a CampaignConfig,
    skip_row: RowFilter<'a>,
}

pub struct ResolverBuilder<'a> {
    config: &'a HierarchyConfig,
    campaign: &'a CampaignConfig,
    skip_row: Option<RowFilter<'a>>,
}

impl<'a> ResolverBuilder<'a> {
    pub fn new(config: &'a HierarchyConfig, campaign: &'a CampaignConfig) -> Self {
        Self {
            config,
            campaign,
            skip_row: None,
        }
    }

    /// Replaces the row-skip predicate.
    ///
    /// Rows for which the predicate returns `true` are not expanded and are
    /// counted in `rows_skipped`. The resolver has no opinion of its own on
    /// what makes a row skippable beyond the default, which rejects empty
    /// row objects.
    pub fn with_row_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&DataRow) -> bool + 'a,
    {
        self.skip_row = Some(Box::new(filter));
        self
    }

    pub fn build(self) -> Resolver<'a> {
        Resolver {
            config: self.config,
            campaign: self.campaign,
            skip_row: self
                .skip_row
                .unwrap_or_else(|| Box::new(|row: &DataRow| row.is_empty())),
        }
    }
}

impl<'a> Resolver<'a> {
    pub fn builder(
        config: &'a HierarchyConfig,
        campaign: &'a CampaignConfig,
    ) -> ResolverBuilder<'a> {
        ResolverBuilder::new(config, campaign)
    }

    /// Expands the template against every row.
    ///
    /// Campaigns and ad groups are keyed by interpolated name in first-seen
    /// order. Ads deduplicate within their ad group only; identical content
    /// in two different ad groups stays distinct. Nodes whose placeholders
    /// stay unresolved are still created, with the literal `{name}` text
    /// visible.
    pub fn resolve(&self, rows: &[DataRow]) -> ResolvedHierarchy {
        tracing::debug!(
            rows = rows.len(),
            ad_groups = self.config.ad_groups.len(),
            "resolving hierarchy"
        );

        let mut campaigns: Vec<CampaignAccum> = Vec::new();
        let mut campaign_index: AHashMap<String, usize> = AHashMap::new();
        let mut stats = ResolveStats::default();

        for row in rows {
            if (self.skip_row)(row) {
                stats.rows_skipped += 1;
                continue;
            }
            stats.rows_processed += 1;

            let campaign_name = pattern::interpolate(&self.campaign.name_pattern, row);
            for group_def in &self.config.ad_groups {
                let group_name = pattern::interpolate(&group_def.name_pattern, row);

                let ci = *campaign_index
                    .entry(campaign_name.clone())
                    .or_insert_with(|| {
                        campaigns.push(CampaignAccum::new(campaign_name.clone()));
                        campaigns.len() - 1
                    });
                let campaign = &mut campaigns[ci];
                let gi = campaign.group_entry(group_name);
                let group = &mut campaign.groups[gi];
                group.merge_keywords(&group_def.keywords);

                for ad_def in &group_def.ads {
                    group.insert(GeneratedAd {
                        headline: pattern::interpolate(&ad_def.headline, row),
                        description: pattern::interpolate(&ad_def.description, row),
                        display_url: ad_def
                            .display_url
                            .as_deref()
                            .map(|p| pattern::interpolate(p, row)),
                        final_url: ad_def
                            .final_url
                            .as_deref()
                            .map(|p| pattern::interpolate(p, row)),
                    });
                }
            }
        }

        let mut generated = Vec::with_capacity(campaigns.len());
        for campaign in campaigns {
            let ad_groups: Vec<GeneratedAdGroup> = campaign
                .groups
                .into_iter()
                .map(GroupAccum::finish)
                .collect();
            stats.ad_groups += ad_groups.len();
            stats.ads += ad_groups.iter().map(|g| g.ads.len()).sum::<usize>();
            generated.push(GeneratedCampaign {
                name: campaign.name,
                ad_groups,
            });
        }
        stats.campaigns = generated.len();

        tracing::debug!(
            campaigns = stats.campaigns,
            ad_groups = stats.ad_groups,
            ads = stats.ads,
            skipped = stats.rows_skipped,
            "resolved hierarchy"
        );

        ResolvedHierarchy {
            campaigns: generated,
            stats,
        }
    }
}

/// Accumulates one campaign's groups in first-seen order.
struct CampaignAccum {
    name: String,
    groups: Vec<GroupAccum>,
    group_index: AHashMap<String, usize>,
}

impl CampaignAccum {
    fn new(name: String) -> Self {
        Self {
            name,
            groups: Vec::new(),
            group_index: AHashMap::new(),
        }
    }

    fn group_entry(&mut self, name: String) -> usize {
        if let Some(&i) = self.group_index.get(&name) {
            return i;
        }
        self.groups.push(GroupAccum::new(name.clone()));
        let i = self.groups.len() - 1;
        self.group_index.insert(name, i);
        i
    }
}

/// Accumulates one ad group's unique ads. Two ad group definitions that
/// interpolate to the same name merge here, which keeps the dedup scope at
/// the (campaign, ad group) pair.
struct GroupAccum {
    name: String,
    ads: Vec<GeneratedAd>,
    keywords: Vec<String>,
    seen: AHashSet<String>,
}

impl GroupAccum {
    fn new(name: String) -> Self {
        Self {
            name,
            ads: Vec::new(),
            keywords: Vec::new(),
            seen: AHashSet::new(),
        }
    }

    fn insert(&mut self, ad: GeneratedAd) {
        if self.seen.insert(ad.identity()) {
            self.ads.push(ad);
        }
    }

    fn merge_keywords(&mut self, keywords: &[String]) {
        for keyword in keywords {
            if !self.keywords.contains(keyword) {
                self.keywords.push(keyword.clone());
            }
        }
    }

    fn finish(self) -> GeneratedAdGroup {
        GeneratedAdGroup {
            name: self.name,
            ads: self.ads,
            keywords: self.keywords,
        }
    }
}
