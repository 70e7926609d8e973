use adweave::prelude::*;
use std::env;

/// Ads shown per ad group in the preview; the resolver itself returns the
/// full deduplicated set.
const PREVIEW_ADS_PER_GROUP: usize = 5;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/plan.json> [path/to/sample_data.json]");
        std::process::exit(1);
    }

    let plan_path = &args[1];
    let data_path = args.get(2);

    println!("Loading plan from: {}", plan_path);
    let plan = match CampaignPlan::from_file(plan_path) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Failed to load plan '{}': {}", plan_path, e);
            std::process::exit(1);
        }
    };

    // Load sample data
    let data = if let Some(data_path) = data_path {
        println!("Loading sample data from: {}", data_path);
        match SampleData::from_file(data_path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to load sample data from '{}': {}", data_path, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No sample data file provided. Using default mock data.");
        SampleData::default()
    };

    // Resolution phase
    println!("\nResolving campaign hierarchy...");
    let resolver = Resolver::builder(&plan.hierarchy, &plan.campaign).build();
    let resolved = resolver.resolve(&data.rows);

    println!(
        "Resolved {} campaigns, {} ad groups, {} unique ads ({} rows processed, {} skipped)",
        resolved.stats.campaigns,
        resolved.stats.ad_groups,
        resolved.stats.ads,
        resolved.stats.rows_processed,
        resolved.stats.rows_skipped
    );

    for campaign in &resolved.campaigns {
        println!("\nCampaign: {}", campaign.name);
        for group in &campaign.ad_groups {
            println!("  Ad Group: {} ({} ads)", group.name, group.ads.len());
            for ad in group.ads.iter().take(PREVIEW_ADS_PER_GROUP) {
                println!("    -> {} | {}", ad.headline, ad.description);
            }
            if group.ads.len() > PREVIEW_ADS_PER_GROUP {
                println!(
                    "    ... and {} more",
                    group.ads.len() - PREVIEW_ADS_PER_GROUP
                );
            }
        }
    }

    // Validation phase
    println!("\nValidating against platforms: {:?}", plan.platforms);
    let mut validator = Validator::new();
    let report = validator.validate(&ValidationInputs {
        config: plan.hierarchy.clone(),
        campaign: plan.campaign.clone(),
        columns: data.columns.clone(),
        rows: data.rows.clone(),
        platforms: plan.platforms.clone(),
    });

    if report.is_empty() {
        println!("No validation issues found.");
    } else {
        println!(
            "{} errors, {} warnings:",
            report.error_count(),
            report.warning_count()
        );
        for item in report.iter() {
            println!("  [{}] {}: {}", item.severity, item.field, item.message);
        }
    }
    println!();
}
