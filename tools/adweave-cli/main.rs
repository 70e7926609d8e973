use adweave::prelude::*;
use clap::{Parser, ValueEnum};
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlatformCli {
    Google,
    Reddit,
    Facebook,
}

impl From<PlatformCli> for Platform {
    fn from(value: PlatformCli) -> Self {
        match value {
            PlatformCli::Google => Platform::Google,
            PlatformCli::Reddit => Platform::Reddit,
            PlatformCli::Facebook => Platform::Facebook,
        }
    }
}

/// A template expansion and validation engine CLI for ad campaign hierarchies
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the campaign plan JSON file
    plan_path: String,
    /// Optional path to the sample data JSON file
    data_path: Option<String>,

    /// Platforms to validate against, overriding the plan's selection
    #[arg(short, long, value_enum)]
    platforms: Vec<PlatformCli>,

    /// Maximum ads shown per ad group in the preview
    #[arg(long, default_value_t = 5)]
    max_ads: usize,

    /// Emit the resolved tree and validation report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let total_start = Instant::now();

    // --- 1. File Loading ---
    let plan = CampaignPlan::from_file(&cli.plan_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load plan '{}': {}", &cli.plan_path, e))
    });

    let data = if let Some(data_path) = &cli.data_path {
        SampleData::from_file(data_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to load sample data from '{}': {}",
                data_path, e
            ))
        })
    } else {
        println!("No sample data file provided. Using default mock data.");
        SampleData::default()
    };

    let platforms: Vec<Platform> = if cli.platforms.is_empty() {
        plan.platforms.clone()
    } else {
        cli.platforms.iter().copied().map(Platform::from).collect()
    };

    // --- 2. Resolution ---
    let resolve_start = Instant::now();
    let resolver = Resolver::builder(&plan.hierarchy, &plan.campaign).build();
    let resolved = resolver.resolve(&data.rows);
    let resolve_duration = resolve_start.elapsed();

    // --- 3. Validation ---
    let validate_start = Instant::now();
    let mut validator = Validator::new();
    let report = validator.validate(&ValidationInputs {
        config: plan.hierarchy.clone(),
        campaign: plan.campaign.clone(),
        columns: data.columns.clone(),
        rows: data.rows.clone(),
        platforms,
    });
    let validate_duration = validate_start.elapsed();

    // --- 4. Output ---
    if cli.json {
        let output = serde_json::json!({
            "resolved": resolved,
            "validation": report,
        });
        let pretty = serde_json::to_string_pretty(&output)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));
        println!("{}", pretty);
        return;
    }

    println!(
        "\nResolved {} campaigns, {} ad groups, {} unique ads ({} rows processed, {} skipped)",
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
            if !group.keywords.is_empty() {
                println!("    Keywords: {}", group.keywords.join(", "));
            }
            for ad in group.ads.iter().take(cli.max_ads) {
                println!("    -> {} | {}", ad.headline, ad.description);
            }
            if group.ads.len() > cli.max_ads {
                println!("    ... and {} more", group.ads.len() - cli.max_ads);
            }
        }
    }

    println!("\n--- Validation Summary ---");
    if report.is_empty() {
        println!("No issues found.");
    } else {
        print_bucket("Character limits", &report.character_limits);
        print_bucket("URL format", &report.url_format);
        print_bucket("Required fields", &report.required_fields);
        print_bucket("Variable references", &report.variable_references);
        println!(
            "{} errors, {} warnings total",
            report.error_count(),
            report.warning_count()
        );
    }

    println!("\n--- Performance Summary ---");
    println!("Resolution: {:?}", resolve_duration);
    println!("Validation: {:?}", validate_duration);
    println!("Total: {:?}", total_start.elapsed());
}

fn print_bucket(title: &str, items: &[ValidationItem]) {
    if items.is_empty() {
        return;
    }
    println!("{} ({}):", title, items.len());
    for item in items {
        let scope = match (item.ad_group_index, item.ad_index) {
            (Some(gi), Some(ai)) => format!(" [group {}, ad {}]", gi, ai),
            (Some(gi), None) => format!(" [group {}]", gi),
            _ => String::new(),
        };
        println!("  [{}] {}: {}{}", item.severity, item.field, item.message, scope);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
