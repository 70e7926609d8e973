use adweave::data::{ColumnType, DataRow, DataSourceColumn, SampleData};
use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::json;
use std::fs;

/// A CLI tool to generate sample row data for the adweave resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_data.json")]
    output: String,

    /// The number of rows to generate
    #[arg(long, default_value_t = 25)]
    rows: usize,
}

const BRANDS: &[&str] = &["Acme", "Northwind", "Globex", "Initech", "Umbra"];
const PRODUCTS: &[&str] = &[
    "Running Shoes",
    "Trail Shoes",
    "Court Sneakers",
    "Hiking Boots",
    "Walking Sandals",
];
const CATEGORIES: &[&str] = &["running", "trail", "court", "hiking", "casual"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating {} sample rows...", cli.rows);

    let columns = vec![
        column("brand", ColumnType::String),
        column("product", ColumnType::String),
        column("category", ColumnType::String),
        column("price", ColumnType::Number),
        column("final_url", ColumnType::String),
    ];

    let rows: Vec<DataRow> = (0..cli.rows).map(|_| generate_row(&mut rng)).collect();
    let sample_data = SampleData { columns, rows };

    let json_output = serde_json::to_string_pretty(&sample_data)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved sample data to '{}'",
        cli.output
    );

    Ok(())
}

fn column(name: &str, column_type: ColumnType) -> DataSourceColumn {
    DataSourceColumn {
        name: name.to_string(),
        column_type,
        sample_values: None,
    }
}

fn generate_row(rng: &mut ThreadRng) -> DataRow {
    let brand = pick(rng, BRANDS);
    let product = pick(rng, PRODUCTS);
    let category = pick(rng, CATEGORIES);
    let price = rng.random_range(30..250);

    let mut row = DataRow::new();
    row.insert("brand".to_string(), json!(brand));
    row.insert("product".to_string(), json!(product));
    row.insert("category".to_string(), json!(category));
    row.insert("price".to_string(), json!(price));
    row.insert(
        "final_url".to_string(),
        json!(format!(
            "https://example.com/{}/{}",
            category,
            product.to_lowercase().replace(' ', "-")
        )),
    );
    row
}

fn pick<'a>(rng: &mut ThreadRng, values: &'a [&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}
