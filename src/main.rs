mod db;
mod input;
mod model;
mod pipeline;
mod settings;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pipeline::normalize::Normalizer;
use settings::Settings;

#[derive(Parser)]
#[command(name = "product_etl", about = "Product listing extraction and normalization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw JSON dump and upsert the accepted records
    Process {
        /// Raw records file (JSON array)
        input: PathBuf,
        /// Write the accepted records to this JSON file as well
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Max records to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Normalize and report only, no database writes
        #[arg(long)]
        skip_db: bool,
    },
    /// Products table overview
    Overview {
        /// Filter by category (e.g. "CPU", "Air Purifier")
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by brand
        #[arg(short, long)]
        brand: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Stored-data statistics
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let cfg = Settings::load()?;

    let result = match cli.command {
        Commands::Process {
            input,
            output,
            limit,
            skip_db,
        } => {
            let mut records = input::load_records(&input)?;
            if let Some(n) = limit {
                records.truncate(n);
            }
            if records.is_empty() {
                println!("No records in {}.", input.display());
                return Ok(());
            }
            println!("Processing {} records...", records.len());

            let normalizer = Normalizer::new(&cfg);
            let outcome = pipeline::process_all(&normalizer, &records);
            outcome.print_summary();

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&outcome.accepted)?;
                fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("\nWrote {} records to {}", outcome.accepted.len(), path.display());
            }

            if !skip_db {
                let conn = db::connect(&cfg.db_path)?;
                db::init_schema(&conn)?;
                let saved = db::upsert_products(&conn, &outcome.accepted)?;
                println!("Saved {} records to {}", saved, cfg.db_path);
            }
            Ok(())
        }
        Commands::Overview {
            category,
            brand,
            limit,
        } => {
            let conn = db::connect(&cfg.db_path)?;
            db::init_schema(&conn)?;
            let rows = db::fetch_overview(&conn, category.as_deref(), brand.as_deref(), limit)?;
            if rows.is_empty() {
                println!("No products found.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<48} | {:<13} | {:<12} | {:>9}",
                "#", "Title", "Category", "Brand", "Price"
            );
            println!("{}", "-".repeat(97));
            for (i, r) in rows.iter().enumerate() {
                println!(
                    "{:>3} | {:<48} | {:<13} | {:<12} | {:>9.2}",
                    i + 1,
                    truncate(&r.title, 48),
                    r.category,
                    r.brand.as_deref().unwrap_or("-"),
                    r.price
                );
            }
            println!("\n{} products", rows.len());
            Ok(())
        }
        Commands::Stats => {
            let conn = db::connect(&cfg.db_path)?;
            db::init_schema(&conn)?;
            let s = db::get_stats(&conn)?;
            println!("Total products: {}", s.total);
            if !s.categories.is_empty() {
                println!("\nBy category:");
                for (category, count) in &s.categories {
                    println!("  {category}: {count}");
                }
            }
            if let (Some(min), Some(max), Some(avg)) = (s.min_price, s.max_price, s.avg_price) {
                println!("\nPrice range: ${min:.2} - ${max:.2} (avg ${avg:.2})");
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
