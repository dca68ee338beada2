//! CLI for deterministic product data generation.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use crucible_datagen::commerce::{PriceOptions, ProductGenerator};
use crucible_datagen::emit::write_products;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "crucible-datagen")]
#[command(about = "Deterministic product data generation")]
struct Args {
    /// Output directory for NDJSON part files
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Random seed for deterministic generation
    #[arg(short, long, default_value = "42")]
    seed: u32,

    /// Number of product rows to generate
    #[arg(short = 'n', long, default_value = "1000000")]
    count: usize,

    /// Number of part files to split the output across
    #[arg(short, long, default_value = "8")]
    chunks: usize,

    /// Minimum unit price
    #[arg(long, default_value = "1.0")]
    min_price: f64,

    /// Maximum unit price
    #[arg(long, default_value = "1000.0")]
    max_price: f64,

    /// Earliest stocked-on date (YYYY-MM-DD)
    #[arg(long, default_value = "2024-01-01")]
    stocked_from: String,

    /// Latest stocked-on date (YYYY-MM-DD)
    #[arg(long, default_value = "2024-12-31")]
    stocked_until: String,

    /// Quiet mode (no progress output)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stocked_from = NaiveDate::parse_from_str(&args.stocked_from, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Invalid stocked-from date: {}", e))?;
    let stocked_until = NaiveDate::parse_from_str(&args.stocked_until, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("Invalid stocked-until date: {}", e))?;

    let price_options = PriceOptions {
        min: args.min_price,
        max: args.max_price,
        ..PriceOptions::default()
    };
    let generator = ProductGenerator::new(price_options, stocked_from, stocked_until)?;

    if !args.quiet {
        println!(
            "Generating {} products across {} part files",
            args.count, args.chunks
        );
        println!("Output: {:?}", args.output);
        println!("Seed: {}", args.seed);
        println!();
    }

    let start_time = Instant::now();
    let last_print = AtomicU64::new(0);

    let progress_fn = |current: usize, total: usize| {
        let elapsed = start_time.elapsed().as_secs();
        let last = last_print.load(Ordering::Relaxed);

        // Print at most every second
        if elapsed > last {
            last_print.store(elapsed, Ordering::Relaxed);
            let pct = (current as f64 / total as f64) * 100.0;
            let rate = current as f64 / elapsed.max(1) as f64;
            eprint!(
                "\rProgress: {:.1}% ({}/{}) - {:.0} rows/sec    ",
                pct, current, total, rate
            );
        }
    };

    let progress: Option<&(dyn Fn(usize, usize) + Sync)> =
        if args.quiet { None } else { Some(&progress_fn) };

    let count = write_products(
        &args.output,
        &generator,
        args.seed,
        args.count,
        args.chunks,
        progress,
    )?;

    let elapsed = start_time.elapsed();

    if !args.quiet {
        eprintln!();
        println!();
        println!("Generated {} products in {:.2}s", count, elapsed.as_secs_f64());
        println!("Rate: {:.0} rows/sec", count as f64 / elapsed.as_secs_f64());
    }

    Ok(())
}
