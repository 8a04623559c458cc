use bfilter::{
    BloomFilter, DEFAULT_FALSE_POSITIVE_RATE, FilterConfigBuilder,
    common::bits2hr,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build an in-memory Bloom filter, insert items and query them
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum number of insertions
    #[arg(short, long)]
    capacity: i64,

    /// False positive rate (between 0 and 1)
    #[arg(short, long, default_value_t = DEFAULT_FALSE_POSITIVE_RATE)]
    fpr: f64,

    /// Item to insert, may be repeated
    #[arg(short, long = "insert", value_name = "ITEM")]
    inserts: Vec<String>,

    /// Item to look up after all inserts, may be repeated
    #[arg(short, long = "query", value_name = "ITEM")]
    queries: Vec<String>,

    /// Print the derived filter parameters
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = FilterConfigBuilder::default()
        .capacity(cli.capacity)
        .false_positive_rate(cli.fpr)
        .build()?;
    let mut filter = BloomFilter::with_config(config)?;

    for item in &cli.inserts {
        if !filter.insert(item) {
            info!(item = %item, "filter is full, item not inserted");
        }
    }

    for item in &cli.queries {
        if filter.query(item) {
            println!("{item}: probably present");
        } else {
            println!("{item}: definitely absent");
        }
    }

    if cli.stats {
        println!("Filter statistics:");
        println!("  Capacity: {}", filter.capacity());
        println!("  False positive rate: {}", filter.false_positive_rate());
        println!(
            "  Bits: {} ({})",
            filter.bit_count(),
            bits2hr(filter.bit_count())
        );
        println!("  Hash rounds: {}", filter.hash_rounds());
        println!(
            "  Inserted: {}/{}",
            filter.inserted_count(),
            filter.capacity()
        );
        println!("  Fill ratio: {:.2}%", filter.fill_ratio() * 100.0);
    }

    Ok(())
}
