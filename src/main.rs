//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatsift::ChatsiftError;
use chatsift::cli::Args;
use chatsift::pipeline::Pipeline;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Console logging for library events. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    let total_start = Instant::now();
    let pipeline = Pipeline::new(args.to_config());
    let config = pipeline.config();

    println!("📦 chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", config.input_path().display());
    println!("💾 Output:  {}", config.output.display());
    println!(
        "👥 Keeping: {} & {}",
        config.participants.owner, config.participants.partner
    );
    println!();

    // Step 1: Load
    println!("⏳ Loading export...");
    let loaded = pipeline.load()?;
    if !loaded.found {
        println!("⚠️  Messages file not found!");
    }

    // Step 2: Filter
    println!("🔍 Filtering messages...");
    let (filtered, stats) = pipeline.filter(loaded.messages);
    println!(
        "   Found {} messages from {}'s chat",
        filtered.len(),
        config.participants.partner
    );

    // Step 3: Write
    println!("💾 Writing JSON...");
    pipeline.write(&filtered)?;
    println!("   Processed {} messages", filtered.len());

    println!();
    println!("✅ Done! Data saved to {}", config.output.display());

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Records:    {}", stats.total);
    println!(
        "   Kept:       {} ({:.1}%)",
        stats.kept,
        stats.retention_ratio()
    );
    println!("     {}: {}", config.participants.owner, stats.owner_count);
    println!("     {}: {}", config.participants.partner, stats.partner_count);
    println!("   Bots:       {}", stats.bots);
    println!("   Others:     {}", stats.outsiders);
    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
