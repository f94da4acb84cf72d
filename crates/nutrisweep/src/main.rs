use std::path::PathBuf;

use clap::Parser;
use nutrisweep::{Format, Scenario, init_logging, render, run};

#[derive(Parser, Debug)]
#[command(name = "nutrisweep")]
#[command(about = "Tabulate demand and nutrient adequacy curves for a household scenario")]
struct Args {
    /// Path to the scenario YAML file
    scenario: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref(), &args.log_level)?;

    let scenario = Scenario::load(&args.scenario)?;
    let report = run(&scenario)?;
    println!("{}", render(&report, args.format)?);

    tracing::info!("Done");
    Ok(())
}
