//! Command line entry point for the river crossing CNF encoder

use anyhow::{Context, Result};
use clap::Parser;
use river_crossing_cnf::{
    config::{CliOverrides, Settings},
    utils::{ColorOutput, PuzzleFormatter},
    write_cnf, CnfEncoder,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "river_crossing_cnf")]
#[command(about = "Encode the wolf, rabbit and carrot river crossing puzzle as DIMACS CNF")]
#[command(version = "0.1.0")]
struct Cli {
    /// Number of crossings in the plan
    steps: usize,

    /// Output CNF file
    output: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write encoding statistics as JSON to this file
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = encode_command(cli) {
        eprintln!("{}", ColorOutput::error(&format!("❌ {:#}", error)));
        std::process::exit(1);
    }
}

fn encode_command(cli: Cli) -> Result<()> {
    let mut settings = match cli.config {
        Some(ref config_path) => Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?,
        None => Settings::default(),
    };

    settings.merge_with_cli(&CliOverrides {
        steps: Some(cli.steps),
        output_path: Some(cli.output),
        statistics_file: cli.stats,
    });

    if cli.verbose {
        println!("Configuration:");
        println!("  Steps: {}", settings.encoding.steps);
        println!("  Output: {}", settings.output.path.display());
        println!();

        let encoder = CnfEncoder::new(settings.encoding.steps)?;
        println!("{}", PuzzleFormatter::format_states(encoder.states()));
        println!("{}", PuzzleFormatter::format_transitions(encoder.transitions()));
    }

    println!("{}", ColorOutput::info("🧮 Generating CNF encoding..."));
    let start_time = Instant::now();
    let encoding = write_cnf(&settings)?;

    println!("{}", ColorOutput::success(&format!(
        "✅ Wrote {} clauses over {} variables to {} in {:.3}s",
        encoding.statistics.total_clauses,
        encoding.statistics.total_variables,
        settings.output.path.display(),
        start_time.elapsed().as_secs_f64()
    )));

    if cli.verbose {
        println!("\n{}", encoding.statistics);
    }

    Ok(())
}
