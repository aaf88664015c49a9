//! CLI entry point for the space-missions EDA tool.

use anyhow::{Result, anyhow};
use clap::Parser;
use mission_eda::{AnalysisConfig, Reporter, RunReport, loader};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory analysis of space-mission launch records",
    long_about = "Loads a space-missions CSV (with encoding fallback), prints\n\
                  structural diagnostics, and writes the chart set:\n\
                  missing-value heatmap, top companies, mission status\n\
                  distribution, yearly launch trend, success rate by company,\n\
                  and top rockets.\n\n\
                  EXAMPLES:\n  \
                  # Analyze into the current directory\n  \
                  mission-eda -i space_missions.csv\n\n  \
                  # Write charts elsewhere and keep a JSON run report\n  \
                  mission-eda -i space_missions.csv -o charts/ --emit-report"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long)]
    input: String,

    /// Output directory for chart images
    #[arg(short, long, default_value = ".")]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Write a JSON run report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet);

    // Print current working directory for debugging relative output paths
    println!(
        "Current working directory: {}",
        std::env::current_dir()?.display()
    );

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    println!("Loading dataset...");
    let mut loaded = loader::load_dataset(Path::new(&args.input))
        .map_err(|e| anyhow!("[{}] {}", e.error_code(), e))?;
    println!(
        "Successfully loaded dataset with {} encoding.",
        loaded.encoding.as_str()
    );
    info!("Dataset loaded: {:?}", loaded.df.shape());

    let config = AnalysisConfig::builder()
        .output_dir(&args.output)
        .build()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let reporter = Reporter::new(config).map_err(|e| anyhow!("[{}] {}", e.error_code(), e))?;
    let outcome = reporter
        .run(&mut loaded.df)
        .map_err(|e| anyhow!("[{}] {}", e.error_code(), e))?;

    if args.emit_report {
        let report = RunReport::build(&args.input, &loaded, &outcome);
        let stem = extract_file_stem(&args.input);
        report
            .write_to_file(Path::new(&args.output), &stem)
            .map_err(|e| anyhow!("[{}] {}", e.error_code(), e))?;
    }

    println!(
        "\nAnalysis complete! {} visualization image(s) saved.",
        outcome.rendered_count()
    );

    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}
