//! Check command - pre-flight validation of a price table file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use brasindice_core::BrasindiceParser;

use super::{load_config, read_table_file};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Input file
    #[arg(required = true)]
    input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CheckArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let file_size = fs::metadata(&args.input)?.len();
    let content = read_table_file(&args.input)?;

    let report = BrasindiceParser::with_config(config).validate(&content, file_size);

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        let mark = if report.is_valid {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("{} {}", mark, report.message);
        println!("  lines:     {}", report.row_count);
        println!("  bad lines: {}", report.error_count);
        println!("  size:      {:.1} KB", report.file_size_kb);
        println!("  estimate:  {}s", report.estimated_duration_seconds);
    }

    if !report.is_valid {
        anyhow::bail!("validation failed: {}", report.message);
    }

    Ok(())
}
