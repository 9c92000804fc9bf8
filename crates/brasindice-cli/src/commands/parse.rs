//! Parse command - process a single price table file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use brasindice_core::{BrasindiceParser, ParseResult, ReferenceItemPayload};

use super::{load_config, read_table_file};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Emit reference item payloads as JSON instead of the parse result
    #[arg(long)]
    payloads: bool,

    /// Fail when any line is rejected
    #[arg(long)]
    strict: bool,

    /// Skip the pre-flight structural check
    #[arg(long)]
    no_preflight: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let file_size = fs::metadata(&args.input)?.len();
    let content = read_table_file(&args.input)?;
    let parser = BrasindiceParser::with_config(config);

    if !args.no_preflight {
        let report = parser.validate(&content, file_size);
        if !report.is_valid {
            anyhow::bail!("pre-flight check failed: {}", report.message);
        }
        debug!(
            "pre-flight: {} lines, ~{}s",
            report.row_count, report.estimated_duration_seconds
        );
    }

    let result = parser.parse(&content);

    // Format output
    let output = if args.payloads {
        let payloads: Vec<ReferenceItemPayload> =
            result.rows.iter().map(ReferenceItemPayload::from).collect();
        serde_json::to_string(&payloads)?
    } else {
        format_result(&result, args.format)?
    };

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    print_summary(&result);
    debug!("Total processing time: {:?}", start.elapsed());

    if args.strict && !result.success {
        anyhow::bail!("{} lines rejected", result.stats.errors);
    }

    Ok(())
}

fn print_summary(result: &ParseResult) {
    eprintln!(
        "{} {} rows parsed, {} rejected",
        if result.success {
            style("✓").green()
        } else {
            style("!").yellow()
        },
        result.stats.parsed,
        result.stats.errors
    );

    for error in result.errors.iter().take(5) {
        eprintln!("  - line {}: {}", error.line, error.message);
    }
    if result.errors.len() > 5 {
        eprintln!("  ... and {} more", result.errors.len() - 5);
    }
}

pub fn format_result(result: &ParseResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ParseResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "external_code",
        "product_name",
        "presentation",
        "concentration",
        "quantity",
        "ean",
        "tiss",
        "tuss",
        "manufacturer_code",
        "manufacturer_name",
        "category",
        "pf",
        "unit_pf",
        "pmc",
        "unit_pmc",
        "dispensavel",
    ])?;

    for row in &result.rows {
        wtr.write_record([
            row.external_code.as_str(),
            row.product_name.as_str(),
            row.presentation.as_deref().unwrap_or(""),
            row.concentration.as_deref().unwrap_or(""),
            &fmt_opt_number(row.quantity),
            row.ean.as_deref().unwrap_or(""),
            row.tiss.as_deref().unwrap_or(""),
            row.tuss.as_deref().unwrap_or(""),
            row.manufacturer_code.as_str(),
            row.manufacturer_name.as_deref().unwrap_or(""),
            row.category.as_deref().unwrap_or(""),
            &fmt_opt_number(row.pf),
            &fmt_opt_number(row.unit_pf),
            &fmt_opt_number(row.pmc),
            &fmt_opt_number(row.unit_pmc),
            if row.extra.dispensavel { "S" } else { "N" },
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ParseResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Lines:    {}\n", result.stats.total));
    output.push_str(&format!("Parsed:   {}\n", result.stats.parsed));
    output.push_str(&format!("Rejected: {}\n", result.stats.errors));
    output.push_str(&format!(
        "Status:   {}\n",
        if result.success { "clean" } else { "has rejects" }
    ));

    if !result.errors.is_empty() {
        output.push('\n');
        output.push_str("Rejected lines:\n");
        for error in &result.errors {
            output.push_str(&format!("  {} - {}\n", error.line, error.message));
        }
    }

    output
}

fn fmt_opt_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
