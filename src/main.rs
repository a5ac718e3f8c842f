//! polyedge: edge lengths and perimeter of a closed polygon.
//!
//! Usage:
//! ```text
//! polyedge '[{x:0,y:0},{x:3,y:0},{x:3,y:4}]'
//! polyedge --input points.json --format json
//! cat points.json | polyedge --strict
//! polyedge --sample
//! polyedge --print-sample > points.json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use polyedge::input::sample_input;
use polyedge::report::Report;
use polyedge::{Calculator, CalculatorConfig};

/// Compute the edge lengths and perimeter of a closed polygon
#[derive(Parser, Debug)]
#[command(name = "polyedge")]
#[command(version)]
#[command(about = "Edge lengths and perimeter of a closed 2D polygon", long_about = None)]
struct Cli {
    /// Points as a JSON array of {x, y} objects; read from stdin when omitted
    #[arg(conflicts_with_all = ["input", "sample"])]
    points: Option<String>,

    /// Read points from a file
    #[arg(short, long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Use the built-in sample triangle (0,0), (3,0), (3,4)
    #[arg(long)]
    sample: bool,

    /// Print the sample input and exit
    #[arg(long)]
    print_sample: bool,

    /// Only accept strict JSON
    #[arg(long)]
    strict: bool,

    /// Decimal places for edge lengths (0-15)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=15))]
    decimals: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Label prefixed to error messages
    #[arg(long, default_value = polyedge::config::DEFAULT_ERROR_LABEL)]
    error_label: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for polyedge.
    // Override with RUST_LOG (e.g. RUST_LOG=polyedge=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyedge=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.print_sample {
        println!("{}", sample_input());
        return Ok(ExitCode::SUCCESS);
    }

    let text = read_points(&cli)?;
    let config = CalculatorConfig::new()
        .with_decimals(cli.decimals)
        .with_lenient(!cli.strict)
        .with_error_label(cli.error_label);
    let result = Calculator::new(config).compute(&text);

    match cli.format {
        Format::Text if result.is_ok() => println!("{result}"),
        Format::Text => eprintln!("{result}"),
        Format::Json => {
            let json = serde_json::to_string_pretty(&Report::from(&result))
                .context("failed to serialize report")?;
            println!("{json}");
        }
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_points(cli: &Cli) -> Result<String> {
    if cli.sample {
        return Ok(sample_input());
    }
    if let Some(points) = &cli.points {
        return Ok(points.clone());
    }
    if let Some(path) = &cli.input {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read points from stdin")?;
    Ok(text)
}
