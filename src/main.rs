use clap::Parser;
use console::style;
use std::path::PathBuf;

use csvconv::{ConversionConfig, ConversionEngine, ConvertResult, CsvSource, LogLevel};

/// CSV Converter
#[derive(Parser, Debug)]
#[command(name = "csvconv")]
#[command(about = "Convert CSV data into JSON and XML with validation")]
#[command(version = "0.1.0")]
struct CliArgs {
    /// Source CSV file
    csv: PathBuf,

    /// One or more output formats (e.g. json xml)
    #[arg(required = true)]
    formats: Vec<String>,

    /// Name of the output files, without extension
    #[arg(long, default_value = "output")]
    output_name: String,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Stop on any validation violation instead of dropping bad records
    #[arg(long)]
    strict: bool,

    /// Sort records by a field before encoding
    #[arg(long)]
    sort_key: Option<String>,

    /// Diagnostic verbosity
    #[arg(long, value_enum, default_value = "notset")]
    log: LogLevel,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = CliArgs::parse();

    if let Err(err) = run(&args) {
        eprintln!("{} {}", style("✗").red(), err.user_message());
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> ConvertResult<()> {
    let mut config = ConversionConfig::new()
        .with_output_name(&args.output_name)
        .with_pretty(args.pretty)
        .with_strict(args.strict)
        .with_log_level(args.log)
        .with_quiet(args.quiet);
    if let Some(key) = &args.sort_key {
        config = config.with_sort_key(key);
    }

    let engine = ConversionEngine::new(config)?;
    let source = CsvSource::File(args.csv.clone());
    let report = engine.run(&source, &args.formats)?;

    if !args.quiet {
        println!("{} {}", style("✓").green(), report.summary());
    }
    Ok(())
}
