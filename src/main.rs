//! Buybox-Parser main entry point
//!
//! This is the command-line interface for the Buybox-Parser offer extractor.

use buybox_parser::challenge::detect_challenge;
use buybox_parser::config::{load_config_with_hash, Config, LocaleConfig, OrphanPolicy, ParserConfig};
use buybox_parser::fragment::{load_fragments, read_fragments, Fragment};
use buybox_parser::output::{print_statistics, write_report, OutputFormat};
use buybox_parser::{parse_report, BuyboxError};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Buybox-Parser: structured offers from scraped buybox text
///
/// Reads the visible text fragments of a listing's buybox (a JSON array of
/// {label, text} objects in document order) and prints one offer record per
/// product condition.
#[derive(Parser, Debug)]
#[command(name = "buybox-parser")]
#[command(version = "1.0.0")]
#[command(about = "Structured offers from scraped buybox text", long_about = None)]
struct Cli {
    /// JSON file of buybox fragments ("-" reads stdin)
    #[arg(value_name = "FRAGMENTS", required_unless_present = "dry_run")]
    fragments: Option<PathBuf>,

    /// Path to TOML locale configuration file
    #[arg(short, long, value_name = "PATH", conflicts_with = "locale")]
    config: Option<PathBuf>,

    /// Built-in locale preset: en or fr [default: en]
    #[arg(short, long, value_name = "NAME")]
    locale: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Drop offer data seen before any condition instead of failing
    #[arg(long)]
    skip_orphans: bool,

    /// Print parse statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Validate the configuration and print its marker table without parsing
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match resolve_config(&cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.skip_orphans {
        config.parser.orphan_policy = OrphanPolicy::Skip;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    match handle_parse(&cli, &config, config_hash) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("{}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so that a report written to stdout stays parseable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("buybox_parser=info,warn"),
            1 => EnvFilter::new("buybox_parser=debug,info"),
            2 => EnvFilter::new("buybox_parser=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or builds one from a locale preset
fn resolve_config(cli: &Cli) -> Result<(Config, Option<String>), BuyboxError> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
        let (config, hash) = load_config_with_hash(path)?;
        tracing::info!("Configuration loaded successfully (hash: {})", hash);
        return Ok((config, Some(hash)));
    }

    let name = cli.locale.as_deref().unwrap_or("en");
    let locale = LocaleConfig::preset(name)?;
    tracing::debug!("Using built-in locale preset '{}'", locale.name);
    Ok((
        Config {
            locale,
            parser: ParserConfig::default(),
        },
        None,
    ))
}

/// Handles the --dry-run mode: shows the marker table that would be used
fn handle_dry_run(config: &Config) {
    let locale = &config.locale;

    println!("=== Buybox-Parser Dry Run ===\n");

    println!("Locale: {}", locale.name);
    println!("\nCondition Markers:");
    println!("  New: {:?} -> {:?}", locale.new_marker, locale.new_label);
    println!(
        "  Used: {:?} (grade after {:?})",
        locale.used_marker, locale.grade_delimiter
    );

    println!("\nPrice:");
    println!("  Currency symbol: {:?}", locale.currency_symbol);
    println!("  Thousands separator: {:?}", locale.thousands_separator);
    println!("  Ignored characters: {:?}", locale.ignored_chars);

    println!("\nDelivery:");
    println!("  Keyword: {:?}", locale.delivery_keyword);
    println!("  Free marker: {:?}", locale.free_marker);
    println!("  Expedited marker: {:?}", locale.expedited_marker);
    println!("  Months: {}", locale.months.join(", "));

    println!("\nOther Markers:");
    println!("  Free returns: {:?}", locale.returns_marker);
    println!("  Ships from: {:?}", locale.ship_from_marker);
    println!("  Sold by: {:?}", locale.sold_by_marker);
    println!(
        "  In stock: {:?} -> {:?}",
        locale.in_stock_marker, locale.in_stock_label
    );
    match &locale.challenge_marker {
        Some(marker) => println!("  Challenge page: {:?}", marker),
        None => println!("  Challenge page: (detection disabled)"),
    }

    println!(
        "\nOrphan fragments: {}",
        match config.parser.orphan_policy {
            OrphanPolicy::Reject => "reject",
            OrphanPolicy::Skip => "skip",
        }
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the main parse operation
fn handle_parse(cli: &Cli, config: &Config, config_hash: Option<String>) -> Result<(), BuyboxError> {
    let source = cli.fragments.as_deref().unwrap_or(Path::new("-"));
    let fragments = read_input(source)?;
    tracing::info!("Read {} fragments", fragments.len());

    if let Some((index, fragment)) = detect_challenge(&fragments, &config.locale) {
        return Err(BuyboxError::ChallengeDetected {
            index,
            label: fragment.label.clone(),
        });
    }

    let report = parse_report(&fragments, config, config_hash)?;

    write_report(&report, cli.format, cli.output.as_deref())?;

    if cli.stats {
        print_statistics(&report.stats);
    }

    Ok(())
}

fn read_input(source: &Path) -> Result<Vec<Fragment>, BuyboxError> {
    if source == Path::new("-") {
        tracing::debug!("Reading fragments from stdin");
        Ok(read_fragments(io::stdin().lock())?)
    } else {
        Ok(load_fragments(source)?)
    }
}
