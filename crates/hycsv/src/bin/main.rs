//! hycsv command-line interface

use clap::{Parser, Subcommand};
use hycsv::cli::output::{self, OutputFormat};
use hycsv::cli::{LoadConfig, inspect, query, validate};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// hycsv command-line tool
#[derive(Parser)]
#[command(name = "hycsv")]
#[command(author, version, about = "Inspect and query column-typed CSV tables", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Resolver options file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a table's columns and row count
    Inspect {
        /// Table file
        file: PathBuf,

        /// The second line declares column types
        #[arg(short, long)]
        typed: bool,

        /// Output format (json, pretty, table)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },

    /// Print the rows whose key column equals a value
    Query {
        /// Table file
        file: PathBuf,

        /// Key column name
        #[arg(short, long)]
        key: String,

        /// Value to match
        #[arg(short, long)]
        equals: String,

        /// The second line declares column types
        #[arg(short, long)]
        typed: bool,

        /// Output format (json, pretty, table)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },

    /// Check that every entry converts to its column's declared type
    Validate {
        /// Typed table file
        file: PathBuf,

        /// Strict mode (warnings as errors)
        #[arg(short, long)]
        strict: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    init_logging(cli.verbose);

    let load = |typed: bool| LoadConfig {
        config: cli.config.clone(),
        typed,
        delimiter: cli.delimiter,
    };

    let result = match cli.command {
        Commands::Inspect {
            ref file,
            typed,
            ref format,
        } => inspect::inspect(inspect::InspectConfig {
            file: file.clone(),
            load: load(typed),
            format: OutputFormat::parse(format),
            output_file: cli.output.clone(),
        }),

        Commands::Query {
            ref file,
            ref key,
            ref equals,
            typed,
            ref format,
        } => query::query(query::QueryConfig {
            file: file.clone(),
            load: load(typed),
            key: key.clone(),
            equals: equals.clone(),
            format: OutputFormat::parse(format),
            output_file: cli.output.clone(),
        }),

        Commands::Validate { ref file, strict } => validate::validate(validate::ValidateConfig {
            file: file.clone(),
            load: load(true),
            strict,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
