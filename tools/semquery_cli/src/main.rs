use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use semquery::{parser, validate_query_parameters, QueryParametersStrict};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "semquery")]
#[command(about = "Validate semantic layer query parameters into strict requests")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a YAML/JSON parameter file and print the strict request as JSON
    Validate {
        /// Parameter file
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn validate(file: &Path, pretty: bool) -> anyhow::Result<String> {
    let params = parser::parse_file(file)?;
    let strict = validate_query_parameters(params)
        .with_context(|| format!("invalid query parameters in '{}'", file.display()))?;

    let mode = match &strict {
        QueryParametersStrict::Adhoc(_) => "adhoc",
        QueryParametersStrict::SavedQuery(_) => "saved_query",
    };
    debug!(mode, order_by = strict.order_by().len(), "validated query parameters");

    let json = if pretty {
        serde_json::to_string_pretty(&strict)?
    } else {
        serde_json::to_string(&strict)?
    };
    Ok(json)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Validate { file, pretty } => match validate(&file, pretty) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}
