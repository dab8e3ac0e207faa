//! Argument parsing and the solve pipeline.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use knapforge::{
    load_config, Catalogue, CatalogueError, CatalogueListing, ConfigError, KnapsackError,
    SolveReport, Solver, SolverConfig,
};
use thiserror::Error;
use tracing::info;

/// Configuration file read from the working directory when `--config` is
/// not given.
const DEFAULT_CONFIG: &str = "solver.toml";

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalogue file with one `name,value,weight,image` record per line
    #[arg(long)]
    pub catalogue: PathBuf,

    /// Maximum total weight
    #[arg(long, allow_negative_numbers = true)]
    pub capacity: i64,

    /// Solver configuration (TOML or YAML)
    ///
    /// Without this flag `solver.toml` is used if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List the catalogue items whose name contains this text
    /// (case-insensitive)
    ///
    /// The listing is printed before the report. The solve always covers
    /// the whole catalogue.
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Errors reported to the user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Knapsack(#[from] KnapsackError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Loads the catalogue, optionally lists the entries matching `--filter`,
/// solves the whole catalogue, and writes the report to `out`.
pub fn run<W: Write>(args: &Args, mut out: W) -> Result<(), CliError> {
    let config = resolve_config(args)?;

    let catalogue = Catalogue::from_path(&args.catalogue)?;
    info!(event = "catalogue_ready", entries = catalogue.len());

    if let Some(query) = &args.filter {
        let matches = catalogue.filter_by_name(query);
        writeln!(out, "Items matching '{query}':")?;
        CatalogueListing::new(&matches).write(&mut out)?;
        writeln!(out)?;
    }

    let result = Solver::with_config(config).solve(&catalogue.items(), args.capacity)?;
    SolveReport::new(&result.solution, args.capacity).write(&mut out)?;
    if !result.is_optimal() {
        writeln!(out)?;
        writeln!(out, "Search stopped early; the selection may not be optimal.")?;
    }
    out.flush()?;
    Ok(())
}

fn resolve_config(args: &Args) -> Result<SolverConfig, CliError> {
    match &args.config {
        Some(path) => {
            let is_yaml = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
                });
            let config = if is_yaml {
                SolverConfig::from_yaml_file(path)?
            } else {
                SolverConfig::load(path)?
            };
            Ok(config)
        }
        None => Ok(load_config(DEFAULT_CONFIG)),
    }
}
