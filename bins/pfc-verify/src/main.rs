//! pfc-verify - Registry search and verification for PFC
//!
//! Fuzzy lookup over approved-house and verified-seller registry files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use pfc_directory::{rank_scored, RankOptions, ScoreMode};

mod output;
mod registry;

use output::Status;

#[derive(Parser)]
#[command(name = "pfc-verify")]
#[command(about = "Search and verify PFC registry files")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked fuzzy search over a registry
    Search {
        /// Query text: a name, a partial name, or a code
        query: String,

        /// Path to the registry JSON file
        #[arg(short, long)]
        directory: PathBuf,

        /// How the secondary field is matched
        #[arg(long, value_enum, default_value = "name")]
        mode: Mode,

        /// Only consider records carrying this category tag
        #[arg(long)]
        category: Option<String>,

        /// Records must score strictly below this threshold
        #[arg(long, default_value_t = pfc_directory::DEFAULT_MAX_SCORE)]
        max_score: f64,

        /// Maximum number of results
        #[arg(short, long, default_value_t = pfc_directory::DEFAULT_MAX_RESULTS)]
        limit: usize,
    },

    /// Look up the single best match and report verification status
    Check {
        /// Query text: a name, a partial name, or a code
        query: String,

        /// Path to the registry JSON file
        #[arg(short, long)]
        directory: PathBuf,

        /// How the secondary field is matched
        #[arg(long, value_enum, default_value = "code")]
        mode: Mode,

        /// Only consider records carrying this category tag
        #[arg(long)]
        category: Option<String>,
    },

    /// Check a registry file for malformed entries
    Validate {
        /// Path to the registry JSON file
        #[arg(short, long)]
        directory: PathBuf,
    },
}

/// Secondary-field matching behavior.
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Secondary is a person's name: a weak, discounted signal
    Name,
    /// Secondary is a verification code: matched exactly
    Code,
}

impl From<Mode> for ScoreMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Name => ScoreMode::PrimaryWeighted,
            Mode::Code => ScoreMode::ExactSecondary,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pfc_verify=debug,pfc_directory=debug")
            .init();
    }

    let result = match cli.command {
        Commands::Search { query, directory, mode, category, max_score, limit } => {
            run_search(&query, &directory, mode, category, max_score, limit, &cli.format)
        }
        Commands::Check { query, directory, mode, category } => {
            run_check(&query, &directory, mode, category, &cli.format)
        }
        Commands::Validate { directory } => run_validate(&directory, &cli.format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            Status::error(&format!("{e:#}"));
            ExitCode::from(2)
        }
    }
}

fn run_search(
    query: &str,
    directory: &std::path::Path,
    mode: Mode,
    category: Option<String>,
    max_score: f64,
    limit: usize,
    format: &str,
) -> anyhow::Result<ExitCode> {
    let records = registry::load(directory)?;
    let options = RankOptions {
        mode: mode.into(),
        max_score,
        max_results: limit,
        category,
        ..RankOptions::default()
    };

    let matches = rank_scored(query, &records, &options);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(ExitCode::SUCCESS);
    }

    if matches.is_empty() {
        Status::warning("No matches. Check spelling or try a shorter part of the name.");
        return Ok(ExitCode::from(1));
    }

    Status::header(&format!("Matches for \"{query}\""));
    for m in &matches {
        output::print_match(m.record);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check(
    query: &str,
    directory: &std::path::Path,
    mode: Mode,
    category: Option<String>,
    format: &str,
) -> anyhow::Result<ExitCode> {
    let records = registry::load(directory)?;
    let options = RankOptions {
        mode: mode.into(),
        max_results: 1,
        category,
        ..RankOptions::default()
    };

    let top = rank_scored(query, &records, &options).into_iter().next();

    if format == "json" {
        match &top {
            Some(m) => println!("{}", serde_json::to_string_pretty(&m)?),
            None => println!("{{\"found\": false}}"),
        }
        return Ok(if top.is_some() { ExitCode::SUCCESS } else { ExitCode::from(1) });
    }

    match top {
        Some(m) => {
            Status::success(&output::verified_card(m.record));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            Status::warning("Not in the registry. Check spelling or search by code.");
            Ok(ExitCode::from(1))
        }
    }
}

fn run_validate(directory: &std::path::Path, format: &str) -> anyhow::Result<ExitCode> {
    let records = registry::load_lenient(directory)?;
    let report = registry::audit(&records);

    if format == "json" {
        let summary = serde_json::json!({
            "records": records.len(),
            "empty_primary": report.empty_primary,
            "duplicate_secondary": report
                .duplicate_secondary
                .iter()
                .map(|(value, indices)| serde_json::json!({"value": value, "indices": indices}))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(if report.is_clean() { ExitCode::SUCCESS } else { ExitCode::from(1) });
    }

    for index in &report.empty_primary {
        Status::error(&format!("record {index} has an empty primary label"));
    }
    for (value, indices) in &report.duplicate_secondary {
        Status::warning(&format!(
            "secondary value \"{value}\" appears in records {indices:?}"
        ));
    }

    if report.is_clean() {
        Status::success(&format!("{} records OK", records.len()));
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
