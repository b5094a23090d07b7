// CrossTally CLI - reconcile a CSV export against a JSON export

mod exit_codes;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crosstally_recon::{
    run, CompareConfig, CompareInput, ComparisonResult, Document, ReconError, SourceKind,
};
use exit_codes::{EXIT_INVALID_CONFIG, EXIT_MISMATCH, EXIT_PARSE, EXIT_RUNTIME, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "ctally")]
#[command(about = "Reconcile CSV and JSON exports of the same records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a reconciliation from a TOML config file
    #[command(after_help = "\
Examples:
  ctally run compare.toml
  ctally run compare.toml --json
  ctally run compare.toml --output result.json --xlsx result.xlsx")]
    Run {
        /// Path to the config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary only
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write a two-sheet XLSX report (Details + Summary)
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Validate a config without running
    #[command(after_help = "\
Examples:
  ctally validate compare.toml")]
    Validate {
        /// Path to the config file
        config: PathBuf,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INVALID_CONFIG, message: msg.into(), hint: None }
    }

    fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }

    fn runtime(msg: impl Into<String>) -> Self {
        Self { code: EXIT_RUNTIME, message: msg.into(), hint: None }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, json, output, xlsx } => cmd_run(config, json, output, xlsx),
        Commands::Validate { config } => cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn load_config(config_path: &Path) -> Result<CompareConfig, CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| CliError::usage(format!("cannot read config: {e}")))?;
    CompareConfig::from_toml(&config_str).map_err(|e| CliError::config(e.to_string()))
}

/// Load both sources and the document feed, paths relative to the config
/// file's directory. Source parse failures are fatal and name the source —
/// reconciling against a partial source would report phantom mismatches.
fn load_input(config: &CompareConfig, base_dir: &Path) -> Result<CompareInput, CliError> {
    let source_err = |source: SourceKind, path: &Path, e: String| {
        CliError::parse(
            ReconError::SourceParse {
                source,
                message: format!("{}: {e}", path.display()),
            }
            .to_string(),
        )
    };

    let csv_path = base_dir.join(&config.sources.csv.file);
    let csv_rows = crosstally_io::csv::load_rows(&csv_path)
        .map_err(|e| source_err(SourceKind::Csv, &csv_path, e))?;

    let json_path = base_dir.join(&config.sources.json.file);
    let json_rows = crosstally_io::json::load_rows(&json_path)
        .map_err(|e| source_err(SourceKind::Json, &json_path, e))?;

    let documents = load_documents(config, base_dir)?;

    Ok(CompareInput { csv_rows, json_rows, documents })
}

fn load_documents(config: &CompareConfig, base_dir: &Path) -> Result<Vec<Document>, CliError> {
    let Some(ref docs) = config.documents else {
        return Ok(Vec::new());
    };

    if let Some(ref file) = docs.file {
        let path = base_dir.join(file);
        return crosstally_io::documents::load_feed(&path)
            .map_err(|e| CliError::parse(format!("document feed {}: {e}", path.display())));
    }

    // validate() guarantees dir is set when file is not
    let dir = docs.dir.as_ref().expect("validated documents config");
    let path = base_dir.join(dir);
    crosstally_io::documents::scan_dir(&path)
        .map_err(|e| CliError::parse(format!("document dir {}: {e}", path.display())))
}

fn print_summary(result: &ComparisonResult) {
    let s = &result.summary;
    eprintln!(
        "{}: {} keys — {} matched, {} mismatched; csv total {}, json total {} ({:.2}s)",
        result.meta.config_name,
        s.total_rows,
        s.matched,
        s.mismatched,
        s.total_csv_count,
        s.total_json_count,
        result.processing_time_seconds,
    );

    for category in &s.category_counts {
        eprintln!("  files containing '{}': {}", category.substring, category.count);
    }

    let m = &result.meta;
    if m.skipped_csv_rows > 0 || m.skipped_json_rows > 0 || m.skipped_documents > 0 {
        eprintln!(
            "skipped: {} csv row(s), {} json row(s), {} document(s)",
            m.skipped_csv_rows, m.skipped_json_rows, m.skipped_documents,
        );
    }
}

fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
    xlsx_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let input = load_input(&config, base_dir)?;
    let result = run(&config, &input).map_err(|e| CliError::runtime(e.to_string()))?;

    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::runtime(format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::runtime(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(ref path) = xlsx_file {
        crosstally_io::xlsx::export(&result, path)
            .map_err(|e| CliError::runtime(format!("cannot write xlsx: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    print_summary(&result);

    if result.summary.mismatched > 0 {
        return Err(CliError { code: EXIT_MISMATCH, message: "mismatches found".into(), hint: None });
    }

    Ok(())
}

fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    eprintln!(
        "valid: '{}' comparing {} against {}, {} categor{}",
        config.name,
        config.sources.csv.file,
        config.sources.json.file,
        config.categories.len(),
        if config.categories.len() == 1 { "y" } else { "ies" },
    );
    Ok(())
}
