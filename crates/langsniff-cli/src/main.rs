//! langsniff CLI - guess the language of untagged code samples

mod input;
mod output;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use input::Source;
use langsniff_core::config::{CONFIG_FILE_NAME, generate_schema};
use langsniff_core::{Classifier, ClassifierConfig, LanguageTag, RuleSet};
use output::Report;

#[derive(Parser)]
#[command(
    name = "langsniff",
    version,
    about = "Guess the language of untagged code samples",
    long_about = "langsniff runs an ordered battery of heuristics over each input and prints\n\
        the first language that matches, or `text` when nothing does.\n\n\
        Examples:\n  \
        langsniff nginx.conf docker/Dockerfile\n  \
        cat snippet | langsniff --explain\n  \
        langsniff --class \"language-yaml\" snippet.txt"
)]
struct Cli {
    /// Files to classify (reads stdin when none are given or for `-`)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Declared language; skips heuristics
    #[arg(long, value_name = "LANG", conflicts_with = "class")]
    hint: Option<LanguageTag>,

    /// HTML class attribute to read a declared language from (e.g. "language-toml")
    #[arg(long, value_name = "ATTR")]
    class: Option<String>,

    /// Path to config file (default: ./.langsniff.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured rule set
    #[arg(long, value_enum)]
    rule_set: Option<RuleSetArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Show which step decided each language
    #[arg(long)]
    explain: bool,

    /// List every language tag and exit
    #[arg(long)]
    list_languages: bool,

    /// Print the JSON schema for .langsniff.toml and exit
    #[arg(long)]
    config_schema: bool,

    /// Enable verbose logging (set log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RuleSetArg {
    Core,
    Extended,
}

impl From<RuleSetArg> for RuleSet {
    fn from(arg: RuleSetArg) -> Self {
        match arg {
            RuleSetArg::Core => RuleSet::Core,
            RuleSetArg::Extended => RuleSet::Extended,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when some input could not be read.
fn run(cli: &Cli) -> Result<bool> {
    let mut stdout = std::io::stdout().lock();

    if cli.list_languages {
        output::write_languages(&mut stdout, cli.format == OutputFormat::Json)?;
        return Ok(true);
    }
    if cli.config_schema {
        serde_json::to_writer_pretty(&mut stdout, &generate_schema())?;
        writeln!(stdout)?;
        return Ok(true);
    }

    let config = load_config(cli);
    let classifier = Classifier::from_config(&config);
    tracing::debug!(detectors = ?classifier.chain(), "classifier ready");

    let hint = cli
        .hint
        .or_else(|| cli.class.as_deref().and_then(|attr| config.resolve_hint(attr)));

    let sources = Source::from_args(&cli.files);
    let stdin = input::buffer_stdin(&sources)?;

    let reports: Vec<Report> = sources
        .par_iter()
        .map(|source| Report {
            name: source.display_name(),
            outcome: source
                .read(stdin.as_deref())
                .map(|sample| classifier.explain(Some(sample.as_str()), hint))
                .map_err(|e| format!("{:#}", e)),
        })
        .collect();

    match cli.format {
        OutputFormat::Human => output::write_human(&mut stdout, &reports, cli.explain)?,
        OutputFormat::Json => output::write_json(&mut stdout, &reports)?,
    }

    Ok(reports.iter().all(|report| report.outcome.is_ok()))
}

fn load_config(cli: &Cli) -> ClassifierConfig {
    let default_path = PathBuf::from(CONFIG_FILE_NAME);
    let path = cli
        .config
        .as_ref()
        .or_else(|| Path::new(CONFIG_FILE_NAME).is_file().then_some(&default_path));

    let (mut config, warning) = ClassifierConfig::load_or_default(path);
    if let Some(warning) = warning {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    for warning in config.validate() {
        eprintln!(
            "{} {}: {}",
            "warning:".yellow().bold(),
            warning.field,
            warning.message
        );
        if let Some(suggestion) = warning.suggestion {
            eprintln!("  {} {}", "help:".cyan(), suggestion);
        }
    }

    if let Some(rule_set) = cli.rule_set {
        config.set_rule_set(rule_set.into());
    }
    config
}
