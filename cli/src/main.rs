//! mint-auditor: checks and totals mint/burn transaction pairs read from JSON files.

mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use config::AuditorConfig;
use mint_auditor_utils::LogFormat;

#[derive(Parser)]
#[command(
    name = "mint-auditor",
    about = "Check and total mint/burn transaction pairs"
)]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "MINT_AUDITOR_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "MINT_AUDITOR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "MINT_AUDITOR_LOG_FORMAT")]
    log_format: Option<String>,

    /// Fail when any warning-level finding is reported.
    #[arg(long, global = true, env = "MINT_AUDITOR_STRICT")]
    strict: bool,

    /// Fail when any pair is still unconfirmed.
    #[arg(long, global = true, env = "MINT_AUDITOR_FAIL_ON_PENDING")]
    fail_on_pending: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Report leg-convention findings for every pair.
    Check {
        /// JSON files, each holding one pair or an array of pairs.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print mint and burn totals across all files as JSON.
    Summary {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<AuditorConfig> {
        let base = match &self.config {
            Some(path) => AuditorConfig::from_toml_file(path)?,
            None => AuditorConfig::default(),
        };
        Ok(AuditorConfig {
            strict: self.strict || base.strict,
            fail_on_pending: self.fail_on_pending || base.fail_on_pending,
            log_format: self.log_format.clone().unwrap_or(base.log_format),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_format: LogFormat = config
        .log_format
        .parse()
        .context("invalid log format")?;
    mint_auditor_utils::init_logging(log_format, &config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Check { files } => {
            let files = commands::load_files(files)?;
            let report = commands::check(&files, &mut out)?;
            if !report.passes(&config) {
                anyhow::bail!(
                    "check failed: {} warnings, {} pending (strict = {}, fail_on_pending = {})",
                    report.warnings,
                    report.pending,
                    config.strict,
                    config.fail_on_pending
                );
            }
        }
        Command::Summary { files } => {
            let files = commands::load_files(files)?;
            commands::summary(&files, &mut out)?;
        }
    }

    Ok(())
}
