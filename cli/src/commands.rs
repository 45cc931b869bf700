//! The `check` and `summary` subcommands.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use mint_auditor_transactions::{check_pair, parse_pairs, PairSummary, Severity, TransactionPair};

use crate::config::AuditorConfig;

/// Pairs decoded from one input file.
#[derive(Debug)]
pub struct PairFile {
    pub path: PathBuf,
    pub pairs: Vec<TransactionPair>,
}

/// Read and decode every file. The first unreadable or malformed file aborts.
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<PairFile>> {
    paths.iter().map(|path| load_file(path)).collect()
}

fn load_file(path: &Path) -> Result<PairFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let pairs =
        parse_pairs(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(file = %path.display(), pairs = pairs.len(), "loaded transaction pairs");
    Ok(PairFile {
        path: path.to_path_buf(),
        pairs,
    })
}

/// Tally of a `check` run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub pairs: usize,
    pub warnings: usize,
    pub infos: usize,
    pub pending: usize,
}

impl CheckReport {
    pub fn passes(&self, config: &AuditorConfig) -> bool {
        let strict_failure = config.strict && self.warnings > 0;
        let pending_failure = config.fail_on_pending && self.pending > 0;
        !strict_failure && !pending_failure
    }
}

/// Print one line per finding, then a totals line.
pub fn check(files: &[PairFile], out: &mut impl Write) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for file in files {
        for (index, pair) in file.pairs.iter().enumerate() {
            report.pairs += 1;
            if !pair.confirmed {
                report.pending += 1;
            }

            for finding in check_pair(pair) {
                let severity = finding.severity();
                match severity {
                    Severity::Warning => {
                        report.warnings += 1;
                        tracing::warn!(file = %file.path.display(), index, kind = %pair.kind, "{finding}");
                    }
                    Severity::Info => {
                        report.infos += 1;
                        tracing::debug!(file = %file.path.display(), index, kind = %pair.kind, "{finding}");
                    }
                }
                writeln!(
                    out,
                    "{}#{index} {} [{severity}] {finding}",
                    file.path.display(),
                    pair.kind
                )?;
            }
        }
    }

    writeln!(
        out,
        "{} pairs checked: {} warnings, {} info, {} pending",
        report.pairs, report.warnings, report.infos, report.pending
    )?;
    tracing::info!(
        pairs = report.pairs,
        warnings = report.warnings,
        pending = report.pending,
        "check complete"
    );
    Ok(report)
}

/// Total every file together and print the result as JSON.
pub fn summary(files: &[PairFile], out: &mut impl Write) -> Result<PairSummary> {
    let pairs: Vec<TransactionPair> = files
        .iter()
        .flat_map(|file| file.pairs.iter().cloned())
        .collect();
    let summary = PairSummary::from_pairs(&pairs)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(summary)
}
