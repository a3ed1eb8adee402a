//! The `check` command: scan many files in parallel and report counts.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use cmmc_lex::LexerConfig;
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::common::{scan_file, ScanOutcome};
use crate::error::{CmmtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to scan
    pub files: Vec<PathBuf>,
    /// Worker threads
    pub jobs: u32,
    /// Print per-kind token counts
    pub summary: bool,
    /// Colored diagnostics
    pub color: bool,
    /// Whether verbose output is enabled
    pub verbose: bool,
}

/// Result of checking a single file.
#[derive(Debug)]
struct FileReport {
    path: PathBuf,
    errors: usize,
    warnings: usize,
    rendered: String,
    kinds: IndexMap<&'static str, usize>,
}

impl FileReport {
    fn from_outcome(path: PathBuf, outcome: &ScanOutcome, color: bool) -> Self {
        Self {
            path,
            errors: outcome.error_count(),
            warnings: outcome.warning_count(),
            rendered: outcome.render_diagnostics(color),
            kinds: count_kinds(outcome),
        }
    }

    fn status_line(&self) -> String {
        format!(
            "{}: {} error(s), {} warning(s)",
            self.path.display(),
            self.errors,
            self.warnings
        )
    }
}

/// Token counts per kind name, in first-seen order.
fn count_kinds(outcome: &ScanOutcome) -> IndexMap<&'static str, usize> {
    let mut kinds = IndexMap::new();
    for token in outcome.content_tokens() {
        *kinds.entry(token.kind.name()).or_insert(0) += 1;
    }
    kinds
}

/// Fold per-file counts into one table, keeping first-seen order across files.
fn merge_kinds<'a>(
    reports: impl IntoIterator<Item = &'a IndexMap<&'static str, usize>>,
) -> IndexMap<&'static str, usize> {
    let mut total = IndexMap::new();
    for kinds in reports {
        for (name, count) in kinds {
            *total.entry(*name).or_insert(0) += count;
        }
    }
    total
}

fn format_summary(kinds: &IndexMap<&'static str, usize>) -> String {
    let mut out = String::new();
    for (name, count) in kinds {
        let _ = writeln!(out, "{:<14} {}", name, count);
    }
    out
}

/// Run the check command.
pub fn run_check(args: CheckArgs, lexer_config: LexerConfig) -> Result<()> {
    let start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs as usize)
        .build()?;

    // `collect` on an indexed parallel iterator keeps input order.
    let results: Vec<Result<FileReport>> = pool.install(|| {
        args.files
            .par_iter()
            .map(|path| {
                let outcome = scan_file(path, lexer_config)?;
                Ok(FileReport::from_outcome(path.clone(), &outcome, args.color))
            })
            .collect()
    });

    let total = results.len();
    let mut failed = 0;
    let mut reports = Vec::with_capacity(total);
    for result in results {
        match result {
            Ok(report) => {
                eprint!("{}", report.rendered);
                println!("{}", report.status_line());
                if report.errors > 0 {
                    failed += 1;
                }
                reports.push(report);
            }
            Err(err) => {
                warn!("{}", err);
                failed += 1;
            }
        }
    }

    if args.summary {
        print!("{}", format_summary(&merge_kinds(reports.iter().map(|r| &r.kinds))));
    }

    debug!(jobs = args.jobs, files = total, failed, "check done");
    if args.verbose {
        info!("Checked {} file(s) in {:?}", total, start.elapsed());
    }

    if failed > 0 {
        return Err(CmmtError::CheckFailed { failed, total });
    }
    Ok(())
}
