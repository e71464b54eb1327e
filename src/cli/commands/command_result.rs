use std::path::PathBuf;

use crate::core::{MergeReport, MergeStats, SkipCounts};

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MergeSummary {
    pub source: PathBuf,
    pub exact_keys: usize,
    pub relaxed_keys: usize,
    /// Blocks skipped while indexing the source file.
    pub source_skipped: SkipCounts,
    pub targets: Vec<TargetSummary>,
    pub is_dry_run: bool,
}

impl MergeSummary {
    /// Match counts summed over all targets.
    pub fn totals(&self) -> MergeStats {
        self.targets
            .iter()
            .fold(MergeStats::default(), |mut acc, target| {
                acc.exact += target.report.stats.exact;
                acc.relaxed += target.report.stats.relaxed;
                acc.unmatched += target.report.stats.unmatched;
                acc
            })
    }
}

#[derive(Debug)]
pub struct TargetSummary {
    pub path: PathBuf,
    pub report: MergeReport,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tsmerge commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
