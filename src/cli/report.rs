//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow tsmerge to be used as a library. Every
//! printer has a `*_to` variant writing to any `Write` so output can be tested.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, MergeSummary, TargetSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::SkipCounts;
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a command to stdout (or stderr for failures).
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Merge(summary) => print_merge_to(summary, verbose, &mut io::stdout().lock()),
        CommandSummary::Init(summary) if summary.created => {
            print_init_to(summary, &mut io::stdout().lock())
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stderr().lock()),
    }
}

/// Print a merge summary to a custom writer.
pub fn print_merge_to<W: Write>(summary: &MergeSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(writer, "Indexing {}...", summary.source.display());
    let _ = writeln!(
        writer,
        "Index built. Exact keys: {}, Relaxed keys: {}",
        summary.exact_keys, summary.relaxed_keys
    );
    if verbose {
        print_skipped(&summary.source_skipped, writer);
    }

    for target in &summary.targets {
        print_target(target, summary.is_dry_run, verbose, writer);
    }

    if summary.targets.len() > 1 {
        let totals = summary.totals();
        let _ = writeln!(
            writer,
            "{} Exact Matches: {}, Relaxed Matches: {}, Unmatched: {} across {} files",
            "Total:".bold(),
            totals.exact,
            totals.relaxed,
            totals.unmatched,
            summary.targets.len()
        );
    }

    if summary.is_dry_run {
        let _ = writeln!(
            writer,
            "Run without {} to write these changes.",
            "--dry-run".cyan()
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), "Done.".green());
    }
}

fn print_target<W: Write>(target: &TargetSummary, is_dry_run: bool, verbose: bool, writer: &mut W) {
    let report = &target.report;
    let path = target.path.display();

    let _ = writeln!(writer, "Processing {}...", path);
    for relaxed in &report.relaxed_matches {
        let _ = writeln!(
            writer,
            "{} at line {}: Context='{}'",
            "Relaxed match".yellow(),
            relaxed.line,
            relaxed.context
        );
    }
    if verbose {
        print_skipped(&report.skipped, writer);
    }

    let stats = &report.stats;
    let _ = writeln!(
        writer,
        "{} Exact Matches: {}, Relaxed Matches: {}, Unmatched: {}",
        "Stats:".bold(),
        stats.exact,
        stats.relaxed,
        stats.unmatched
    );

    if is_dry_run {
        let _ = writeln!(
            writer,
            "{} {} {} in {}",
            "Would replace".yellow().bold(),
            report.replacements,
            plural(report.replacements, "translation", "translations"),
            path
        );
    } else {
        if verbose {
            let _ = writeln!(
                writer,
                "  - replaced: {} {}",
                report.replacements,
                plural(report.replacements, "translation", "translations")
            );
        }
        let _ = writeln!(writer, "Writing updated content to {}...", path);
    }
}

fn print_skipped<W: Write>(skipped: &SkipCounts, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }
    let _ = writeln!(
        writer,
        "{} skipped {} malformed {}:",
        "note:".bold(),
        skipped.total(),
        plural(skipped.total(), "block", "blocks")
    );
    if skipped.unnamed_contexts > 0 {
        let _ = writeln!(
            writer,
            "  - context without name: {}",
            skipped.unnamed_contexts
        );
    }
    if skipped.incomplete_messages > 0 {
        let _ = writeln!(
            writer,
            "  - message without source or translation: {}",
            skipped.incomplete_messages
        );
    }
    if skipped.unterminated_contexts > 0 {
        let _ = writeln!(
            writer,
            "  - unterminated context: {}",
            skipped.unterminated_contexts
        );
    }
}

/// Print an init summary to a custom writer.
pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}
