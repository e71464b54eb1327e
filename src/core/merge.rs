use super::{
    index::{Lookup, SourceIndex},
    rewrite::apply_replacements,
    scanner::{SkipCounts, extract},
};
use crate::utils::LineIndex;

/// Match counts for one merged document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Messages found by exact source text, changed or not.
    pub exact: usize,
    /// Messages found only by normalized source text.
    pub relaxed: usize,
    /// Messages with no counterpart in the index.
    pub unmatched: usize,
}

/// A message that matched only after whitespace normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaxedMatch {
    /// 1-based line of the translation in the target document.
    pub line: usize,
    pub context: String,
}

/// What happened while merging one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub stats: MergeStats,
    pub relaxed_matches: Vec<RelaxedMatch>,
    /// Number of translation spans rewritten.
    pub replacements: usize,
    /// Blocks skipped while scanning the target document.
    pub skipped: SkipCounts,
}

/// Merge translations from `index` into `content`.
///
/// Exact matches only schedule an edit when the translation differs; relaxed
/// matches always do. Unmatched messages are left alone. Returns the
/// rewritten document and the report.
pub fn merge_document(content: &str, index: &SourceIndex) -> (String, MergeReport) {
    let lines = LineIndex::new(content);
    let mut extractor = extract(content);
    let mut replacements = Vec::new();
    let mut report = MergeReport::default();

    for record in extractor.by_ref() {
        match index.lookup(record.context, record.source) {
            Some(Lookup::Exact(translation)) => {
                if translation != record.translation {
                    replacements.push(record.slot.replace_with(translation));
                }
                report.stats.exact += 1;
            }
            Some(Lookup::Relaxed(translation)) => {
                report.relaxed_matches.push(RelaxedMatch {
                    line: lines.line_of(record.slot.start()),
                    context: record.context.to_string(),
                });
                replacements.push(record.slot.replace_with(translation));
                report.stats.relaxed += 1;
            }
            None => report.stats.unmatched += 1,
        }
    }

    report.skipped = extractor.skipped();
    report.replacements = replacements.len();
    (apply_replacements(content, replacements), report)
}
