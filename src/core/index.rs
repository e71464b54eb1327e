use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

use super::{
    normalize::normalize,
    scanner::{MessageRecord, SkipCounts, extract},
};

/// Translations keyed by context name, then source text.
///
/// Inserting an existing key overwrites the previous translation.
#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    contexts: HashMap<String, HashMap<String, String>>,
    len: usize,
}

impl TranslationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation, returning the one it replaced, if any.
    pub fn insert(&mut self, context: &str, source: String, translation: &str) -> Option<String> {
        let previous = self
            .contexts
            .entry(context.to_string())
            .or_default()
            .insert(source, translation.to_string());
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn get(&self, context: &str, source: &str) -> Option<&str> {
        self.contexts
            .get(context)
            .and_then(|messages| messages.get(source))
            .map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Result of a lookup against a [`SourceIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Found by the untouched source text.
    Exact(&'a str),
    /// Found only after whitespace normalization.
    Relaxed(&'a str),
}

/// The exact and relaxed indexes built from one reference document.
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    pub exact: TranslationIndex,
    pub relaxed: TranslationIndex,
    /// Blocks skipped while scanning the reference document.
    pub skipped: SkipCounts,
}

impl SourceIndex {
    /// Scan a whole document and index every message in it.
    pub fn from_document(content: &str) -> Self {
        let mut extractor = extract(content);
        let mut index = Self::default();
        for record in extractor.by_ref() {
            index.insert(&record);
        }
        index.skipped = extractor.skipped();
        index
    }

    /// Index one record under both its exact and its normalized key.
    pub fn insert(&mut self, record: &MessageRecord<'_>) {
        self.exact
            .insert(record.context, record.source.to_string(), record.translation);
        self.relaxed
            .insert(record.context, normalize(record.source), record.translation);
    }

    /// Look up a message, trying the exact key before the normalized one.
    pub fn lookup(&self, context: &str, source: &str) -> Option<Lookup<'_>> {
        if let Some(translation) = self.exact.get(context, source) {
            return Some(Lookup::Exact(translation));
        }
        self.relaxed
            .get(context, &normalize(source))
            .map(Lookup::Relaxed)
    }
}

/// Read a reference `.ts` file and index it.
pub fn index_file(path: &Path) -> Result<SourceIndex> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(SourceIndex::from_document(&content))
}
