use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{MergeReport, SourceIndex, merge_document};

/// A `.ts` file held in memory while translations are merged into it.
///
/// Only translation contents are rewritten; everything else in the file is
/// kept byte for byte.
pub struct TsEditor {
    file_path: PathBuf,
    content: String,
}

impl TsEditor {
    /// Open a `.ts` file for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Merge translations from `index` into the in-memory content.
    pub fn merge(&mut self, index: &SourceIndex) -> MergeReport {
        let (content, report) = merge_document(&self.content, index);
        self.content = content;
        report
    }

    /// Write the current content back to the file, replacing it in full.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.file_path, &self.content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }

    /// Get the current content as a string (for testing).
    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }
}
