//! Common utility functions shared across the codebase.

/// Line start offsets of a document, for O(log n) offset-to-line lookups.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Build the index. Line 1 starts at offset 0, line 2 after the first
    /// `'\n'`, and so on.
    pub fn new(content: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { starts }
    }

    /// 1-based line number of a byte offset: the number of newlines before
    /// it, plus one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsmerge::utils::LineIndex;
    ///
    /// let lines = LineIndex::new("a\nb\nc");
    /// assert_eq!(lines.line_of(0), 1);
    /// assert_eq!(lines.line_of(2), 2);
    /// assert_eq!(lines.line_of(4), 3);
    /// ```
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}

/// Pick the singular or plural form of a noun for a count.
pub fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
