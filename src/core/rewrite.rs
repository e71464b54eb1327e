use super::scanner::Span;

/// Text to put in place of a span of the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub span: Span,
    pub text: String,
}

impl Replacement {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }
}

/// Apply all replacements to `content` in a single pass.
///
/// Edits are applied right to left (by descending start offset), so every
/// span still refers to the original document when it is used. Spans must not
/// overlap.
pub fn apply_replacements(content: &str, mut replacements: Vec<Replacement>) -> String {
    if replacements.is_empty() {
        return content.to_string();
    }

    replacements.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut parts: Vec<&str> = Vec::with_capacity(replacements.len() * 2 + 1);
    let mut cursor = content.len();
    for replacement in &replacements {
        parts.push(&content[replacement.span.end..cursor]);
        parts.push(&replacement.text);
        cursor = replacement.span.start;
    }
    parts.push(&content[..cursor]);

    parts.into_iter().rev().collect()
}
