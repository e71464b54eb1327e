//! Structural extraction of messages from `.ts` documents.
//!
//! The scanner walks the document tag by tag and yields one [`MessageRecord`]
//! per complete `<message>` inside a named `<context>`. It never builds a
//! tree; it only remembers byte offsets, so callers can splice new text into
//! the original document without touching anything else.
//!
//! Comments, CDATA sections, processing instructions, and declarations are
//! consumed whole, and quoted attribute values are read as a unit, so a `>`
//! or `<` inside them never starts or ends a tag.

use std::{collections::VecDeque, sync::LazyLock};

use regex::{CaptureMatches, Captures, Regex};

use super::rewrite::Replacement;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<!--.*?-->|<!\[CDATA\[.*?\]\]>|<\?.*?\?>|<!(?:[^>"']|"[^"]*"|'[^']*')*>|<(/)?([A-Za-z_][\w.:-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(/)?>"#,
    )
    .unwrap()
});

const CONTEXT: &str = "context";
const NAME: &str = "name";
const MESSAGE: &str = "message";
const SOURCE: &str = "source";
const TRANSLATION: &str = "translation";

/// Byte range within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Where a message's translation lives in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSlot<'a> {
    /// Text between `<translation ...>` and `</translation>`.
    Content(Span),
    /// A self-closing `<translation .../>`; `attributes` is the raw text
    /// between the tag name and the closing `/>`.
    SelfClosing { tag: Span, attributes: &'a str },
}

impl TranslationSlot<'_> {
    /// Offset where the slot begins, used for line reporting.
    pub fn start(&self) -> usize {
        match self {
            TranslationSlot::Content(span) => span.start,
            TranslationSlot::SelfClosing { tag, .. } => tag.start,
        }
    }

    /// Build the edit that puts `text` into this slot.
    ///
    /// A self-closing tag is expanded into an open/close pair with its
    /// attributes kept as written.
    pub fn replace_with(&self, text: &str) -> Replacement {
        match self {
            TranslationSlot::Content(span) => Replacement::new(*span, text),
            TranslationSlot::SelfClosing { tag, attributes } => Replacement::new(
                *tag,
                format!(
                    "<{TRANSLATION}{}>{}</{TRANSLATION}>",
                    attributes.trim_end(),
                    text
                ),
            ),
        }
    }
}

/// One translatable message as found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord<'a> {
    /// Context name, trimmed.
    pub context: &'a str,
    /// Source text exactly as written, including inner whitespace.
    pub source: &'a str,
    /// Current translation content, raw.
    pub translation: &'a str,
    pub slot: TranslationSlot<'a>,
}

/// Blocks dropped during extraction because a required part was missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    /// `<context>` blocks without a `<name>`.
    pub unnamed_contexts: usize,
    /// `<message>` blocks without a `<source>` or `<translation>`, or left open.
    pub incomplete_messages: usize,
    /// `<context>` blocks never closed (or reopened before closing).
    pub unterminated_contexts: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.unnamed_contexts + self.incomplete_messages + self.unterminated_contexts
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Lazily extract message records from a document.
///
/// Records are yielded per context once its closing tag has been seen, in
/// document order.
pub fn extract(content: &str) -> Extractor<'_> {
    Extractor {
        content,
        tags: TAG_REGEX.captures_iter(content),
        ready: VecDeque::new(),
        context: None,
        skipped: SkipCounts::default(),
    }
}

/// Iterator returned by [`extract`].
pub struct Extractor<'a> {
    content: &'a str,
    tags: CaptureMatches<'static, 'a>,
    ready: VecDeque<MessageRecord<'a>>,
    context: Option<ContextBlock<'a>>,
    skipped: SkipCounts,
}

impl<'a> Extractor<'a> {
    /// Counts of blocks skipped so far. Complete once the iterator is drained.
    pub fn skipped(&self) -> SkipCounts {
        self.skipped
    }

    fn visit(&mut self, tag: Tag<'a>) {
        let Some(ctx) = self.context.as_mut() else {
            if let Tag::Open { name: CONTEXT, .. } = tag {
                self.context = Some(ContextBlock::default());
            }
            return;
        };

        if let Some(field) = ctx.field {
            match tag {
                Tag::Close { name, span } if name == field.kind.tag_name() => {
                    let text = &self.content[field.content_start..span.start];
                    ctx.finish_field(field, text, span);
                    return;
                }
                // A field never spans its enclosing message or context.
                Tag::Close {
                    name: MESSAGE | CONTEXT,
                    ..
                } => ctx.field = None,
                _ => return,
            }
        }

        match tag {
            Tag::Close { name: CONTEXT, .. } => {
                if let Some(ctx) = self.context.take() {
                    ctx.flush(&mut self.ready, &mut self.skipped);
                }
            }
            Tag::Open { name: CONTEXT, .. } => {
                self.skipped.unterminated_contexts += 1;
                *ctx = ContextBlock::default();
            }
            Tag::Open { name: MESSAGE, .. } => {
                if ctx.message.replace(MessageParts::default()).is_some() {
                    self.skipped.incomplete_messages += 1;
                }
            }
            Tag::Close { name: MESSAGE, .. } => {
                if let Some(message) = ctx.message.take() {
                    ctx.messages.push(message);
                }
            }
            Tag::Open {
                name: NAME, span, ..
            } if ctx.message.is_none() && ctx.name.is_none() => {
                ctx.field = Some(OpenField::new(Field::Name, span));
            }
            Tag::Open {
                name: SOURCE, span, ..
            } => {
                if ctx.message.as_ref().is_some_and(|m| m.source.is_none()) {
                    ctx.field = Some(OpenField::new(Field::Source, span));
                }
            }
            Tag::Empty { name: SOURCE, .. } => {
                if let Some(message) = ctx.message.as_mut()
                    && message.source.is_none()
                {
                    message.source = Some("");
                }
            }
            Tag::Open {
                name: TRANSLATION,
                span,
                ..
            } => {
                if ctx
                    .message
                    .as_ref()
                    .is_some_and(|m| m.translation.is_none())
                {
                    ctx.field = Some(OpenField::new(Field::Translation, span));
                }
            }
            Tag::Empty {
                name: TRANSLATION,
                span,
                attributes,
            } => {
                if let Some(message) = ctx.message.as_mut()
                    && message.translation.is_none()
                {
                    message.translation = Some((
                        "",
                        TranslationSlot::SelfClosing {
                            tag: span,
                            attributes,
                        },
                    ));
                }
            }
            _ => {}
        }
    }
}

impl<'a> Iterator for Extractor<'a> {
    type Item = MessageRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.ready.pop_front() {
                return Some(record);
            }
            let Some(caps) = self.tags.next() else {
                if self.context.take().is_some() {
                    self.skipped.unterminated_contexts += 1;
                }
                return None;
            };
            if let Some(tag) = Tag::from_captures(&caps) {
                self.visit(tag);
            }
        }
    }
}

impl std::fmt::Debug for Extractor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("ready", &self.ready.len())
            .field("in_context", &self.context.is_some())
            .field("skipped", &self.skipped)
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
enum Tag<'a> {
    Open {
        name: &'a str,
        attributes: &'a str,
        span: Span,
    },
    Close {
        name: &'a str,
        span: Span,
    },
    Empty {
        name: &'a str,
        attributes: &'a str,
        span: Span,
    },
}

impl<'a> Tag<'a> {
    /// Comments, CDATA, and declarations have no name group and yield `None`.
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        let name = caps.get(2)?.as_str();
        let span = Span::new(whole.start(), whole.end());
        let attributes = caps.get(3).map_or("", |m| m.as_str());

        Some(if caps.get(1).is_some() {
            Tag::Close { name, span }
        } else if caps.get(4).is_some() {
            Tag::Empty {
                name,
                attributes,
                span,
            }
        } else {
            Tag::Open {
                name,
                attributes,
                span,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Source,
    Translation,
}

impl Field {
    fn tag_name(self) -> &'static str {
        match self {
            Field::Name => NAME,
            Field::Source => SOURCE,
            Field::Translation => TRANSLATION,
        }
    }
}

/// An element whose text content is being captured.
#[derive(Debug, Clone, Copy)]
struct OpenField {
    kind: Field,
    content_start: usize,
}

impl OpenField {
    fn new(kind: Field, open_tag: Span) -> Self {
        Self {
            kind,
            content_start: open_tag.end,
        }
    }
}

#[derive(Debug, Default)]
struct MessageParts<'a> {
    source: Option<&'a str>,
    translation: Option<(&'a str, TranslationSlot<'a>)>,
}

#[derive(Debug, Default)]
struct ContextBlock<'a> {
    name: Option<&'a str>,
    messages: Vec<MessageParts<'a>>,
    message: Option<MessageParts<'a>>,
    field: Option<OpenField>,
}

impl<'a> ContextBlock<'a> {
    fn finish_field(&mut self, field: OpenField, text: &'a str, close: Span) {
        self.field = None;
        match field.kind {
            Field::Name => self.name = Some(text.trim()),
            Field::Source => {
                if let Some(message) = self.message.as_mut() {
                    message.source = Some(text);
                }
            }
            Field::Translation => {
                if let Some(message) = self.message.as_mut() {
                    let span = Span::new(field.content_start, close.start);
                    message.translation = Some((text, TranslationSlot::Content(span)));
                }
            }
        }
    }

    fn flush(self, ready: &mut VecDeque<MessageRecord<'a>>, skipped: &mut SkipCounts) {
        if self.message.is_some() {
            skipped.incomplete_messages += 1;
        }
        let Some(context) = self.name else {
            skipped.unnamed_contexts += 1;
            return;
        };

        for message in self.messages {
            match message {
                MessageParts {
                    source: Some(source),
                    translation: Some((translation, slot)),
                } => ready.push_back(MessageRecord {
                    context,
                    source,
                    translation,
                    slot,
                }),
                _ => skipped.incomplete_messages += 1,
            }
        }
    }
}
