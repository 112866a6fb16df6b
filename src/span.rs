//! Classified source regions and the per-file scan result

use std::fmt;

use serde::Serialize;

use crate::annotation::Annotation;
use crate::error::{Result, ScanError};

/// Lexical classification of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Code,
    LineComment,
    BlockComment,
    DocComment,
    StringLiteral,
}

impl SpanKind {
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            Self::LineComment | Self::BlockComment | Self::DocComment
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::LineComment => "line_comment",
            Self::BlockComment => "block_comment",
            Self::DocComment => "doc_comment",
            Self::StringLiteral => "string_literal",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte lengths of the opening and closing markers held inside a span
///
/// `close` is 0 for line comments and for constructs cut off by end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Delimiters {
    pub open: usize,
    pub close: usize,
}

/// A contiguous, classified region of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    /// Inclusive start byte offset
    pub start: usize,
    /// Exclusive end byte offset
    pub end: usize,
    /// 1-based line of `start`
    pub line: usize,
    /// 1-based column of `start`, counted in characters
    pub column: usize,
    pub delimiters: Delimiters,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Raw bytes covered by this span
    pub fn bytes<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.start..self.end]
    }

    /// Text covered by this span
    ///
    /// Spans never split a UTF-8 sequence when the source is valid UTF-8.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Bytes between the opening and closing markers
    pub fn body<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        let start = (self.start + self.delimiters.open).min(self.end);
        let end = self.end.saturating_sub(self.delimiters.close).max(start);
        &source[start..end]
    }
}

/// Everything learned from scanning one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Canonical tag of the grammar used
    pub language: &'static str,
    pub spans: Vec<Span>,
    pub annotations: Vec<Annotation>,
    /// Per-file problems found while scanning; spans are still complete
    pub errors: Vec<ScanError>,
}

impl ScanResult {
    /// No per-file errors were reported
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the first reported error into `Err`, for callers that reject
    /// degraded files outright
    pub fn into_checked(self) -> Result<Self> {
        match self.errors.first() {
            Some(err) => Err(err.clone()),
            None => Ok(self),
        }
    }

    /// Comment spans in document order
    pub fn comments(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|s| s.kind.is_comment())
    }

    pub fn spans_of(&self, kind: SpanKind) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.kind == kind)
    }

    /// Source with every comment span removed and the remaining spans
    /// joined verbatim
    ///
    /// Stripping can join a stray `'` in code with the text after a removed
    /// comment into a complete char literal (`'/**/"'` becomes `'"'`), so a
    /// rescan finds no comments only when constructs are separated from
    /// comments the way compilable source separates them.
    pub fn strip_comments(&self, source: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(source.len());
        for span in self.spans.iter().filter(|s| !s.kind.is_comment()) {
            out.extend_from_slice(span.bytes(source));
        }
        out
    }

    /// First annotation with the given key
    pub fn annotation(&self, key: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.key == key)
    }
}
