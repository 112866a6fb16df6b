//! Lexical scanner
//!
//! A single forward pass over the input driven entirely by a
//! `GrammarDescriptor`. Open constructs live on an explicit stack of frames:
//!
//! - empty stack: code
//! - `Line` / `Block`: a comment, always the only frame
//! - `Str`: a string literal, either at the bottom or inside an interpolation
//! - `Interp`: an expression embedded in the `Str` below it
//!
//! The bottom frame decides the kind of the span being built, so everything
//! inside a string (interpolated expressions and the strings nested in them)
//! is string content. Comment markers are only recognized in code.
//!
//! The scan is total: it never fails on any byte sequence and always covers
//! the whole input. A construct still open at end of input is cut off there
//! and reported as `UnterminatedConstruct`.

use crate::error::{ConstructKind, ScanError};
use crate::grammar::{BlockCommentRule, GrammarDescriptor, InterpolationRule, LineCommentRule, StringRule};
use crate::span::{Delimiters, Span, SpanKind};

/// Longest escape sequence accepted inside a character literal (`\u{10FFFF}`)
const MAX_CHAR_ESCAPE: usize = 10;

/// Spans for one input plus the unterminated construct, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub spans: Vec<Span>,
    pub unterminated: Option<ScanError>,
}

/// Classify `source` with the rules of `grammar`
pub fn scan(source: &str, grammar: &GrammarDescriptor) -> ScanOutput {
    scan_bytes(source.as_bytes(), grammar)
}

/// Classify raw bytes; invalid UTF-8 is carried through as opaque content
pub fn scan_bytes(source: &[u8], grammar: &GrammarDescriptor) -> ScanOutput {
    let output = Scanner::new(source, grammar).run();
    tracing::trace!(
        language = grammar.name,
        bytes = source.len(),
        spans = output.spans.len(),
        unterminated = output.unterminated.is_some(),
        "scan complete"
    );
    output
}

#[derive(Debug, Clone, Copy)]
enum Frame<'g> {
    Line,
    Block {
        rule: &'g BlockCommentRule,
        nest_open: &'g str,
        depth: usize,
    },
    Str {
        rule: &'g StringRule,
    },
    Interp {
        rule: &'g InterpolationRule,
        depth: usize,
    },
}

impl Frame<'_> {
    fn construct(&self) -> Option<ConstructKind> {
        match self {
            Self::Line => None,
            Self::Block { .. } => Some(ConstructKind::BlockComment),
            Self::Str { .. } => Some(ConstructKind::StringLiteral),
            Self::Interp { .. } => Some(ConstructKind::Interpolation),
        }
    }
}

enum CommentMatch<'g> {
    Line(&'g LineCommentRule),
    Block(&'g BlockCommentRule),
}

struct Scanner<'s, 'g> {
    src: &'s [u8],
    grammar: &'g GrammarDescriptor,
    pos: usize,
    line: usize,
    column: usize,
    stack: Vec<Frame<'g>>,
    spans: Vec<Span>,

    // Span under construction
    start: usize,
    start_line: usize,
    start_column: usize,
    kind: SpanKind,
    open_len: usize,
}

impl<'s, 'g> Scanner<'s, 'g> {
    fn new(src: &'s [u8], grammar: &'g GrammarDescriptor) -> Self {
        Self {
            src,
            grammar,
            pos: 0,
            line: 1,
            column: 1,
            stack: Vec::new(),
            spans: Vec::new(),
            start: 0,
            start_line: 1,
            start_column: 1,
            kind: SpanKind::Code,
            open_len: 0,
        }
    }

    fn run(mut self) -> ScanOutput {
        while self.pos < self.src.len() {
            match self.stack.last().copied() {
                None => self.step_code(),
                Some(Frame::Line) => self.step_line(),
                Some(Frame::Block {
                    rule,
                    nest_open,
                    depth,
                }) => self.step_block(rule, nest_open, depth),
                Some(Frame::Str { rule }) => self.step_string(rule),
                Some(Frame::Interp { rule, depth }) => self.step_interpolation(rule, depth),
            }
        }

        let unterminated = self
            .stack
            .first()
            .and_then(|frame| frame.construct())
            .map(|kind| ScanError::UnterminatedConstruct {
                kind,
                offset: self.start,
            });

        self.flush(0);
        ScanOutput {
            spans: self.spans,
            unterminated,
        }
    }

    // =========================================================================
    // States
    // =========================================================================

    fn step_code(&mut self) {
        if let Some(found) = self.match_comment() {
            match found {
                CommentMatch::Line(rule) => {
                    let kind = if rule.doc {
                        SpanKind::DocComment
                    } else {
                        SpanKind::LineComment
                    };
                    self.open(kind, rule.marker.len(), Frame::Line);
                }
                CommentMatch::Block(rule) => {
                    let kind = if rule.doc {
                        SpanKind::DocComment
                    } else {
                        SpanKind::BlockComment
                    };
                    let frame = Frame::Block {
                        rule,
                        nest_open: self.nest_marker(rule),
                        depth: 1,
                    };
                    self.open(kind, rule.open.len(), frame);
                }
            }
            return;
        }

        if let Some(rule) = self.match_string() {
            self.open(SpanKind::StringLiteral, rule.open.len(), Frame::Str { rule });
            return;
        }

        self.advance_char();
    }

    fn step_line(&mut self) {
        match self.src[self.pos] {
            b'\n' | b'\r' => self.close(0),
            _ => self.advance_char(),
        }
    }

    fn step_block(&mut self, rule: &'g BlockCommentRule, nest_open: &'g str, depth: usize) {
        if self.at(rule.close) {
            self.advance(rule.close.len());
            if depth <= 1 {
                self.close(rule.close.len());
            } else {
                self.set_depth(depth - 1);
            }
        } else if rule.nested && self.at(nest_open) {
            self.advance(nest_open.len());
            self.set_depth(depth + 1);
        } else {
            self.advance_char();
        }
    }

    fn step_string(&mut self, rule: &'g StringRule) {
        if let Some(interp) = self.match_interpolation(rule) {
            let open = interp.open.len();
            if interp.doubled_is_literal && self.at_offset(open, interp.open) {
                self.advance(open * 2);
            } else {
                self.advance(open);
                self.stack.push(Frame::Interp {
                    rule: interp,
                    depth: 0,
                });
            }
            return;
        }

        let byte = self.src[self.pos];

        if rule.escape == Some(byte) {
            self.advance(1);
            // An escaped CRLF is one line continuation
            if self.at("\r\n") {
                self.advance(2);
            } else if self.pos < self.src.len() {
                self.advance_char();
            }
            return;
        }

        if self.at(rule.close) {
            let close = rule.close.len();
            if rule.doubled_close && self.at_offset(close, rule.close) {
                self.advance(close * 2);
            } else {
                self.advance(close);
                self.close(close);
            }
            return;
        }

        if !rule.multiline && (byte == b'\n' || byte == b'\r') {
            self.close(0);
            return;
        }

        self.advance_char();
    }

    fn step_interpolation(&mut self, rule: &'g InterpolationRule, depth: usize) {
        if self.at(rule.close) {
            self.advance(rule.close.len());
            if depth == 0 {
                self.stack.pop();
            } else {
                self.set_depth(depth - 1);
            }
            return;
        }

        if let Some(nest) = rule.nest_open {
            if self.at(nest) {
                self.advance(nest.len());
                self.set_depth(depth + 1);
                return;
            }
        }

        if let Some(inner) = self.match_string() {
            self.advance(inner.open.len());
            self.stack.push(Frame::Str { rule: inner });
            return;
        }

        self.advance_char();
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Longest comment marker at the cursor; a block marker wins a tie
    fn match_comment(&self) -> Option<CommentMatch<'g>> {
        let grammar = self.grammar;
        let mut best: Option<(usize, CommentMatch<'g>)> = None;

        for rule in grammar.block_comments {
            if !self.at(rule.open) {
                continue;
            }
            if rule.doc && self.doc_block_demoted(rule) {
                continue;
            }
            if best.as_ref().map_or(true, |(len, _)| rule.open.len() > *len) {
                best = Some((rule.open.len(), CommentMatch::Block(rule)));
            }
        }

        for rule in grammar.line_comments {
            if !self.at(rule.marker) {
                continue;
            }
            if !rule.unless_followed_by.is_empty()
                && self.at_offset(rule.marker.len(), rule.unless_followed_by)
            {
                continue;
            }
            if rule.doc && self.next_after_is(rule.marker, last_byte(rule.marker)) {
                continue;
            }
            if best.as_ref().map_or(true, |(len, _)| rule.marker.len() > *len) {
                best = Some((rule.marker.len(), CommentMatch::Line(rule)));
            }
        }

        best.map(|(_, found)| found)
    }

    /// `/***` and `/**/` are ordinary comments rather than doc comments
    fn doc_block_demoted(&self, rule: &BlockCommentRule) -> bool {
        self.next_after_is(rule.open, last_byte(rule.open))
            || self.next_after_is(rule.open, last_byte(rule.close))
    }

    /// Longest string opener at the cursor
    fn match_string(&self) -> Option<&'g StringRule> {
        let grammar = self.grammar;
        let mut best: Option<&'g StringRule> = None;

        for rule in grammar.strings {
            if !self.at(rule.open) {
                continue;
            }
            if rule.is_prefixed() && self.pos > 0 && is_word_byte(self.src[self.pos - 1]) {
                continue;
            }
            if rule.char_literal && !self.complete_char_literal(rule) {
                continue;
            }
            if best.map_or(true, |b| rule.open.len() > b.open.len()) {
                best = Some(rule);
            }
        }

        best
    }

    fn match_interpolation(&self, rule: &'g StringRule) -> Option<&'g InterpolationRule> {
        rule.interpolations
            .iter()
            .filter(|interp| self.at(interp.open))
            .max_by_key(|interp| interp.open.len())
    }

    /// Whether a whole one-character literal starts at the cursor
    fn complete_char_literal(&self, rule: &StringRule) -> bool {
        let body = self.pos + rule.open.len();
        let Some(&first) = self.src.get(body) else {
            return false;
        };
        if first == b'\n' || first == b'\r' || self.bytes_at(body, rule.close) {
            return false;
        }

        if rule.escape == Some(first) {
            let limit = (body + 1 + MAX_CHAR_ESCAPE).min(self.src.len());
            let mut i = body + 2;
            while i < limit {
                match self.src[i] {
                    b'\n' | b'\r' => return false,
                    _ if self.bytes_at(i, rule.close) => return true,
                    _ => i += 1,
                }
            }
            return false;
        }

        self.bytes_at(body + char_width(self.src, body), rule.close)
    }

    /// Shortest opener sharing `rule`'s close, used to count nesting so that
    /// a plain `/*` inside a `/**` doc comment also nests
    fn nest_marker(&self, rule: &'g BlockCommentRule) -> &'g str {
        self.grammar
            .block_comments
            .iter()
            .filter(|other| other.close == rule.close)
            .map(|other| other.open)
            .min_by_key(|open| open.len())
            .unwrap_or(rule.open)
    }

    fn at(&self, marker: &str) -> bool {
        self.bytes_at(self.pos, marker)
    }

    fn at_offset(&self, offset: usize, marker: &str) -> bool {
        self.bytes_at(self.pos + offset, marker)
    }

    fn bytes_at(&self, index: usize, marker: &str) -> bool {
        !marker.is_empty()
            && self
                .src
                .get(index..)
                .is_some_and(|rest| rest.starts_with(marker.as_bytes()))
    }

    fn next_after_is(&self, marker: &str, byte: Option<u8>) -> bool {
        match byte {
            Some(b) => self.src.get(self.pos + marker.len()) == Some(&b),
            None => false,
        }
    }

    // =========================================================================
    // Cursor and span bookkeeping
    // =========================================================================

    fn advance(&mut self, count: usize) {
        let end = (self.pos + count).min(self.src.len());
        for &byte in &self.src[self.pos..end] {
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if byte & 0xC0 != 0x80 {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    fn advance_char(&mut self) {
        let width = char_width(self.src, self.pos);
        self.advance(width);
    }

    fn set_depth(&mut self, value: usize) {
        match self.stack.last_mut() {
            Some(Frame::Block { depth, .. }) | Some(Frame::Interp { depth, .. }) => *depth = value,
            _ => {}
        }
    }

    /// Start a construct whose opening marker sits at the cursor
    fn open(&mut self, kind: SpanKind, marker_len: usize, frame: Frame<'g>) {
        self.flush(0);
        self.kind = kind;
        self.open_len = marker_len;
        self.stack.push(frame);
        self.advance(marker_len);
    }

    /// Pop the top frame; when it was the outermost construct, end its span
    /// at the cursor
    fn close(&mut self, close_len: usize) {
        self.stack.pop();
        if self.stack.is_empty() {
            self.flush(close_len);
            self.kind = SpanKind::Code;
            self.open_len = 0;
        }
    }

    /// Emit the span under construction (if non-empty) and start a new one
    /// at the cursor
    fn flush(&mut self, close_len: usize) {
        if self.pos > self.start {
            self.spans.push(Span {
                kind: self.kind,
                start: self.start,
                end: self.pos,
                line: self.start_line,
                column: self.start_column,
                delimiters: Delimiters {
                    open: self.open_len,
                    close: close_len,
                },
            });
        }
        self.start = self.pos;
        self.start_line = self.line;
        self.start_column = self.column;
    }
}

fn last_byte(marker: &str) -> Option<u8> {
    marker.as_bytes().last().copied()
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

/// Byte length of the UTF-8 sequence at `index`, never crossing a byte that
/// is not a continuation byte
fn char_width(src: &[u8], index: usize) -> usize {
    let Some(&lead) = src.get(index) else {
        return 0;
    };
    let expected = match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    };
    let mut width = 1;
    while width < expected
        && src
            .get(index + width)
            .is_some_and(|b| b & 0xC0 == 0x80)
    {
        width += 1;
    }
    width
}
