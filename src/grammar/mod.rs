//! Grammar Descriptors
//!
//! Each supported language is described by a `GrammarDescriptor`: plain data
//! listing its comment markers, string-literal forms and the interpolation
//! delimiters scoped to each string form. The scanner in `scanner.rs` reads
//! nothing but this data, so there is no per-language code path.
//!
//! # Adding a New Language
//!
//! 1. Add a new `GrammarDescriptor` static in `builtin.rs`
//!    (or build one at startup in the host application)
//! 2. Fill in comment, string and interpolation rules
//! 3. Register it with `GrammarRegistry::register`, which validates it

pub mod builtin;

use crate::error::{Result, ScanError};

/// Single-line comment marker such as `//` or `#`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCommentRule {
    pub marker: &'static str,

    /// Comments opened by this marker are documentation comments
    pub doc: bool,

    /// The marker does not open a comment when immediately followed by
    /// this sequence (PHP `#[` attributes). Empty means no exclusion.
    pub unless_followed_by: &'static str,
}

impl LineCommentRule {
    pub const fn plain(marker: &'static str) -> Self {
        Self {
            marker,
            doc: false,
            unless_followed_by: "",
        }
    }

    pub const fn doc(marker: &'static str) -> Self {
        Self {
            marker,
            doc: true,
            unless_followed_by: "",
        }
    }
}

/// Delimited comment such as `/* ... */`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCommentRule {
    pub open: &'static str,
    pub close: &'static str,

    /// Inner `open` markers increase the depth that `close` must unwind
    /// (Swift, Kotlin, Rust)
    pub nested: bool,

    pub doc: bool,
}

impl BlockCommentRule {
    pub const fn new(open: &'static str, close: &'static str, nested: bool, doc: bool) -> Self {
        Self {
            open,
            close,
            nested,
            doc,
        }
    }
}

/// Expression delimiters inside a string form, e.g. `${` / `}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationRule {
    pub open: &'static str,
    pub close: &'static str,

    /// Occurrences of this sequence inside the expression must be balanced
    /// by `close` before `close` ends the interpolation
    /// e.g. `{` for `${ {a: 1} }`
    pub nest_open: Option<&'static str>,

    /// `open` written twice is literal string content (C# `{{`)
    pub doubled_is_literal: bool,
}

impl InterpolationRule {
    pub const fn new(open: &'static str, close: &'static str, nest_open: Option<&'static str>) -> Self {
        Self {
            open,
            close,
            nest_open,
            doubled_is_literal: false,
        }
    }
}

/// One string-literal form of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRule {
    /// Opening sequence, including any prefix (`@"`, `$"`, `r#"`, `f"`)
    pub open: &'static str,
    pub close: &'static str,

    /// Escape byte, `None` for raw/verbatim forms
    pub escape: Option<u8>,

    /// `close` written twice is content (C# verbatim `""`)
    pub doubled_close: bool,

    /// When false an unescaped line break ends the literal
    pub multiline: bool,

    /// The form holds exactly one character or one escape sequence
    /// (`'a'`, `'\n'`); an opener that is not followed by a complete literal
    /// is ordinary code, which keeps Rust lifetimes out of strings
    pub char_literal: bool,

    pub interpolations: &'static [InterpolationRule],
}

impl StringRule {
    /// Escaped string closed by the same quote
    pub const fn quoted(quote: &'static str, multiline: bool) -> Self {
        Self {
            open: quote,
            close: quote,
            escape: Some(b'\\'),
            doubled_close: false,
            multiline,
            char_literal: false,
            interpolations: &[],
        }
    }

    /// Escaped string whose opener carries a prefix (`$"`, `f'`, `b"`) and
    /// which closes at the bare `quote`
    pub const fn quoted_prefixed(open: &'static str, quote: &'static str, multiline: bool) -> Self {
        Self {
            open,
            ..Self::quoted(quote, multiline)
        }
    }

    /// Raw string without escapes
    pub const fn raw(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close,
            escape: None,
            doubled_close: false,
            multiline: true,
            char_literal: false,
            interpolations: &[],
        }
    }

    /// Single-character literal delimited by `'`
    pub const fn char_literal() -> Self {
        Self {
            open: "'",
            close: "'",
            escape: Some(b'\\'),
            doubled_close: false,
            multiline: false,
            char_literal: true,
            interpolations: &[],
        }
    }

    pub const fn with_interpolations(mut self, interpolations: &'static [InterpolationRule]) -> Self {
        self.interpolations = interpolations;
        self
    }

    pub const fn with_doubled_close(mut self) -> Self {
        self.doubled_close = true;
        self
    }

    /// Whether the opener starts with an identifier character, in which
    /// case it only matches at a word boundary (`r"` but not `bar"`)
    pub fn is_prefixed(&self) -> bool {
        self.open
            .as_bytes()
            .first()
            .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    }

    /// Whether the opener is more than a repeated quote character, e.g.
    /// `$"` or `r#"` as opposed to `"` or `"""`
    pub fn has_prefix(&self) -> bool {
        let bytes = self.open.as_bytes();
        bytes.iter().any(|b| *b != bytes[0])
    }
}

/// Lexical rule set for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarDescriptor {
    /// Canonical lowercase language tag
    pub name: &'static str,

    /// Alternative tags accepted by `GrammarRegistry::resolve`
    pub aliases: &'static [&'static str],

    /// File extensions without the leading dot
    pub extensions: &'static [&'static str],

    pub line_comments: &'static [LineCommentRule],
    pub block_comments: &'static [BlockCommentRule],
    pub strings: &'static [StringRule],

    /// Tokens allowed to open the first line ahead of the leading comment
    /// run, e.g. `<?php` or `#!`
    pub preamble: &'static [&'static str],
}

impl GrammarDescriptor {
    /// Check the unambiguity and closure invariants
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| ScanError::InvalidDescriptor {
            tag: self.name.to_string(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("empty language tag".to_string()));
        }
        if self.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(invalid("empty alias".to_string()));
        }

        let mut openers: Vec<&'static str> = Vec::new();

        for rule in self.line_comments {
            if rule.marker.is_empty() {
                return Err(invalid("empty line comment marker".to_string()));
            }
            openers.push(rule.marker);
        }

        for rule in self.block_comments {
            if rule.open.is_empty() || rule.close.is_empty() {
                return Err(invalid(format!(
                    "block comment {:?} has an empty delimiter",
                    rule.open
                )));
            }
            if rule.nested && rule.open == rule.close {
                return Err(invalid(format!(
                    "nested block comment {:?} cannot close with its own opener",
                    rule.open
                )));
            }
            openers.push(rule.open);
        }

        for rule in self.strings {
            if rule.open.is_empty() || rule.close.is_empty() {
                return Err(invalid(format!(
                    "string form {:?} has an empty delimiter",
                    rule.open
                )));
            }
            if rule.close == rule.open && (rule.is_prefixed() || rule.has_prefix()) {
                return Err(invalid(format!(
                    "prefixed string form {:?} cannot close with its own opener",
                    rule.open
                )));
            }
            if let Some(escape) = rule.escape {
                if rule.close.as_bytes()[0] == escape {
                    return Err(invalid(format!(
                        "string form {:?} closes with its escape character",
                        rule.open
                    )));
                }
            }
            for interp in rule.interpolations {
                if interp.open.is_empty() || interp.close.is_empty() {
                    return Err(invalid(format!(
                        "interpolation in {:?} has an empty delimiter",
                        rule.open
                    )));
                }
                if interp.open == rule.close {
                    return Err(invalid(format!(
                        "interpolation in {:?} opens with the closing quote",
                        rule.open
                    )));
                }
                if interp.nest_open.is_some_and(|n| n.is_empty() || n == interp.close) {
                    return Err(invalid(format!(
                        "interpolation {:?} has an unusable nesting marker",
                        interp.open
                    )));
                }
            }
            openers.push(rule.open);
        }

        for (i, a) in openers.iter().enumerate() {
            if openers[i + 1..].contains(a) {
                return Err(invalid(format!("opener {:?} is declared twice", a)));
            }
        }

        Ok(())
    }

    /// Whether any comment or string rule is declared at all
    pub fn is_empty(&self) -> bool {
        self.line_comments.is_empty() && self.block_comments.is_empty() && self.strings.is_empty()
    }
}
