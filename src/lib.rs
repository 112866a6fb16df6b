//! codeowner-scanner: multi-grammar lexical scanner for ownership annotations
//!
//! This library partitions source text into code, string-literal and comment
//! spans using per-language grammar descriptors, then reads `key: value`
//! annotations (such as `CodeOwner: @team`) from the file's leading comment
//! block. Comment markers inside strings and interpolated expressions are
//! never mistaken for comments, and quotes inside comments never open strings.
//!
//! # Supported Languages
//!
//! - C#, Kotlin, Swift
//! - JavaScript, TypeScript
//! - PHP
//! - C, C++, Java, Go, Rust
//! - Python
//!
//! Further languages are added by registering a `GrammarDescriptor`.
//!
//! # Example
//!
//! ```
//! use codeowner_scanner::{scan_source, GrammarRegistry, SpanKind};
//!
//! let source = "// CodeOwner: @web_team\nconst greeting = `Hello, ${name} // not a comment`;\n";
//! let result = scan_source(GrammarRegistry::builtin(), "javascript", source)?;
//!
//! assert_eq!(result.annotations[0].value, "@web_team");
//! assert_eq!(result.spans_of(SpanKind::LineComment).count(), 1);
//! # Ok::<(), codeowner_scanner::ScanError>(())
//! ```

pub mod annotation;
pub mod config;
pub mod error;
pub mod grammar;
pub mod owner;
pub mod pipeline;
pub mod registry;
pub mod scanner;
pub mod span;

// Re-export commonly used types
pub use annotation::{extract_leading_annotations, Annotation};
pub use config::{LimitsConfig, ScanConfig};
pub use error::{ConstructKind, Result, ScanError};
pub use grammar::{BlockCommentRule, GrammarDescriptor, InterpolationRule, LineCommentRule, StringRule};
pub use owner::{is_valid_owner, owners_from_annotations, parse_owner_list, parse_protect, DEFAULT_OWNER_KEY};
pub use pipeline::{FileScanner, LanguageHint, SourceInput};
pub use registry::GrammarRegistry;
pub use scanner::{scan, scan_bytes, ScanOutput};
pub use span::{Delimiters, ScanResult, Span, SpanKind};

/// Resolve `language` in `registry`, scan `source` and extract its leading
/// annotations
///
/// An unterminated construct does not fail the call; it is reported in
/// `ScanResult::errors` next to the complete span list.
pub fn scan_source(registry: &GrammarRegistry, language: &str, source: &str) -> Result<ScanResult> {
    let grammar = registry.resolve(language)?;
    let output = scan(source, grammar);
    let annotations = extract_leading_annotations(source.as_bytes(), &output.spans, grammar.preamble);

    Ok(ScanResult {
        language: grammar.name,
        spans: output.spans,
        annotations,
        errors: output.unterminated.into_iter().collect(),
    })
}
