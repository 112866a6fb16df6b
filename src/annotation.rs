//! Leading-comment annotation extraction
//!
//! Annotations are `key: value` lines inside the comment block that opens a
//! file, e.g. `// CodeOwner: @team_owner`. Only the leading run is read: the
//! comment spans at the top of the file, separated by nothing but
//! whitespace. The first span with real code ends the run.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::span::{Span, SpanKind};

static ANNOTATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*):\s+(\S.*)$").expect("annotation pattern is valid")
});

/// A key/value fact taken from a leading comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Annotation {
    pub key: String,
    pub value: String,
    /// Start offset of the comment span the annotation came from
    pub offset: usize,
}

/// Extract annotations from the leading comment run of `spans`
///
/// `preamble` lists tokens that may open the first line before the comments
/// start (`<?php`, `#!`); such a line is skipped instead of ending the run.
/// Lines that do not look like `key: value` are ignored.
pub fn extract_leading_annotations(
    source: &[u8],
    spans: &[Span],
    preamble: &[&str],
) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    let mut first = true;

    for span in spans {
        match span.kind {
            SpanKind::LineComment | SpanKind::BlockComment | SpanKind::DocComment => {
                collect_from_comment(source, span, &mut annotations);
            }
            SpanKind::Code => {
                let text = String::from_utf8_lossy(span.bytes(source));
                let skippable = text.trim().is_empty() || (first && is_preamble(&text, preamble));
                if !skippable {
                    break;
                }
            }
            SpanKind::StringLiteral => break,
        }
        first = false;
    }

    annotations
}

fn is_preamble(text: &str, preamble: &[&str]) -> bool {
    let line = text.trim();
    !line.contains('\n') && preamble.iter().any(|token| line.starts_with(token))
}

fn collect_from_comment(source: &[u8], span: &Span, out: &mut Vec<Annotation>) {
    let body: Cow<'_, str> = String::from_utf8_lossy(span.body(source));

    for raw_line in body.lines() {
        let mut line = raw_line.trim_start();
        if span.kind != SpanKind::LineComment {
            line = line.trim_start_matches('*').trim_start();
        }

        if let Some(caps) = ANNOTATION_LINE.captures(line.trim_end()) {
            out.push(Annotation {
                key: caps[1].to_string(),
                value: caps[2].trim().to_string(),
                offset: span.start,
            });
        }
    }
}
