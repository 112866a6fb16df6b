//! Public scan API
//!
//! `FileScanner` ties the pieces together for one input: input guards from
//! `ScanConfig`, grammar resolution, the lexical scan and leading-annotation
//! extraction. Every input is independent, so `scan_batch` fans out over
//! rayon's thread pool with the registry shared by reference.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::annotation::extract_leading_annotations;
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::grammar::GrammarDescriptor;
use crate::owner::owners_from_annotations;
use crate::registry::GrammarRegistry;
use crate::scanner::scan_bytes;
use crate::span::ScanResult;

/// How an input names its language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageHint {
    /// A tag or alias such as `"csharp"`
    Tag(String),
    /// A file path whose extension selects the grammar
    Path(PathBuf),
}

/// One input for `FileScanner::scan_batch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub language: LanguageHint,
    pub bytes: Vec<u8>,
}

impl SourceInput {
    pub fn tagged(language: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            language: LanguageHint::Tag(language.into()),
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            language: LanguageHint::Path(path.into()),
            bytes: bytes.into(),
        }
    }
}

/// Scans inputs against a registry with one configuration
#[derive(Debug, Clone)]
pub struct FileScanner<'r> {
    registry: &'r GrammarRegistry,
    config: ScanConfig,
}

impl<'r> FileScanner<'r> {
    pub fn new(registry: &'r GrammarRegistry) -> Self {
        Self::with_config(registry, ScanConfig::default())
    }

    pub fn with_config(registry: &'r GrammarRegistry, config: ScanConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan one input named by language tag
    pub fn scan(&self, language: &str, source: &[u8]) -> Result<ScanResult> {
        let grammar = self.registry.resolve(language)?;
        self.scan_with(grammar, source)
    }

    /// Scan one input, choosing the grammar from the path's extension
    pub fn scan_path(&self, path: &Path, source: &[u8]) -> Result<ScanResult> {
        let grammar = self.registry.resolve_path(path)?;
        self.scan_with(grammar, source)
    }

    /// Scan one input with an already resolved grammar
    pub fn scan_with(&self, grammar: &GrammarDescriptor, source: &[u8]) -> Result<ScanResult> {
        self.check_input(source)?;

        let output = scan_bytes(source, grammar);
        let annotations = extract_leading_annotations(source, &output.spans, grammar.preamble);

        let mut errors = Vec::new();
        if let Some(err) = output.unterminated {
            let tail = output.spans.last().map_or("none", |s| s.kind.name());
            tracing::warn!(language = grammar.name, tail, error = %err, "degraded scan");
            if self.config.strict {
                return Err(err);
            }
            errors.push(err);
        }

        Ok(ScanResult {
            language: grammar.name,
            spans: output.spans,
            annotations,
            errors,
        })
    }

    /// Scan independent inputs in parallel; results keep input order and a
    /// failing input does not affect the others
    pub fn scan_batch(&self, inputs: &[SourceInput]) -> Vec<Result<ScanResult>> {
        let results: Vec<Result<ScanResult>> = inputs
            .par_iter()
            .map(|input| match &input.language {
                LanguageHint::Tag(tag) => self.scan(tag, &input.bytes),
                LanguageHint::Path(path) => self.scan_path(path, &input.bytes),
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::debug!(inputs = inputs.len(), failed, "batch scan complete");
        results
    }

    /// Owners listed under the configured annotation key
    pub fn owners(&self, result: &ScanResult) -> Vec<String> {
        owners_from_annotations(&result.annotations, &self.config.owner_key)
    }

    fn check_input(&self, source: &[u8]) -> Result<()> {
        let limits = &self.config.limits;
        if source.len() > limits.max_input_bytes {
            return Err(ScanError::InputTooLarge {
                size: source.len(),
                limit: limits.max_input_bytes,
            });
        }

        let sniff = &source[..source.len().min(limits.binary_sniff_bytes)];
        if let Some(offset) = sniff.iter().position(|&b| b == 0) {
            return Err(ScanError::BinaryInput { offset });
        }

        Ok(())
    }
}
