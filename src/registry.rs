//! Grammar registry
//!
//! Maps language tags, aliases and file extensions to grammar descriptors.
//! Registration happens once at startup through `&mut self`; afterwards the
//! registry is only read and can be shared across threads by reference.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{Result, ScanError};
use crate::grammar::{builtin, GrammarDescriptor};

static BUILTIN: Lazy<GrammarRegistry> = Lazy::new(GrammarRegistry::with_builtins);

/// Registered grammar descriptors
#[derive(Debug, Clone, Default)]
pub struct GrammarRegistry {
    grammars: HashMap<&'static str, GrammarDescriptor>,
    /// Lowercased tag or alias -> canonical tag
    tags: HashMap<String, &'static str>,
    /// Lowercased extension -> canonical tag
    extensions: HashMap<String, &'static str>,
}

impl GrammarRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in descriptor
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for grammar in builtin::ALL {
            if let Err(e) = registry.register(**grammar) {
                // Built-ins are covered by tests; skip rather than abort
                tracing::error!(language = grammar.name, error = %e, "built-in grammar rejected");
            }
        }
        registry
    }

    /// Process-wide registry of built-in descriptors, built on first use
    pub fn builtin() -> &'static GrammarRegistry {
        &BUILTIN
    }

    /// Add a descriptor after validating it
    pub fn register(&mut self, grammar: GrammarDescriptor) -> Result<()> {
        grammar.validate()?;

        let tag = grammar.name;
        let mut names = vec![tag.to_lowercase()];
        names.extend(grammar.aliases.iter().map(|a| a.to_lowercase()));
        for name in &names {
            if self.tags.contains_key(name) {
                return Err(ScanError::DuplicateLanguage { tag: name.clone() });
            }
        }

        let extensions: Vec<String> = grammar
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        for ext in &extensions {
            if let Some(owner) = self.extensions.get(ext) {
                return Err(ScanError::DuplicateExtension {
                    extension: ext.clone(),
                    owner: owner.to_string(),
                });
            }
        }

        for name in names {
            self.tags.insert(name, tag);
        }
        for ext in extensions {
            self.extensions.insert(ext, tag);
        }
        self.grammars.insert(tag, grammar);

        tracing::debug!(
            language = tag,
            aliases = grammar.aliases.len(),
            extensions = grammar.extensions.len(),
            "registered grammar"
        );
        Ok(())
    }

    /// Look up a descriptor by tag or alias, case-insensitively
    pub fn resolve(&self, tag: &str) -> Result<&GrammarDescriptor> {
        self.tags
            .get(&tag.trim().to_lowercase())
            .and_then(|canonical| self.grammars.get(canonical))
            .ok_or_else(|| ScanError::UnknownLanguage {
                tag: tag.to_string(),
            })
    }

    /// Look up a descriptor by file extension (with or without the dot)
    pub fn resolve_extension(&self, ext: &str) -> Result<&GrammarDescriptor> {
        self.extensions
            .get(&ext.trim_start_matches('.').to_lowercase())
            .and_then(|canonical| self.grammars.get(canonical))
            .ok_or_else(|| ScanError::UnknownLanguage {
                tag: format!(".{}", ext.trim_start_matches('.')),
            })
    }

    /// Look up a descriptor from a file path's extension
    pub fn resolve_path(&self, path: &Path) -> Result<&GrammarDescriptor> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ScanError::UnknownLanguage {
                tag: path.display().to_string(),
            })?;
        self.resolve_extension(ext)
    }

    /// Canonical tags in sorted order
    pub fn languages(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.grammars.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}
