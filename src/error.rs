//! Error types for codeowner-scanner

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Kind of construct left open at end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructKind {
    BlockComment,
    StringLiteral,
    Interpolation,
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BlockComment => "block comment",
            Self::StringLiteral => "string literal",
            Self::Interpolation => "interpolation",
        };
        f.write_str(name)
    }
}

/// Main error type for codeowner-scanner operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ScanError {
    #[error("Unknown language: {tag}")]
    UnknownLanguage { tag: String },

    #[error("Language already registered: {tag}")]
    DuplicateLanguage { tag: String },

    #[error("Extension .{extension} already claimed by {owner}")]
    DuplicateExtension { extension: String, owner: String },

    #[error("Invalid grammar descriptor {tag}: {reason}")]
    InvalidDescriptor { tag: String, reason: String },

    #[error("Unterminated {kind} starting at byte {offset}")]
    UnterminatedConstruct { kind: ConstructKind, offset: usize },

    #[error("Input of {size} bytes exceeds the {limit} byte limit")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Input looks binary (NUL byte at offset {offset})")]
    BinaryInput { offset: usize },

    #[error("Invalid owner {token:?}: {reason}")]
    InvalidOwner { token: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error at {path}: {message}")]
    Io { path: PathBuf, message: String },
}

impl ScanError {
    /// Whether the error belongs to a single file's content rather than to
    /// registry setup or configuration
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::UnknownLanguage { .. }
                | Self::UnterminatedConstruct { .. }
                | Self::InputTooLarge { .. }
                | Self::BinaryInput { .. }
        )
    }
}

/// Result type alias for codeowner-scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
