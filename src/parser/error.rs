//! Error types for method extraction.

use thiserror::Error;

use crate::language::Language;

/// Errors reported by the extractor.
///
/// Two families exist: configuration errors (no usable grammar profile for
/// a language) and parse failures (the grammar rejected the input).
/// Neither is retried; callers decide whether to skip the file or abort.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(Language),
    #[error("invalid grammar profile for {language}: {reason}")]
    InvalidProfile { language: Language, reason: String },
    #[error("parse failure: {0}")]
    Parse(#[from] ParseError),
}

impl ExtractError {
    /// Returns true for errors caused by the profile table rather than the input.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ExtractError::UnsupportedLanguage(_) | ExtractError::InvalidProfile { .. }
        )
    }
}

/// Failures raised while turning source bytes into methods.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("parser produced no syntax tree")]
    NoTree,
    #[error("source is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
