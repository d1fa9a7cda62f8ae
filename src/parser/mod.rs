//! Language-agnostic method extraction over tree-sitter syntax trees.
//!
//! This module provides:
//! - `Extractor`: the entry point turning source bytes into `ExtractedMethod`s
//! - `ProfileRegistry`: per-language grammar profiles, built once at startup
//! - The walker and resolvers that every profile shares
//!
//! Data flow: source bytes → tree-sitter parser → syntax tree → method nodes
//! (walker) → name + doc comment (resolvers) → `ExtractedMethod`.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Parser as TsParser};

use crate::language::Language;

pub mod error;
pub mod languages;
pub mod profile;
pub mod resolve;
pub mod walker;

pub use error::{ExtractError, ParseError};
pub use profile::{GrammarProfile, NameStrategy, ProfileConfig, ProfileRegistry};

/// A function or method pulled out of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMethod {
    /// The declared name
    pub name: String,
    /// Preceding comment or docstring, verbatim
    pub doc_comment: Option<String>,
    /// Verbatim source of the whole definition
    #[serde(rename = "source_code")]
    pub source_text: String,
    /// First line of the definition (0-indexed)
    pub start_line: usize,
    /// Last line of the definition (0-indexed, inclusive)
    pub end_line: usize,
}

/// Extracts methods from source using an injected profile registry.
///
/// `Extractor` is `Send + Sync`: share one across threads and call `parse`
/// concurrently. Each call builds its own tree-sitter parser.
#[derive(Debug)]
pub struct Extractor {
    registry: ProfileRegistry,
}

impl Extractor {
    pub fn new(registry: ProfileRegistry) -> Self {
        Self { registry }
    }

    /// Create an extractor over every built-in grammar profile.
    pub fn with_builtin_profiles() -> Result<Self, ExtractError> {
        Ok(Self::new(ProfileRegistry::builtin()?))
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Extract all named methods from `source`, in document order.
    ///
    /// Nested definitions are included after their enclosing definition.
    /// Method nodes whose name cannot be resolved are left out.
    pub fn parse(&self, source: &[u8], language: Language) -> Result<Vec<ExtractedMethod>, ExtractError> {
        let profile = self.registry.profile_for(language)?;
        let tree = parse_tree(profile, source)?;
        let methods = extract_methods(tree.root_node(), profile, source)?;
        tracing::debug!(
            language = %language,
            methods = methods.len(),
            "extracted methods"
        );
        Ok(methods)
    }

    /// Read a file and extract its methods, choosing the language by extension.
    pub fn parse_file(&self, path: &Path) -> anyhow::Result<Vec<ExtractedMethod>> {
        let language = Language::from_path(path);
        let source =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        self.parse(&source, language)
            .with_context(|| format!("failed to extract methods from {}", path.display()))
    }
}

/// Parse source bytes with the profile's grammar.
fn parse_tree(profile: &GrammarProfile, source: &[u8]) -> Result<tree_sitter::Tree, ParseError> {
    let mut parser = TsParser::new();
    parser.set_language(profile.grammar())?;
    parser.parse(source, None).ok_or(ParseError::NoTree)
}

/// Build an `ExtractedMethod` for every named method node under `root`.
fn extract_methods(
    root: Node<'_>,
    profile: &GrammarProfile,
    source: &[u8],
) -> Result<Vec<ExtractedMethod>, ParseError> {
    let mut methods = Vec::new();

    for node in walker::collect_method_nodes(root, profile) {
        let Some(name) = resolve::resolve_name(node, profile, source)? else {
            tracing::debug!(
                language = %profile.language(),
                start_line = node.start_position().row,
                end_line = node.end_position().row,
                "skipping {} without a resolvable name",
                node.kind()
            );
            continue;
        };
        let doc_comment = resolve::resolve_doc_comment(node, profile, source)?;

        methods.push(ExtractedMethod {
            name: name.to_string(),
            doc_comment: doc_comment.map(str::to_string),
            source_text: node.utf8_text(source)?.to_string(),
            start_line: node.start_position().row,
            end_line: node.end_position().row,
        });
    }

    Ok(methods)
}
