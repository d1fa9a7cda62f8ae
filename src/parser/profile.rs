//! Grammar profiles: which syntax-tree node types make up a method.
//!
//! A profile is pure data. Adding a language means adding a profile, never
//! touching the walker or the resolvers.

use std::collections::HashMap;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor};

use super::error::ExtractError;
use super::languages;
use crate::language::Language;

/// Capture name the docstring query must define.
pub const DOCSTRING_CAPTURE: &str = "docstring";

/// How the declared name is found under a method node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// The first direct child of type `name_node_type` holds the name.
    Direct,
    /// The first direct child of type `name_node_type` is a declarator;
    /// its first child of type `identifier` holds the name (C family).
    DeclaratorIndirect { identifier: &'static str },
}

/// Static description of a grammar profile.
#[derive(Clone)]
pub struct ProfileConfig {
    /// Language tag this profile serves
    pub language: Language,
    /// The tree-sitter grammar
    pub grammar: tree_sitter::Language,
    /// Node type of a function/method definition
    pub method_node_type: &'static str,
    /// Node type holding the name (or the declarator wrapping it)
    pub name_node_type: &'static str,
    /// How to reach the name from the method node
    pub name_strategy: NameStrategy,
    /// Node types that count as a preceding doc comment
    pub comment_node_types: &'static [&'static str],
    /// Query locating an in-body docstring; must capture `@docstring`
    pub docstring_query: Option<&'static str>,
}

/// Compiled docstring query.
pub struct DocstringLocator {
    query: Query,
    capture_index: u32,
}

impl DocstringLocator {
    fn new(config: &ProfileConfig, source: &str) -> Result<Self, ExtractError> {
        let query = Query::new(&config.grammar, source).map_err(|e| ExtractError::InvalidProfile {
            language: config.language,
            reason: format!("docstring query: {}", e),
        })?;
        let capture_index = query
            .capture_index_for_name(DOCSTRING_CAPTURE)
            .ok_or_else(|| ExtractError::InvalidProfile {
                language: config.language,
                reason: format!("docstring query has no @{} capture", DOCSTRING_CAPTURE),
            })?;
        Ok(Self {
            query,
            capture_index,
        })
    }

    /// Return the first docstring node belonging to `method`.
    ///
    /// Matches must start at `method` itself, so docstrings of nested
    /// definitions are never attributed to the enclosing one.
    pub fn locate<'tree>(&self, method: Node<'tree>, source: &[u8]) -> Option<Node<'tree>> {
        let mut cursor = QueryCursor::new();
        cursor.set_max_start_depth(Some(0));
        let mut matches = cursor.matches(&self.query, method, source);

        while let Some(m) = matches.next() {
            if let Some(capture) = m.captures.iter().find(|c| c.index == self.capture_index) {
                return Some(capture.node);
            }
        }
        None
    }
}

/// A compiled grammar profile.
pub struct GrammarProfile {
    config: ProfileConfig,
    docstring: Option<DocstringLocator>,
}

impl GrammarProfile {
    /// Compile a profile. Fails if the docstring query does not compile
    /// against the grammar.
    pub fn new(config: ProfileConfig) -> Result<Self, ExtractError> {
        if config.comment_node_types.is_empty() {
            return Err(ExtractError::InvalidProfile {
                language: config.language,
                reason: "no comment node types".to_string(),
            });
        }
        let docstring = config
            .docstring_query
            .map(|q| DocstringLocator::new(&config, q))
            .transpose()?;
        Ok(Self { config, docstring })
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn grammar(&self) -> &tree_sitter::Language {
        &self.config.grammar
    }

    pub fn method_node_type(&self) -> &'static str {
        self.config.method_node_type
    }

    pub fn name_node_type(&self) -> &'static str {
        self.config.name_node_type
    }

    pub fn name_strategy(&self) -> NameStrategy {
        self.config.name_strategy
    }

    pub fn comment_node_types(&self) -> &'static [&'static str] {
        self.config.comment_node_types
    }

    /// Whether a node of this type is a comment in this grammar.
    pub fn is_comment(&self, kind: &str) -> bool {
        self.config.comment_node_types.contains(&kind)
    }

    pub fn docstring(&self) -> Option<&DocstringLocator> {
        self.docstring.as_ref()
    }
}

impl std::fmt::Debug for GrammarProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarProfile")
            .field("language", &self.config.language)
            .field("method_node_type", &self.config.method_node_type)
            .field("name_node_type", &self.config.name_node_type)
            .field("name_strategy", &self.config.name_strategy)
            .field("comment_node_types", &self.config.comment_node_types)
            .field("docstring_query", &self.config.docstring_query)
            .finish()
    }
}

/// Immutable lookup from language tag to grammar profile.
///
/// Built once at startup and shared read-only; holds at most one profile
/// per language.
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<Language, GrammarProfile>,
}

impl ProfileRegistry {
    /// A registry with no profiles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with every built-in profile.
    pub fn builtin() -> Result<Self, ExtractError> {
        let mut registry = Self::empty();
        for config in languages::configs() {
            registry.register(GrammarProfile::new(config)?);
        }
        Ok(registry)
    }

    /// Add a profile, replacing any existing profile for the same language.
    pub fn register(&mut self, profile: GrammarProfile) -> Option<GrammarProfile> {
        self.profiles.insert(profile.language(), profile)
    }

    /// Builder form of `register`.
    pub fn with_profile(mut self, profile: GrammarProfile) -> Self {
        self.register(profile);
        self
    }

    /// Look up the profile for a language.
    pub fn profile_for(&self, language: Language) -> Result<&GrammarProfile, ExtractError> {
        self.profiles
            .get(&language)
            .ok_or(ExtractError::UnsupportedLanguage(language))
    }

    pub fn supports(&self, language: Language) -> bool {
        self.profiles.contains_key(&language)
    }

    /// Supported languages, sorted by identifier.
    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<Language> = self.profiles.keys().copied().collect();
        langs.sort_by_key(|l| l.as_str());
        langs
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
