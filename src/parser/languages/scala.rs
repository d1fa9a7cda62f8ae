//! Scala grammar profile.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the Scala profile.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::Scala,
        grammar: tree_sitter_scala::LANGUAGE.into(),
        method_node_type: "function_definition",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["comment", "block_comment"],
        docstring_query: None,
    }
}
