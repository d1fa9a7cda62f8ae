//! JavaScript grammar profile.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the JavaScript profile.
///
/// Only `function` declarations are collected; arrow functions and class
/// methods use other node types.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::JavaScript,
        grammar: tree_sitter_javascript::LANGUAGE.into(),
        method_node_type: "function_declaration",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["comment"],
        docstring_query: None,
    }
}
