//! Go grammar profile.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the Go profile.
///
/// Methods with receivers are `method_declaration` nodes and are not
/// collected.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::Go,
        grammar: tree_sitter_go::LANGUAGE.into(),
        method_node_type: "function_declaration",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["comment"],
        docstring_query: None,
    }
}
