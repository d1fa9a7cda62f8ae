//! Swift grammar profile.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the Swift profile.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::Swift,
        grammar: tree_sitter_swift::LANGUAGE.into(),
        method_node_type: "function_declaration",
        name_node_type: "simple_identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["comment", "multiline_comment"],
        docstring_query: None,
    }
}
