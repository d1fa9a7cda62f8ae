//! TypeScript grammar profile.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the TypeScript profile.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::TypeScript,
        grammar: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        method_node_type: "function_declaration",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["comment"],
        docstring_query: None,
    }
}
