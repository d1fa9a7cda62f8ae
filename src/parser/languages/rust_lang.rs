//! Rust grammar profile.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the Rust profile.
///
/// Every `///` line is its own `line_comment` node, so only the line
/// directly above the item is attached.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::Rust,
        grammar: tree_sitter_rust::LANGUAGE.into(),
        method_node_type: "function_item",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["line_comment", "block_comment"],
        docstring_query: None,
    }
}
