//! Java grammar profile.
//!
//! The Java grammar has separate `line_comment` and `block_comment` nodes;
//! both count as documentation.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the Java profile.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::Java,
        grammar: tree_sitter_java::LANGUAGE.into(),
        method_node_type: "method_declaration",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["line_comment", "block_comment"],
        docstring_query: None,
    }
}
