//! C grammar profile.
//!
//! C wraps a function's name in a `function_declarator` (which also holds
//! the parameter list), so the name is resolved one level down.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the C profile.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::C,
        grammar: tree_sitter_c::LANGUAGE.into(),
        method_node_type: "function_definition",
        name_node_type: "function_declarator",
        name_strategy: NameStrategy::DeclaratorIndirect {
            identifier: "identifier",
        },
        comment_node_types: &["comment"],
        docstring_query: None,
    }
}
