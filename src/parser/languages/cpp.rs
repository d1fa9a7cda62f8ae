//! C++ grammar profile.
//!
//! Same declarator indirection as C. Only plain identifiers resolve, so
//! qualified out-of-class definitions (`Foo::bar`) and in-class member
//! functions (`field_identifier`) are left unnamed.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the C++ profile.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::Cpp,
        grammar: tree_sitter_cpp::LANGUAGE.into(),
        method_node_type: "function_definition",
        name_node_type: "function_declarator",
        name_strategy: NameStrategy::DeclaratorIndirect {
            identifier: "identifier",
        },
        comment_node_types: &["comment"],
        docstring_query: None,
    }
}
