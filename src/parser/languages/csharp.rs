//! C# grammar profile.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Create the C# profile.
///
/// The name is the first `identifier` child, so a method whose return type
/// is a plain identifier (`Widget Build()`) resolves to the type name.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::CSharp,
        grammar: tree_sitter_c_sharp::LANGUAGE.into(),
        method_node_type: "method_declaration",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["comment"],
        docstring_query: None,
    }
}
