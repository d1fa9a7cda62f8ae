//! Python grammar profile.
//!
//! Python documents functions with a docstring: a string literal as the
//! first statement of the body. A `#` comment directly above the `def` is
//! used when there is no docstring.

use crate::language::Language;
use crate::parser::profile::{NameStrategy, ProfileConfig};

/// Locates a docstring as the first statement of a function body.
const DOCSTRING_QUERY: &str = r#"
(function_definition
  body: (block . (expression_statement (string) @docstring)))
"#;

/// Create the Python profile.
pub fn config() -> ProfileConfig {
    ProfileConfig {
        language: Language::Python,
        grammar: tree_sitter_python::LANGUAGE.into(),
        method_node_type: "function_definition",
        name_node_type: "identifier",
        name_strategy: NameStrategy::Direct,
        comment_node_types: &["comment"],
        docstring_query: Some(DOCSTRING_QUERY),
    }
}
