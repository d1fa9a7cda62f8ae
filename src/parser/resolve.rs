//! Name and documentation resolution for matched method nodes.
//!
//! Both resolvers pick at most one candidate: the first match wins.

use tree_sitter::Node;

use super::error::ParseError;
use super::profile::{GrammarProfile, NameStrategy};

/// Resolve the declared name of a method node.
///
/// Returns `Ok(None)` when the profile's name node is not where the
/// strategy expects it (e.g. a C function returning a pointer, whose
/// declarator is wrapped in a `pointer_declarator`).
pub fn resolve_name<'s>(
    method: Node<'_>,
    profile: &GrammarProfile,
    source: &'s [u8],
) -> Result<Option<&'s str>, ParseError> {
    let mut cursor = method.walk();
    let direct = method
        .children(&mut cursor)
        .find(|child| child.kind() == profile.name_node_type());

    let name_node = match profile.name_strategy() {
        NameStrategy::Direct => direct,
        NameStrategy::DeclaratorIndirect { identifier } => {
            direct.and_then(|declarator| first_child_of_kind(declarator, identifier))
        }
    };

    match name_node {
        Some(node) => Ok(Some(node.utf8_text(source)?)),
        None => Ok(None),
    }
}

/// Resolve the documentation attached to a method node.
///
/// A docstring found by the profile's locator wins. Otherwise only the
/// immediately preceding named sibling is checked; blank lines are not
/// nodes, so a comment separated by one still counts, but anything else
/// in between (another comment, a statement) hides it.
pub fn resolve_doc_comment<'s>(
    method: Node<'_>,
    profile: &GrammarProfile,
    source: &'s [u8],
) -> Result<Option<&'s str>, ParseError> {
    if let Some(locator) = profile.docstring() {
        if let Some(docstring) = locator.locate(method, source) {
            return Ok(Some(docstring.utf8_text(source)?));
        }
    }

    match method.prev_named_sibling() {
        Some(prev) if profile.is_comment(prev.kind()) => Ok(Some(prev.utf8_text(source)?)),
        _ => Ok(None),
    }
}

fn first_child_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}
