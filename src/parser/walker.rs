//! Syntax tree traversal.

use tree_sitter::Node;

use super::profile::GrammarProfile;

/// Collect every method node under `root`, in document order.
///
/// Pre-order depth-first: a node is yielded before its children, siblings
/// left to right. Descent continues below a match, so nested definitions
/// follow their enclosing definition. Uses a tree cursor rather than
/// recursion, so deep trees cannot exhaust the stack.
pub fn collect_method_nodes<'tree>(root: Node<'tree>, profile: &GrammarProfile) -> Vec<Node<'tree>> {
    let method_kind = profile.method_node_type();
    let mut found = Vec::new();
    let mut cursor = root.walk();

    loop {
        let node = cursor.node();
        if node.kind() == method_kind {
            found.push(node);
        }

        if cursor.goto_first_child() {
            continue;
        }

        // Climb until a next sibling exists; the cursor cannot leave `root`.
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return found;
            }
        }
    }
}
