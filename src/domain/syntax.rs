/// Syntax classification for the checker core.
///
/// The core never matches on raw grammar kind strings outside this module;
/// every node is classified into one of these tags first, so the shape rules
/// in the checker stay explicit and testable.

use tree_sitter::Node;

/// Node classification used by the checker core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    AwaitExpression,
    CallExpression,
    MemberAccess,
    Identifier,
    Literal,
    Parenthesized,
    Other,
}

impl SyntaxKind {
    /// Classify a parse tree node by its grammar kind.
    pub fn of(node: &Node) -> SyntaxKind {
        match node.kind() {
            "await_expression" => SyntaxKind::AwaitExpression,
            "invocation_expression" => SyntaxKind::CallExpression,
            "member_access_expression" => SyntaxKind::MemberAccess,
            "identifier" => SyntaxKind::Identifier,
            "boolean_literal" | "integer_literal" | "real_literal" | "character_literal"
            | "string_literal" | "verbatim_string_literal" | "raw_string_literal"
            | "null_literal" => SyntaxKind::Literal,
            "parenthesized_expression" => SyntaxKind::Parenthesized,
            _ => SyntaxKind::Other,
        }
    }
}

/// The named, non-trivia children of a node, in syntactic order.
/// Comments are grammar extras and take no part in shape matching.
pub fn expression_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}
