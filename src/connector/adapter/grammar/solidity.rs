use tree_sitter::Node;

use super::{field_text, node_text, parenthesized_children_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct SolidityProfile;

/// Skip the grammar's `expression` wrapper nodes.
fn unwrap_expression(mut node: Node<'_>) -> Option<Node<'_>> {
    while node.kind() == "expression" {
        node = node.named_child(0)?;
    }
    Some(node)
}

fn returns_clause(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let clause = node
        .children(&mut cursor)
        .find(|child| child.kind() == "return_type_definition")?;
    let text = node_text(clause, source);
    Some(text.strip_prefix("returns").unwrap_or(text).trim().to_string())
}

impl GrammarProfile for SolidityProfile {
    fn language(&self) -> Language {
        Language::Solidity
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["sol"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        let name = match node.kind() {
            "function_definition" | "modifier_definition" => field_text(node, "name", source)?,
            "constructor_definition" => "constructor",
            _ => return None,
        };
        Some(
            DefinitionMatch::new(name, node)
                .with_parameters(parenthesized_children_text(node, source))
                .with_return_type(returns_clause(node, source)),
        )
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        if node.kind() != "call_expression" {
            return None;
        }
        let function = unwrap_expression(node.child_by_field_name("function")?)?;
        match function.kind() {
            "identifier" => Some(node_text(function, source)),
            "member_expression" => field_text(function, "property", source),
            _ => None,
        }
    }

    fn extract_arguments(&self, call: Node<'_>, source: &str) -> Vec<String> {
        let mut cursor = call.walk();
        let arguments = call
            .children(&mut cursor)
            .filter(|child| child.kind() == "call_argument")
            .map(|child| node_text(child, source).trim())
            .filter(|text| !text.is_empty())
            .map(String::from)
            .collect();
        arguments
    }
}
