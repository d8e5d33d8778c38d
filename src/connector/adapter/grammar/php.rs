use tree_sitter::Node;

use super::{field_string, field_text, first_child_of_kind, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct PhpProfile;

/// `helper` for `helper`, and the last segment for `\App\Util\helper`.
fn class_or_function_name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    match node.kind() {
        "name" => Some(node_text(node, source)),
        "qualified_name" => {
            let mut cursor = node.walk();
            let last = node.named_children(&mut cursor).filter(|c| c.kind() == "name").last();
            last.map(|n| node_text(n, source))
        }
        _ => None,
    }
}

impl GrammarProfile for PhpProfile {
    fn language(&self) -> Language {
        Language::Php
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["php"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        if !matches!(node.kind(), "function_definition" | "method_declaration") {
            return None;
        }
        let name = field_text(node, "name", source)?;
        Some(
            DefinitionMatch::new(name, node)
                .with_parameters(field_string(node, "parameters", source))
                .with_return_type(field_string(node, "return_type", source)),
        )
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "function_call_expression" => class_or_function_name(node.child_by_field_name("function")?, source),
            "member_call_expression" | "nullsafe_member_call_expression" | "scoped_call_expression" => {
                field_text(node, "name", source)
            }
            "object_creation_expression" => {
                class_or_function_name(first_child_of_kind(node, &["name", "qualified_name"])?, source)
            }
            _ => None,
        }
    }
}
