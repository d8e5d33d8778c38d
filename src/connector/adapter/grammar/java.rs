use tree_sitter::Node;

use super::{field_string, field_text, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct JavaProfile;

/// Class name of a constructed type: `Cart`, `HashMap<K, V>`, `java.util.List`.
fn type_name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    match node.kind() {
        "type_identifier" => Some(node_text(node, source)),
        "generic_type" | "scoped_type_identifier" => {
            let mut cursor = node.walk();
            let last = node
                .named_children(&mut cursor)
                .filter(|child| matches!(child.kind(), "type_identifier" | "scoped_type_identifier"))
                .last();
            type_name(last?, source)
        }
        _ => None,
    }
}

impl GrammarProfile for JavaProfile {
    fn language(&self) -> Language {
        Language::Java
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        if !matches!(node.kind(), "method_declaration" | "constructor_declaration") {
            return None;
        }
        let name = field_text(node, "name", source)?;
        Some(
            DefinitionMatch::new(name, node)
                .with_parameters(field_string(node, "parameters", source))
                .with_return_type(field_string(node, "type", source)),
        )
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "method_invocation" => field_text(node, "name", source),
            "object_creation_expression" => type_name(node.child_by_field_name("type")?, source),
            _ => None,
        }
    }
}
