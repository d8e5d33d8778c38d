use tree_sitter::Node;

use super::{field_string, field_text, first_child_of_kind, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct CSharpProfile;

impl CSharpProfile {
    fn simple_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "identifier" => Some(node_text(node, source)),
            // Sum<decimal>(...)
            "generic_name" => first_child_of_kind(node, &["identifier"]).map(|n| node_text(n, source)),
            "member_access_expression" | "member_binding_expression" | "qualified_name" => {
                self.simple_name(node.child_by_field_name("name")?, source)
            }
            _ => None,
        }
    }
}

impl GrammarProfile for CSharpProfile {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["cs"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        if !matches!(
            node.kind(),
            "method_declaration" | "constructor_declaration" | "local_function_statement"
        ) {
            return None;
        }
        let name = field_text(node, "name", source)?;
        let return_type = field_string(node, "returns", source).or_else(|| field_string(node, "type", source));
        Some(
            DefinitionMatch::new(name, node)
                .with_parameters(field_string(node, "parameters", source))
                .with_return_type(return_type),
        )
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "invocation_expression" => self.simple_name(node.child_by_field_name("function")?, source),
            "object_creation_expression" => self.simple_name(node.child_by_field_name("type")?, source),
            _ => None,
        }
    }
}
