use tree_sitter::Node;

use super::{field_string, field_text, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct GoProfile;

impl GrammarProfile for GoProfile {
    fn language(&self) -> Language {
        Language::Go
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        if !matches!(node.kind(), "function_declaration" | "method_declaration") {
            return None;
        }
        let name = field_text(node, "name", source)?;
        Some(
            DefinitionMatch::new(name, node)
                .with_parameters(field_string(node, "parameters", source))
                .with_return_type(field_string(node, "result", source)),
        )
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        if node.kind() != "call_expression" {
            return None;
        }
        let function = node.child_by_field_name("function")?;
        match function.kind() {
            "identifier" => Some(node_text(function, source)),
            // pkg.Function(...) and value.Method(...)
            "selector_expression" => field_text(function, "field", source),
            _ => None,
        }
    }
}
