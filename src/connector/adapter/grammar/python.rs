use tree_sitter::Node;

use super::{field_string, field_text, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct PythonProfile;

impl GrammarProfile for PythonProfile {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        if node.kind() != "function_definition" {
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
        if node.kind() != "call" {
            return None;
        }
        let function = node.child_by_field_name("function")?;
        match function.kind() {
            "identifier" => Some(node_text(function, source)),
            // obj.method(...)
            "attribute" => field_text(function, "attribute", source),
            _ => None,
        }
    }
}
