use tree_sitter::Node;

use super::{field_string, field_text, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct RustProfile;

fn callee<'s>(function: Node<'_>, source: &'s str) -> Option<&'s str> {
    match function.kind() {
        "identifier" => Some(node_text(function, source)),
        // value.method(...)
        "field_expression" => field_text(function, "field", source),
        // Type::new(...) / module::func(...)
        "scoped_identifier" => field_text(function, "name", source),
        // parse::<u32>(...)
        "generic_function" => callee(function.child_by_field_name("function")?, source),
        _ => None,
    }
}

impl GrammarProfile for RustProfile {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rs"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        if !matches!(node.kind(), "function_item" | "function_signature_item") {
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
        if node.kind() != "call_expression" {
            return None;
        }
        callee(node.child_by_field_name("function")?, source)
    }
}
