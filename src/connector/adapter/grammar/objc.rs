//! Objective-C: message-passing on top of the C declarator rules.
//!
//! Methods are named by their full selector (`drawRect:withColor:`), built
//! from the keyword fragments of the declaration. Message sends are matched by
//! assembling the same selector from the `[receiver keyword:arg ...]` form.

use tree_sitter::Node;

use super::{default_arguments, node_text, CFamilyProfile, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

pub struct ObjectiveCProfile {
    c: CFamilyProfile,
}

impl ObjectiveCProfile {
    pub fn new() -> Self {
        Self { c: CFamilyProfile::c() }
    }

    fn method<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        let mut selector = String::new();
        let mut return_type = None;
        let mut first_piece: Option<Node<'tree>> = None;
        let mut last_parameter: Option<Node<'tree>> = None;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "compound_statement" | ";" => break,
                "method_type" if first_piece.is_none() && return_type.is_none() => {
                    let text = node_text(child, source);
                    return_type = Some(text.trim_start_matches('(').trim_end_matches(')').trim().to_string());
                }
                "identifier" => {
                    first_piece.get_or_insert(child);
                    selector.push_str(node_text(child, source));
                }
                ":" => selector.push(':'),
                "method_parameter" => {
                    first_piece.get_or_insert(child);
                    last_parameter = Some(child);
                    push_keyword(child, source, &mut selector);
                }
                _ => {}
            }
        }

        if selector.is_empty() {
            return None;
        }
        let parameters = match (first_piece, last_parameter) {
            (Some(first), Some(last)) => source.get(first.start_byte()..last.end_byte()).map(String::from),
            _ => None,
        };
        Some(
            DefinitionMatch::new(selector, node)
                .with_parameters(parameters)
                .with_return_type(return_type),
        )
    }
}

impl Default for ObjectiveCProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword fragment of one method parameter: `withColor:(UIColor *)c` -> `withColor:`.
fn push_keyword(parameter: Node<'_>, source: &str, selector: &mut String) {
    let mut cursor = parameter.walk();
    for child in parameter.children(&mut cursor) {
        match child.kind() {
            ":" => {
                selector.push(':');
                return;
            }
            "identifier" => selector.push_str(node_text(child, source)),
            _ => {}
        }
    }
}

/// Tokens of a message expression after the receiver, with keyword-argument
/// wrappers flattened.
fn message_parts(message: Node<'_>) -> Vec<Node<'_>> {
    let receiver = message.child_by_field_name("receiver").or_else(|| message.named_child(0));
    let receiver_id = receiver.map(|r| r.id());

    let mut parts = Vec::new();
    let mut cursor = message.walk();
    for child in message.children(&mut cursor) {
        if Some(child.id()) == receiver_id || matches!(child.kind(), "[" | "]") {
            continue;
        }
        if child.kind().starts_with("keyword_argument") {
            let mut inner = child.walk();
            for part in child.children(&mut inner) {
                if part.kind().starts_with("keyword_argument") {
                    let mut nested = part.walk();
                    parts.extend(part.children(&mut nested));
                } else {
                    parts.push(part);
                }
            }
        } else {
            parts.push(child);
        }
    }
    parts
}

fn message_selector(parts: &[Node<'_>], source: &str) -> String {
    let mut selector = String::new();
    for (index, part) in parts.iter().enumerate() {
        match part.kind() {
            ":" => selector.push(':'),
            "identifier" if parts.get(index + 1).is_some_and(|next| next.kind() == ":") => {
                selector.push_str(node_text(*part, source));
            }
            _ => {}
        }
    }
    if selector.is_empty() {
        // unary message: [view refresh]
        if let Some(first) = parts.iter().find(|p| p.kind() == "identifier") {
            selector.push_str(node_text(*first, source));
        }
    }
    selector
}

fn message_arguments(parts: &[Node<'_>], source: &str) -> Vec<String> {
    parts
        .windows(2)
        .filter(|pair| pair[0].kind() == ":" && pair[1].is_named())
        .map(|pair| node_text(pair[1], source).trim())
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect()
}

impl GrammarProfile for ObjectiveCProfile {
    fn language(&self) -> Language {
        Language::ObjectiveC
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["m", "h"]
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        match node.kind() {
            "method_definition" | "method_declaration" => self.method(node, source),
            _ => self.c.match_definition(node, source),
        }
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        self.c.callee_name(node, source)
    }

    fn matches_call(&self, node: Node<'_>, source: &str, target: &str) -> bool {
        if node.kind() == "message_expression" {
            let selector = message_selector(&message_parts(node), source);
            // every selector contains ""
            return !target.is_empty() && (selector == target || selector.contains(target));
        }
        self.callee_name(node, source) == Some(target)
    }

    fn extract_arguments(&self, call: Node<'_>, source: &str) -> Vec<String> {
        if call.kind() == "message_expression" {
            return message_arguments(&message_parts(call), source);
        }
        default_arguments(call, source)
    }
}
