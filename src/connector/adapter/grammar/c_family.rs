//! Declarator languages: C and C++.
//!
//! A C definition does not carry its name in a field. The name sits at the
//! bottom of a declarator chain (`*`, `&`, parentheses, attributes, the
//! function declarator itself) that has to be unwrapped first.

use tree_sitter::Node;

use super::{field_text, first_child_of_kind, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    C,
    Cpp,
}

pub struct CFamilyProfile {
    dialect: Dialect,
}

impl CFamilyProfile {
    pub fn c() -> Self {
        Self { dialect: Dialect::C }
    }

    pub fn cpp() -> Self {
        Self { dialect: Dialect::Cpp }
    }

    fn is_cpp(&self) -> bool {
        self.dialect == Dialect::Cpp
    }

    /// Name, parameters and return type of `decl`, whose text spans `span`.
    /// With `prototype_only`, function pointer variables are rejected.
    fn function_shape<'tree>(
        &self,
        decl: Node<'tree>,
        span: Node<'tree>,
        source: &str,
        prototype_only: bool,
    ) -> Option<DefinitionMatch<'tree>> {
        let declarator = decl.child_by_field_name("declarator")?;
        let (outer, indirection) = unwrap_to_function(declarator)?;

        // auto f() -> int
        let trailing = first_child_of_kind(outer, &["trailing_return_type"])
            .and_then(|t| t.named_child(0))
            .map(|t| node_text(t, source));
        let mut return_type = trailing.or_else(|| field_text(decl, "type", source)).map(|ty| {
            if indirection.is_empty() {
                ty.to_string()
            } else {
                format!("{} {}", ty, indirection)
            }
        });

        // int (*get(void))(int): the outer declarator describes the returned
        // function pointer, the named one sits further down.
        let mut function_declarator = outer;
        let mut inner = function_declarator.child_by_field_name("declarator")?;
        while let Some((deeper, pointer)) = unwrap_to_function(inner) {
            let returned_parameters = field_text(function_declarator, "parameters", source).unwrap_or("");
            return_type = return_type.map(|ty| format!("{} ({}){}", ty, pointer, returned_parameters));
            function_declarator = deeper;
            inner = function_declarator.child_by_field_name("declarator")?;
        }

        // int (*handler)(int); is a variable, not a prototype
        if prototype_only && inner.kind() == "parenthesized_declarator" {
            return None;
        }
        let name_node = declarator_name(inner)?;
        let name = node_text(name_node, source);
        if name.is_empty() {
            return None;
        }

        Some(
            DefinitionMatch::new(name, span)
                .with_parameters(field_text(function_declarator, "parameters", source).map(String::from))
                .with_return_type(return_type),
        )
    }

    /// Simple name of a callee expression.
    fn simple_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "identifier" | "field_identifier" => Some(node_text(node, source)),
            "field_expression" => self.simple_name(node.child_by_field_name("field")?, source),
            "type_identifier" | "destructor_name" | "operator_name" if self.is_cpp() => {
                Some(node_text(node, source))
            }
            // obj->template run<int>(..)
            "dependent_name" if self.is_cpp() => self.simple_name(node.named_child(0)?, source),
            "qualified_identifier" | "template_function" | "template_method" | "template_type"
                if self.is_cpp() =>
            {
                self.simple_name(node.child_by_field_name("name")?, source)
            }
            _ => None,
        }
    }

    fn within_template(node: Node<'_>) -> bool {
        node.parent()
            .is_some_and(|parent| parent.kind() == "template_declaration")
    }
}

impl GrammarProfile for CFamilyProfile {
    fn language(&self) -> Language {
        match self.dialect {
            Dialect::C => Language::C,
            Dialect::Cpp => Language::Cpp,
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self.dialect {
            Dialect::C => &["c", "h"],
            Dialect::Cpp => &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h"],
        }
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        match node.kind() {
            "function_definition" => {
                // recorded through the enclosing template_declaration instead
                if self.is_cpp() && Self::within_template(node) {
                    return None;
                }
                self.function_shape(node, node, source, false)
            }
            "declaration" => {
                if self.is_cpp() && Self::within_template(node) {
                    return None;
                }
                self.function_shape(node, node, source, true)
            }
            "field_declaration" if self.is_cpp() => self.function_shape(node, node, source, true),
            "template_declaration" if self.is_cpp() => {
                let mut cursor = node.walk();
                let inner = node
                    .named_children(&mut cursor)
                    .find(|child| matches!(child.kind(), "function_definition" | "declaration"))?;
                let prototype_only = inner.kind() == "declaration";
                self.function_shape(inner, node, source, prototype_only)
            }
            _ => None,
        }
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "call_expression" => self.simple_name(node.child_by_field_name("function")?, source),
            "new_expression" if self.is_cpp() => self.simple_name(node.child_by_field_name("type")?, source),
            _ => None,
        }
    }
}

/// Walk down pointer/reference/grouping wrappers to the function declarator.
/// Returns it with the `*`/`&` markers collected on the way.
fn unwrap_to_function(declarator: Node<'_>) -> Option<(Node<'_>, String)> {
    let mut current = declarator;
    let mut indirection = String::new();
    loop {
        match current.kind() {
            "function_declarator" => return Some((current, indirection)),
            "pointer_declarator" => indirection.push('*'),
            "reference_declarator" => indirection.push('&'),
            "parenthesized_declarator" | "attributed_declarator" => {}
            _ => return None,
        }
        current = inner_declarator(current)?;
    }
}

/// Bottom of a declarator chain: the node that names the function.
fn declarator_name(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "identifier" | "field_identifier" | "destructor_name" | "operator_name" => Some(node),
        // Shape::area -> area
        "qualified_identifier" | "template_function" | "template_method" => {
            declarator_name(node.child_by_field_name("name")?)
        }
        "function_declarator"
        | "pointer_declarator"
        | "reference_declarator"
        | "parenthesized_declarator"
        | "attributed_declarator" => declarator_name(inner_declarator(node)?),
        _ => None,
    }
}

fn inner_declarator(node: Node<'_>) -> Option<Node<'_>> {
    if let Some(inner) = node.child_by_field_name("declarator") {
        return Some(inner);
    }
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|child| {
        !matches!(
            child.kind(),
            "attribute_declaration" | "ms_call_modifier" | "ms_pointer_modifier" | "type_qualifier"
        )
    });
    found
}
