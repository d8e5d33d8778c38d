//! Grammar profiles: per-language rules for recognising definitions, calls and
//! call arguments in a tree-sitter syntax tree.
//!
//! Every profile implements [`GrammarProfile`]; [`profile_for`] is the lookup
//! table keyed by [`Language`]. A node with an unexpected shape is simply not
//! a match: classification never fails.

mod c_family;
mod csharp;
mod go;
mod java;
mod javascript;
mod objc;
mod php;
mod python;
mod rust;
mod solidity;

use std::path::Path;

use tree_sitter::Node;

use crate::domain::Language;

pub use c_family::CFamilyProfile;
pub use csharp::CSharpProfile;
pub use go::GoProfile;
pub use java::JavaProfile;
pub use javascript::JavaScriptProfile;
pub use objc::ObjectiveCProfile;
pub use php::PhpProfile;
pub use python::PythonProfile;
pub use rust::RustProfile;
pub use solidity::SolidityProfile;

/// A definition recognised at a syntax node.
#[derive(Debug, Clone)]
pub struct DefinitionMatch<'tree> {
    pub name: String,
    /// Node whose source text is the whole definition.
    pub node: Node<'tree>,
    pub parameters: Option<String>,
    pub return_type: Option<String>,
}

impl<'tree> DefinitionMatch<'tree> {
    pub fn new(name: impl Into<String>, node: Node<'tree>) -> Self {
        Self {
            name: name.into(),
            node,
            parameters: None,
            return_type: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Option<String>) -> Self {
        self.parameters = parameters.filter(|p| !p.is_empty());
        self
    }

    pub fn with_return_type(mut self, return_type: Option<String>) -> Self {
        self.return_type = return_type.and_then(|r| clean_return_type(&r));
        self
    }
}

/// Structural recognition rules for one language.
pub trait GrammarProfile: Send + Sync {
    fn language(&self) -> Language;

    /// File extensions (without the dot) this profile loads.
    fn extensions(&self) -> &'static [&'static str];

    /// If `node` is a function/method definition, its name and signature parts.
    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>>;

    /// If `node` is a call, the simple name of the callee.
    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str>;

    /// Whether `node` is a call to `target`.
    fn matches_call(&self, node: Node<'_>, source: &str, target: &str) -> bool {
        self.callee_name(node, source) == Some(target)
    }

    /// Argument expressions of a matched call, in source order.
    fn extract_arguments(&self, call: Node<'_>, source: &str) -> Vec<String> {
        default_arguments(call, source)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// The grammar profile for `language`.
pub fn profile_for(language: Language) -> Box<dyn GrammarProfile> {
    match language {
        Language::Python => Box::new(PythonProfile),
        Language::JavaScript => Box::new(JavaScriptProfile::javascript()),
        Language::TypeScript => Box::new(JavaScriptProfile::typescript()),
        Language::Go => Box::new(GoProfile),
        Language::C => Box::new(CFamilyProfile::c()),
        Language::Cpp => Box::new(CFamilyProfile::cpp()),
        Language::CSharp => Box::new(CSharpProfile),
        Language::Java => Box::new(JavaProfile),
        Language::Solidity => Box::new(SolidityProfile),
        Language::ObjectiveC => Box::new(ObjectiveCProfile::new()),
        Language::Rust => Box::new(RustProfile),
        Language::Php => Box::new(PhpProfile),
    }
}

// ─── Node helpers shared by the profiles ────────────────────────────

pub(crate) fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

pub(crate) fn field_text<'s>(node: Node<'_>, field: &str, source: &'s str) -> Option<&'s str> {
    node.child_by_field_name(field)
        .map(|n| node_text(n, source))
        .filter(|t| !t.is_empty())
}

pub(crate) fn field_string(node: Node<'_>, field: &str, source: &str) -> Option<String> {
    field_text(node, field, source).map(String::from)
}

pub(crate) fn first_child_of_kind<'tree>(node: Node<'tree>, kinds: &[&str]) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()));
    found
}

/// Text between the first `(` child of `node` and the `)` that follows it.
pub(crate) fn parenthesized_children_text(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    let open = children.iter().position(|c| c.kind() == "(")?;
    let close = children[open..].iter().position(|c| c.kind() == ")")? + open;
    source
        .get(children[open].start_byte()..children[close].end_byte())
        .map(String::from)
}

/// Non-punctuation children of an argument container, trimmed, empties dropped.
pub(crate) fn argument_texts(container: Node<'_>, source: &str) -> Vec<String> {
    let mut cursor = container.walk();
    let arguments = container
        .children(&mut cursor)
        .filter(|child| !matches!(child.kind(), "(" | ")" | ","))
        .map(|child| node_text(child, source).trim())
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect();
    arguments
}

/// Arguments held in the call's `arguments` field, or in its first
/// `arguments`/`argument_list` child when the grammar leaves it unnamed.
pub(crate) fn default_arguments(call: Node<'_>, source: &str) -> Vec<String> {
    call.child_by_field_name("arguments")
        .or_else(|| first_child_of_kind(call, &["arguments", "argument_list"]))
        .map(|container| argument_texts(container, source))
        .unwrap_or_default()
}

fn clean_return_type(raw: &str) -> Option<String> {
    let cleaned = raw.trim().trim_start_matches(':').trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Pre-order walk over every node below (and including) `root`, with depth.
pub(crate) fn preorder(root: Node<'_>) -> impl Iterator<Item = (Node<'_>, usize)> {
    let mut cursor = root.walk();
    let mut depth = 0usize;
    let mut finished = false;
    std::iter::from_fn(move || {
        if finished {
            return None;
        }
        let current = (cursor.node(), depth);
        if cursor.goto_first_child() {
            depth += 1;
        } else {
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    finished = true;
                    break;
                }
                depth -= 1;
            }
        }
        Some(current)
    })
}
