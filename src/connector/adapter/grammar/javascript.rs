use tree_sitter::Node;

use super::{field_string, field_text, node_text, DefinitionMatch, GrammarProfile};
use crate::domain::Language;

/// JavaScript, and TypeScript on top of it (signatures and return types).
pub struct JavaScriptProfile {
    typescript: bool,
}

impl JavaScriptProfile {
    pub fn javascript() -> Self {
        Self { typescript: false }
    }

    pub fn typescript() -> Self {
        Self { typescript: true }
    }

    fn signature<'tree>(&self, name: &str, node: Node<'tree>, span: Node<'tree>, source: &str) -> DefinitionMatch<'tree> {
        let parameters = field_string(node, "parameters", source)
            .or_else(|| field_string(node, "parameter", source));
        DefinitionMatch::new(name, span)
            .with_parameters(parameters)
            .with_return_type(field_string(node, "return_type", source))
    }

    fn resolve_member<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "identifier" => Some(node_text(node, source)),
            "member_expression" => field_text(node, "property", source),
            _ => None,
        }
    }
}

impl GrammarProfile for JavaScriptProfile {
    fn language(&self) -> Language {
        if self.typescript {
            Language::TypeScript
        } else {
            Language::JavaScript
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        if self.typescript {
            &["ts", "tsx", "mts", "cts"]
        } else {
            &["js", "jsx", "mjs", "cjs"]
        }
    }

    fn match_definition<'tree>(&self, node: Node<'tree>, source: &str) -> Option<DefinitionMatch<'tree>> {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" | "method_definition" => {
                let name = field_text(node, "name", source)?;
                Some(self.signature(name, node, node, source))
            }
            "function_signature" | "method_signature" | "abstract_method_signature" if self.typescript => {
                let name = field_text(node, "name", source)?;
                Some(self.signature(name, node, node, source))
            }
            // const foo = function () {} / const bar = () => {}
            "function" | "function_expression" | "arrow_function" | "generator_function" => {
                let parent = node.parent()?;
                if parent.kind() != "variable_declarator" {
                    return None;
                }
                let name = field_text(parent, "name", source)?;
                Some(self.signature(name, node, parent, source))
            }
            _ => None,
        }
    }

    fn callee_name<'s>(&self, node: Node<'_>, source: &'s str) -> Option<&'s str> {
        match node.kind() {
            "call_expression" => self.resolve_member(node.child_by_field_name("function")?, source),
            "new_expression" => self.resolve_member(node.child_by_field_name("constructor")?, source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{calls_to, definition_names, definitions};
    use super::*;

    #[test]
    fn test_javascript_definitions() {
        let source = r#"
function load(path) { return read(path); }
const parse = function (text) { return text; };
const render = (node) => node;
let single = x => x;
class View {
  draw(ctx) { ctx.fill(); }
}
[1, 2].map((v) => v * 2);
"#;
        let names = definition_names(Language::JavaScript, "a.js", source);
        assert_eq!(names, vec!["load", "parse", "render", "single", "draw"]);
    }

    #[test]
    fn test_variable_function_spans_declarator() {
        let source = "const render = (node) => node;\n";
        let tree = super::super::test_support::parse(Language::JavaScript, "a.js", source);
        let profile = JavaScriptProfile::javascript();
        let def = super::super::preorder(tree.root_node())
            .find_map(|(n, _)| profile.match_definition(n, source))
            .expect("arrow function should be a definition");

        assert_eq!(node_text(def.node, source), "render = (node) => node");
        assert_eq!(def.parameters.as_deref(), Some("(node)"));
    }

    #[test]
    fn test_javascript_calls() {
        let source = r#"
function main() {
  notify("a", 1);
  bus.notify(event);
  new notify();
  notifyAll();
}
"#;
        let calls = calls_to(Language::JavaScript, "a.js", source, "notify");
        assert_eq!(
            calls,
            vec![
                vec!["\"a\"".to_string(), "1".to_string()],
                vec!["event".to_string()],
                vec![],
            ]
        );
    }

    #[test]
    fn test_typescript_signatures_and_return_types() {
        let source = r#"
interface Store {
  save(item: Item): Promise<void>;
}
function total(items: Item[]): number {
  return items.length;
}
declare function external(x: string): void;
"#;
        let defs = definitions(Language::TypeScript, "a.ts", source);
        let total = defs.iter().find(|d| d.0 == "total").expect("total");
        assert_eq!(total.1.as_deref(), Some("(items: Item[])"));
        assert_eq!(total.2.as_deref(), Some("number"));

        let save = defs.iter().find(|d| d.0 == "save").expect("save");
        assert_eq!(save.2.as_deref(), Some("Promise<void>"));
        assert!(defs.iter().any(|d| d.0 == "external"));
    }

    #[test]
    fn test_tsx_files_parse() {
        let source = r#"
export function App() {
  return <div onClick={() => track("click")}>hi</div>;
}
"#;
        let calls = calls_to(Language::TypeScript, "App.tsx", source, "track");
        assert_eq!(calls, vec![vec!["\"click\"".to_string()]]);
    }
}
