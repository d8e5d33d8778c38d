//! Integration tests for callertree.
//!
//! These drive the corpus loader and the reverse call tree use case end to end
//! over temporary repositories and the checked-in fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use callertree::{CallGraph, CorpusLoader, GraphNode, Language, ReverseCallTreeUseCase, TOP_LEVEL_SCOPE};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("Failed to create dir");
    fs::write(path, content).expect("Failed to write file");
}

fn build(root: &Path, language: Language, symbol: &str) -> CallGraph {
    let corpus = CorpusLoader::new(language)
        .expect("Failed to create loader")
        .load(root);
    ReverseCallTreeUseCase::new(Arc::new(corpus))
        .execute(symbol)
        .expect("Failed to build reverse call tree")
}

fn names(graph: &CallGraph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.function.as_str()).collect()
}

fn edges(graph: &CallGraph) -> Vec<(usize, usize)> {
    graph.edges.iter().map(|e| (e.from, e.to)).collect()
}

fn file_name(node: &GraphNode) -> Option<&str> {
    node.file
        .as_deref()
        .and_then(|f| Path::new(f).file_name())
        .and_then(|f| f.to_str())
}

#[test]
fn test_chain_of_callers() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "app.py",
        "def target():\n    pass\n\ndef helper():\n    target()\n\ndef main():\n    helper()\n",
    );

    let graph = build(dir.path(), Language::Python, "target");

    assert_eq!(names(&graph), vec!["target", "helper", "main"]);
    assert_eq!(edges(&graph), vec![(1, 0), (2, 1)]);
}

#[test]
fn test_independent_callers() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.py", "def a():\n    target()\n");
    write(&dir, "b.py", "def b():\n    target()\n");

    let graph = build(dir.path(), Language::Python, "target");

    assert_eq!(names(&graph), vec!["target", "a", "b"]);
    assert_eq!(edges(&graph), vec![(1, 0), (2, 0)]);
    assert_eq!(file_name(&graph.nodes[1]), Some("a.py"));
    assert_eq!(file_name(&graph.nodes[2]), Some("b.py"));
}

#[test]
fn test_each_call_site_is_its_own_node() {
    let dir = TempDir::new().unwrap();
    write(&dir, "x.py", "def x():\n    target(1)\n    target(2)\n");

    let graph = build(dir.path(), Language::Python, "target");

    assert_eq!(names(&graph), vec!["target", "x", "x"]);
    assert_eq!(edges(&graph), vec![(1, 0), (2, 0)]);

    let callers: Vec<&GraphNode> = graph.nodes_named("x").collect();
    assert_eq!(callers.len(), 2);
    assert_eq!(callers[0].arguments, vec!["1".to_string()]);
    assert_eq!(callers[1].arguments, vec!["2".to_string()]);
    assert_eq!(graph.nodes_named("target").count(), 1);
}

#[test]
fn test_repeated_call_sites_make_one_node_each() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "jobs.py",
        "def batch():\n    target('a')\n    target('b')\n    target('c')\n\ndef cron():\n    batch()\n",
    );

    let graph = build(dir.path(), Language::Python, "target");

    let batches: Vec<usize> = graph.nodes_named("batch").map(|n| n.id).collect();
    assert_eq!(batches.len(), 3);
    // only the first batch node is expanded
    assert_eq!(graph.callers_of(batches[0]).len(), 1);
    assert!(graph.callers_of(batches[1]).is_empty());
    assert!(graph.callers_of(batches[2]).is_empty());
    assert_eq!(graph.nodes_named("cron").count(), 1);
}

#[test]
fn test_python_fixture_tree() {
    let graph = build(&fixture("python_shop"), Language::Python, "charge");

    assert_eq!(
        names(&graph),
        vec!["charge", "refund", "checkout", TOP_LEVEL_SCOPE, "retry", "retry"]
    );
    assert_eq!(edges(&graph), vec![(1, 0), (2, 0), (3, 2), (4, 0), (5, 4)]);

    let root = &graph.nodes[0];
    assert!(root.file.is_none());
    assert!(root.arguments.is_empty());
    assert!(root.code.as_deref().unwrap().starts_with("def charge(order, amount):"));
    assert_eq!(root.parameters.as_deref(), Some("(order, amount)"));

    let refund = &graph.nodes[1];
    assert_eq!(refund.arguments, vec!["order".to_string(), "-order.total".to_string()]);
    assert_eq!(file_name(refund), Some("billing.py"));

    let module = &graph.nodes[3];
    assert_eq!(module.arguments, vec!["current_order".to_string()]);
    assert_eq!(file_name(module), Some("orders.py"));
    assert!(module.code.is_none());

    // the recursive call is recorded but retry is not searched again
    let recursive = &graph.nodes[5];
    assert_eq!(recursive.arguments, vec!["order".to_string()]);
    assert!(graph.callers_of(5).is_empty());
    assert!(recursive.code.as_deref().unwrap().starts_with("def retry(order):"));
}

#[test]
fn test_mutual_recursion_terminates() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "loop.py",
        "def ping(n):\n    pong(n)\n    target()\n\ndef pong(n):\n    ping(n - 1)\n",
    );

    let graph = build(dir.path(), Language::Python, "target");

    assert_eq!(names(&graph), vec!["target", "ping", "pong", "ping"]);
    assert_eq!(edges(&graph), vec![(1, 0), (2, 1), (3, 2)]);
    assert_eq!(graph.nodes[2].arguments, vec!["n - 1".to_string()]);
    assert_eq!(graph.nodes[3].arguments, vec!["n".to_string()]);
    assert!(graph.callers_of(3).is_empty());
}

#[test]
fn test_later_occurrences_of_expanded_name_are_leaves() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "m.py",
        "def shared():\n    target()\n    other()\n\ndef other():\n    target()\n\ndef top():\n    shared()\n",
    );

    let graph = build(dir.path(), Language::Python, "target");

    // target <- shared <- top ; target <- other <- shared (leaf)
    assert_eq!(names(&graph), vec!["target", "shared", "top", "other", "shared"]);
    assert_eq!(edges(&graph), vec![(1, 0), (2, 1), (3, 0), (4, 3)]);
    assert!(graph.callers_of(4).is_empty());
}

#[test]
fn test_c_prototype_loses_to_definition() {
    let graph = build(&fixture("c_geometry"), Language::C, "area");

    assert_eq!(names(&graph), vec!["area", "report", "main", "report"]);
    assert_eq!(edges(&graph), vec![(1, 0), (2, 1), (3, 0)]);

    let root = &graph.nodes[0];
    assert!(root.code.as_deref().unwrap().starts_with("int area(int w, int h) {"));
    assert_eq!(root.return_type.as_deref(), Some("int"));

    assert_eq!(graph.nodes[1].arguments, vec!["w".to_string(), "h".to_string()]);
    assert_eq!(graph.nodes[2].arguments, vec!["3".to_string(), "4".to_string()]);
    assert_eq!(graph.nodes[3].arguments, vec!["h".to_string(), "w".to_string()]);
    assert_eq!(file_name(&graph.nodes[1]), Some("main.c"));
}

#[test]
fn test_hidden_directories_and_unreadable_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/app.py", "def app():\n    target()\n");
    write(&dir, ".git/hooks/hook.py", "def hook():\n    target()\n");
    write(&dir, "src/.tox/env.py", "def env():\n    target()\n");
    fs::write(dir.path().join("src/latin1.py"), b"def bad():\n    target('\xe9')\n").unwrap();

    let graph = build(dir.path(), Language::Python, "target");

    assert_eq!(names(&graph), vec!["target", "app"]);
}

#[test]
fn test_unknown_target_yields_lone_root() {
    let graph = build(&fixture("python_shop"), Language::Python, "does_not_exist");

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.nodes[0].code.is_none());
}

#[test]
fn test_go_methods_and_package_calls() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "store/store.go",
        "package store\n\nfunc Save(key string, v int) error {\n\treturn nil\n}\n",
    );
    write(
        &dir,
        "api/handler.go",
        "package api\n\nfunc (h *Handler) Put(k string) {\n\tstore.Save(k, 1)\n}\n",
    );

    let graph = build(dir.path(), Language::Go, "Save");

    assert_eq!(names(&graph), vec!["Save", "Put"]);
    assert_eq!(graph.nodes[1].arguments, vec!["k".to_string(), "1".to_string()]);
    assert_eq!(graph.nodes[0].return_type.as_deref(), Some("error"));
}

#[test]
fn test_typescript_arrow_function_callers() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "api.ts",
        r#"
export function fetchUser(id: string): Promise<User> {
    return api.get(id);
}

export const loadProfile = async (id: string) => fetchUser(id);
"#,
    );

    let graph = build(dir.path(), Language::TypeScript, "fetchUser");

    assert_eq!(names(&graph), vec!["fetchUser", "loadProfile"]);
    assert_eq!(graph.nodes[0].return_type.as_deref(), Some("Promise<User>"));
    assert_eq!(graph.nodes[1].arguments, vec!["id".to_string()]);
    assert_eq!(file_name(&graph.nodes[1]), Some("api.ts"));
}

#[test]
fn test_java_method_chain() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "App.java",
        r#"
public class App {
    public static void main(String[] args) {
        Service s = new Service(1);
        s.run();
    }
}

class Service {
    Service(int n) {}
    void run() { helper(); }
    void helper() {}
}
"#,
    );

    let graph = build(dir.path(), Language::Java, "helper");
    assert_eq!(names(&graph), vec!["helper", "run", "main"]);
    assert_eq!(edges(&graph), vec![(1, 0), (2, 1)]);

    let constructed = build(dir.path(), Language::Java, "Service");
    assert_eq!(names(&constructed), vec!["Service", "main"]);
    assert_eq!(constructed.nodes[1].arguments, vec!["1".to_string()]);
}

#[test]
fn test_json_shape() {
    let graph = build(&fixture("python_shop"), Language::Python, "charge");
    let json = serde_json::to_string(&graph).unwrap();

    let root_json = serde_json::to_string(&graph.nodes[0]).unwrap();
    assert!(root_json.starts_with(r#"{"id":0,"function":"charge","arguments":[],"code":"#));
    assert!(!root_json.contains("\"file\""));

    let caller_json = serde_json::to_string(&graph.nodes[1]).unwrap();
    let file_at = caller_json.find("\"file\"").unwrap();
    assert!(caller_json.find("\"arguments\"").unwrap() < file_at);
    assert!(file_at < caller_json.find("\"code\"").unwrap());

    assert!(json.contains(r#""edges":[{"from":1,"to":0}"#));

    let back: CallGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, graph);
}
