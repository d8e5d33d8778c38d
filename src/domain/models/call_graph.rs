use serde::{Deserialize, Serialize};

use super::FunctionDefinition;

/// A node of the reverse call tree.
///
/// The same function name can appear on many nodes, one per call site that
/// reaches its successor. Only `id` identifies a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub function: String,
    /// Arguments of the call that reaches the successor node. Empty for the root.
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

impl GraphNode {
    pub fn new(id: usize, function: impl Into<String>) -> Self {
        Self {
            id,
            function: function.into(),
            arguments: Vec::new(),
            file: None,
            code: None,
            parameters: None,
            return_type: None,
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<String>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attach the code, parameters and return type of a resolved definition.
    pub fn with_definition(mut self, definition: Option<&FunctionDefinition>) -> Self {
        if let Some(def) = definition {
            self.code = Some(def.code().to_string());
            self.parameters = def.parameters().map(String::from);
            self.return_type = def.return_type().map(String::from);
        }
        self
    }
}

/// Directed edge from a caller node to the node of the symbol it calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
}

/// Result of one run: every node and edge of the reverse call tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: GraphNode) -> usize {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.edges.push(GraphEdge { from, to });
    }

    /// All nodes carrying `function`, in creation order.
    pub fn nodes_named<'a>(&'a self, function: &'a str) -> impl Iterator<Item = &'a GraphNode> + 'a {
        self.nodes.iter().filter(move |n| n.function == function)
    }

    /// Ids of the nodes that have an edge into `id`.
    pub fn callers_of(&self, id: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|e| e.to == id)
            .map(|e| e.from)
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
