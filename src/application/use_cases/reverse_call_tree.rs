use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::CallSiteSource;
use crate::domain::{CallGraph, CallSite, DomainError, GraphNode};

/// Per-run traversal state: which names have been expanded and the next node id.
#[derive(Debug, Default)]
struct ExpansionContext {
    graph: CallGraph,
    expanded: HashSet<String>,
    next_id: usize,
}

impl ExpansionContext {
    fn allocate_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Pending call sites of one expanded symbol.
struct Frame {
    target_id: usize,
    call_sites: std::vec::IntoIter<CallSite>,
}

/// Use case: grow a reverse call tree outward from a target symbol.
///
/// Every call site found produces its own node and edge, but the callers of a
/// given name are searched for at most once per run. Later nodes for an
/// already expanded name are recorded as leaves. This is what bounds the
/// traversal on recursive and mutually recursive code.
pub struct ReverseCallTreeUseCase {
    source: Arc<dyn CallSiteSource>,
}

impl ReverseCallTreeUseCase {
    pub fn new(source: Arc<dyn CallSiteSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self, symbol: &str) -> Result<CallGraph, DomainError> {
        let mut ctx = ExpansionContext::default();

        let root_id = ctx.allocate_id();
        ctx.graph.add_node(
            GraphNode::new(root_id, symbol).with_definition(self.source.canonical_definition(symbol)),
        );

        // Depth-first with an explicit stack: a caller's subtree is numbered
        // before the next call site of the same callee.
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.expand(symbol, root_id, &mut ctx)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(site) = frame.call_sites.next() else {
                stack.pop();
                continue;
            };
            let target_id = frame.target_id;
            let is_top_level = site.is_top_level();
            let (caller, arguments, file_path) = site.into_parts();

            let caller_id = ctx.allocate_id();
            ctx.graph.add_node(
                GraphNode::new(caller_id, caller.as_str())
                    .with_arguments(arguments)
                    .with_file(file_path)
                    .with_definition(self.source.canonical_definition(&caller)),
            );
            ctx.graph.add_edge(caller_id, target_id);

            if is_top_level {
                continue;
            }
            if let Some(next) = self.expand(&caller, caller_id, &mut ctx)? {
                stack.push(next);
            }
        }

        info!(
            "Reverse call tree for '{}': {} nodes, {} edges, {} symbols expanded",
            symbol,
            ctx.graph.node_count(),
            ctx.graph.edge_count(),
            ctx.expanded.len()
        );

        Ok(ctx.graph)
    }

    /// Look up the callers of `name` unless they were already searched for.
    fn expand(
        &self,
        name: &str,
        node_id: usize,
        ctx: &mut ExpansionContext,
    ) -> Result<Option<Frame>, DomainError> {
        if !ctx.expanded.insert(name.to_string()) {
            debug!("'{}' already expanded, node {} kept as leaf", name, node_id);
            return Ok(None);
        }

        let call_sites = self.source.find_call_sites(name)?;
        debug!("Expanding '{}' (node {}): {} call sites", name, node_id, call_sites.len());

        Ok(Some(Frame {
            target_id: node_id,
            call_sites: call_sites.into_iter(),
        }))
    }
}
