use tracing::debug;

use super::grammar::{preorder, GrammarProfile};
use super::SourceUnit;
use crate::domain::{CallSite, TOP_LEVEL_SCOPE};

/// Finds the calls to one symbol in a parsed file, each tagged with the
/// innermost enclosing definition.
pub struct CallSiteScanner<'p> {
    profile: &'p dyn GrammarProfile,
}

impl<'p> CallSiteScanner<'p> {
    pub fn new(profile: &'p dyn GrammarProfile) -> Self {
        Self { profile }
    }

    /// Call sites of `target` in `unit`, in source order.
    pub fn scan(&self, unit: &SourceUnit, target: &str) -> Vec<CallSite> {
        // error recovery leaves zero-width callee nodes behind
        if target.is_empty() {
            return Vec::new();
        }
        let source = unit.content();
        let mut sites = Vec::new();
        // (depth, name) of the definitions enclosing the current node
        let mut scopes: Vec<(usize, String)> = Vec::new();

        for (node, depth) in preorder(unit.tree().root_node()) {
            while scopes.last().is_some_and(|(scope_depth, _)| *scope_depth >= depth) {
                scopes.pop();
            }
            if let Some(definition) = self.profile.match_definition(node, source) {
                scopes.push((depth, definition.name));
            }
            if !self.profile.matches_call(node, source, target) {
                continue;
            }

            let caller = scopes
                .last()
                .map(|(_, name)| name.as_str())
                .unwrap_or(TOP_LEVEL_SCOPE);
            sites.push(CallSite::new(
                caller,
                self.profile.extract_arguments(node, source),
                unit.path_str(),
            ));
        }

        if !sites.is_empty() {
            debug!("{} call sites of '{}' in {}", sites.len(), target, unit.path_str());
        }
        sites
    }
}
