use crate::domain::{CallSite, DomainError, FunctionDefinition};

/// Read access to a loaded corpus, as needed to grow a reverse call tree.
pub trait CallSiteSource {
    /// Every call expression anywhere in the corpus that invokes `symbol`,
    /// in corpus order and source order within each file.
    fn find_call_sites(&self, symbol: &str) -> Result<Vec<CallSite>, DomainError>;

    /// The canonical definition of `symbol`, if any file defines it.
    fn canonical_definition(&self, symbol: &str) -> Option<&FunctionDefinition>;
}
