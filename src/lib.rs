pub mod application;
pub mod connector;
pub mod domain;

pub use application::{CallSiteSource, ReverseCallTreeUseCase};

pub use connector::{CallSiteScanner, Corpus, CorpusLoader, SourceUnit, TreeSitterParser};

pub use domain::{
    CallGraph, CallSite, DefinitionIndex, DomainError, FunctionDefinition, GraphEdge, GraphNode,
    Language, TOP_LEVEL_SCOPE,
};
