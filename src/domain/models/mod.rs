mod call_graph;
mod call_site;
mod definition;
mod language;

pub use call_graph::*;
pub use call_site::*;
pub use definition::*;
pub use language::*;
