pub mod grammar;

mod call_site_scanner;
mod corpus_loader;
mod treesitter_parser;

pub use call_site_scanner::*;
pub use corpus_loader::*;
pub use treesitter_parser::*;
