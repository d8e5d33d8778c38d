//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Parsing (Tree-sitter grammars per language)
//! - Corpus loading (repository walk, definition index)
//! - Call-site scanning over parsed files

pub mod adapter;

pub use adapter::*;
