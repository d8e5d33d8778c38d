//! # Domain Layer
//!
//! Core models of a reverse call tree run: languages, definitions, call sites
//! and the resulting graph. This layer knows nothing about tree-sitter.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
