mod reverse_call_tree;

pub use reverse_call_tree::*;
