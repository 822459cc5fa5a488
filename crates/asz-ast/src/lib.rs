//! AST types for the asz semantic analyzer.
//!
//! The parser is an external collaborator; this crate only fixes the shape of
//! the tree the semantic passes consume:
//! - `base` - `NodeIndex` handles
//! - `node` - `NodeKind`, `Node` and the per-kind payloads
//! - `node_arena` - node creation (`add_*` methods) with parent links
//! - `node_access` - typed accessors, positional children and ancestor walks

pub mod base;
pub use base::NodeIndex;

pub mod node;
pub use node::*;

mod node_access;
mod node_arena;

#[cfg(test)]
#[path = "../tests/node_arena_tests.rs"]
mod node_arena_tests;
