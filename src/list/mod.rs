//! Linked-list data model and construction.
//!
//! An input list is described as a set of directed edges plus a head
//! identifier. `build` turns that into the traversal-ordered node
//! sequence; `ListGraph` answers diagnostic questions about the raw
//! edge set before it is flattened into a chain.

pub mod builder;
pub mod graph;
pub mod types;

pub use builder::build;
pub use graph::ListGraph;
pub use types::{Edge, Node, TERMINATOR};
