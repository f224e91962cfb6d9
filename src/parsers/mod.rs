//! Input parsing — plain-text edge-list format.

pub mod base;
pub mod edgelist;

pub use base::{ListSpec, Parser};
pub use edgelist::EdgeListParser;

/// Parse an edge-list source into a [`ListSpec`].
pub fn parse(src: &str) -> Result<ListSpec, String> {
    EdgeListParser.parse(src)
}
