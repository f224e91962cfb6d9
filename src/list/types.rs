//! Edge and Node value types shared by the builder, simulator, and renderers.

use serde::Serialize;

/// Sentinel identifier meaning "no successor".
pub const TERMINATOR: &str = "-1";

// ─── Edge ────────────────────────────────────────────────────────────────────

/// A directed connection between two node identifiers.
///
/// `to` may be [`TERMINATOR`] to mark the end of the list. Either field
/// may be blank (an incomplete row in the input form); such edges are
/// ignored by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// An edge is only registered when both endpoints are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.from.is_empty() && !self.to.is_empty()
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

/// A list node: identifier plus the identifier of its successor, if any.
///
/// Immutable once built; `next` is `None` for the tail and for nodes
/// with no registered outgoing edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub next: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            next: None,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
