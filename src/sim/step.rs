//! A single discrete state of the tortoise and hare walk.

use serde::Serialize;

use crate::list::Node;

/// One animation step: pointer positions, narration, and, on the final
/// step, the resulting middle node.
///
/// Serialized field names are camelCase so a browser shell can consume
/// the step sequence directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Monotonic step counter, starting at 0.
    pub index: usize,
    /// Position of the slow pointer in the ordered list.
    pub tortoise_pos: usize,
    /// Position of the fast pointer in the ordered list.
    pub hare_pos: usize,
    /// Narration shown alongside the frame.
    pub description: String,
    /// True exactly once, on the terminal step.
    pub is_complete: bool,
    /// The middle node, present only on the terminal step.
    pub middle_node: Option<Node>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
