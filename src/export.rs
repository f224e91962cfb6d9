//! JSON export of a computed visualization for browser shells.
//!
//! Field names are camelCase throughout so the step sequence can drive
//! a web presentation layer without translation.

use serde::Serialize;

use crate::list::Node;
use crate::sim::Step;

/// The complete output of one recomputation: the ordered node sequence
/// plus the full step sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    pub nodes: Vec<Node>,
    pub steps: Vec<Step>,
}

impl Visualization {
    pub fn new(nodes: Vec<Node>, steps: Vec<Step>) -> Self {
        Self { nodes, steps }
    }

    /// The middle node, if the simulation completed (non-empty input).
    pub fn middle_node(&self) -> Option<&Node> {
        self.steps
            .last()
            .and_then(|step| step.middle_node.as_ref())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
