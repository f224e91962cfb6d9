//! ListGraph — petgraph view of the raw edge set, used for diagnostics.
//!
//! The builder flattens the edge set into a single chain; this wrapper
//! keeps the full directed graph so callers can warn about input that
//! will be silently truncated or discarded: cycles, nodes with more
//! than one outgoing edge, and nodes unreachable from the head.
//! Advisory only — nothing here ever blocks `build`.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use super::types::{Edge, TERMINATOR};

/// Directed-graph view of an edge set. Terminator endpoints and blank
/// fields are excluded, matching the builder's node universe.
pub struct ListGraph {
    pub digraph: DiGraph<String, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl ListGraph {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut digraph: DiGraph<String, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for edge in edges.iter().filter(|e| e.is_valid()) {
            for id in [&edge.from, &edge.to] {
                if id != TERMINATOR && !node_index.contains_key(id.as_str()) {
                    let idx = digraph.add_node(id.clone());
                    node_index.insert(id.clone(), idx);
                }
            }
            if edge.from != TERMINATOR && edge.to != TERMINATOR {
                digraph.add_edge(node_index[&edge.from], node_index[&edge.to], ());
            }
        }

        Self {
            digraph,
            node_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the edge set contains a directed cycle
    /// (including self-loops). Traversal still terminates; the cycle
    /// guard just truncates the ordered list.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.digraph)
    }

    /// Identifiers with more than one outgoing edge, sorted. For these
    /// the builder keeps only the last edge processed.
    pub fn branch_points(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .digraph
            .node_indices()
            .filter(|&idx| {
                self.digraph
                    .edges_directed(idx, Direction::Outgoing)
                    .count()
                    > 1
            })
            .map(|idx| self.digraph[idx].clone())
            .collect();
        ids.sort();
        ids
    }

    /// Identifiers that no walk from `head` can reach, sorted.
    ///
    /// Follows every outgoing edge, so this is an upper bound on what
    /// the single-successor traversal will visit; anything listed here
    /// is guaranteed to be absent from the ordered list. If `head` is
    /// unknown, every identifier is unreachable.
    pub fn unreachable_from(&self, head: &str) -> Vec<String> {
        let mut reached: HashSet<NodeIndex> = HashSet::new();
        if let Some(&start) = self.node_index.get(head) {
            let mut dfs = Dfs::new(&self.digraph, start);
            while let Some(idx) = dfs.next(&self.digraph) {
                reached.insert(idx);
            }
        }
        let mut ids: Vec<String> = self
            .digraph
            .node_indices()
            .filter(|idx| !reached.contains(idx))
            .map(|idx| self.digraph[idx].clone())
            .collect();
        ids.sort();
        ids
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
