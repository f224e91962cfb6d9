//! ListBuilder — converts a raw edge set plus head identifier into the
//! traversal-ordered node sequence.
//!
//! The edge set is not required to be a well-formed function: duplicate
//! outgoing edges are resolved by a mapping keyed on `from` (last write
//! wins), and cycles, self-loops, and dangling references truncate the
//! traversal silently. No error conditions are signaled; malformed input
//! degrades to an empty or shortened sequence.

use std::collections::{HashMap, HashSet};

use super::types::{Edge, Node, TERMINATOR};

/// Build the ordered node sequence starting at `head`.
///
/// The node universe is every identifier appearing as an endpoint of a
/// valid edge, excluding the terminator itself. Traversal follows `next`
/// links and stops at the terminator, at an identifier absent from the
/// node mapping (this covers a head that names no known node), or upon
/// revisiting an already-seen identifier.
pub fn build(head: &str, edges: &[Edge]) -> Vec<Node> {
    let valid = || edges.iter().filter(|e| e.is_valid());

    // Node universe, keyed by identifier.
    let mut map: HashMap<String, Node> = HashMap::new();
    for edge in valid() {
        if edge.from != TERMINATOR {
            map.entry(edge.from.clone())
                .or_insert_with(|| Node::new(&edge.from));
        }
        if edge.to != TERMINATOR {
            map.entry(edge.to.clone())
                .or_insert_with(|| Node::new(&edge.to));
        }
    }

    // Connect successors. An edge to the terminator leaves `next` as is,
    // so a node's terminator row never overrides a real successor.
    for edge in valid() {
        if edge.to != TERMINATOR {
            if let Some(node) = map.get_mut(&edge.from) {
                node.next = Some(edge.to.clone());
            }
        }
    }

    // Walk from head, guarding against revisits.
    let mut ordered: Vec<Node> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = head;
    while current != TERMINATOR && !visited.contains(current) {
        let Some(node) = map.get(current) else { break };
        visited.insert(current);
        ordered.push(node.clone());
        match &node.next {
            Some(next) => current = next,
            None => break,
        }
    }
    ordered
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str) -> Edge {
        Edge::new(from, to)
    }

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_five_node_chain() {
        let edges = vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "D"),
            edge("D", "E"),
            edge("E", "-1"),
        ];
        let nodes = build("A", &edges);
        assert_eq!(ids(&nodes), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(nodes[0].next.as_deref(), Some("B"));
        assert!(nodes[4].next.is_none());
    }

    #[test]
    fn test_numeric_identifiers() {
        let edges = vec![
            edge("3", "1"),
            edge("1", "4"),
            edge("4", "2"),
            edge("2", "5"),
            edge("5", "-1"),
        ];
        let nodes = build("3", &edges);
        assert_eq!(ids(&nodes), vec!["3", "1", "4", "2", "5"]);
    }

    #[test]
    fn test_single_node() {
        let nodes = build("X", &[edge("X", "-1")]);
        assert_eq!(ids(&nodes), vec!["X"]);
        assert!(nodes[0].next.is_none());
    }

    #[test]
    fn test_absent_head_returns_empty() {
        let nodes = build("Z", &[edge("A", "B")]);
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_empty_edge_set() {
        assert!(build("A", &[]).is_empty());
    }

    #[test]
    fn test_blank_edge_fields_ignored() {
        let edges = vec![edge("A", "B"), edge("", "C"), edge("B", "")];
        let nodes = build("A", &edges);
        // "C" never enters the universe via the blank-from edge;
        // "B" keeps next = None because its blank-to edge is ignored.
        assert_eq!(ids(&nodes), vec!["A", "B"]);
        assert!(nodes[1].next.is_none());
    }

    #[test]
    fn test_self_loop_visited_once() {
        let nodes = build("A", &[edge("A", "A")]);
        assert_eq!(ids(&nodes), vec!["A"]);
    }

    #[test]
    fn test_cycle_truncates() {
        let edges = vec![edge("A", "B"), edge("B", "C"), edge("C", "A")];
        let nodes = build("A", &edges);
        assert_eq!(ids(&nodes), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dangling_reference_truncates() {
        // B points at D, but D never appears as a source or real target
        // of any valid edge besides this one, so traversal includes D
        // (it is in the universe) and stops there.
        let edges = vec![edge("A", "B"), edge("B", "D")];
        let nodes = build("A", &edges);
        assert_eq!(ids(&nodes), vec!["A", "B", "D"]);
        assert!(nodes[2].next.is_none());
    }

    #[test]
    fn test_duplicate_outgoing_last_wins() {
        let edges = vec![edge("A", "B"), edge("A", "C"), edge("C", "-1")];
        let nodes = build("A", &edges);
        assert_eq!(ids(&nodes), vec!["A", "C"]);
    }

    #[test]
    fn test_terminator_edge_does_not_override_successor() {
        let edges = vec![edge("A", "B"), edge("A", "-1"), edge("B", "-1")];
        let nodes = build("A", &edges);
        assert_eq!(ids(&nodes), vec!["A", "B"]);
    }

    #[test]
    fn test_terminator_never_becomes_a_node() {
        let nodes = build("-1", &[edge("A", "-1")]);
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_no_duplicates_in_output() {
        let edges = vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "B"), // loops back mid-list
        ];
        let nodes = build("A", &edges);
        let mut seen = std::collections::HashSet::new();
        for n in &nodes {
            assert!(seen.insert(n.id.clone()), "duplicate id {}", n.id);
        }
        assert_eq!(ids(&nodes), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_head_mid_chain() {
        let edges = vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "-1"),
        ];
        let nodes = build("B", &edges);
        assert_eq!(ids(&nodes), vec!["B", "C"]);
    }
}
