//! StepSimulator — deterministic two-pointer ("Floyd") midpoint walk.
//!
//! Consumes the ordered node sequence and produces the full step
//! sequence up front. Pure and synchronous: same input, same output,
//! no I/O, no shared state. Playback over time happens elsewhere.

use crate::list::Node;

use super::step::Step;

/// Simulate the tortoise and hare walk over `nodes`.
///
/// The tortoise advances one position per step, the hare two (capped at
/// the last position, hare updated first). For an odd-length list the
/// tortoise lands on the exact middle; for an even length it lands on
/// the second of the two middle elements.
///
/// An empty input produces no steps. A single-node input produces two:
/// the initial step is emitted unconditionally, then the completion
/// step, both at position 0.
pub fn simulate(nodes: &[Node]) -> Vec<Step> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let len = nodes.len();

    let mut tortoise = 0usize;
    let mut hare = 0usize;
    let mut count = 0usize;

    let mut steps = vec![Step {
        index: 0,
        tortoise_pos: 0,
        hare_pos: 0,
        description: "Initialize: Both pointers start at the head (position 0)".to_string(),
        is_complete: false,
        middle_node: None,
    }];

    while hare < len - 1 && hare + 1 < len {
        count += 1;
        tortoise += 1;
        hare = (hare + 2).min(len - 1);

        steps.push(Step {
            index: count,
            tortoise_pos: tortoise,
            hare_pos: hare,
            description: format!(
                "Step {count}: Tortoise moves to position {tortoise} ({}), \
                 Hare moves to position {hare} ({})",
                nodes[tortoise].id, nodes[hare].id
            ),
            is_complete: false,
            middle_node: None,
        });

        // Hare has reached, or would overshoot, the end of the list.
        if hare >= len - 1 || hare + 2 > len {
            break;
        }
    }

    steps.push(Step {
        index: count + 1,
        tortoise_pos: tortoise,
        hare_pos: hare,
        description: format!(
            "Completed! Hare reached the end. Middle node is at position {tortoise} ({})",
            nodes[tortoise].id
        ),
        is_complete: true,
        middle_node: Some(nodes[tortoise].clone()),
    });

    steps
}

// ─── Tests ───────────────────────────────────────────────────────────────────
