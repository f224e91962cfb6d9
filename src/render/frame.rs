//! FrameRenderer — paints one frame per simulation step.
//!
//! A frame is the node boxes in traversal order joined by arrows, with
//! pointer markers above the boxes (`T` for the tortoise, `H` for the
//! hare, `TH` when they share a position), the step narration beneath,
//! and a `Middle node:` line on the completion frame.

use crate::config::RenderConfig;
use crate::list::Node;
use crate::sim::Step;

use super::canvas::{Canvas, Rect};
use super::charset::{BoxChars, CharSet};

/// Gap between adjacent node boxes, wide enough for ` ──► `.
const GAP: usize = 5;
/// Marker row, box rows, nothing else.
const FRAME_HEIGHT: usize = 4;
const BOX_TOP: usize = 1;
const BOX_HEIGHT: usize = 3;

pub struct FrameRenderer {
    config: RenderConfig,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn charset(&self) -> CharSet {
        if self.config.unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }

    fn box_width(&self, node: &Node) -> usize {
        node.id.chars().count() + 2 * self.config.padding + 2
    }

    /// Render a single frame. Empty node sequences render to an empty
    /// string; the caller owns any "nothing to show" messaging.
    pub fn render_frame(&self, nodes: &[Node], step: &Step) -> String {
        if nodes.is_empty() {
            return String::new();
        }
        let bc = BoxChars::for_charset(self.charset());

        // Box x-positions, left to right.
        let widths: Vec<usize> = nodes.iter().map(|n| self.box_width(n)).collect();
        let mut xs: Vec<usize> = Vec::with_capacity(nodes.len());
        let mut x = 0;
        for w in &widths {
            xs.push(x);
            x += w + GAP;
        }
        let total_width = x.saturating_sub(GAP);

        let mut canvas = Canvas::new(total_width, FRAME_HEIGHT);
        let mid_row = BOX_TOP + BOX_HEIGHT / 2;
        for (i, node) in nodes.iter().enumerate() {
            let (bx, bw) = (xs[i], widths[i]);
            canvas.draw_box(Rect::new(bx, BOX_TOP, bw, BOX_HEIGHT), &bc);
            canvas.write_str(bx + 1 + self.config.padding, mid_row, &node.id);
            if i + 1 < nodes.len() {
                canvas.hline(mid_row, bx + bw + 1, bx + bw + 2, bc.horizontal);
                canvas.set(bx + bw + 3, mid_row, bc.arrow_right);
            }
        }

        // Pointer markers above the boxes.
        let center = |i: usize| xs[i] + widths[i] / 2;
        if step.tortoise_pos == step.hare_pos {
            if step.tortoise_pos < nodes.len() {
                let cx = center(step.tortoise_pos);
                canvas.write_str(cx.saturating_sub(1), 0, "TH");
            }
        } else {
            if step.tortoise_pos < nodes.len() {
                canvas.set(center(step.tortoise_pos), 0, 'T');
            }
            if step.hare_pos < nodes.len() {
                canvas.set(center(step.hare_pos), 0, 'H');
            }
        }

        let mut out = canvas.render_to_string();
        out.push_str("\n\n");
        out.push_str(&step.description);
        if let Some(middle) = &step.middle_node {
            out.push_str(&format!("\nMiddle node: {}", middle.id));
        }
        out
    }

    /// Render every step, frames separated by a blank line.
    pub fn render_all(&self, nodes: &[Node], steps: &[Step]) -> String {
        steps
            .iter()
            .map(|step| self.render_frame(nodes, step))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
