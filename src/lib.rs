//! tortoise-hare — middle-of-list finder with step-by-step visualization.
//!
//! Implements the classic two-pointer ("tortoise and hare") midpoint
//! walk over a singly linked list described as a set of directed edges
//! plus a head identifier, and renders each discrete step as an
//! ASCII/Unicode frame.
//!
//! Pipeline: parse edge-list source → build ordered node sequence →
//! simulate pointer steps → render frames (or export JSON).
//!
//! Public API: [`visualize_dsl`], [`export_dsl_json`], and the module
//! building blocks they compose.

pub mod config;
pub mod export;
pub mod list;
pub mod parsers;
pub mod render;
pub mod sim;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::RenderConfig;

use export::Visualization;
use render::FrameRenderer;

/// Parse an edge-list source and render every simulation step as a
/// frame, frames separated by blank lines.
///
/// `head_override` takes precedence over the source's `head:`
/// directive. An input whose traversal yields no nodes renders to an
/// empty string; the caller owns the user-facing messaging for that.
pub fn visualize_dsl(
    src: &str,
    unicode: bool,
    padding: usize,
    head_override: Option<&str>,
) -> Result<String, String> {
    let spec = parsers::parse(src)?;
    let head = spec.resolve_head(head_override)?;
    let nodes = list::build(&head, &spec.edges);
    let steps = sim::simulate(&nodes);
    let renderer = FrameRenderer::new(RenderConfig { unicode, padding });
    Ok(renderer.render_all(&nodes, &steps))
}

/// Parse an edge-list source and export the node and step sequences as
/// pretty-printed JSON for an external presentation layer.
pub fn export_dsl_json(src: &str, head_override: Option<&str>) -> Result<String, String> {
    let spec = parsers::parse(src)?;
    let head = spec.resolve_head(head_override)?;
    let nodes = list::build(&head, &spec.edges);
    let steps = sim::simulate(&nodes);
    Visualization::new(nodes, steps).to_json()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
