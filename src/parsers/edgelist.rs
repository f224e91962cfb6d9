//! Line-based parser for the edge-list format.
//!
//! ```text
//! # the conga line
//! head: A
//! A -> B
//! B -> C
//! C -> -1
//! ```
//!
//! `head:` names the starting identifier (the last directive wins, like
//! re-submitting the form). `X -> Y` appends an edge; `-1` as the target
//! marks the end of the list. Blank lines and `#` comments are skipped.
//! Any other line is ignored rather than rejected — the downstream
//! builder already treats malformed input permissively.

use regex::Regex;

use crate::list::Edge;

use super::base::{ListSpec, Parser};

const EDGE_PATTERN: &str = r"^\s*(\S+)\s*->\s*(\S+)\s*$";
const HEAD_PATTERN: &str = r"^\s*head\s*:\s*(\S+)\s*$";

/// Parser for the plain-text edge-list format.
pub struct EdgeListParser;

impl Parser for EdgeListParser {
    fn parse(&self, src: &str) -> Result<ListSpec, String> {
        let edge_re = Regex::new(EDGE_PATTERN).map_err(|e| e.to_string())?;
        let head_re = Regex::new(HEAD_PATTERN).map_err(|e| e.to_string())?;

        let mut spec = ListSpec::default();
        for raw in src.lines() {
            // Strip trailing comments.
            let line = match raw.find('#') {
                Some(i) => &raw[..i],
                None => raw,
            };
            if line.trim().is_empty() {
                continue;
            }
            if let Some(caps) = head_re.captures(line) {
                spec.head = Some(caps[1].to_string());
            } else if let Some(caps) = edge_re.captures(line) {
                spec.edges.push(Edge::new(&caps[1], &caps[2]));
            }
            // Anything else is ignored.
        }
        Ok(spec)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
