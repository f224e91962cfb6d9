//! Parser trait and the parsed input description.

use crate::list::Edge;

/// The parsed form of an input: a head identifier (if the source names
/// one) plus the edge rows in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSpec {
    pub head: Option<String>,
    pub edges: Vec<Edge>,
}

impl ListSpec {
    /// Resolve the head identifier, preferring an explicit override
    /// (e.g. a CLI flag) over the source's own `head:` directive.
    pub fn resolve_head(&self, head_override: Option<&str>) -> Result<String, String> {
        head_override
            .map(str::to_string)
            .or_else(|| self.head.clone())
            .ok_or_else(|| "no 'head:' directive found and no head override given".to_string())
    }
}

/// Trait for input parsers.
pub trait Parser {
    /// Parse the input source string into a ListSpec.
    fn parse(&self, src: &str) -> Result<ListSpec, String>;
}

// ─── Tests ───────────────────────────────────────────────────────────────────
