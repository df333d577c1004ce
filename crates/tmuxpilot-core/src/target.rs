//! Target records and caller-supplied target identifiers.

use serde::{Deserialize, Serialize};

/// An addressable pane (attached mode) or window (detached mode).
///
/// A `Target` is a point-in-time enumeration row, not a live object: the
/// pane itself is owned by the tmux server. `handle` is tmux-assigned and
/// stable for the target's lifetime; `index` is the ordinal position within
/// the containing window and shifts when neighbours are created or
/// destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Target {
    pub handle: String,
    pub index: u32,
    pub title: String,
    pub active: bool,
    pub width: u16,
    pub height: u16,
}

/// A caller-supplied target identifier, before resolution.
///
/// Parsed from a string: a small non-negative integer is an ordinal
/// `Index`, anything else is an opaque `Handle` that passes through
/// unresolved (a stale handle only fails when later used).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// Ordinal position within the current container.
    Index(u32),
    /// Opaque tmux-assigned handle, e.g. `%3`.
    Handle(String),
}

/// Error parsing a target identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTargetError;

impl std::fmt::Display for ParseTargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("empty target identifier")
    }
}

impl std::error::Error for ParseTargetError {}

impl std::str::FromStr for TargetSpec {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTargetError);
        }
        match s.parse::<u32>() {
            Ok(index) => Ok(TargetSpec::Index(index)),
            Err(_) => Ok(TargetSpec::Handle(s.to_string())),
        }
    }
}

impl std::fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetSpec::Index(index) => write!(f, "{index}"),
            TargetSpec::Handle(handle) => f.write_str(handle),
        }
    }
}

/// First target whose `index` matches, among the given enumeration.
///
/// Callers must re-enumerate before every lookup: indices shift when the
/// container mutates, so a cached match can point at the wrong pane.
pub fn find_by_index(targets: &[Target], index: u32) -> Option<&Target> {
    targets.iter().find(|t| t.index == index)
}

// ─── Tests ───────────────────────────────────────────────────────────
