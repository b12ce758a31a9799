//! The [`NodeState`] type: what a cell currently is, as far as search and
//! display are concerned.

use std::fmt;

/// Traversal/display state of a node. Exactly one is active at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Empty,
    /// Discovered and queued, not yet expanded.
    Open,
    /// Expanded.
    Closed,
    Barrier,
    Start,
    End,
    /// Member of the last reconstructed path.
    Path,
}

impl NodeState {
    /// All states, in declaration order.
    pub const ALL: [NodeState; 7] = [
        Self::Empty,
        Self::Open,
        Self::Closed,
        Self::Barrier,
        Self::Start,
        Self::End,
        Self::Path,
    ];

    /// The character used for this state in ASCII maps.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.glyph() == ch)
    }

    /// Whether this state is a transient search mark (Open, Closed or Path).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}
