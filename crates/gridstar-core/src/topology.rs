use crate::geom::Pos;

/// Down-right, up-right, down-left, up-left.
const DIAGONAL: [Pos; 4] = [
    Pos::new(1, 1),
    Pos::new(-1, 1),
    Pos::new(1, -1),
    Pos::new(-1, -1),
];

/// Down, up, right, left.
const CARDINAL: [Pos; 4] = [
    Pos::new(1, 0),
    Pos::new(-1, 0),
    Pos::new(0, 1),
    Pos::new(0, -1),
];

/// Diagonals first, then cardinals.
const ALL: [Pos; 8] = [
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
    CARDINAL[0],
    CARDINAL[1],
    CARDINAL[2],
    CARDINAL[3],
];

/// Neighbor connectivity of a grid.
///
/// The offset order returned by [`offsets`](Self::offsets) is fixed and
/// drives the expansion order of equal-score nodes during search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Topology {
    /// 4-directional movement.
    #[default]
    Cardinal,
    /// 8-directional movement. Diagonal moves cost the same as cardinal ones.
    Diagonal,
}

impl Topology {
    /// Candidate offsets in the order neighbors are collected.
    #[inline]
    pub fn offsets(self) -> &'static [Pos] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::Diagonal => &ALL,
        }
    }

    /// Whether diagonal moves are allowed.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(self, Self::Diagonal)
    }

    /// Candidate positions around `p`, in collection order, keeping only
    /// those for which `keep` returns `true`.
    pub fn candidates(self, p: Pos, keep: impl Fn(Pos) -> bool) -> impl Iterator<Item = Pos> {
        self.offsets()
            .iter()
            .map(move |&d| p + d)
            .filter(move |&n| keep(n))
    }
}
