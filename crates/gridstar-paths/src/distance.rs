use gridstar_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Remaining-cost estimate used by A*.
///
/// [`Manhattan`](Self::Manhattan) is the default on both topologies.
/// With unit-cost diagonal moves it can overestimate on 8-directional
/// grids, so paths found there are not guaranteed shortest;
/// [`Chebyshev`](Self::Chebyshev) is exact on an open 8-directional grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Chebyshev,
}

impl Heuristic {
    /// Estimate the cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Pos, to: Pos) -> i32 {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Chebyshev => chebyshev(from, to),
        }
    }
}
