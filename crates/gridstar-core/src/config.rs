use crate::grid::Grid;
use crate::topology::Topology;

/// Construction parameters of a [`Grid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Rows (and columns) of the square grid.
    pub rows: usize,
    /// Total physical width, split evenly between rows.
    pub width: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub topology: Topology,
}

impl GridConfig {
    /// A 4-directional configuration.
    pub const fn new(rows: usize, width: u32) -> Self {
        Self {
            rows,
            width,
            topology: Topology::Cardinal,
        }
    }

    /// Set the topology (builder).
    pub const fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Allocate a fresh grid from this configuration.
    pub fn build(&self) -> Grid {
        Grid::new(self.rows, self.width, self.topology)
    }
}

impl From<&Grid> for GridConfig {
    fn from(g: &Grid) -> Self {
        Self {
            rows: g.rows(),
            width: g.width(),
            topology: g.topology(),
        }
    }
}
