//! Collaborator-side grid editing.
//!
//! [`GridEditor`] applies the editing discipline a front end uses to build a
//! search problem: the first painted cell becomes the start, the second the
//! end, and every further one a barrier. The editor is what keeps "at most
//! one start, at most one end" true; the grid itself does not check it.

use log::debug;

use crate::config::GridConfig;
use crate::geom::Pos;
use crate::grid::Grid;
use crate::state::NodeState;
use crate::topology::Topology;

/// Owns a [`Grid`] together with its current endpoints.
#[derive(Clone, Debug)]
pub struct GridEditor {
    config: GridConfig,
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl GridEditor {
    /// A fresh, empty grid built from `config`.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            grid: config.build(),
            start: None,
            end: None,
        }
    }

    /// Adopt an existing grid. The first Start and End nodes (row-major)
    /// become the endpoints; any others are reset to Empty.
    pub fn from_grid(mut grid: Grid) -> Self {
        let start = grid.find_start();
        let end = grid.find_end();
        for n in grid.iter_mut() {
            let p = Some(n.pos());
            if (n.is_start() && p != start) || (n.is_end() && p != end) {
                debug!("editor: dropping extra endpoint at {}", n.pos());
                n.reset();
            }
        }
        Self {
            config: GridConfig::from(&grid),
            grid,
            start,
            end,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Consume the editor and return its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Paint the cell at `p`: start if there is none, else end if there is
    /// none, else barrier. The current endpoints are never overwritten.
    /// Returns the state written, or `None` if nothing changed.
    pub fn paint(&mut self, p: Pos) -> Option<NodeState> {
        if !self.grid.contains(p) {
            debug!("editor: paint outside grid at {p}");
            return None;
        }
        let state = if self.start.is_none() && self.end != Some(p) {
            self.start = Some(p);
            NodeState::Start
        } else if self.end.is_none() && self.start != Some(p) {
            self.end = Some(p);
            NodeState::End
        } else if self.start != Some(p) && self.end != Some(p) {
            NodeState::Barrier
        } else {
            debug!("editor: {p} is an endpoint, paint ignored");
            return None;
        };
        self.grid.set_state(p, state);
        Some(state)
    }

    /// Reset the cell at `p` to Empty, forgetting it as an endpoint.
    /// Returns `false` if `p` is out of bounds.
    pub fn erase(&mut self, p: Pos) -> bool {
        if !self.grid.set_state(p, NodeState::Empty) {
            return false;
        }
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
        true
    }

    /// Replace the grid with a fresh one of the same configuration.
    pub fn clear(&mut self) {
        self.grid = self.config.build();
        self.start = None;
        self.end = None;
    }

    /// Change the topology used by the next neighbor refresh.
    pub fn set_topology(&mut self, topology: Topology) {
        self.config.topology = topology;
        self.grid.set_topology(topology);
    }

    /// Refresh every neighbor list and hand out the grid with both
    /// endpoints, ready to search. `None` until both endpoints are set.
    pub fn prepare(&mut self) -> Option<(&mut Grid, Pos, Pos)> {
        let (start, end) = (self.start?, self.end?);
        self.grid.refresh_all_neighbors();
        Some((&mut self.grid, start, end))
    }
}
