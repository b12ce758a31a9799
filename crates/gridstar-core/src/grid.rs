//! The [`Grid`] type: a square arena of [`Node`]s addressed by [`Pos`].
//!
//! The grid is the single owner of every node. Nodes refer to their
//! neighbors by position, so there is no shared or reference-counted state
//! and a grid can be handed to the search engine as a plain `&mut Grid`.

use crate::geom::Pos;
use crate::node::Node;
use crate::state::NodeState;
use crate::topology::Topology;

/// A square `rows × rows` grid of nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    width: u32,
    cell_size: u32,
    topology: Topology,
    /// Row-major.
    nodes: Vec<Node>,
}

impl Grid {
    /// Allocate a grid of `rows × rows` empty nodes spanning `width` physical
    /// units. Each node is `width / rows` units wide. Neighbor lists start
    /// empty.
    pub fn new(rows: usize, width: u32, topology: Topology) -> Self {
        let cell_size = if rows == 0 { 0 } else { width / rows as u32 };
        let mut nodes = Vec::with_capacity(rows * rows);
        for row in 0..rows {
            for col in 0..rows {
                nodes.push(Node::new(Pos::new(row as i32, col as i32), cell_size));
            }
        }
        Self {
            rows,
            width,
            cell_size,
            topology,
            nodes,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total physical width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical side length of each node.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Change the topology. Existing neighbor lists are left untouched until
    /// the next refresh.
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        let n = self.rows as i64;
        (0..n).contains(&(p.row as i64)) && (0..n).contains(&(p.col as i64))
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.rows + p.col as usize)
    }

    /// The node at `p`, if any.
    #[inline]
    pub fn node(&self, p: Pos) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `p`, if any.
    #[inline]
    pub fn node_mut(&mut self, p: Pos) -> Option<&mut Node> {
        self.index(p).map(|i| &mut self.nodes[i])
    }

    /// State of the node at `p`, if any.
    #[inline]
    pub fn state(&self, p: Pos) -> Option<NodeState> {
        self.node(p).map(Node::state)
    }

    /// Set the state at `p`. Returns `false` if `p` is out of bounds.
    pub fn set_state(&mut self, p: Pos, state: NodeState) -> bool {
        match self.node_mut(p) {
            Some(n) => {
                n.set_state(state);
                true
            }
            None => false,
        }
    }

    /// Stored neighbors of `p`. Empty for out-of-bounds positions and for
    /// nodes whose neighbors were never computed.
    #[inline]
    pub fn neighbors(&self, p: Pos) -> &[Pos] {
        self.node(p).map(Node::get_neighbors).unwrap_or(&[])
    }

    /// Recompute the neighbor list of the node at `p` from the current
    /// barrier layout. Returns `false` if `p` is out of bounds.
    pub fn update_neighbors(&mut self, p: Pos) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        let neighbors: Vec<Pos> = self
            .topology
            .candidates(p, |n| self.node(n).is_some_and(|node| !node.is_barrier()))
            .collect();
        self.nodes[i].set_neighbors(neighbors);
        true
    }

    /// Recompute the neighbor list of every node.
    pub fn refresh_all_neighbors(&mut self) {
        for i in 0..self.nodes.len() {
            let p = self.nodes[i].pos();
            self.update_neighbors(p);
        }
    }

    /// Row-major iterator over nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Row-major mutable iterator over nodes.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }

    /// First node (row-major) holding [`NodeState::Start`].
    pub fn find_start(&self) -> Option<Pos> {
        self.find_state(NodeState::Start)
    }

    /// First node (row-major) holding [`NodeState::End`].
    pub fn find_end(&self) -> Option<Pos> {
        self.find_state(NodeState::End)
    }

    fn find_state(&self, state: NodeState) -> Option<Pos> {
        self.nodes.iter().find(|n| n.state() == state).map(Node::pos)
    }

    /// Positions of every node holding `state`, row-major.
    pub fn positions_with(&self, state: NodeState) -> Vec<Pos> {
        self.nodes
            .iter()
            .filter(|n| n.state() == state)
            .map(Node::pos)
            .collect()
    }

    /// Reset every Open, Closed and Path node to Empty. Barriers and
    /// endpoints are kept.
    pub fn clear_search_marks(&mut self) {
        for n in self.nodes.iter_mut() {
            if n.state().is_search_mark() {
                n.reset();
            }
        }
    }

    /// Reset every node to Empty and drop all neighbor lists.
    pub fn clear(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset();
            n.set_neighbors(Vec::new());
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Allocate a fresh square grid with 4-directional topology.
pub fn build_grid(rows: usize, width: u32) -> Grid {
    Grid::new(rows, width, Topology::Cardinal)
}

/// Recompute every node's neighbor list. Call after barrier edits and before
/// searching.
pub fn refresh_all_neighbors(grid: &mut Grid) {
    grid.refresh_all_neighbors();
}
