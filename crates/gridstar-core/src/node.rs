//! The [`Node`] type: one cell of a [`Grid`](crate::Grid).

use crate::geom::Pos;
use crate::state::NodeState;

/// A single grid cell.
///
/// A node knows its position, its current [`NodeState`] and the positions of
/// its passable neighbors as of the last
/// [`Grid::update_neighbors`](crate::Grid::update_neighbors) call. Neighbors
/// are referred to by position only; the owning grid resolves them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pos: Pos,
    size: u32,
    state: NodeState,
    neighbors: Vec<Pos>,
}

impl Node {
    /// Create an empty node with no computed neighbors.
    pub fn new(pos: Pos, size: u32) -> Self {
        Self {
            pos,
            size,
            state: NodeState::Empty,
            neighbors: Vec::new(),
        }
    }

    /// Identity of this node.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    /// Physical side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Physical origin as `(x, y)`: `x` follows the row, `y` the column.
    #[inline]
    pub fn origin(&self) -> (u32, u32) {
        let row = self.pos.row.max(0) as u32;
        let col = self.pos.col.max(0) as u32;
        (row * self.size, col * self.size)
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Neighbors as last computed. Empty if never computed.
    #[inline]
    pub fn get_neighbors(&self) -> &[Pos] {
        &self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Pos>) {
        self.neighbors = neighbors;
    }

    // --- predicates ---

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == NodeState::Empty
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == NodeState::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == NodeState::Closed
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == NodeState::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == NodeState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == NodeState::End
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == NodeState::Path
    }

    // --- mutators ---

    /// Set the state directly.
    #[inline]
    pub fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.state = NodeState::Empty;
    }

    #[inline]
    pub fn make_open(&mut self) {
        self.state = NodeState::Open;
    }

    #[inline]
    pub fn make_closed(&mut self) {
        self.state = NodeState::Closed;
    }

    #[inline]
    pub fn make_barrier(&mut self) {
        self.state = NodeState::Barrier;
    }

    #[inline]
    pub fn make_start(&mut self) {
        self.state = NodeState::Start;
    }

    #[inline]
    pub fn make_end(&mut self) {
        self.state = NodeState::End;
    }

    #[inline]
    pub fn make_path(&mut self) {
        self.state = NodeState::Path;
    }
}
