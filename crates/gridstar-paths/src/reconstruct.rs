use std::collections::HashMap;
use std::iter::FusedIterator;

use gridstar_core::{Grid, NodeState, Pos};

/// Backward walk over a predecessor map.
///
/// Starting at the goal, yields each node that has a predecessor and then
/// steps to it. The walk stops at the first node without one (the search
/// start), which is not yielded. Once exhausted it stays exhausted.
#[derive(Debug, Clone)]
pub struct PathWalk<'a> {
    came_from: &'a HashMap<Pos, Pos>,
    current: Option<Pos>,
}

impl<'a> PathWalk<'a> {
    pub fn new(came_from: &'a HashMap<Pos, Pos>, end: Pos) -> Self {
        Self {
            came_from,
            current: Some(end),
        }
    }
}

impl Iterator for PathWalk<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let cur = self.current?;
        self.current = self.came_from.get(&cur).copied();
        self.current.map(|_| cur)
    }
}

impl FusedIterator for PathWalk<'_> {}

/// Mark the walk from `end` as Path, calling `on_step` after each node.
///
/// Returns the walked nodes in forward order: from the node after the start
/// up to and including `end`.
pub fn reconstruct<F: FnMut(&Grid)>(
    grid: &mut Grid,
    came_from: &HashMap<Pos, Pos>,
    end: Pos,
    on_step: &mut F,
) -> Vec<Pos> {
    let mut path = Vec::new();
    for p in PathWalk::new(came_from, end) {
        grid.set_state(p, NodeState::Path);
        on_step(&*grid);
        path.push(p);
    }
    path.reverse();
    path
}
