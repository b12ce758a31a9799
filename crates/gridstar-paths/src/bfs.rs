use std::collections::VecDeque;

use gridstar_core::{Grid, Pos};

/// Unweighted shortest distance, in moves, from `from` to `to`.
///
/// Follows the neighbor lists stored on the grid (so they must be fresh)
/// and never touches node states. Returns `None` if `to` is unreachable or
/// either position lies outside the grid.
pub fn bfs_distance(grid: &Grid, from: Pos, to: Pos) -> Option<usize> {
    let si = grid.index(from)?;
    let ti = grid.index(to)?;
    let map = bfs_map(grid, from);
    debug_assert_eq!(map[si], Some(0));
    map[ti]
}

/// Distances from `from` to every node, indexed row-major like the grid.
/// Unreached nodes (and every node, if `from` is out of bounds) are `None`.
pub fn bfs_map(grid: &Grid, from: Pos) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.len()];
    let Some(si) = grid.index(from) else {
        return dist;
    };
    dist[si] = Some(0);

    let mut queue: VecDeque<Pos> = VecDeque::new();
    queue.push_back(from);

    while let Some(cp) = queue.pop_front() {
        let Some(cd) = grid.index(cp).and_then(|i| dist[i]) else {
            continue;
        };
        for &np in grid.neighbors(cp) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni].is_some() {
                continue;
            }
            dist[ni] = Some(cd + 1);
            queue.push_back(np);
        }
    }
    dist
}
