use std::collections::HashMap;

use gridstar_core::{Grid, NodeState, Pos};
use log::{debug, trace};

use crate::cancel::{CancelSignal, Never};
use crate::distance::Heuristic;
use crate::error::{EndpointFault, SearchError};
use crate::open::OpenSet;
use crate::reconstruct::reconstruct;

/// Sentinel for "no known cost yet" in the score tables.
pub const UNREACHABLE: i32 = i32::MAX;

/// Result of a search that was allowed to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The path from the node after the start up to and including the end.
    Found(Vec<Pos>),
    /// The open set ran dry without reaching the end.
    NotFound,
    /// The cancellation signal fired.
    Cancelled,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Pos]> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Engine settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub heuristic: Heuristic,
}

/// A* search over the neighbor lists stored on a [`Grid`].
///
/// Every move costs 1, diagonal or not. The engine writes node states as it
/// goes (Open on discovery, Closed after expansion, Path on success) and
/// calls an observer after each expansion and after each path node, so a
/// front end can redraw between steps. States are left in place when the
/// search returns, whatever the outcome.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Use `heuristic` for estimates (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.config.heuristic = heuristic;
        self
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search from `start` to `end`, running to completion.
    pub fn search<F: FnMut(&Grid)>(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        on_step: F,
    ) -> Result<SearchOutcome, SearchError> {
        self.search_until(grid, start, end, on_step, Never)
    }

    /// Search from `start` to `end`, polling `cancel` before each pop of the
    /// open set.
    ///
    /// When `cancel` fires the grid is left exactly as after the last full
    /// iteration and [`SearchOutcome::Cancelled`] is returned.
    pub fn search_until<F, C>(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        mut on_step: F,
        mut cancel: C,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Grid),
        C: CancelSignal,
    {
        let (si, _) = validate(grid, start, end)?;
        let heuristic = self.config.heuristic;
        debug!(
            "astar: searching {start} -> {end} on {0}x{0} {1:?} grid",
            grid.rows(),
            grid.topology()
        );

        let mut g_score = vec![UNREACHABLE; grid.len()];
        let mut f_score = vec![UNREACHABLE; grid.len()];
        let mut came_from: HashMap<Pos, Pos> = HashMap::new();
        let mut open = OpenSet::new();

        g_score[si] = 0;
        f_score[si] = heuristic.estimate(start, end);
        open.push(start, f_score[si]);
        grid.set_state(start, NodeState::Start);

        let mut nbuf: Vec<Pos> = Vec::with_capacity(8);
        let mut expanded = 0usize;

        while !open.is_empty() {
            if cancel.is_cancelled() {
                debug!("astar: cancelled after {expanded} expansions");
                return Ok(SearchOutcome::Cancelled);
            }
            let Some(current) = open.pop() else {
                break;
            };
            let Some(ci) = grid.index(current) else {
                continue;
            };

            if current == end {
                let path = reconstruct(grid, &came_from, end, &mut on_step);
                grid.set_state(start, NodeState::Start);
                grid.set_state(end, NodeState::End);
                debug!(
                    "astar: found {}-step path after {expanded} expansions",
                    path.len()
                );
                return Ok(SearchOutcome::Found(path));
            }

            expanded += 1;
            let current_g = g_score[ci];
            trace!("astar: expanding {current} g={current_g}");

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(current));

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;
                if tentative_g >= g_score[ni] {
                    continue;
                }
                came_from.insert(np, current);
                g_score[ni] = tentative_g;
                f_score[ni] = tentative_g + heuristic.estimate(np, end);

                if open.push(np, f_score[ni]) {
                    grid.set_state(np, NodeState::Open);
                }
            }

            on_step(&*grid);

            if current != start {
                grid.set_state(current, NodeState::Closed);
            }
        }

        debug!("astar: no path after {expanded} expansions");
        Ok(SearchOutcome::NotFound)
    }
}

/// Check the endpoint preconditions and return their flat indices.
fn validate(grid: &Grid, start: Pos, end: Pos) -> Result<(usize, usize), SearchError> {
    if start == end {
        return Err(EndpointFault::SameNode(start).into());
    }
    let si = grid.index(start).ok_or(EndpointFault::OutOfBounds(start))?;
    let ei = grid.index(end).ok_or(EndpointFault::OutOfBounds(end))?;
    for p in [start, end] {
        if grid.state(p) == Some(NodeState::Barrier) {
            return Err(EndpointFault::Barrier(p).into());
        }
    }
    for node in grid.iter() {
        let p = node.pos();
        if node.is_start() && p != start {
            return Err(EndpointFault::StrayStart(p).into());
        }
        if node.is_end() && p != end {
            return Err(EndpointFault::StrayEnd(p).into());
        }
    }
    Ok((si, ei))
}

/// Run [`AStar`] with default settings to completion.
pub fn search<F: FnMut(&Grid)>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    on_step: F,
) -> Result<SearchOutcome, SearchError> {
    AStar::default().search(grid, start, end, on_step)
}

/// Run [`AStar`] with default settings, polling `cancel` every iteration.
pub fn search_until<F, C>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    on_step: F,
    cancel: C,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Grid),
    C: CancelSignal,
{
    AStar::default().search_until(grid, start, end, on_step, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_distance;
    use crate::cancel::CancelToken;
    use gridstar_core::{Topology, build_grid};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Parse a map, refresh neighbors and return it with its endpoints.
    fn setup(map: &str, topology: Topology) -> (Grid, Pos, Pos) {
        let mut g = Grid::from_ascii(map, topology).unwrap();
        g.refresh_all_neighbors();
        let start = g.find_start().unwrap();
        let end = g.find_end().unwrap();
        (g, start, end)
    }

    fn open_5x5() -> (Grid, Pos, Pos) {
        setup(
            "
S....
.....
.....
.....
....E",
            Topology::Cardinal,
        )
    }

    fn assert_valid_path(g: &Grid, start: Pos, path: &[Pos], diagonal: bool) {
        let mut prev = start;
        for &p in path {
            assert!(prev.is_adjacent(p, diagonal), "{prev} -> {p} is not a move");
            assert_ne!(g.state(p), Some(NodeState::Barrier));
            prev = p;
        }
    }

    #[test]
    fn open_grid_manhattan_optimal() {
        let (mut g, start, end) = open_5x5();
        let outcome = search(&mut g, start, end, |_| {}).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path.last(), Some(&end));
        assert!(!path.contains(&start));
        assert_valid_path(&g, start, path, false);
        assert_eq!(g.positions_with(NodeState::Start), vec![start]);
        assert_eq!(g.positions_with(NodeState::End), vec![end]);
        for &p in &path[..path.len() - 1] {
            assert_eq!(g.state(p), Some(NodeState::Path));
        }
        assert_eq!(g.positions_with(NodeState::Path).len(), 7);
    }

    #[test]
    fn wall_with_single_gap() {
        let (mut g, start, end) = setup(
            "
S....
.....
####.
.....
....E",
            Topology::Cardinal,
        );
        let outcome = search(&mut g, start, end, |_| {}).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 8);
        assert!(path.contains(&Pos::new(2, 4)));
        assert_valid_path(&g, start, path, false);
    }

    #[test]
    fn tie_breaking_is_first_inserted() {
        let (mut g, start, end) = setup("S..\n...\n..E", Topology::Cardinal);
        let mut steps = 0;
        let outcome = search(&mut g, start, end, |_| steps += 1).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Found(vec![
                Pos::new(1, 0),
                Pos::new(2, 0),
                Pos::new(2, 1),
                Pos::new(2, 2),
            ])
        );
        // 8 expansions, then one step per path node.
        assert_eq!(steps, 12);
        assert_eq!(g.to_ascii(), "Sxx\n*xx\n**E");
    }

    #[test]
    fn identical_endpoints_rejected_without_mutation() {
        let (mut g, start, _) = open_5x5();
        let before = g.clone();
        let err = search(&mut g, start, start, |_| {}).unwrap_err();
        assert_eq!(err, SearchError::InvalidEndpoints(EndpointFault::SameNode(start)));
        assert_eq!(g, before);
    }

    #[test]
    fn out_of_bounds_and_barrier_endpoints_rejected() {
        let (mut g, start, end) = open_5x5();
        let outside = Pos::new(5, 0);
        assert_eq!(
            search(&mut g, start, outside, |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointFault::OutOfBounds(outside)))
        );
        g.set_state(end, NodeState::Barrier);
        let before = g.clone();
        assert_eq!(
            search(&mut g, start, end, |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointFault::Barrier(end)))
        );
        assert_eq!(g, before);
    }

    #[test]
    fn stray_endpoints_rejected() {
        let (mut g, start, end) = open_5x5();
        assert_eq!(
            search(&mut g, Pos::new(1, 1), end, |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointFault::StrayStart(start)))
        );
        assert_eq!(
            search(&mut g, start, Pos::new(3, 3), |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointFault::StrayEnd(end)))
        );
    }

    #[test]
    fn unmarked_endpoints_are_accepted() {
        let mut g = build_grid(4, 40);
        g.refresh_all_neighbors();
        let outcome = search(&mut g, Pos::new(0, 3), Pos::new(3, 0), |_| {}).unwrap();
        assert_eq!(outcome.path().map(<[Pos]>::len), Some(6));
        assert_eq!(g.state(Pos::new(0, 3)), Some(NodeState::Start));
        assert_eq!(g.state(Pos::new(3, 0)), Some(NodeState::End));
    }

    #[test]
    fn enclosed_end_not_found() {
        for topology in [Topology::Cardinal, Topology::Diagonal] {
            let (mut g, start, end) = setup(
                "
S....
.....
..###
..#E#
..###",
                topology,
            );
            let outcome = search(&mut g, start, end, |_| {}).unwrap();
            assert_eq!(outcome, SearchOutcome::NotFound);
            assert!(g.positions_with(NodeState::Path).is_empty());
            // Marks are left for the caller.
            assert!(!g.positions_with(NodeState::Closed).is_empty());
            assert_eq!(g.state(end), Some(NodeState::End));
        }
    }

    #[test]
    fn diagonal_gap_reachable_only_with_diagonals() {
        let map = "
S.#..
..#..
##...
.....
....E";
        let (mut g, start, end) = setup(map, Topology::Cardinal);
        assert_eq!(
            search(&mut g, start, end, |_| {}).unwrap(),
            SearchOutcome::NotFound
        );
        let (mut g, start, end) = setup(map, Topology::Diagonal);
        let outcome = search(&mut g, start, end, |_| {}).unwrap();
        let path = outcome.path().unwrap();
        assert!(path.contains(&Pos::new(2, 2)));
        assert_valid_path(&g, start, path, true);
    }

    #[test]
    fn stale_neighbors_mean_no_edges() {
        let mut g = build_grid(3, 30);
        let outcome = search(&mut g, Pos::ZERO, Pos::new(2, 2), |_| {}).unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[test]
    fn cancelled_before_first_iteration() {
        let (mut g, start, end) = open_5x5();
        let before = g.clone();
        let token = CancelToken::new();
        token.cancel();
        let mut steps = 0;
        let outcome = search_until(&mut g, start, end, |_| steps += 1, token).unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(steps, 0);
        assert_eq!(g, before);
    }

    #[test]
    fn cancelled_before_first_iteration_only_marks_start() {
        let mut g = build_grid(4, 40);
        g.refresh_all_neighbors();
        let outcome = search_until(&mut g, Pos::ZERO, Pos::new(3, 3), |_| {}, || true).unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(g.to_ascii(), "S...\n....\n....\n....");
    }

    #[test]
    fn cancel_mid_search_leaves_whole_iterations() {
        let (mut g, start, end) = open_5x5();
        let mut polls = 0;
        let mut snapshots = Vec::new();
        let outcome = search_until(
            &mut g,
            start,
            end,
            |g: &Grid| snapshots.push(g.to_ascii()),
            || {
                polls += 1;
                polls > 3
            },
        )
        .unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(snapshots.len(), 3);
        // The start stays Start, the other two expanded nodes are Closed.
        assert_eq!(g.positions_with(NodeState::Closed).len(), 2);
        assert_eq!(g.state(start), Some(NodeState::Start));
    }

    #[test]
    fn deterministic_expansion_and_path() {
        let map = "
S.....#.
.##...#.
...#....
.#.#.##.
.#...#..
.####.#.
......#E
..#.....";
        for topology in [Topology::Cardinal, Topology::Diagonal] {
            let run = || {
                let (mut g, start, end) = setup(map, topology);
                let mut snapshots = Vec::new();
                let outcome = search(&mut g, start, end, |g: &Grid| snapshots.push(g.to_ascii()))
                    .unwrap();
                (outcome, snapshots)
            };
            let (a, sa) = run();
            let (b, sb) = run();
            assert!(a.is_found());
            assert_eq!(a, b);
            assert_eq!(sa, sb);
        }
    }

    #[test]
    fn observer_does_not_change_result() {
        let (mut g1, start, end) = open_5x5();
        let (mut g2, _, _) = open_5x5();
        let mut seen = 0;
        let a = search(&mut g1, start, end, |g: &Grid| seen += g.len()).unwrap();
        let b = search(&mut g2, start, end, |_| {}).unwrap();
        assert_eq!(a, b);
        assert_eq!(g1, g2);
        assert!(seen > 0);
    }

    #[test]
    fn closed_nodes_never_reopen_with_consistent_heuristic() {
        let map = "
S......
.#####.
.#...#.
.#.#.#.
.#.#...
.#.####
...E...";
        let cases = [
            (Topology::Cardinal, Heuristic::Manhattan),
            (Topology::Diagonal, Heuristic::Chebyshev),
        ];
        for (topology, heuristic) in cases {
            let (mut g, start, end) = setup(map, topology);
            let mut snapshots: Vec<Grid> = Vec::new();
            AStar::default()
                .with_heuristic(heuristic)
                .search(&mut g, start, end, |g: &Grid| snapshots.push(g.clone()))
                .unwrap();
            for pair in snapshots.windows(2) {
                for (before, after) in pair[0].iter().zip(pair[1].iter()) {
                    if before.is_closed() {
                        assert!(!after.is_open(), "{} reopened", before.pos());
                    }
                }
            }
        }
    }

    #[test]
    fn chebyshev_shortens_diagonal_paths() {
        let (mut g, start, end) = setup(
            "
S....
.....
.....
.....
....E",
            Topology::Diagonal,
        );
        let astar = AStar::default().with_heuristic(Heuristic::Chebyshev);
        let outcome = astar.search(&mut g, start, end, |_| {}).unwrap();
        assert_eq!(outcome.path().map(<[Pos]>::len), Some(4));
    }

    #[test]
    fn optimal_against_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..60 {
            let rows = rng.random_range(2..14);
            let mut g = build_grid(rows, 10 * rows as u32);
            for n in g.iter_mut() {
                if rng.random_bool(0.3) {
                    n.make_barrier();
                }
            }
            let start = Pos::new(0, 0);
            let end = Pos::new(rows as i32 - 1, rows as i32 - 1);
            g.set_state(start, NodeState::Start);
            g.set_state(end, NodeState::End);
            g.refresh_all_neighbors();

            let expected = bfs_distance(&g, start, end);
            let outcome = search(&mut g, start, end, |_| {}).unwrap();
            match expected {
                Some(d) => {
                    let path = outcome.path().unwrap();
                    assert_eq!(path.len(), d);
                    assert_valid_path(&g, start, path, false);
                }
                None => assert_eq!(outcome, SearchOutcome::NotFound),
            }
        }
    }

    #[test]
    fn diagonal_paths_are_valid_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..40 {
            let rows = rng.random_range(2..12);
            let mut g = Grid::new(rows, rows as u32, Topology::Diagonal);
            for n in g.iter_mut() {
                if rng.random_bool(0.35) {
                    n.make_barrier();
                }
            }
            let start = Pos::new(rows as i32 - 1, 0);
            let end = Pos::new(0, rows as i32 - 1);
            g.set_state(start, NodeState::Empty);
            g.set_state(end, NodeState::Empty);
            g.refresh_all_neighbors();

            let reachable = bfs_distance(&g, start, end).is_some();
            let outcome = search(&mut g, start, end, |_| {}).unwrap();
            assert_eq!(outcome.is_found(), reachable);
            if let Some(path) = outcome.path() {
                assert_eq!(path.last(), Some(&end));
                assert_valid_path(&g, start, path, true);
            }
        }
    }
}
