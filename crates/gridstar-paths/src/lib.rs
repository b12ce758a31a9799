//! A* search for gridstar grids.
//!
//! The engine runs over the neighbor lists stored on a
//! [`Grid`](gridstar_core::Grid), writing node states as it goes so a front
//! end can watch the search unfold:
//!
//! - **A\*** shortest-path search ([`search`], [`AStar`]) with `(f, seq)`
//!   first-inserted-wins tie-breaking ([`OpenSet`])
//! - **Path reconstruction** over the predecessor map ([`PathWalk`])
//! - **Cooperative cancellation** ([`CancelSignal`], [`CancelToken`])
//! - **BFS** reference distances ([`bfs_distance`])
//!
//! # Usage contract
//!
//! Call [`Grid::refresh_all_neighbors`](gridstar_core::Grid::refresh_all_neighbors)
//! after editing barriers and before searching. Node states written by a
//! search stay on the grid until the caller clears them.

mod astar;
mod bfs;
mod cancel;
mod distance;
mod error;
mod open;
mod reconstruct;

pub use astar::{AStar, SearchConfig, SearchOutcome, UNREACHABLE, search, search_until};
pub use bfs::{bfs_distance, bfs_map};
pub use cancel::{CancelSignal, CancelToken, Never};
pub use distance::{Heuristic, chebyshev, manhattan};
pub use error::{EndpointFault, SearchError};
pub use open::OpenSet;
pub use reconstruct::{PathWalk, reconstruct};
