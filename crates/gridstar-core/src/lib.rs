//! **gridstar-core**: the grid and node model for gridstar.
//!
//! This crate provides the data the search engine operates on: cell
//! coordinates ([`Pos`]), per-cell states ([`NodeState`]), neighbor
//! connectivity ([`Topology`]), the owning [`Grid`] arena, ASCII map
//! loading, and the [`GridEditor`] used by front ends to build problems.

pub mod ascii;
pub mod config;
pub mod editor;
pub mod geom;
pub mod grid;
pub mod node;
pub mod state;
pub mod topology;

pub use ascii::GridParseError;
pub use config::GridConfig;
pub use editor::GridEditor;
pub use geom::Pos;
pub use grid::{Grid, build_grid, refresh_all_neighbors};
pub use node::Node;
pub use state::NodeState;
pub use topology::Topology;
