//! ASCII map loading and dumping for [`Grid`].
//!
//! A map is a square block of glyphs, one line per row:
//!
//! ```text
//! S..#
//! .#.#
//! .#..
//! ...E
//! ```
//!
//! See [`NodeState::glyph`] for the glyph set.

use std::fmt;

use crate::geom::Pos;
use crate::grid::Grid;
use crate::state::NodeState;
use crate::topology::Topology;

/// Errors that can occur when parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// Lines have inconsistent widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// The number of lines differs from the line width.
    NotSquare { rows: usize, cols: usize },
    /// A character outside the glyph set was found.
    InvalidGlyph { ch: char, pos: Pos },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::NotSquare { rows, cols } => {
                write!(f, "map: {rows} rows of width {cols} is not square")
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "map contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}

impl Grid {
    /// Parse an ASCII map. Leading and trailing whitespace of the whole text
    /// is trimmed, individual lines are not. Each node is one physical unit
    /// wide and neighbor lists start empty.
    pub fn from_ascii(s: &str, topology: Topology) -> Result<Grid, GridParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Grid::new(0, 0, topology));
        }
        let lines: Vec<&str> = s.lines().collect();
        let cols = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridParseError::InconsistentSize {
                    line: i,
                    expected: cols,
                    found,
                });
            }
        }
        if lines.len() != cols {
            return Err(GridParseError::NotSquare {
                rows: lines.len(),
                cols,
            });
        }

        let mut grid = Grid::new(cols, cols as u32, topology);
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                let state = NodeState::from_glyph(ch)
                    .ok_or(GridParseError::InvalidGlyph { ch, pos })?;
                grid.set_state(pos, state);
            }
        }
        Ok(grid)
    }

    /// Dump node states as an ASCII map, one line per row, no trailing
    /// newline.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.rows());
        for (i, node) in self.iter().enumerate() {
            if i > 0 && i % self.rows() == 0 {
                out.push('\n');
            }
            out.push(node.state().glyph());
        }
        out
    }
}
