//! Shared code for the gridstar demos: command-line options, the default
//! map, and a headless run that reports what the search did.

use std::fmt;
use std::io;
use std::path::PathBuf;

use gridstar_core::{Grid, GridEditor, GridParseError, Topology};
use gridstar_paths::{AStar, Heuristic, SearchError, SearchOutcome};
use log::info;

/// Map used when no file is given: a 10×10 board with a few walls.
pub const DEFAULT_MAP: &str = "\
S.........
..........
..####....
.....#....
.....#....
.#...#....
.#........
.#####.##.
.........E
..........";

/// Demo options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// ASCII map file. [`DEFAULT_MAP`] when absent.
    pub map: Option<PathBuf>,
    pub topology: Topology,
    pub heuristic: Heuristic,
    /// Stop after this many iterations.
    pub max_steps: Option<usize>,
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut opts = Options::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--diagonal" => opts.topology = Topology::Diagonal,
                "--chebyshev" => opts.heuristic = Heuristic::Chebyshev,
                "--max-steps" => {
                    let v = args
                        .next()
                        .ok_or_else(|| DemoError::Usage("--max-steps needs a value".into()))?;
                    let n = v
                        .parse()
                        .map_err(|_| DemoError::Usage(format!("bad step count: {v}")))?;
                    opts.max_steps = Some(n);
                }
                s if s.starts_with("--") => {
                    return Err(DemoError::Usage(format!("unknown option: {s}")));
                }
                _ if opts.map.is_some() => {
                    return Err(DemoError::Usage("only one map file may be given".into()));
                }
                _ => opts.map = Some(PathBuf::from(&arg)),
            }
        }
        Ok(opts)
    }
}

/// What a demo run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub outcome: SearchOutcome,
    /// Observer callbacks received.
    pub steps: usize,
    /// Final node states.
    pub map: String,
}

/// Errors surfaced by the demo binaries.
#[derive(Debug)]
pub enum DemoError {
    Usage(String),
    Io(io::Error),
    Parse(GridParseError),
    Search(SearchError),
    /// The map lacks a start or an end.
    MissingEndpoints,
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(s) => write!(f, "usage: {s}"),
            Self::Io(e) => write!(f, "reading map: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::MissingEndpoints => f.write_str("map needs one S and one E"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridParseError> for DemoError {
    fn from(e: GridParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Load `text` as a map, search it with `opts`, and report.
pub fn run(text: &str, opts: &Options) -> Result<Report, DemoError> {
    let grid = Grid::from_ascii(text, opts.topology)?;
    let mut editor = GridEditor::from_grid(grid);
    let (grid, start, end) = editor.prepare().ok_or(DemoError::MissingEndpoints)?;
    info!("searching {start} -> {end}");

    let astar = AStar::default().with_heuristic(opts.heuristic);
    let limit = opts.max_steps.unwrap_or(usize::MAX);
    let mut polls = 0usize;
    let mut steps = 0usize;
    let outcome = astar.search_until(
        grid,
        start,
        end,
        |_| steps += 1,
        || {
            polls += 1;
            polls > limit
        },
    )?;

    Ok(Report {
        outcome,
        steps,
        map: grid.to_ascii(),
    })
}
