use std::fmt;

use gridstar_core::Pos;

/// Why a start/end pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFault {
    /// Start and end are the same node.
    SameNode(Pos),
    /// The position lies outside the grid.
    OutOfBounds(Pos),
    /// The node at the position is a barrier.
    Barrier(Pos),
    /// A node other than the requested start holds the Start state.
    StrayStart(Pos),
    /// A node other than the requested end holds the End state.
    StrayEnd(Pos),
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameNode(p) => write!(f, "start and end are both {p}"),
            Self::OutOfBounds(p) => write!(f, "{p} is outside the grid"),
            Self::Barrier(p) => write!(f, "{p} is a barrier"),
            Self::StrayStart(p) => write!(f, "{p} is already marked as start"),
            Self::StrayEnd(p) => write!(f, "{p} is already marked as end"),
        }
    }
}

/// Errors returned by [`search`](crate::search) before any node is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    InvalidEndpoints(EndpointFault),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints(fault) => write!(f, "invalid endpoints: {fault}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<EndpointFault> for SearchError {
    fn from(fault: EndpointFault) -> Self {
        Self::InvalidEndpoints(fault)
    }
}
