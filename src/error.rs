use thiserror::Error;

use crate::Position;

/// Which endpoint of a search a precondition error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Errors raised before a search begins. A search that simply finds no path is not an error,
/// see [SearchResult::found](crate::SearchResult::found).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("a {rows}x{cols} grid is too large to address")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{role} {pos} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        role: Endpoint,
        pos: Position,
        rows: usize,
        cols: usize,
    },

    #[error("{role} {pos} is on a blocked cell")]
    Blocked { role: Endpoint, pos: Position },

    #[error("diagonal cost must be finite and positive, got {0}")]
    InvalidDiagonalCost(f64),

    #[error("heuristic weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("maze has no '{0}' marker")]
    MissingMarker(char),

    #[error("maze has a second '{marker}' marker at {second} (first at {first})")]
    DuplicateMarker {
        marker: char,
        first: Position,
        second: Position,
    },

    #[error("unknown maze cell '{ch}' at {pos}")]
    UnknownMarker { ch: char, pos: Position },
}
