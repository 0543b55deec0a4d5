use crate::frontier::Stack;
use crate::solver::bfs::uninformed_search;
use crate::solver::{GridSolver, SearchOptions};
use crate::{PathingGrid, Position, SearchResult};

/// Depth-first search. Finds some path if one exists; which one depends on the neighbour
/// order, the last enumerated neighbour being explored first.
#[derive(Clone, Debug, Default)]
pub struct DfsSolver {
    pub options: SearchOptions,
}

impl DfsSolver {
    pub fn new() -> DfsSolver {
        DfsSolver::default()
    }

    pub fn with_options(options: SearchOptions) -> DfsSolver {
        DfsSolver { options }
    }
}

impl GridSolver for DfsSolver {
    fn name(&self) -> String {
        "DFS".to_owned()
    }

    fn options(&self) -> SearchOptions {
        self.options
    }

    fn search(&self, grid: &PathingGrid, start: Position, goal: Position) -> SearchResult {
        uninformed_search::<Stack<usize>>(grid, start, goal, self.options.allow_diagonal)
    }
}
