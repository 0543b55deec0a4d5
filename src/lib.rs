//! # grid_search
//!
//! Classic search algorithms on 2D occupancy grids:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), with optional diagonal movement.
//! Every search returns the same [SearchResult], so their paths and costs, expansion counts,
//! frontier sizes and timings can be compared directly.
//!
//! Straight moves cost 1.0 and diagonal moves [SearchOptions::diagonal_cost] (√2 by
//! default). Neighbours are always enumerated in the order (+1, 0), (-1, 0), (0, +1),
//! (0, -1) followed by the diagonals (+1, +1), (+1, -1), (-1, +1), (-1, -1), which decides
//! how ties between equally good nodes are broken.
//!
//! ```
//! use grid_search::{astar, manhattan, Maze, SearchOptions};
//!
//! let maze = Maze::parse(
//!     "S . . . .
//!      . # . . .
//!      . # . . .
//!      . # . . .
//!      . . . . G",
//! )?;
//! let result = astar(&maze.grid, maze.start, maze.goal, manhattan, SearchOptions::default())?;
//! assert_eq!(result.path_cost, Some(8.0));
//! assert_eq!(result.depth, Some(8));
//! # Ok::<(), grid_search::SearchError>(())
//! ```
mod frontier;

pub mod compare;
pub mod error;
pub mod heuristic;
pub mod maze;
pub mod pathing_grid;
pub mod position;
pub mod result;
pub mod solver;

pub use crate::compare::{compare, heuristic_experiment, Algorithm, Comparison};
pub use crate::error::{Endpoint, SearchError};
pub use crate::heuristic::{
    chebyshev, euclidean, manhattan, octile, zero, Heuristic, HeuristicKind, Weighted,
};
pub use crate::maze::Maze;
pub use crate::pathing_grid::PathingGrid;
pub use crate::position::Position;
pub use crate::result::SearchResult;
pub use crate::solver::astar::AstarSolver;
pub use crate::solver::bfs::BfsSolver;
pub use crate::solver::dfs::DfsSolver;
pub use crate::solver::greedy::GreedySolver;
pub use crate::solver::{GridSolver, SearchOptions};

/// Inline capacity for neighbour lists, enough for a full 8-neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;

/// What every entry point returns: a [SearchResult] (which may report that no path exists)
/// or a [SearchError] if the input was rejected before searching.
pub type SearchOutcome = Result<SearchResult, SearchError>;

/// Breadth-first search with 4-directional movement. The path has the fewest moves.
pub fn bfs(grid: &PathingGrid, start: Position, goal: Position) -> SearchOutcome {
    BfsSolver::new().solve(grid, start, goal)
}

/// Depth-first search with 4-directional movement.
pub fn dfs(grid: &PathingGrid, start: Position, goal: Position) -> SearchOutcome {
    DfsSolver::new().solve(grid, start, goal)
}

/// Greedy best-first search with 4-directional movement, ordered by `heuristic` alone.
pub fn greedy<H: Heuristic>(
    grid: &PathingGrid,
    start: Position,
    goal: Position,
    heuristic: H,
) -> SearchOutcome {
    GreedySolver::new(heuristic).solve(grid, start, goal)
}

/// A* search. The returned `path_cost` is optimal if `heuristic` is admissible for the
/// movement model in `options`.
pub fn astar<H: Heuristic>(
    grid: &PathingGrid,
    start: Position,
    goal: Position,
    heuristic: H,
    options: SearchOptions,
) -> SearchOutcome {
    AstarSolver::with_options(heuristic, options).solve(grid, start, goal)
}
