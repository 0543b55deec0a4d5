//! Runs several searches over the same grid so their metrics can be compared side by side.
use core::fmt;
use log::debug;
use rayon::prelude::*;
use std::str::FromStr;

use crate::error::SearchError;
use crate::heuristic::HeuristicKind;
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BfsSolver;
use crate::solver::dfs::DfsSolver;
use crate::solver::greedy::GreedySolver;
use crate::solver::{GridSolver, SearchOptions};
use crate::{PathingGrid, Position, SearchResult};

/// Heuristics an experiment runs A* with by default.
pub const EXPERIMENT_HEURISTICS: [HeuristicKind; 3] = [
    HeuristicKind::Manhattan,
    HeuristicKind::Euclidean,
    HeuristicKind::Chebyshev,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Greedy(HeuristicKind),
    Astar(HeuristicKind),
}

impl Algorithm {
    /// BFS, DFS, then greedy and A* with each experiment heuristic.
    pub fn all() -> Vec<Algorithm> {
        let mut algorithms = vec![Algorithm::Bfs, Algorithm::Dfs];
        algorithms.extend(EXPERIMENT_HEURISTICS.map(Algorithm::Greedy));
        algorithms.extend(EXPERIMENT_HEURISTICS.map(Algorithm::Astar));
        algorithms
    }

    pub fn heuristic(&self) -> Option<HeuristicKind> {
        match self {
            Algorithm::Bfs | Algorithm::Dfs => None,
            Algorithm::Greedy(h) | Algorithm::Astar(h) => Some(*h),
        }
    }

    pub fn solve(
        &self,
        grid: &PathingGrid,
        start: Position,
        goal: Position,
        options: SearchOptions,
    ) -> Result<SearchResult, SearchError> {
        match *self {
            Algorithm::Bfs => BfsSolver::with_options(options).solve(grid, start, goal),
            Algorithm::Dfs => DfsSolver::with_options(options).solve(grid, start, goal),
            Algorithm::Greedy(h) => {
                GreedySolver::with_options(h, options).solve(grid, start, goal)
            }
            Algorithm::Astar(h) => AstarSolver::with_options(h, options).solve(grid, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::Greedy(h) => write!(f, "Greedy ({h})"),
            Algorithm::Astar(h) => write!(f, "A* ({h})"),
        }
    }
}

/// Accepts `bfs`, `dfs`, `greedy` and `astar` (also `a*`), the informed ones optionally
/// followed by `:heuristic`. The heuristic defaults to Manhattan.
impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, heuristic) = match s.trim().split_once(':') {
            Some((name, h)) => (name.trim(), Some(h.parse::<HeuristicKind>()?)),
            None => (s.trim(), None),
        };
        let heuristic = heuristic.unwrap_or(HeuristicKind::Manhattan);
        match name.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "greedy" => Ok(Algorithm::Greedy(heuristic)),
            "astar" | "a*" => Ok(Algorithm::Astar(heuristic)),
            _ => Err(SearchError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// One row of a comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub algorithm: Algorithm,
    pub result: SearchResult,
}

/// Runs the algorithms in parallel. The grid is only read, so all runs share it; each run
/// keeps its own frontier and visited set. Results come back in the order of `algorithms`
/// whichever finishes first. Fails if the options or endpoints are invalid.
pub fn compare(
    grid: &PathingGrid,
    start: Position,
    goal: Position,
    algorithms: &[Algorithm],
    options: SearchOptions,
) -> Result<Vec<Comparison>, SearchError> {
    options.validate()?;
    grid.check_endpoints(start, goal)?;
    debug!("Comparing {} algorithms from {start} to {goal}", algorithms.len());
    algorithms
        .par_iter()
        .map(|&algorithm| {
            algorithm
                .solve(grid, start, goal, options)
                .map(|result| Comparison { algorithm, result })
        })
        .collect()
}

/// Runs A* once per heuristic in [EXPERIMENT_HEURISTICS].
pub fn heuristic_experiment(
    grid: &PathingGrid,
    start: Position,
    goal: Position,
    options: SearchOptions,
) -> Result<Vec<Comparison>, SearchError> {
    EXPERIMENT_HEURISTICS
        .iter()
        .map(|&h| {
            let algorithm = Algorithm::Astar(h);
            algorithm
                .solve(grid, start, goal, options)
                .map(|result| Comparison { algorithm, result })
        })
        .collect()
}
