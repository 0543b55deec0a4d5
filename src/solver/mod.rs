use itertools::Itertools;
use log::{debug, info, warn};
use std::f64::consts::SQRT_2;
use std::time::Instant;

use crate::error::SearchError;
use crate::{PathingGrid, Position, SearchResult};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;

/// Movement model shared by all solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Adds the four diagonal moves to the neighbourhood.
    pub allow_diagonal: bool,
    /// Cost of a diagonal step, straight steps cost 1.0. Only A* accumulates it.
    pub diagonal_cost: f64,
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            allow_diagonal: false,
            diagonal_cost: SQRT_2,
        }
    }
}

impl SearchOptions {
    pub fn with_diagonal(mut self, allow_diagonal: bool) -> SearchOptions {
        self.allow_diagonal = allow_diagonal;
        self
    }

    pub fn with_diagonal_cost(mut self, diagonal_cost: f64) -> SearchOptions {
        self.diagonal_cost = diagonal_cost;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.diagonal_cost.is_finite() && self.diagonal_cost > 0.0 {
            Ok(())
        } else {
            warn!("Rejecting diagonal cost {}", self.diagonal_cost);
            Err(SearchError::InvalidDiagonalCost(self.diagonal_cost))
        }
    }

    /// 1.0 for a straight step, [diagonal_cost](Self::diagonal_cost) for a step that changes
    /// both row and column.
    pub fn step_cost(&self, from: &Position, to: &Position) -> f64 {
        if from.is_diagonal_to(to) {
            self.diagonal_cost
        } else {
            1.0
        }
    }

    /// Accumulated step cost along a path.
    pub fn path_cost(&self, path: &[Position]) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| self.step_cost(a, b))
            .sum()
    }
}

pub trait GridSolver {
    fn name(&self) -> String;

    fn options(&self) -> SearchOptions;

    /// The search loop itself. Performs no validation and leaves [SearchResult::time] at
    /// zero; use [solve](Self::solve) unless start and goal are known to be walkable.
    fn search(&self, grid: &PathingGrid, start: Position, goal: Position) -> SearchResult;

    /// Validates the options and endpoints, then runs and times [search](Self::search).
    fn solve(
        &self,
        grid: &PathingGrid,
        start: Position,
        goal: Position,
    ) -> Result<SearchResult, SearchError> {
        self.options().validate()?;
        grid.check_endpoints(start, goal)?;
        let name = self.name();
        debug!(
            "{name}: searching from {start} to {goal} on a {}x{} grid",
            grid.rows(),
            grid.cols()
        );
        let timer = Instant::now();
        let mut result = self.search(grid, start, goal);
        result.time = timer.elapsed().as_secs_f64();
        if result.found {
            debug!(
                "{name}: found a path of {} moves after {} expansions",
                result.depth.unwrap_or_default(),
                result.nodes_visited
            );
        } else {
            info!(
                "{name}: {goal} is not reachable from {start} ({} expansions)",
                result.nodes_visited
            );
        }
        Ok(result)
    }

    /// Just the path of [solve](Self::solve), [None] if the goal is unreachable.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Position,
        goal: Position,
    ) -> Result<Option<Vec<Position>>, SearchError> {
        let result = self.solve(grid, start, goal)?;
        Ok(result.found.then_some(result.path))
    }

    /// Cost of `path` under this solver's movement model.
    fn get_path_cost(&self, path: &[Position]) -> f64 {
        self.options().path_cost(path)
    }
}

impl PathingGrid {
    /// Checks that `path` is non-empty, only visits walkable cells, never repeats a cell and
    /// moves by exactly one neighbour step at a time.
    pub fn is_valid_path(&self, path: &[Position], allow_diagonal: bool) -> bool {
        !path.is_empty()
            && path.iter().all(|p| self.can_move_to(*p))
            && path.iter().all_unique()
            && path
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.is_adjacent(b, allow_diagonal))
    }
}
