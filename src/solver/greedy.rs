use fxhash::FxHashSet;
use std::collections::BinaryHeap;

use crate::frontier::{Sequence, SmallestCostHolder};
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::result::FrontierStats;
use crate::solver::{GridSolver, SearchOptions};
use crate::{PathingGrid, Position, SearchResult};

/// Greedy best-first search: always expands the frontier entry closest to the goal by the
/// heuristic, ignoring the cost accumulated so far. Fast, but the path is not guaranteed to
/// be the shortest.
#[derive(Clone, Debug)]
pub struct GreedySolver<H = HeuristicKind> {
    pub heuristic: H,
    pub options: SearchOptions,
}

impl<H: Heuristic> GreedySolver<H> {
    pub fn new(heuristic: H) -> GreedySolver<H> {
        GreedySolver {
            heuristic,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(heuristic: H, options: SearchOptions) -> GreedySolver<H> {
        GreedySolver { heuristic, options }
    }
}

impl<H: Heuristic> GridSolver for GreedySolver<H> {
    fn name(&self) -> String {
        "Greedy".to_owned()
    }

    fn options(&self) -> SearchOptions {
        self.options
    }

    /// Each frontier entry owns the full path that reached it. Positions are marked visited
    /// when pushed, so none is pushed twice. The reported `path_cost` is the move count.
    fn search(&self, grid: &PathingGrid, start: Position, goal: Position) -> SearchResult {
        let mut seq = Sequence::default();
        let mut frontier = BinaryHeap::new();
        frontier.push(SmallestCostHolder {
            priority: self.heuristic.estimate(start, goal),
            seq: seq.next(),
            item: vec![start],
        });
        let mut visited: FxHashSet<Position> = FxHashSet::default();
        visited.insert(start);
        let mut stats = FrontierStats {
            nodes_generated: 1,
            max_frontier_size: 0,
        };
        let mut nodes_visited = 0;

        loop {
            stats.observe(frontier.len());
            let Some(SmallestCostHolder { item: path, .. }) = frontier.pop() else {
                break;
            };
            let Some(&pos) = path.last() else {
                continue;
            };
            nodes_visited += 1;
            if pos == goal {
                let cost = (path.len() - 1) as f64;
                return SearchResult::informed(Some((path, cost)), nodes_visited, stats);
            }
            for neighbour in grid.neighborhood_points(&pos, self.options.allow_diagonal) {
                if visited.insert(neighbour) {
                    let mut next = Vec::with_capacity(path.len() + 1);
                    next.extend_from_slice(&path);
                    next.push(neighbour);
                    frontier.push(SmallestCostHolder {
                        priority: self.heuristic.estimate(neighbour, goal),
                        seq: seq.next(),
                        item: next,
                    });
                    stats.nodes_generated += 1;
                }
            }
        }
        SearchResult::informed(None, nodes_visited, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::manhattan;

    #[test]
    fn equal_start_goal() {
        let grid = PathingGrid::new(3, 3, false).unwrap();
        let start = Position::new(1, 1);
        let result = GreedySolver::new(manhattan).solve(&grid, start, start).unwrap();
        assert_eq!(result.path, vec![start]);
        assert_eq!(result.depth, Some(0));
        assert_eq!(result.path_cost, Some(0.0));
        assert_eq!(result.nodes_visited, 1);
        assert_eq!(result.nodes_generated, Some(1));
        assert_eq!(result.max_frontier_size, Some(1));
    }

    /// Heads straight for the goal on an open grid, generating only what it touches.
    #[test]
    fn open_grid_goes_straight() {
        let grid = PathingGrid::new(1, 5, false).unwrap();
        let start = Position::new(0, 0);
        let goal = Position::new(0, 4);
        let result = GreedySolver::new(HeuristicKind::Manhattan)
            .solve(&grid, start, goal)
            .unwrap();
        assert_eq!(result.depth, Some(4));
        assert_eq!(result.path_cost, Some(4.0));
        assert_eq!(result.nodes_visited, 5);
        assert_eq!(result.nodes_generated, Some(5));
        assert_eq!(result.max_frontier_size, Some(1));
    }

    /// A wall lures greedy search into a dead end, so its path is longer than the optimum.
    #[test]
    fn not_optimal_behind_a_wall() {
        // |.....|
        // |.###.|
        // |.S#G.|
        // |.....|
        let grid = PathingGrid::from_rows(&[
            [0u8, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();
        let start = Position::new(2, 1);
        let goal = Position::new(2, 3);
        let result = GreedySolver::new(manhattan).solve(&grid, start, goal).unwrap();
        assert!(result.found);
        assert!(grid.is_valid_path(&result.path, false));
        assert!(result.depth.unwrap() >= 4);
        assert_eq!(result.path_cost, Some(result.depth.unwrap() as f64));
    }

    #[test]
    fn unreachable_goal() {
        let grid = PathingGrid::from_rows(&[[0u8, 1, 0]]).unwrap();
        let result = GreedySolver::new(manhattan)
            .solve(&grid, Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        assert!(!result.found);
        assert_eq!(result.path_cost, None);
        assert_eq!(result.nodes_visited, 1);
        assert_eq!(result.nodes_generated, Some(1));
    }
}
