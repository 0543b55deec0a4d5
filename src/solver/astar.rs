use fxhash::{FxHashMap, FxHashSet};
use log::trace;
use std::collections::BinaryHeap;

use crate::frontier::{reverse_path, Sequence, SmallestCostHolder, NO_PARENT};
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::result::FrontierStats;
use crate::solver::{GridSolver, SearchOptions};
use crate::{PathingGrid, Position, SearchResult};

/// One pushed state. Nodes live in an arena and point at their parent by index; a position
/// gets a new node every time a cheaper way to it is found.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    pos: Position,
    g: f64,
    parent: usize,
}

/// A* search ordered by `f = g + h` with insertion order breaking ties. Optimal whenever the
/// heuristic is admissible for [SearchOptions].
#[derive(Clone, Debug)]
pub struct AstarSolver<H = HeuristicKind> {
    pub heuristic: H,
    pub options: SearchOptions,
}

impl<H: Heuristic> AstarSolver<H> {
    pub fn new(heuristic: H) -> AstarSolver<H> {
        AstarSolver {
            heuristic,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(heuristic: H, options: SearchOptions) -> AstarSolver<H> {
        AstarSolver { heuristic, options }
    }
}

impl<H: Heuristic> GridSolver for AstarSolver<H> {
    fn name(&self) -> String {
        "A*".to_owned()
    }

    fn options(&self) -> SearchOptions {
        self.options
    }

    fn search(&self, grid: &PathingGrid, start: Position, goal: Position) -> SearchResult {
        let mut nodes = vec![SearchNode {
            pos: start,
            g: 0.0,
            parent: NO_PARENT,
        }];
        let mut seq = Sequence::default();
        let mut open = BinaryHeap::new();
        open.push(SmallestCostHolder {
            priority: self.heuristic.estimate(start, goal),
            seq: seq.next(),
            item: 0,
        });
        let mut best_g: FxHashMap<Position, f64> = FxHashMap::default();
        best_g.insert(start, 0.0);
        let mut closed: FxHashSet<Position> = FxHashSet::default();
        let mut stats = FrontierStats {
            nodes_generated: 1,
            max_frontier_size: 0,
        };
        let mut nodes_expanded = 0;

        loop {
            stats.observe(open.len());
            let Some(SmallestCostHolder { item: index, .. }) = open.pop() else {
                break;
            };
            let SearchNode { pos, g, .. } = nodes[index];
            // We may have pushed this position several times if we found a cheaper way to
            // reach it. Only the entry carrying the best g counts.
            if best_g.get(&pos).is_some_and(|&best| best < g) {
                trace!("Discarding stale entry for {pos} (g = {g})");
                continue;
            }
            nodes_expanded += 1;
            if pos == goal {
                let path = reverse_path(|i| nodes.get(i).map(|n| (n.pos, n.parent)), index);
                return SearchResult::informed(Some((path, g)), nodes_expanded, stats);
            }
            closed.insert(pos);

            for neighbour in grid.neighborhood_points(&pos, self.options.allow_diagonal) {
                let tentative_g = g + self.options.step_cost(&pos, &neighbour);
                let known_g = best_g.get(&neighbour).copied().unwrap_or(f64::INFINITY);
                if closed.contains(&neighbour) && tentative_g >= known_g {
                    continue;
                }
                if tentative_g < known_g {
                    best_g.insert(neighbour, tentative_g);
                    nodes.push(SearchNode {
                        pos: neighbour,
                        g: tentative_g,
                        parent: index,
                    });
                    open.push(SmallestCostHolder {
                        priority: tentative_g + self.heuristic.estimate(neighbour, goal),
                        seq: seq.next(),
                        item: nodes.len() - 1,
                    });
                    stats.nodes_generated += 1;
                }
            }
        }
        SearchResult::informed(None, nodes_expanded, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{chebyshev, euclidean, manhattan, octile, zero};
    use std::f64::consts::SQRT_2;

    fn diagonal() -> SearchOptions {
        SearchOptions::default().with_diagonal(true)
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        for options in [SearchOptions::default(), diagonal()] {
            let grid = PathingGrid::new(1, 1, false).unwrap();
            let start = Position::new(0, 0);
            let result = AstarSolver::with_options(manhattan, options)
                .solve(&grid, start, start)
                .unwrap();
            assert_eq!(result.path, vec![start]);
            assert_eq!(result.depth, Some(0));
            assert_eq!(result.path_cost, Some(0.0));
            assert_eq!(result.nodes_visited, 1);
            assert_eq!(result.nodes_generated, Some(1));
        }
    }

    /// Asserts that the optimal solution is found with and without diagonals.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  G|
        for (options, expected_len, expected_cost) in [
            (SearchOptions::default(), 5, 4.0),
            (diagonal(), 4, 2.0 + SQRT_2),
        ] {
            let mut grid = PathingGrid::new(3, 3, false).unwrap();
            grid.set(Position::new(1, 1), true);
            let solver = AstarSolver::with_options(euclidean, options);
            let start = Position::new(0, 0);
            let end = Position::new(2, 2);
            let result = solver.solve(&grid, start, end).unwrap();
            assert_eq!(result.path.len(), expected_len);
            assert!((result.path_cost.unwrap() - expected_cost).abs() < 1e-9);
            assert!((solver.get_path_cost(&result.path) - expected_cost).abs() < 1e-9);
        }
    }

    #[test]
    fn test_complex() {
        // Going diagonally through (1, 1) is blocked, so the 8-grid path needs two straight moves
        for (options, expected) in [(SearchOptions::default(), 15), (diagonal(), 9)] {
            let mut grid = PathingGrid::new(10, 10, false).unwrap();
            grid.set(Position::new(1, 1), true);
            grid.set(Position::new(0, 5), true);
            grid.set(Position::new(5, 0), true);
            grid.set(Position::new(8, 8), true);
            let solver = AstarSolver::with_options(octile, options);
            let path = solver
                .get_path_single_goal(&grid, Position::new(0, 0), Position::new(7, 7))
                .unwrap()
                .unwrap();
            assert_eq!(path.len(), expected);
            assert!(grid.is_valid_path(&path, options.allow_diagonal));
        }
    }

    /// Tests whether allowing diagonals has the expected effect on path existence in a
    /// minimal setting.
    #[test]
    fn test_diagonal_switch_path() {
        //  __
        // |.#|
        // |#.|
        //  __
        let grid = PathingGrid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        let start = Position::new(0, 0);
        let goal = Position::new(1, 1);
        let straight = AstarSolver::new(manhattan).solve(&grid, start, goal).unwrap();
        let diag = AstarSolver::with_options(chebyshev, diagonal())
            .solve(&grid, start, goal)
            .unwrap();
        assert!(!straight.found);
        assert_eq!(straight.path_cost, None);
        assert!(diag.found);
        assert!((diag.path_cost.unwrap() - SQRT_2).abs() < 1e-12);
    }

    /// With a diagonal cost above 2 a diagonal step is never worth it.
    #[test]
    fn expensive_diagonals_are_avoided() {
        let grid = PathingGrid::new(4, 4, false).unwrap();
        let options = diagonal().with_diagonal_cost(2.5);
        let result = AstarSolver::with_options(zero, options)
            .solve(&grid, Position::new(0, 0), Position::new(3, 3))
            .unwrap();
        assert_eq!(result.path_cost, Some(6.0));
        assert!(result
            .path
            .windows(2)
            .all(|w| !w[0].is_diagonal_to(&w[1])));
    }

    /// (1, 1) is first pushed through the diagonal at cost 2.5 and then again through (1, 0)
    /// at cost 2. The superseded entry is popped before the goal and must not count as an
    /// expansion: every one of the six cells is expanded once, seven entries are popped.
    #[test]
    fn stale_entries_are_skipped() {
        let grid = PathingGrid::new(2, 3, false).unwrap();
        let options = diagonal().with_diagonal_cost(2.5);
        let result = AstarSolver::with_options(zero, options)
            .solve(&grid, Position::new(0, 0), Position::new(1, 2))
            .unwrap();
        assert_eq!(
            result.path,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
        );
        assert_eq!(result.path_cost, Some(3.0));
        assert_eq!(result.nodes_visited, 6);
        assert_eq!(result.nodes_generated, Some(8));
        assert_eq!(result.max_frontier_size, Some(4));
    }

    #[test]
    fn zero_heuristic_matches_admissible_cost() {
        let mut grid = PathingGrid::new(6, 6, false).unwrap();
        grid.set_rect(Position::new(1, 1), Position::new(4, 1), true);
        grid.set_rect(Position::new(1, 3), Position::new(1, 5), true);
        grid.set_rect(Position::new(3, 3), Position::new(5, 3), true);
        let start = Position::new(5, 0);
        let goal = Position::new(5, 5);
        for options in [SearchOptions::default(), diagonal()] {
            let baseline = AstarSolver::with_options(zero, options)
                .solve(&grid, start, goal)
                .unwrap();
            let informed = AstarSolver::with_options(euclidean, options)
                .solve(&grid, start, goal)
                .unwrap();
            assert!(baseline.found);
            assert!((baseline.path_cost.unwrap() - informed.path_cost.unwrap()).abs() < 1e-9);
            assert!(informed.nodes_visited <= baseline.nodes_visited);
        }
    }
}
