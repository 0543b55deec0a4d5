use indexmap::map::Entry::Vacant;

use crate::frontier::{reverse_path, Frontier, FxIndexMap, Queue, NO_PARENT};
use crate::solver::{GridSolver, SearchOptions};
use crate::{PathingGrid, Position, SearchResult};

/// Breadth-first search. Returns a path with the fewest moves, treating every step as one
/// move regardless of [SearchOptions::diagonal_cost].
#[derive(Clone, Debug, Default)]
pub struct BfsSolver {
    pub options: SearchOptions,
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver::default()
    }

    pub fn with_options(options: SearchOptions) -> BfsSolver {
        BfsSolver { options }
    }
}

impl GridSolver for BfsSolver {
    fn name(&self) -> String {
        "BFS".to_owned()
    }

    fn options(&self) -> SearchOptions {
        self.options
    }

    fn search(&self, grid: &PathingGrid, start: Position, goal: Position) -> SearchResult {
        uninformed_search::<Queue<usize>>(grid, start, goal, self.options.allow_diagonal)
    }
}

/// Search loop shared by BFS and DFS, which differ only in the frontier discipline `F`.
///
/// `discovered` doubles as the visited set and the parent arena: a position is inserted when
/// it is first seen, together with the index of the node it was reached from, and is never
/// inserted again. The frontier holds indices into it.
pub(crate) fn uninformed_search<F: Frontier<usize>>(
    grid: &PathingGrid,
    start: Position,
    goal: Position,
    allow_diagonal: bool,
) -> SearchResult {
    let mut discovered: FxIndexMap<Position, usize> = FxIndexMap::default();
    discovered.insert(start, NO_PARENT);
    let mut frontier = F::default();
    frontier.push(0);
    let mut nodes_visited = 0;

    while let Some(index) = frontier.pop() {
        let pos = match discovered.get_index(index) {
            Some((&pos, _)) => pos,
            None => continue,
        };
        nodes_visited += 1;
        if pos == goal {
            let path = reverse_path(
                |i| discovered.get_index(i).map(|(&p, &parent)| (p, parent)),
                index,
            );
            return SearchResult::uninformed(Some(path), nodes_visited);
        }
        for neighbour in grid.neighborhood_points(&pos, allow_diagonal) {
            if let Vacant(e) = discovered.entry(neighbour) {
                frontier.push(e.index());
                e.insert(index);
            }
        }
    }
    SearchResult::uninformed(None, nodes_visited)
}
