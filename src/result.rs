use core::fmt;

use crate::Position;

/// Counters only the cost-aware searches (greedy and A*) keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FrontierStats {
    pub nodes_generated: usize,
    pub max_frontier_size: usize,
}

impl FrontierStats {
    pub fn observe(&mut self, frontier_len: usize) {
        self.max_frontier_size = self.max_frontier_size.max(frontier_len);
    }
}

/// The standardized output of every search. "No path" is a normal outcome with
/// `found == false`, an empty path and no depth or cost.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    /// Start to goal inclusive, empty if no path was found.
    pub path: Vec<Position>,
    /// Number of moves, `path.len() - 1`.
    pub depth: Option<usize>,
    /// Number of expansions.
    pub nodes_visited: usize,
    /// Wall-clock duration of the search in seconds.
    pub time: f64,
    pub nodes_generated: Option<usize>,
    pub max_frontier_size: Option<usize>,
    pub path_cost: Option<f64>,
}

impl SearchResult {
    /// Result of an uninformed search, which tracks no frontier or cost metrics.
    pub(crate) fn uninformed(path: Option<Vec<Position>>, nodes_visited: usize) -> SearchResult {
        let path = path.unwrap_or_default();
        SearchResult {
            found: !path.is_empty(),
            depth: path.len().checked_sub(1),
            path,
            nodes_visited,
            ..SearchResult::default()
        }
    }

    /// Result of a cost-aware search. `path_cost` is dropped if no path was found.
    pub(crate) fn informed(
        path: Option<(Vec<Position>, f64)>,
        nodes_visited: usize,
        stats: FrontierStats,
    ) -> SearchResult {
        let (path, path_cost) = match path {
            Some((path, cost)) => (path, Some(cost)),
            None => (Vec::new(), None),
        };
        SearchResult {
            nodes_generated: Some(stats.nodes_generated),
            max_frontier_size: Some(stats.max_frontier_size),
            path_cost,
            ..SearchResult::uninformed(Some(path), nodes_visited)
        }
    }

    /// Alias for [depth](Self::depth), the number of moves along the path.
    pub fn path_length(&self) -> Option<usize> {
        self.depth
    }

    pub fn goal(&self) -> Option<Position> {
        self.path.last().copied()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opt = |v: Option<String>| v.unwrap_or_else(|| "-".to_owned());
        write!(
            f,
            "found: {}, depth: {}, visited: {}, generated: {}, max frontier: {}, cost: {}, time: {:.6}s",
            self.found,
            opt(self.depth.map(|d| d.to_string())),
            self.nodes_visited,
            opt(self.nodes_generated.map(|n| n.to_string())),
            opt(self.max_frontier_size.map(|n| n.to_string())),
            opt(self.path_cost.map(|c| format!("{c:.3}"))),
            self.time
        )
    }
}
