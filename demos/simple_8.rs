use grid_search::{AstarSolver, GridSolver, HeuristicKind, PathingGrid, Position, SearchOptions};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have an 8-neighborhood, a diagonal step costs √2

fn main() -> Result<(), grid_search::SearchError> {
    let mut grid = PathingGrid::new(3, 3, false)?;
    grid.set(Position::new(1, 1), true);
    println!("{}", grid);
    let solver = AstarSolver::with_options(
        HeuristicKind::Octile,
        SearchOptions::default().with_diagonal(true),
    );
    let start = Position::new(0, 0);
    let goal = Position::new(2, 2);
    if let Some(path) = solver.get_path_single_goal(&grid, start, goal)? {
        println!("Path (cost {:.3}):", solver.get_path_cost(&path));
        for p in path {
            println!("{}", p);
        }
    }
    Ok(())
}
