use grid_search::{astar, manhattan, PathingGrid, Position, SearchOptions};

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
// Nodes have a 4-neighborhood

fn main() -> Result<(), grid_search::SearchError> {
    let mut grid = PathingGrid::new(3, 3, false)?;
    grid.set(Position::new(1, 1), true);
    println!("{}", grid);
    let start = Position::new(0, 0);
    let goal = Position::new(2, 2);
    let result = astar(&grid, start, goal, manhattan, SearchOptions::default())?;
    println!("Path:");
    for p in &result.path {
        println!("{}", p);
    }
    println!("{}", result);
    Ok(())
}
