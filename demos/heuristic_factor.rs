use grid_search::{
    AstarSolver, GridSolver, HeuristicKind, Maze, PathingGrid, Position, SearchOptions, Weighted,
};

// Wrapping a heuristic in Weighted scales it, so nodes that are closer to the goal (ignoring
// obstacles) are expanded sooner than in normal operation. This is Weighted A*: it usually
// expands fewer nodes, but the path is no longer guaranteed to be the cheapest.

fn main() -> Result<(), grid_search::SearchError> {
    const N: i32 = 30;
    let mut grid = PathingGrid::new(N as usize, N as usize, true)?;
    grid.set_rect(Position::new(1, 1), Position::new(N - 2, N - 2), false);
    grid.set_rect(Position::new(8, 8), Position::new(15, 15), true);
    grid.set_rect(Position::new(3, 0), Position::new(8, 5), true);
    grid.set_rect(Position::new(0, 10), Position::new(5, 15), true);
    let maze = Maze {
        grid,
        start: Position::new(1, 1),
        goal: Position::new(N - 3, N - 3),
    };
    let options = SearchOptions::default().with_diagonal(true);

    for weight in [1.0, 1.3, 2.0] {
        let heuristic = Weighted::new(HeuristicKind::Octile, weight)?;
        let solver = AstarSolver::with_options(heuristic, options);
        let result = solver.solve(&maze.grid, maze.start, maze.goal)?;
        println!("weight {weight}: {result}");
        if weight == 1.3 {
            print!("{}", maze.render_path(&result.path));
        }
    }
    Ok(())
}
