use grid_search::{compare, heuristic_experiment, Algorithm, Maze, SearchOptions};

// Runs every algorithm on the same maze and prints their metrics side by side, then repeats
// A* with each heuristic. Pass `--diagonal` to allow diagonal moves.

const MAZE: &str = "
    S . . . # . . . . .
    . # # . # . # # # .
    . # . . . . . . # .
    . # . # # # # . # .
    . . . # . . . . # .
    # # . # . # # # # .
    . . . . . # . . . .
    . # # # . # . # # .
    . . . # . . . # . .
    # # . . . # . . . G
";

fn main() -> Result<(), grid_search::SearchError> {
    let allow_diagonal = std::env::args().any(|arg| arg == "--diagonal");
    let options = SearchOptions::default().with_diagonal(allow_diagonal);
    let maze: Maze = MAZE.parse()?;
    println!("{maze}");

    println!(
        "{:<20} {:>6} {:>8} {:>10} {:>9} {:>8}",
        "algorithm", "depth", "visited", "generated", "frontier", "cost"
    );
    for row in compare(&maze.grid, maze.start, maze.goal, &Algorithm::all(), options)? {
        let r = &row.result;
        println!(
            "{:<20} {:>6} {:>8} {:>10} {:>9} {:>8}",
            row.algorithm.to_string(),
            fmt_opt(r.depth.map(|d| d.to_string())),
            r.nodes_visited,
            fmt_opt(r.nodes_generated.map(|n| n.to_string())),
            fmt_opt(r.max_frontier_size.map(|n| n.to_string())),
            fmt_opt(r.path_cost.map(|c| format!("{c:.3}"))),
        );
    }

    println!();
    for row in heuristic_experiment(&maze.grid, maze.start, maze.goal, options)? {
        println!("{}: {}", row.algorithm, row.result);
        print!("{}", maze.render_path(&row.result.path));
    }
    Ok(())
}

fn fmt_opt(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_owned())
}
