//! Basic example of using the maze engine

use maze_core::{Grid, PathTracer, SearchMode, SolveOutcome, TracerConfig};

fn main() {
    // Parse a maze from the text format
    let maze = "
        -1 -1 -1 -1 -1 -1
         0  0  0 -1  0  0
        -1  0 -1 -1  0 -1
        -1  0 -1 -1  0  0
         0  0  0  0  0 -1
        -1 -1 -1 -1 -1 -1
    ";
    let mut grid = Grid::from_string(maze).expect("valid maze");

    println!("Maze ({}x{}):", grid.height(), grid.width());
    print!("{}", grid);

    // Trace from the right-hand opening
    println!("\nTracing from (3, 5)...\n");
    let config = TracerConfig {
        search: SearchMode::Iterative,
    };
    let mut tracer = PathTracer::with_config(&mut grid, 3, 5, config).expect("valid start");

    match tracer.solve() {
        Ok(SolveOutcome::Solved { exit, length, stats }) => {
            println!("Reached exit {} in {} steps", exit, length);
            println!("Cells marked: {}, reset: {}", stats.cells_marked, stats.cells_reset);
            let path: Vec<String> = tracer.path().iter().map(ToString::to_string).collect();
            println!("Path: {}\n", path.join(" -> "));
        }
        Ok(SolveOutcome::NoPath { exit, .. }) => {
            println!("No path to exit {}\n", exit);
        }
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    }

    // The tracer wrote straight into our grid
    print!("{}", grid);

    // A start on a wall is rejected up front
    println!("\n--- Invalid start ---\n");
    let mut walled = Grid::from_string("-1 0\n0 0").expect("valid maze");
    if let Err(e) = PathTracer::new(&mut walled, 0, 0) {
        println!("Rejected: {}", e);
    }
}
