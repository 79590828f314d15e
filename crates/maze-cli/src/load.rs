//! Grid loading for the command line.

use anyhow::{Context, Result};
use maze_core::{Grid, MazeResult};
use std::fs;
use std::path::Path;

/// Start cell used with the built-in sample
pub const SAMPLE_START: (i64, i64) = (3, 5);

/// The built-in 6x6 sample maze
pub fn sample_grid() -> MazeResult<Grid> {
    Grid::from_rows(vec![
        vec![-1, -1, -1, -1, -1, -1],
        vec![0, 0, 0, -1, 0, 0],
        vec![-1, 0, -1, -1, 0, -1],
        vec![-1, 0, -1, -1, 0, 0],
        vec![0, 0, 0, 0, 0, -1],
        vec![-1, -1, -1, -1, -1, -1],
    ])
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read a grid from `path`, JSON for `.json` files and the text format otherwise
pub fn load_grid(path: &Path) -> Result<Grid> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let grid = if is_json(path) {
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {} as JSON rows", path.display()))?
    } else {
        Grid::from_string(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?
    };

    log::debug!(
        "loaded {}x{} grid from {}",
        grid.height(),
        grid.width(),
        path.display()
    );
    Ok(grid)
}
