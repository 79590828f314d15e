//! Exit discovery on the grid border.

use crate::{Grid, MazeError, MazeResult, Position};

/// Open (free) cells on the border, in row-major order. Includes the start if it is one.
fn open_border_cells(grid: &Grid) -> impl Iterator<Item = Position> + '_ {
    grid.positions()
        .filter(move |&pos| grid.is_border(pos) && grid.is_free(pos))
}

pub(crate) fn count_open_border_cells(grid: &Grid) -> usize {
    open_border_cells(grid).count()
}

/// Every open border cell other than the start, in scan order
pub(crate) fn exit_candidates(grid: &Grid, start: Position) -> Vec<Position> {
    open_border_cells(grid).filter(|&pos| pos != start).collect()
}

/// Pick the exit for a solve starting at `start`.
///
/// Needs at least two open border cells (the start counts when it sits on the border).
/// Among the candidates the one closest to the start by Manhattan distance wins; on a tie
/// the earliest in scan order is kept.
pub(crate) fn select_exit(grid: &Grid, start: Position) -> MazeResult<Position> {
    let open_border_cells = count_open_border_cells(grid);
    log::debug!("{} open border cell(s)", open_border_cells);
    if open_border_cells < 2 {
        return Err(MazeError::NoExit { open_border_cells });
    }

    let candidates = exit_candidates(grid, start);
    log::debug!("exit candidates from {}: {:?}", start, candidates);

    // min_by_key keeps the first of equal minimums
    candidates
        .into_iter()
        .min_by_key(|pos| pos.manhattan_distance(start))
        .ok_or(MazeError::NoExit { open_border_cells })
}
