use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use maze_core::{Grid, Position};
use std::io::{self, Write};

/// Write the grid exactly as its `Display` impl formats it
pub fn render_plain(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    write!(out, "{}", grid)?;
    out.flush()
}

/// Write the grid with the same spacing as `render_plain`, coloring each cell by role
pub fn render_colored(
    out: &mut impl Write,
    grid: &Grid,
    start: Position,
    exit: Option<Position>,
    theme: &Theme,
) -> io::Result<()> {
    for (row, cells) in grid.rows().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if col > 0 {
                queue!(out, Print("  "))?;
            }
            let color = theme.cell_color(Position::new(row, col), value, start, exit);
            queue!(out, SetForegroundColor(color), Print(format!("{:>2}", value)))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}
