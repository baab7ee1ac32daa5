use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Cell, Grid};

impl From<Cell> for Color {
    fn from(cell: Cell) -> Self {
        Color::new(cell.r, cell.g, cell.b, cell.a)
    }
}

/// Draw every alive cell of the grid in its own color
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    for (pos, cell) in grid.iter_cells().filter(|(_, cell)| cell.is_alive()) {
        draw_rectangle(
            pos.x as f32 * cell_size,
            pos.y as f32 * cell_size,
            cell_size,
            cell_size,
            cell.into(),
        );
    }
}

/// Text of the status bar
pub fn status_line(state: &GameState) -> String {
    format!(
        "{} | Gen {} | Pop {} | {:.0} gen/s | {} | {}",
        state.rule.name(),
        state.generation,
        state.world.front().population(),
        state.timer.ticks_per_second(),
        state.live_color.name(),
        if state.is_running { "Running" } else { "Paused" },
    )
}

/// Draw a one-line status bar in the top-left corner
pub fn draw_status(state: &GameState) {
    let status = status_line(state);
    let color = if state.is_running {
        Color::from_rgba(0, 255, 150, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    draw_rectangle(0.0, 0.0, screen_width(), 22.0, Color::from_rgba(30, 30, 30, 200));
    draw_text(&status, 6.0, 16.0, 18.0, color);
}
