use macroquad::prelude::*;

use crate::application::GameState;
use crate::config::Config;
use crate::domain::{Grid, Pattern, Position};

/// Map a screen position to the grid cell under it, if any
pub fn cell_at(screen_x: f32, screen_y: f32, cell_size: f32, grid: &Grid) -> Option<Position> {
    let finite = screen_x.is_finite() && screen_y.is_finite() && cell_size.is_finite();
    if !finite || screen_x < 0.0 || screen_y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let pos = Position::new((screen_x / cell_size) as i32, (screen_y / cell_size) as i32);
    grid.in_bounds(pos).then_some(pos)
}

/// Paint with the left button, erase with the right.
/// The target grid is looked up fresh each frame since ticks swap buffers.
pub fn handle_mouse_paint(state: &mut GameState, cell_size: f32, mouse_pos: (f32, f32)) {
    let Some(pos) = cell_at(mouse_pos.0, mouse_pos.1, cell_size, state.world.front()) else {
        return;
    };

    if is_mouse_button_down(MouseButton::Left) {
        state.paint(pos);
    } else if is_mouse_button_down(MouseButton::Right) {
        state.erase(pos);
    }
}

/// Number keys 1-9 stamp the matching preset under the cursor
pub fn handle_pattern_keys(
    state: &mut GameState,
    patterns: &[Pattern],
    cell_size: f32,
    mouse_pos: (f32, f32),
) {
    const DIGITS: [KeyCode; 9] = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
        KeyCode::Key7,
        KeyCode::Key8,
        KeyCode::Key9,
    ];

    let Some(pos) = cell_at(mouse_pos.0, mouse_pos.1, cell_size, state.world.front()) else {
        return;
    };

    for (key, pattern) in DIGITS.iter().zip(patterns) {
        if is_key_pressed(*key) {
            state.place_pattern(pattern, pos);
        }
    }
}

/// Save with S, load with L. Failures are logged and the grid stays as it was.
pub fn handle_snapshot_keys(state: &mut GameState, config: &Config) {
    let path = config.snapshot_path.as_path();

    if is_key_pressed(KeyCode::S) {
        if let Err(err) = state.save(path) {
            log::warn!("could not save {}: {err}", path.display());
        }
    }

    if is_key_pressed(KeyCode::L) {
        if let Err(err) = state.load(path) {
            log::warn!("could not load {}: {err}", path.display());
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::G, GameState::toggle_gradient),
        (KeyCode::N, |s| if s.is_running { s } else { s.step_once() }),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
