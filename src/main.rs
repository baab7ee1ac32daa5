use macroquad::prelude::*;
use color_life::{Config, GameState, presets, input, rendering};

fn window_conf() -> Conf {
    let config = Config::from_env();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: i32::try_from(config.window_width).unwrap_or(i32::MAX),
        window_height: i32::try_from(config.window_height).unwrap_or(i32::MAX),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::from_env();
    let (width, height) = config.grid_size();
    let cell_size = config.cell_size as f32;
    let patterns = presets::all_patterns();

    let mut state = GameState::from_config(&config, width, height);
    log::info!(
        "{width}x{height} grid at {} gen/s; Space to run, S/L to save/load {}",
        config.ticks_per_second,
        config.snapshot_path.display()
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let mouse_pos = mouse_position();

        // Input may mutate the front grid between ticks, never during one
        input::handle_mouse_paint(&mut state, cell_size, mouse_pos);
        input::handle_pattern_keys(&mut state, &patterns, cell_size, mouse_pos);
        input::handle_snapshot_keys(&mut state, &config);
        state = input::process_keyboard_input(state);

        // Update game state
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(state.world.front(), cell_size);
        rendering::draw_status(&state);

        next_frame().await;
    }

    log::info!("exiting at generation {}", state.generation);
}
