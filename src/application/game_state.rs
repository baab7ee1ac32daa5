use std::path::Path;

use rand::Rng;

use crate::config::Config;
use crate::domain::{Cell, LiveColor, Pattern, Position, Rule, TickTimer, World, default_rule};
use crate::error::PersistenceError;
use crate::persistence;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic; every piece of
/// per-frame mutable state lives here and is threaded through the main loop.
pub struct GameState {
    pub world: World,
    pub rule: Box<dyn Rule>,
    pub timer: TickTimer,
    pub live_color: LiveColor,
    /// Solid color restored when the gradient is switched off
    pub solid_color: Cell,
    pub is_running: bool,
    pub generation: u64,
    pub random_density: f64,
}

impl GameState {
    /// Create new game state with given grid dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_config(&Config::default(), width, height)
    }

    pub fn from_config(config: &Config, width: usize, height: usize) -> Self {
        Self {
            world: World::new(width, height),
            rule: default_rule(),
            timer: TickTimer::new(config.ticks_per_second),
            live_color: config.live_color,
            solid_color: match config.live_color {
                LiveColor::Solid(cell) => cell,
                LiveColor::Gradient => Cell::LIVE,
            },
            is_running: false,
            generation: 0,
            random_density: config.random_density,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.timer.reset();
        log::info!(
            "simulation {} at generation {}",
            if self.is_running { "running" } else { "paused" },
            self.generation
        );
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.world.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(self) -> Self {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng>(mut self, rng: &mut R) -> Self {
        let size = self.world.size();
        let live = self.live_color;
        self.world
            .front_mut()
            .randomize(rng, self.random_density, |pos| live.color_at(pos, size));
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.timer.adjust_speed(delta);
        self
    }

    /// Switch between the solid and gradient live colors
    pub fn toggle_gradient(mut self) -> Self {
        self.live_color = match self.live_color {
            LiveColor::Solid(cell) => {
                self.solid_color = cell;
                LiveColor::Gradient
            }
            LiveColor::Gradient => LiveColor::Solid(self.solid_color),
        };
        log::info!("live color: {}", self.live_color.name());
        self
    }

    /// Advance exactly one generation regardless of timing.
    /// A failed step leaves the grid and the generation counter as they were.
    pub fn step_once(mut self) -> Self {
        match self.world.step(self.rule.as_ref(), &self.live_color) {
            Ok(()) => {
                self.generation += 1;
                log::debug!(
                    "generation {} population {}",
                    self.generation,
                    self.world.front().population()
                );
            }
            Err(err) => log::warn!("generation {} not advanced: {err}", self.generation),
        }
        self
    }

    /// Update simulation by one frame
    /// Runs at most one generation per call, when the timer says one is due
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        if self.timer.advance(delta_time) {
            self = self.step_once();
        }

        self
    }

    /// Paint the live color at `pos` on the current front grid
    pub fn paint(&mut self, pos: Position) {
        let color = self.live_color.color_at(pos, self.world.size());
        // Callers map the pointer through `in_bounds` first; off-grid is a no-op
        let _ = self.world.front_mut().set(pos, color);
    }

    /// Reset the cell at `pos` to dead
    pub fn erase(&mut self, pos: Position) {
        let _ = self.world.front_mut().set(pos, Cell::DEAD);
    }

    /// Stamp a preset centered on `pos`
    pub fn place_pattern(&mut self, pattern: &Pattern, pos: Position) {
        let live = self.live_color;
        let placed = pattern.place_on(self.world.front_mut(), pos, &live);
        log::info!(
            "placed {} ({placed} cells) at ({}, {})",
            pattern.summary(),
            pos.x,
            pos.y
        );
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save(self.world.front(), path)
    }

    /// Load a snapshot into the front grid; on error the grid is unchanged
    pub fn load(&mut self, path: &Path) -> Result<(), PersistenceError> {
        persistence::load(self.world.front_mut(), path)?;
        self.generation = 0;
        self.is_running = false;
        Ok(())
    }
}
