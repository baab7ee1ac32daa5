//! Runtime configuration.
//!
//! Defaults suit a desktop window; each field can be overridden with a
//! `LIFE_*` environment variable. Unparseable values are logged and ignored.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::LiveColor;
use crate::domain::timer::{MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND};

/// Largest window side accepted from the environment, in pixels
pub const MAX_WINDOW_SIDE: u32 = 16_384;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    /// Side of one cell on screen, in pixels
    pub cell_size: u32,
    pub ticks_per_second: f32,
    pub live_color: LiveColor,
    pub snapshot_path: PathBuf,
    /// Chance of a cell starting alive when randomizing
    pub random_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            cell_size: 4,
            ticks_per_second: 10.0,
            live_color: LiveColor::default(),
            snapshot_path: PathBuf::from("life.png"),
            random_density: 0.3,
        }
    }
}

impl Config {
    /// Defaults overridden by `LIFE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so overrides can be tested without
    /// touching the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(width) = parse_side(&lookup, "LIFE_WIDTH") {
            config.window_width = width;
        }
        if let Some(height) = parse_side(&lookup, "LIFE_HEIGHT") {
            config.window_height = height;
        }
        match parse::<u32>(&lookup, "LIFE_CELL_SIZE") {
            Some(0) => log::warn!("LIFE_CELL_SIZE must be positive, keeping {}", config.cell_size),
            Some(size) => config.cell_size = size,
            None => {}
        }
        if let Some(tps) = parse::<f32>(&lookup, "LIFE_TICKS_PER_SECOND") {
            config.ticks_per_second = tps.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
        }
        if let Some(gradient) = parse::<bool>(&lookup, "LIFE_GRADIENT") {
            config.live_color = if gradient {
                LiveColor::Gradient
            } else {
                LiveColor::default()
            };
        }
        if let Some(path) = lookup("LIFE_SNAPSHOT") {
            config.snapshot_path = PathBuf::from(path);
        }

        config
    }

    /// Grid dimensions: one cell per `cell_size` pixels of window
    pub fn grid_size(&self) -> (usize, usize) {
        let cell = self.cell_size.max(1);
        (
            (self.window_width / cell).max(1) as usize,
            (self.window_height / cell).max(1) as usize,
        )
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

/// Window side in pixels: zero is ignored, anything huge is clamped
fn parse_side(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u32> {
    match parse::<u32>(lookup, key)? {
        0 => {
            log::warn!("{key} must be positive, keeping the default");
            None
        }
        side if side > MAX_WINDOW_SIDE => {
            log::warn!("{key}={side} is too large, using {MAX_WINDOW_SIDE}");
            Some(MAX_WINDOW_SIDE)
        }
        side => Some(side),
    }
}
