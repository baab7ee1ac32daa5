// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Per-frame state and use cases
pub mod application;

// Infrastructure layer - Config, snapshots, rendering, input
pub mod config;
pub mod error;
pub mod persistence;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LiveColor, Position, World, advance_generation, presets};
pub use application::GameState;
pub use config::Config;
pub use error::{GridError, PersistenceError};
