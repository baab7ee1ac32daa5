mod cell;
mod grid;
mod palette;
mod patterns;
mod position;
mod rules;
pub mod timer;
mod world;

pub use cell::Cell;
pub use grid::Grid;
pub use palette::LiveColor;
pub use patterns::{Pattern, presets};
pub use position::{NEIGHBOR_OFFSETS, Position};
pub use rules::{ConwayRule, Rule, default_rule, next_state};
pub use timer::TickTimer;
pub use world::{World, advance_generation};
