/// Trait for life-like survival/birth rules.
/// The tick driver only asks a rule whether a cell lives next generation.
pub trait Rule: Send + Sync {
    /// Name shown in the status line
    fn name(&self) -> &'static str;

    /// Decide whether a cell is alive next generation
    fn next_state(&self, alive: bool, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23):
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway B3/S23"
    }

    fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        next_state(alive, neighbors)
    }
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
