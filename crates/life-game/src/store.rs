//! Persistence boundary of the game.

use life_core::{GameState, Result};

/// Source of the initial state and sink for per-iteration snapshots.
///
/// A store keeps a single live snapshot: every write replaces the previous
/// one.
pub trait StateStore {
    /// Read and validate the initial state
    fn read_state(&mut self) -> Result<GameState>;

    /// Replace the stored snapshot with `state`
    fn write_state(&mut self, state: &GameState) -> Result<()>;
}
