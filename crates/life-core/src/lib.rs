//! Core types and utilities for the multi-species Game of Life.

pub mod types;
pub mod config;
pub mod error;
pub mod state;
pub mod stats;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
pub use state::GameState;
pub use stats::PopulationStats;
