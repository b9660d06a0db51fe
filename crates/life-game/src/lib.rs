//! Game driver for the multi-species Game of Life.
//!
//! Reads the initial state from a [`StateStore`], runs the world for the
//! requested number of iterations and saves a snapshot after each one.

pub mod game;
pub mod input;
pub mod store;
pub mod xml;

pub use game::{Game, GameSummary};
pub use input::{check_input, usage};
pub use store::StateStore;
pub use xml::XmlStateStore;
