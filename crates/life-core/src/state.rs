//! Game state exchanged with the state store.

use crate::error::{Error, Result};
use crate::types::Organism;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a game: grid size, declared species, remaining iterations and
/// the living organisms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cells per side of the square grid
    pub cells_count: i32,
    /// Declared number of species (not enforced against organism species)
    pub species_count: i32,
    /// Iterations still to run
    pub iterations_count: i64,
    pub organisms: Vec<Organism>,
}

impl GameState {
    pub fn new(
        cells_count: i32,
        species_count: i32,
        iterations_count: i64,
        organisms: Vec<Organism>,
    ) -> Self {
        Self {
            cells_count,
            species_count,
            iterations_count,
            organisms,
        }
    }

    /// Same grid and species with a new iteration counter and population.
    pub fn advance(&self, iterations_count: i64, organisms: Vec<Organism>) -> Self {
        Self {
            cells_count: self.cells_count,
            species_count: self.species_count,
            iterations_count,
            organisms,
        }
    }

    /// Check that the state can be handed to the world.
    pub fn validate(&self) -> Result<()> {
        if self.cells_count <= 0 {
            return Err(Error::Validation(format!(
                "State is not valid: {} (cells must be positive)",
                self
            )));
        }

        if self.species_count <= 0 {
            return Err(Error::Validation(format!(
                "State is not valid: {} (species must be positive)",
                self
            )));
        }

        if self.iterations_count < 0 {
            return Err(Error::Validation(format!(
                "State is not valid: {} (iterations must not be negative)",
                self
            )));
        }

        if self.organisms.is_empty() {
            return Err(Error::Validation(format!(
                "State is not valid: {} (no organisms)",
                self
            )));
        }

        if let Some(organism) = self.organisms.iter().find(|o| o.species.0 == 0) {
            return Err(Error::Validation(format!(
                "State is not valid: {} (organism {} has no species)",
                self, organism
            )));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.cells_count, self.species_count, self.iterations_count
        )
    }
}
