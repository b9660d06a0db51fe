//! The game: runs a world for the requested number of iterations.

use crate::store::StateStore;
use life_core::{Error, GameState, Organism, PopulationStats, Result};
use life_world::{Grid, RulesEngine, World};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub initial_conflict: bool,
    pub iterations_run: u64,
    pub final_stats: PopulationStats,
}

pub struct Game<S: StateStore> {
    store: S,
    state: GameState,
    seed: Option<u64>,
}

impl<S: StateStore> Game<S> {
    pub fn new(store: S, state: GameState, seed: Option<u64>) -> Result<Self> {
        state.validate()?;
        Ok(Self { store, state, seed })
    }

    /// The latest saved state (the initial one before `start`)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Populate the world and run every iteration, saving the state after
    /// each one.
    #[instrument(skip(self), fields(state = %self.state, seed = ?self.seed))]
    pub fn start(&mut self) -> Result<GameSummary> {
        info!("Initiating the rules engine");
        let engine = match self.seed {
            Some(seed) => RulesEngine::seeded(seed),
            None => RulesEngine::from_entropy(),
        };

        info!("Preparing the world grid");
        let grid = Grid::new(self.state.cells_count, self.state.cells_count)
            .map_err(|e| Error::game("Game could not be initialized", e))?;

        info!("Preparing the world itself");
        let mut world = World::new(grid, self.state.organisms.clone(), engine);
        let initial_conflict = world
            .populate()
            .map_err(|e| Error::game("Game could not be initialized", e))?;

        info!(
            iterations = self.state.iterations_count,
            population = world.population().len(),
            initial_conflict,
            "Proceeding with iterations"
        );

        let mut iterations_run = 0;
        for remaining in (0..self.state.iterations_count).rev() {
            let report = world
                .iterate()
                .map_err(|e| Error::game("Game could not proceed with iteration", e))?;

            self.save(world.population().to_vec(), remaining)?;
            iterations_run += 1;

            info!(
                generation = report.generation,
                remaining,
                population = report.stats.total,
                births = report.births,
                deaths = report.deaths,
                "Iteration saved"
            );
        }

        let final_stats = PopulationStats::from_organisms(world.population());
        info!(
            iterations_run,
            population = final_stats.total,
            dominant_species = ?final_stats.dominant_species(),
            "Game finished"
        );

        Ok(GameSummary {
            initial_conflict,
            iterations_run,
            final_stats,
        })
    }

    fn save(&mut self, organisms: Vec<Organism>, iteration: i64) -> Result<()> {
        self.state = self.state.advance(iteration, organisms);
        self.store
            .write_state(&self.state)
            .map_err(|e| Error::game("Game could not save the state", e))
    }
}
