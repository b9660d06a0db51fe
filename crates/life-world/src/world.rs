//! The world: a grid, its current population and the rules engine.

use crate::engine::RulesEngine;
use crate::grid::Grid;
use life_core::{Error, Organism, PopulationStats, Position, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Lifecycle of a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldPhase {
    /// Constructed, initial organisms not placed yet
    Uninitialized,
    /// Initial organisms placed, conflicts resolved
    Populated,
    /// At least one generation computed
    Iterating,
}

/// Summary of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationReport {
    pub generation: u64,
    pub stats: PopulationStats,
    pub births: usize,
    pub survivors: usize,
    pub deaths: usize,
}

pub struct World {
    grid: Grid,
    // next generation is assembled here, then swapped with `grid`
    back_grid: Grid,
    population: Vec<Organism>,
    engine: RulesEngine,
    phase: WorldPhase,
    generation: u64,
}

impl World {
    /// Anything already placed on `grid` is cleared; `organisms` are the
    /// only occupants, placed by `populate`.
    pub fn new(mut grid: Grid, organisms: Vec<Organism>, engine: RulesEngine) -> Self {
        grid.rebuild();
        Self {
            back_grid: grid.clone(),
            grid,
            population: organisms,
            engine,
            phase: WorldPhase::Uninitialized,
            generation: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn population(&self) -> &[Organism] {
        &self.population
    }

    pub fn into_population(self) -> Vec<Organism> {
        self.population
    }

    pub fn phase(&self) -> WorldPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn organism_at(&self, x: i32, y: i32) -> Result<Option<Organism>> {
        self.grid.organism_at(x, y).map_err(|e| {
            Error::world_internal(format!("Organism {} does not exist", Position::new(x, y)), e)
        })
    }

    /// Place the initial organisms on the grid.
    ///
    /// When two organisms claim the same cell only one of them, chosen at
    /// random, is kept and the population is reduced to what the grid holds.
    /// Returns whether such a conflict occurred.
    #[instrument(skip(self), fields(organisms = self.population.len()))]
    pub fn populate(&mut self) -> Result<bool> {
        if self.phase != WorldPhase::Uninitialized {
            return Err(Error::InvalidState(format!(
                "World can only be populated once (phase: {:?})",
                self.phase
            )));
        }

        // a partial placement must not leak into a later attempt
        let initial_conflict = match self.place_initial_organisms() {
            Ok(conflict) => conflict,
            Err(e) => {
                self.grid.rebuild();
                return Err(e);
            }
        };

        if initial_conflict {
            self.population = self.grid.organisms().collect();
        }

        self.phase = WorldPhase::Populated;
        debug!(
            population = self.population.len(),
            initial_conflict, "World populated"
        );

        Ok(initial_conflict)
    }

    /// Compute the next generation.
    ///
    /// Every cell is evolved against the current grid, which stays untouched
    /// during the scan. The next generation is placed on the back grid, which
    /// is then swapped in together with the new population.
    pub fn iterate(&mut self) -> Result<IterationReport> {
        if self.phase == WorldPhase::Uninitialized {
            return Err(Error::InvalidState(
                "World must be populated before iterating".to_string(),
            ));
        }

        let mut evolved = Vec::new();
        let mut births = 0;

        for x in 0..self.width() {
            for y in 0..self.height() {
                let current = self.organism_at(x, y)?;
                if let Some(organism) = self.evolve_organism_at(x, y, current.as_ref())? {
                    if current.is_none() {
                        births += 1;
                    }
                    evolved.push(organism);
                }
            }
        }

        self.back_grid.rebuild();
        self.back_grid
            .set_organisms(&evolved)
            .map_err(|e| Error::world_internal("Evolved organisms can not be set", e))?;

        let previous = self.grid.occupied_count();
        let survivors = evolved.len() - births;

        std::mem::swap(&mut self.grid, &mut self.back_grid);
        self.population = evolved;
        self.phase = WorldPhase::Iterating;
        self.generation += 1;

        let report = IterationReport {
            generation: self.generation,
            stats: PopulationStats::from_organisms(&self.population),
            births,
            survivors,
            deaths: previous - survivors,
        };

        debug!(
            generation = report.generation,
            population = report.stats.total,
            births = report.births,
            survivors = report.survivors,
            deaths = report.deaths,
            "Generation evolved"
        );

        Ok(report)
    }

    fn place_initial_organisms(&mut self) -> Result<bool> {
        let mut initial_conflict = false;

        for index in 0..self.population.len() {
            let mut organism = self.population[index];

            if let Some(current) = self.organism_at(organism.x(), organism.y())? {
                initial_conflict = true;
                organism = self.engine.evolve_randomly(organism, current);
                warn!(
                    cell = %organism.position,
                    survivor = %organism,
                    "Initial conflict, one organism must die"
                );
            }

            self.grid
                .set_organism(organism)
                .map_err(|e| {
                    Error::world_internal(format!("Organism {} can not be set", organism.position), e)
                })?;
        }

        Ok(initial_conflict)
    }

    fn evolve_organism_at(
        &mut self,
        x: i32,
        y: i32,
        current: Option<&Organism>,
    ) -> Result<Option<Organism>> {
        let neighbors = self.neighboring_organisms_at(x, y)?;

        // a cell no rule applies to stays empty
        Ok(self
            .engine
            .evolve_by_all_rules(current, neighbors, Position::new(x, y))
            .unwrap_or(None))
    }

    fn neighboring_organisms_at(&self, x: i32, y: i32) -> Result<Vec<Option<Organism>>> {
        let cells = self.grid.neighbor_cells_at(x, y).map_err(|e| {
            Error::world_internal(format!("Neighbors {} do not exist", Position::new(x, y)), e)
        })?;

        cells
            .into_iter()
            .map(|cell| self.organism_at(cell.x, cell.y))
            .collect()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("population", &self.population.len())
            .field("phase", &self.phase)
            .field("generation", &self.generation)
            .finish()
    }
}
