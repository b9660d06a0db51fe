//! Population statistics.

use crate::types::{Organism, SpeciesId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Head count of a population, in total and per species
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub total: usize,
    pub per_species: BTreeMap<SpeciesId, usize>,
}

impl PopulationStats {
    pub fn from_organisms<'a>(organisms: impl IntoIterator<Item = &'a Organism>) -> Self {
        let mut stats = Self::default();
        for organism in organisms {
            stats.total += 1;
            *stats.per_species.entry(organism.species).or_insert(0) += 1;
        }
        stats
    }

    pub fn count_of(&self, species: SpeciesId) -> usize {
        self.per_species.get(&species).copied().unwrap_or(0)
    }

    /// Species with the largest head count, lowest id on ties
    pub fn dominant_species(&self) -> Option<SpeciesId> {
        self.per_species
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(species, _)| *species)
    }

    pub fn is_extinct(&self) -> bool {
        self.total == 0
    }
}
