//! Per-cell neighbor counts grouped by species.

use life_core::{Organism, SpeciesId};
use std::collections::BTreeMap;

/// Number of live neighbors of each species around one cell.
///
/// Species are kept in ascending order so that tie-breaking among them is
/// reproducible for a given seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesOccurrence {
    counts: BTreeMap<SpeciesId, u32>,
}

impl SpeciesOccurrence {
    /// Count species among neighbor slots, skipping empty ones
    pub fn from_neighbors<I>(neighbors: I) -> Self
    where
        I: IntoIterator<Item = Option<Organism>>,
    {
        let mut counts = BTreeMap::new();
        for organism in neighbors.into_iter().flatten() {
            *counts.entry(organism.species).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for a species, `None` when no neighbor belongs to it
    pub fn count(&self, species: SpeciesId) -> Option<u32> {
        self.counts.get(&species).copied()
    }

    /// Species whose count is exactly `count`, in ascending order
    pub fn species_with_count(&self, count: u32) -> Vec<SpeciesId> {
        self.counts
            .iter()
            .filter(|(_, c)| **c == count)
            .map(|(species, _)| *species)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(SpeciesId, u32)> for SpeciesOccurrence {
    fn from_iter<T: IntoIterator<Item = (SpeciesId, u32)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
