//! Evolution rules.
//!
//! Each rule looks at one cell: its current occupant (if any) and how many
//! neighbors of each species surround it. A rule either has nothing to say
//! about the cell (`applied == false`) or decides its next state.

use crate::occurrence::SpeciesOccurrence;
use crate::random::TieBreaker;
use life_core::{Organism, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    #[error("Not applicable - {reason}")]
    NotApplicable { reason: &'static str },
}

impl RuleError {
    const ORGANISM_REQUIRED: RuleError = RuleError::NotApplicable {
        reason: "organism must exist",
    };
    const EMPTY_CELL_REQUIRED: RuleError = RuleError::NotApplicable {
        reason: "organism must not exist",
    };
}

/// Result of applying one rule to one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub organism: Option<Organism>,
    pub applied: bool,
}

impl RuleOutcome {
    fn decided(organism: Option<Organism>) -> Self {
        Self {
            organism,
            applied: true,
        }
    }

    fn skipped(organism: Option<Organism>) -> Self {
        Self {
            organism,
            applied: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Two or three same-species neighbors keep an organism alive.
    Survival,
    /// Fewer than two same-species neighbors kill an organism.
    Isolation,
    /// More than four same-species neighbors kill an organism.
    Overcrowding,
    /// Exactly three neighbors of one species give birth in an empty cell.
    Birth,
}

impl Rule {
    pub const SURVIVAL_COUNTS: [u32; 2] = [2, 3];
    pub const ISOLATION_BELOW: u32 = 2;
    pub const OVERCROWDING_ABOVE: u32 = 4;
    pub const BIRTH_COUNT: u32 = 3;

    /// Rules in evaluation order
    pub fn default_order() -> Vec<Rule> {
        vec![Rule::Survival, Rule::Isolation, Rule::Overcrowding, Rule::Birth]
    }

    pub fn apply(
        self,
        candidate: Option<&Organism>,
        occurrence: &SpeciesOccurrence,
        cell: Position,
        tie_breaker: &mut dyn TieBreaker,
    ) -> Result<RuleOutcome, RuleError> {
        match self {
            Rule::Survival => {
                let organism = require_organism(candidate)?;
                let survives = occurrence
                    .count(organism.species)
                    .is_some_and(|count| Self::SURVIVAL_COUNTS.contains(&count));

                Ok(if survives {
                    RuleOutcome::decided(Some(*organism))
                } else {
                    RuleOutcome::skipped(None)
                })
            }
            Rule::Isolation => {
                let organism = require_organism(candidate)?;
                let isolated = occurrence
                    .count(organism.species)
                    .is_some_and(|count| count < Self::ISOLATION_BELOW);

                Ok(if isolated {
                    RuleOutcome::decided(None)
                } else {
                    RuleOutcome::skipped(Some(*organism))
                })
            }
            Rule::Overcrowding => {
                let organism = require_organism(candidate)?;
                let overcrowded = occurrence
                    .count(organism.species)
                    .is_some_and(|count| count > Self::OVERCROWDING_ABOVE);

                Ok(if overcrowded {
                    RuleOutcome::decided(None)
                } else {
                    RuleOutcome::skipped(Some(*organism))
                })
            }
            Rule::Birth => {
                if candidate.is_some() {
                    return Err(RuleError::EMPTY_CELL_REQUIRED);
                }

                let parents = occurrence.species_with_count(Self::BIRTH_COUNT);
                if parents.is_empty() {
                    return Ok(RuleOutcome::skipped(None));
                }

                let species = parents[tie_breaker.pick(parents.len())];
                Ok(RuleOutcome::decided(Some(Organism::at(cell, species))))
            }
        }
    }
}

fn require_organism(candidate: Option<&Organism>) -> Result<&Organism, RuleError> {
    candidate.ok_or(RuleError::ORGANISM_REQUIRED)
}
