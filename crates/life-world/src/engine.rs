//! Rules engine: ordered application of the evolution rules.

use crate::occurrence::SpeciesOccurrence;
use crate::random::{RandomTieBreaker, TieBreaker};
use crate::rules::Rule;
use life_core::{Organism, Position};
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("Organism at {cell} can not be evolved by any of the rules")]
    CannotEvolve { cell: Position },
}

/// Applies an ordered list of rules to a cell
pub struct RulesEngine {
    rules: Vec<Rule>,
    tie_breaker: Box<dyn TieBreaker>,
}

impl RulesEngine {
    /// Engine with the default rule order: survival, isolation,
    /// overcrowding, birth.
    pub fn new(tie_breaker: Box<dyn TieBreaker>) -> Self {
        Self::with_rules(Rule::default_order(), tie_breaker)
    }

    pub fn with_rules(rules: Vec<Rule>, tie_breaker: Box<dyn TieBreaker>) -> Self {
        Self { rules, tie_breaker }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(RandomTieBreaker::seeded(seed)))
    }

    pub fn from_entropy() -> Self {
        Self::new(Box::new(RandomTieBreaker::from_entropy()))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evolve one cell.
    ///
    /// Rules that do not handle the presence (or absence) of `candidate` are
    /// skipped. The first rule that applies decides the cell: `Some` for an
    /// organism living there next generation, `None` for a death. When no
    /// rule applies the cell cannot be evolved, which callers treat as an
    /// empty cell.
    pub fn evolve_by_all_rules<I>(
        &mut self,
        candidate: Option<&Organism>,
        neighbors: I,
        cell: Position,
    ) -> Result<Option<Organism>, EngineError>
    where
        I: IntoIterator<Item = Option<Organism>>,
    {
        let occurrence = SpeciesOccurrence::from_neighbors(neighbors);

        for rule in &self.rules {
            match rule.apply(candidate, &occurrence, cell, self.tie_breaker.as_mut()) {
                Ok(outcome) if outcome.applied => {
                    trace!(?rule, %cell, organism = ?outcome.organism, "Rule applied");
                    return Ok(outcome.organism);
                }
                Ok(_) => {}
                Err(err) => {
                    trace!(?rule, %cell, %err, "Rule skipped");
                }
            }
        }

        Err(EngineError::CannotEvolve { cell })
    }

    /// Keep one of two organisms claiming the same cell, chosen at random
    pub fn evolve_randomly(&mut self, first: Organism, second: Organism) -> Organism {
        if self.tie_breaker.pick(2) == 0 {
            first
        } else {
            second
        }
    }
}

impl std::fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RulesEngine")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
