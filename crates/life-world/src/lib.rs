//! Evolution engine.
//!
//! This crate implements the bounded grid organisms live on, the evolution
//! rules, the rules engine applying them in order, and the world computing
//! one generation after another.

pub mod grid;
pub mod occurrence;
pub mod random;
pub mod rules;
pub mod engine;
pub mod world;

pub use grid::Grid;
pub use occurrence::SpeciesOccurrence;
pub use random::{FixedTieBreaker, RandomTieBreaker, TieBreaker};
pub use rules::{Rule, RuleError, RuleOutcome};
pub use engine::{EngineError, RulesEngine};
pub use world::{IterationReport, World, WorldPhase};
