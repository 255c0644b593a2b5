//! Creature battle engine and domain types.
//!
//! This crate holds the combat rules shared by every front end: derived stats,
//! type effectiveness, turn order, damage, status conditions, and the battle
//! loop that turns two combatants into a [`BattleOutcome`].
//!
//! # Overview
//!
//! `duel-battle` sits between the catalog that supplies creature data and the
//! surfaces that present results:
//!
//! ```text
//! duel-protocol (tool and resource wire types)
//!        │
//!        ▼
//! duel-client (catalog fetching, tool dispatch)
//!        │
//!        ▼
//! duel-battle (domain types + engine) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`ElementalType`] - The eighteen creature types
//! - [`TypeEffectivenessTable`] - Attacking/defending type multipliers
//! - [`StatusCondition`] - Burn, Poison and Paralysis
//! - [`CreatureTemplate`] - Immutable species data from a catalog
//! - [`Combatant`] - Battle-scoped HP, level and status
//!
//! ## Engine
//! - [`BattleEngine`] - Main entry point for running battles
//! - [`BattleLoop`] - Turn-by-turn state machine, for callers that want to step
//! - [`RandomSource`] - Per-battle random stream (any `rand::Rng`, or [`ScriptedRolls`])
//!
//! # Example Usage
//!
//! ```ignore
//! use duel_battle::{BattleEngine, Combatant, CreatureCatalog, MemoryCatalog};
//!
//! let engine = BattleEngine::new();
//! let catalog: MemoryCatalog = load_templates().collect();
//!
//! let outcome = engine.simulate_named(
//!     &catalog,
//!     ("pikachu", 50),
//!     ("squirtle", 50),
//!     &mut rand::thread_rng(),
//! )?;
//!
//! println!("{} won in {} turns", outcome.winner(), outcome.total_turns());
//! for entry in outcome.log() {
//!     println!("turn {}: {}", entry.turn, entry.message);
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod types;

// Re-export main types at crate root for convenience
pub use catalog::{CreatureCatalog, MemoryCatalog};
pub use engine::{
    BattleEngine, BattleLogEntry, BattleLoop, BattleOutcome, BattlePhase, DRAW, RandomSource,
    ScriptedRolls, Standing, StatusDamage, TURN_CAP, Verdict,
};
pub use error::BattleError;
pub use types::{
    BaseStats, Combatant, CreatureTemplate, DEFAULT_LEVEL, Effectiveness, ElementalType, Move,
    Stat, StatusCondition, TypeEffectivenessTable,
};
