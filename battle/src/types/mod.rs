//! Domain types for creatures and battle state

mod combatant;
mod creature;
mod effectiveness;
mod elemental_type;
mod stats;
mod status;

pub use combatant::Combatant;
pub use creature::{CreatureTemplate, Move};
pub use effectiveness::{Effectiveness, TypeEffectivenessTable};
pub use elemental_type::ElementalType;
pub use stats::{BaseStats, DEFAULT_LEVEL, Stat, actual_max_hp, actual_stat};
pub use status::StatusCondition;
