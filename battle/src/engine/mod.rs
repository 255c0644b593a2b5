//! Turn-based battle resolution

mod battle;
mod damage;
mod report;
mod rng;
mod simulator;
mod status;
mod turn;

pub use battle::{BattleLoop, BattlePhase, TURN_CAP, Verdict};
pub use damage::{CRITICAL_CHANCE, Damage, DamageCalculator, DamageRolls, RANGE_MAX, RANGE_MIN};
pub use report::{BattleLogEntry, BattleOutcome, BattleReport, DRAW, Standing, StatusDamage};
pub use rng::{RandomSource, ScriptedRolls};
pub use simulator::BattleEngine;
pub use status::{INFLICT_CHANCE, PARALYSIS_SKIP_CHANCE, StatusEngine, StatusTick};
pub use turn::{MOVE_LABEL, TurnResolver, TurnSummary};
