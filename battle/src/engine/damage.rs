//! Damage calculation

use tracing::trace;

use crate::types::{Combatant, TypeEffectivenessTable};

use super::rng::RandomSource;

/// Probability that a hit is critical
pub const CRITICAL_CHANCE: f64 = 0.0625;

/// Lower bound of the random damage range
pub const RANGE_MIN: f64 = 0.85;

/// Upper bound of the random damage range
pub const RANGE_MAX: f64 = 1.0;

/// Fixed power term of the simplified damage formula
const BASE_POWER: f64 = 80.0;

/// Random inputs to one damage calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRolls {
    /// Multiplier in `[RANGE_MIN, RANGE_MAX]`
    pub range: f64,
    pub critical: bool,
}

impl DamageRolls {
    /// Draw the range roll, then the critical roll
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let range = rng.uniform(RANGE_MIN, RANGE_MAX);
        let critical = rng.chance(CRITICAL_CHANCE);
        Self { range, critical }
    }

    /// Top of the range, no critical hit
    pub fn max_normal() -> Self {
        Self {
            range: RANGE_MAX,
            critical: false,
        }
    }
}

/// Result of one damage calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damage {
    pub amount: u32,
    pub multiplier: f64,
    pub critical: bool,
}

/// Computes attack damage against a shared effectiveness table
#[derive(Debug, Clone, Copy)]
pub struct DamageCalculator<'a> {
    table: &'a TypeEffectivenessTable,
}

impl<'a> DamageCalculator<'a> {
    pub fn new(table: &'a TypeEffectivenessTable) -> Self {
        Self { table }
    }

    /// Effectiveness of the attacker's primary type against the defender's
    pub fn multiplier(&self, attacker: &Combatant, defender: &Combatant) -> f64 {
        self.table
            .lookup(attacker.effective_type(), defender.effective_type())
    }

    /// Damage before type, range and critical modifiers
    pub fn base_damage(attacker: &Combatant, defender: &Combatant) -> f64 {
        let level = f64::from(attacker.level());
        let attack = f64::from(attacker.attack());
        let defense = f64::from(defender.defense());

        ((2.0 * level + 10.0) / 250.0) * (attack / defense) * BASE_POWER + 2.0
    }

    /// Damage for one hit with the given rolls
    ///
    /// The range roll is truncated first and the type and critical
    /// multipliers are applied to that integer, so a 2x matchup deals exactly
    /// twice the damage of a neutral one and a 0x matchup deals nothing.
    pub fn calculate(&self, attacker: &Combatant, defender: &Combatant, rolls: DamageRolls) -> Damage {
        let multiplier = self.multiplier(attacker, defender);
        let rolled = (Self::base_damage(attacker, defender) * rolls.range).floor();
        let mut amount = (rolled * multiplier).floor() as u32;
        if rolls.critical {
            amount = amount.saturating_mul(2);
        }

        trace!(
            attacker = attacker.name(),
            defender = defender.name(),
            multiplier,
            range = rolls.range,
            critical = rolls.critical,
            amount,
            "damage calculated"
        );

        Damage {
            amount,
            multiplier,
            critical: rolls.critical,
        }
    }
}
