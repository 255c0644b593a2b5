//! Status condition side effects

use tracing::debug;

use crate::types::{Combatant, StatusCondition};

use super::rng::RandomSource;

/// Probability that a paralyzed combatant loses its action
pub const PARALYSIS_SKIP_CHANCE: f64 = 0.25;

/// Probability that a hit inflicts a status on an unafflicted defender
pub const INFLICT_CHANCE: f64 = 0.10;

/// Burn takes 1/16 of max HP per turn
const BURN_DIVISOR: u32 = 16;

/// Poison takes 1/8 of max HP per turn
const POISON_DIVISOR: u32 = 8;

/// Recurring damage taken at the end of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTick {
    pub status: StatusCondition,
    pub damage: u32,
    pub remaining_hp: u32,
}

/// Applies Burn, Poison and Paralysis rules to combatants
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusEngine;

impl StatusEngine {
    /// Paralysis gate. Draws only when the combatant is paralyzed.
    pub fn loses_action<R: RandomSource + ?Sized>(&self, combatant: &Combatant, rng: &mut R) -> bool {
        match combatant.status() {
            Some(StatusCondition::Paralysis) => {
                let skipped = rng.chance(PARALYSIS_SKIP_CHANCE);
                if skipped {
                    debug!(combatant = combatant.name(), "fully paralyzed");
                }
                skipped
            }
            Some(StatusCondition::Burn) | Some(StatusCondition::Poison) | None => false,
        }
    }

    /// Roll to afflict a defender after a hit
    ///
    /// Defenders that already carry a status are left alone and no draw is
    /// made. On a successful roll a second draw picks the condition.
    pub fn roll_infliction<R: RandomSource + ?Sized>(
        &self,
        defender: &mut Combatant,
        rng: &mut R,
    ) -> Option<StatusCondition> {
        if defender.status().is_some() || !rng.chance(INFLICT_CHANCE) {
            return None;
        }

        let status = StatusCondition::ALL[rng.pick(StatusCondition::ALL.len())];
        defender.inflict(status);
        debug!(combatant = defender.name(), %status, "status inflicted");
        Some(status)
    }

    /// End-of-turn damage a status deals to a combatant, never below 1
    pub fn recurring_damage(&self, combatant: &Combatant) -> u32 {
        match combatant.status() {
            Some(StatusCondition::Burn) => (combatant.max_hp() / BURN_DIVISOR).max(1),
            Some(StatusCondition::Poison) => (combatant.max_hp() / POISON_DIVISOR).max(1),
            Some(StatusCondition::Paralysis) | None => 0,
        }
    }

    /// Apply end-of-turn effects to a combatant that is still standing
    pub fn end_of_turn(&self, combatant: &mut Combatant) -> Option<StatusTick> {
        if !combatant.is_standing() {
            return None;
        }
        let status = combatant.status()?;
        let damage = self.recurring_damage(combatant);
        if damage == 0 {
            return None;
        }

        combatant.take_damage(damage);
        debug!(
            combatant = combatant.name(),
            %status,
            damage,
            remaining_hp = combatant.current_hp(),
            "status damage"
        );

        Some(StatusTick {
            status,
            damage,
            remaining_hp: combatant.current_hp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::ScriptedRolls;
    use crate::types::{BaseStats, CreatureTemplate, ElementalType};

    /// Level 1 with base HP 0 gives max HP 11; base HP 100 at level 50 gives 160
    fn combatant(base_hp: u32, level: i64) -> Combatant {
        Combatant::new(
            CreatureTemplate::new(
                1,
                "Target",
                vec![ElementalType::Normal],
                BaseStats::new(base_hp, 50, 50, 50, 50, 50),
            ),
            level,
        )
        .unwrap()
    }

    #[test]
    fn test_burn_and_poison_fractions() {
        let engine = StatusEngine;
        let burned = combatant(100, 50).with_status(StatusCondition::Burn);
        let poisoned = combatant(100, 50).with_status(StatusCondition::Poison);
        assert_eq!(burned.max_hp(), 160);
        assert_eq!(engine.recurring_damage(&burned), 10);
        assert_eq!(engine.recurring_damage(&poisoned), 20);
    }

    #[test]
    fn test_recurring_damage_floor_is_one() {
        let engine = StatusEngine;
        let burned = combatant(0, 1).with_status(StatusCondition::Burn);
        assert_eq!(burned.max_hp(), 11);
        assert_eq!(engine.recurring_damage(&burned), 1);
    }

    #[test]
    fn test_poison_on_small_max_hp_deals_one() {
        let engine = StatusEngine;
        let mut poisoned = combatant(0, 1)
            .with_current_hp(10)
            .with_status(StatusCondition::Poison);
        let tick = engine.end_of_turn(&mut poisoned).unwrap();
        assert_eq!(tick.damage, 1);
        assert_eq!(poisoned.current_hp(), 9);
    }

    #[test]
    fn test_paralysis_has_no_passive_damage() {
        let engine = StatusEngine;
        let mut paralyzed = combatant(100, 50).with_status(StatusCondition::Paralysis);
        assert_eq!(engine.recurring_damage(&paralyzed), 0);
        assert!(engine.end_of_turn(&mut paralyzed).is_none());
        assert_eq!(paralyzed.current_hp(), paralyzed.max_hp());
    }

    #[test]
    fn test_fainted_combatants_take_no_status_damage() {
        let engine = StatusEngine;
        let mut fainted = combatant(100, 50)
            .with_current_hp(0)
            .with_status(StatusCondition::Poison);
        assert!(engine.end_of_turn(&mut fainted).is_none());
        assert_eq!(fainted.current_hp(), 0);
    }

    #[test]
    fn test_status_damage_clamps_at_zero() {
        let engine = StatusEngine;
        let mut burned = combatant(100, 50)
            .with_current_hp(3)
            .with_status(StatusCondition::Burn);
        let tick = engine.end_of_turn(&mut burned).unwrap();
        assert_eq!(tick.damage, 10);
        assert_eq!(tick.remaining_hp, 0);
        assert!(!burned.is_standing());
    }

    #[test]
    fn test_paralysis_gate() {
        let engine = StatusEngine;
        let paralyzed = combatant(100, 50).with_status(StatusCondition::Paralysis);
        let mut rolls = ScriptedRolls::new([0.1, 0.3]);
        assert!(engine.loses_action(&paralyzed, &mut rolls));
        assert!(!engine.loses_action(&paralyzed, &mut rolls));
    }

    #[test]
    fn test_gate_draws_nothing_for_healthy_combatants() {
        let engine = StatusEngine;
        let healthy = combatant(100, 50);
        let mut rolls = ScriptedRolls::new([0.0]);
        assert!(!engine.loses_action(&healthy, &mut rolls));
        assert_eq!(rolls.drawn(), 0);
    }

    #[test]
    fn test_infliction_roll_picks_uniformly() {
        let engine = StatusEngine;
        for (pick, expected) in [
            (0.1, StatusCondition::Burn),
            (0.5, StatusCondition::Poison),
            (0.9, StatusCondition::Paralysis),
        ] {
            let mut defender = combatant(100, 50);
            let mut rolls = ScriptedRolls::new([0.05, pick]);
            assert_eq!(engine.roll_infliction(&mut defender, &mut rolls), Some(expected));
            assert_eq!(defender.status(), Some(expected));
        }
    }

    #[test]
    fn test_infliction_roll_misses() {
        let engine = StatusEngine;
        let mut defender = combatant(100, 50);
        let mut rolls = ScriptedRolls::new([0.10]);
        assert_eq!(engine.roll_infliction(&mut defender, &mut rolls), None);
        assert!(defender.status().is_none());
        assert_eq!(rolls.drawn(), 1);
    }

    #[test]
    fn test_afflicted_defender_skips_the_roll() {
        let engine = StatusEngine;
        let mut defender = combatant(100, 50).with_status(StatusCondition::Burn);
        let mut rolls = ScriptedRolls::new([0.0, 0.9]);
        assert_eq!(engine.roll_infliction(&mut defender, &mut rolls), None);
        assert_eq!(defender.status(), Some(StatusCondition::Burn));
        assert_eq!(rolls.drawn(), 0);
    }
}
