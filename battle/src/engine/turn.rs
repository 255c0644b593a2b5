//! Turn order and attack exchange

use tracing::debug;

use crate::types::{Combatant, Effectiveness, StatusCondition, TypeEffectivenessTable};

use super::damage::{DamageCalculator, DamageRolls};
use super::report::BattleLogEntry;
use super::rng::RandomSource;
use super::status::{StatusEngine, StatusTick};

/// Move label recorded for every attack
pub const MOVE_LABEL: &str = "Tackle";

/// Everything that happened in one turn
#[derive(Debug, Clone, Default)]
pub struct TurnSummary {
    /// Attack attempts, in order
    pub entries: Vec<BattleLogEntry>,

    /// End-of-turn status damage, indexed like the combatant pair
    pub status_ticks: [Option<StatusTick>; 2],
}

/// Resolves one full exchange between two combatants
#[derive(Debug, Clone, Copy)]
pub struct TurnResolver<'a> {
    damage: DamageCalculator<'a>,
    status: StatusEngine,
}

impl<'a> TurnResolver<'a> {
    pub fn new(table: &'a TypeEffectivenessTable) -> Self {
        Self {
            damage: DamageCalculator::new(table),
            status: StatusEngine,
        }
    }

    /// Index of the combatant that acts first
    ///
    /// Higher speed goes first. A tie is settled by a coin flip, which is
    /// the only case that draws from `rng`.
    pub fn first_to_act<R: RandomSource + ?Sized>(&self, pair: &[Combatant; 2], rng: &mut R) -> usize {
        let (speed_a, speed_b) = (pair[0].speed(), pair[1].speed());
        if speed_a > speed_b {
            0
        } else if speed_b > speed_a {
            1
        } else if rng.chance(0.5) {
            0
        } else {
            1
        }
    }

    /// Run one attack attempt and record it
    pub fn attack<R: RandomSource + ?Sized>(
        &self,
        turn: u32,
        attacker: &Combatant,
        defender: &mut Combatant,
        rng: &mut R,
    ) -> BattleLogEntry {
        if self.status.loses_action(attacker, rng) {
            return entry(
                turn,
                attacker,
                defender,
                0,
                format!("{} is paralyzed and can't move!", attacker.name()),
            );
        }

        let rolls = DamageRolls::draw(rng);
        let hit = self.damage.calculate(attacker, defender, rolls);
        let dealt = defender.take_damage(hit.amount);
        let inflicted = self.status.roll_infliction(defender, rng);

        let message = narrate(attacker, defender, dealt, hit.multiplier, hit.critical, inflicted);
        debug!(
            turn,
            attacker = attacker.name(),
            defender = defender.name(),
            damage = dealt,
            critical = hit.critical,
            defender_hp = defender.current_hp(),
            "attack resolved"
        );

        entry(turn, attacker, defender, dealt, message)
    }

    /// Run a full turn: both attacks in speed order, then status damage
    ///
    /// The second attack is skipped when the first one knocks out the
    /// defender. Status damage only applies to combatants still standing.
    pub fn resolve<R: RandomSource + ?Sized>(
        &self,
        turn: u32,
        pair: &mut [Combatant; 2],
        rng: &mut R,
    ) -> TurnSummary {
        let first = self.first_to_act(pair, rng);
        let mut summary = TurnSummary::default();

        let [a, b] = &mut *pair;
        let (lead, follow) = if first == 0 { (a, b) } else { (b, a) };

        if lead.is_standing() && follow.is_standing() {
            summary.entries.push(self.attack(turn, lead, follow, rng));
        }
        if lead.is_standing() && follow.is_standing() {
            summary.entries.push(self.attack(turn, follow, lead, rng));
        }

        for (idx, combatant) in pair.iter_mut().enumerate() {
            summary.status_ticks[idx] = self.status.end_of_turn(combatant);
        }

        summary
    }
}

fn entry(
    turn: u32,
    attacker: &Combatant,
    defender: &Combatant,
    damage: u32,
    message: String,
) -> BattleLogEntry {
    BattleLogEntry {
        turn,
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        move_name: MOVE_LABEL.to_string(),
        damage,
        message,
        attacker_hp: attacker.current_hp(),
        defender_hp: defender.current_hp(),
    }
}

fn narrate(
    attacker: &Combatant,
    defender: &Combatant,
    damage: u32,
    multiplier: f64,
    critical: bool,
    inflicted: Option<StatusCondition>,
) -> String {
    let mut message = format!(
        "{} attacks {} for {} damage!",
        attacker.name(),
        defender.name(),
        damage
    );

    if critical {
        message.push_str(" Critical hit!");
    }
    match Effectiveness::from_multiplier(multiplier) {
        Effectiveness::SuperEffective => message.push_str(" It's super effective!"),
        Effectiveness::NotVeryEffective => message.push_str(" It's not very effective..."),
        Effectiveness::NoEffect => {
            message.push_str(&format!(" It doesn't affect {}...", defender.name()))
        }
        Effectiveness::Normal => {}
    }
    if let Some(status) = inflicted {
        message.push_str(&format!(" {} is now {}!", defender.name(), status.inflicted_verb()));
    }

    message
}
