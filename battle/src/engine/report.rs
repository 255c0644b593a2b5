//! Battle log and outcome

use crate::types::{Combatant, StatusCondition};

use super::battle::Verdict;
use super::status::StatusTick;

/// Winner and loser name recorded when no side wins
pub const DRAW: &str = "Draw";

/// One attack attempt, as recorded in the battle log
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLogEntry {
    /// Turn the attack happened in (starting at 1)
    pub turn: u32,

    pub attacker: String,

    pub defender: String,

    /// Label of the move used
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub move_name: String,

    /// HP removed from the defender (0 for a skipped action)
    pub damage: u32,

    /// Narration of what happened
    pub message: String,

    /// Attacker HP after the action
    pub attacker_hp: u32,

    /// Defender HP after the action
    pub defender_hp: u32,
}

/// End-of-turn Burn or Poison damage taken by one combatant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusDamage {
    pub turn: u32,
    pub combatant: String,
    pub status: StatusCondition,
    pub damage: u32,
    pub remaining_hp: u32,
}

impl StatusDamage {
    pub fn from_tick(turn: u32, combatant: &Combatant, tick: StatusTick) -> Self {
        Self {
            turn,
            combatant: combatant.name().to_string(),
            status: tick.status,
            damage: tick.damage,
            remaining_hp: tick.remaining_hp,
        }
    }
}

/// Final state of one combatant
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standing {
    pub name: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub status: Option<StatusCondition>,
}

impl Standing {
    fn of(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name().to_string(),
            current_hp: combatant.current_hp(),
            max_hp: combatant.max_hp(),
            status: combatant.status(),
        }
    }
}

/// The result of a finished battle
///
/// Built once when the battle loop terminates and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    winner: String,
    loser: String,
    total_turns: u32,
    battle_log: Vec<BattleLogEntry>,
    status_damage: Vec<StatusDamage>,
    standings: [Standing; 2],
}

impl BattleOutcome {
    /// Winner's name, or [`DRAW`]
    pub fn winner(&self) -> &str {
        &self.winner
    }

    /// Loser's name, or [`DRAW`]
    pub fn loser(&self) -> &str {
        &self.loser
    }

    /// Number of fully completed turns
    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }

    /// Every attack attempt, in order
    pub fn log(&self) -> &[BattleLogEntry] {
        &self.battle_log
    }

    /// Recurring status damage, in the order it was applied
    pub fn status_damage(&self) -> &[StatusDamage] {
        &self.status_damage
    }

    /// Final state of both combatants, in the order they were supplied
    pub fn standings(&self) -> &[Standing; 2] {
        &self.standings
    }

    pub fn is_draw(&self) -> bool {
        self.winner == DRAW
    }
}

/// Turns the terminal state of a battle into a [`BattleOutcome`]
pub struct BattleReport;

impl BattleReport {
    pub fn build(
        verdict: Verdict,
        combatants: &[Combatant; 2],
        total_turns: u32,
        log: Vec<BattleLogEntry>,
        status_damage: Vec<StatusDamage>,
    ) -> BattleOutcome {
        let (winner, loser) = match verdict {
            Verdict::Winner(idx) => (
                combatants[idx].name().to_string(),
                combatants[1 - idx].name().to_string(),
            ),
            Verdict::Draw => (DRAW.to_string(), DRAW.to_string()),
        };

        BattleOutcome {
            winner,
            loser,
            total_turns,
            battle_log: log,
            status_damage,
            standings: [Standing::of(&combatants[0]), Standing::of(&combatants[1])],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, CreatureTemplate, ElementalType};

    fn pair() -> [Combatant; 2] {
        let stats = BaseStats::new(50, 50, 50, 50, 50, 50);
        [
            Combatant::new(CreatureTemplate::new(1, "Alpha", vec![ElementalType::Fire], stats), 50)
                .unwrap(),
            Combatant::new(CreatureTemplate::new(2, "Beta", vec![ElementalType::Water], stats), 50)
                .unwrap()
                .with_current_hp(0),
        ]
    }

    #[test]
    fn test_winner_report() {
        let outcome = BattleReport::build(Verdict::Winner(0), &pair(), 3, Vec::new(), Vec::new());
        assert_eq!(outcome.winner(), "Alpha");
        assert_eq!(outcome.loser(), "Beta");
        assert_eq!(outcome.total_turns(), 3);
        assert!(!outcome.is_draw());
        assert_eq!(outcome.standings()[1].current_hp, 0);
    }

    #[test]
    fn test_draw_report() {
        let outcome = BattleReport::build(Verdict::Draw, &pair(), 50, Vec::new(), Vec::new());
        assert_eq!(outcome.winner(), DRAW);
        assert_eq!(outcome.loser(), DRAW);
        assert!(outcome.is_draw());
    }

    #[test]
    fn test_report_keeps_log_order() {
        let entry = |turn| BattleLogEntry {
            turn,
            attacker: "Alpha".into(),
            defender: "Beta".into(),
            move_name: "Tackle".into(),
            damage: 1,
            message: String::new(),
            attacker_hp: 10,
            defender_hp: 9,
        };
        let outcome = BattleReport::build(Verdict::Winner(0), &pair(), 2, vec![entry(1), entry(2)], Vec::new());
        let turns: Vec<u32> = outcome.log().iter().map(|e| e.turn).collect();
        assert_eq!(turns, vec![1, 2]);
    }

    #[test]
    fn test_status_damage_from_tick() {
        let combatants = pair();
        let tick = StatusTick {
            status: StatusCondition::Poison,
            damage: 13,
            remaining_hp: 0,
        };
        let record = StatusDamage::from_tick(4, &combatants[1], tick);
        assert_eq!(record.turn, 4);
        assert_eq!(record.combatant, "Beta");
        assert_eq!(record.status, StatusCondition::Poison);

        let outcome = BattleReport::build(Verdict::Winner(0), &combatants, 4, Vec::new(), vec![record.clone()]);
        assert_eq!(outcome.status_damage(), &[record]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_field_names() {
        let entry = BattleLogEntry {
            turn: 1,
            attacker: "Alpha".into(),
            defender: "Beta".into(),
            move_name: "Tackle".into(),
            damage: 12,
            message: "Alpha attacks Beta for 12 damage!".into(),
            attacker_hp: 100,
            defender_hp: 88,
        };
        let burn = StatusDamage {
            turn: 1,
            combatant: "Beta".into(),
            status: StatusCondition::Burn,
            damage: 6,
            remaining_hp: 0,
        };
        let outcome = BattleReport::build(Verdict::Winner(0), &pair(), 1, vec![entry], vec![burn]);
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["winner"], "Alpha");
        assert_eq!(value["total_turns"], 1);
        assert_eq!(value["battle_log"][0]["move"], "Tackle");
        assert_eq!(value["battle_log"][0]["defender_hp"], 88);
        assert_eq!(value["status_damage"][0]["status"], "burn");
        assert_eq!(value["status_damage"][0]["combatant"], "Beta");
        assert_eq!(value["standings"][1]["status"], serde_json::Value::Null);
    }
}
