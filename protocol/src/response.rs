use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Battle log entries included in a battle summary
pub const LOG_PREVIEW_LEN: usize = 10;

/// Moves included in a creature summary
pub const MOVE_PREVIEW_LEN: usize = 5;

/// get_pokemon response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub name: String,
    pub id: u32,
    pub types: Vec<String>,
    pub stats: StatBlock,
    pub abilities: Vec<String>,

    /// Metres with unit suffix, e.g. "0.4m"
    pub height: String,

    /// Kilograms with unit suffix, e.g. "6.0kg"
    pub weight: String,

    /// At most [`MOVE_PREVIEW_LEN`] moves
    pub moves: Vec<MoveSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub power: u32,
    pub accuracy: u32,
}

/// simulate_battle response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub battle_result: BattleResultSummary,

    /// At most [`LOG_PREVIEW_LEN`] actions
    pub battle_log: Vec<ActionSummary>,

    pub note: String,
}

impl BattleSummary {
    /// Build a summary, keeping the first [`LOG_PREVIEW_LEN`] actions
    pub fn new(battle_result: BattleResultSummary, actions: Vec<ActionSummary>) -> Self {
        let total = actions.len();
        let battle_log = actions.into_iter().take(LOG_PREVIEW_LEN).collect();

        Self {
            battle_result,
            battle_log,
            note: format!(
                "Showing first {} of {} total battle actions",
                LOG_PREVIEW_LEN, total
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResultSummary {
    pub winner: String,
    pub loser: String,
    pub total_turns: u32,
}

/// One battle action as presented to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub turn: u32,

    /// "<attacker> used <move> on <defender>"
    pub action: String,

    pub damage: u32,

    /// Narration of the action
    pub result: String,

    /// HP after the action, keyed by combatant name
    pub remaining_hp: BTreeMap<String, u32>,
}

impl ActionSummary {
    pub fn new(
        turn: u32,
        attacker: (&str, u32),
        defender: (&str, u32),
        move_name: &str,
        damage: u32,
        result: impl Into<String>,
    ) -> Self {
        let mut remaining_hp = BTreeMap::new();
        remaining_hp.insert(attacker.0.to_string(), attacker.1);
        remaining_hp.insert(defender.0.to_string(), defender.1);

        Self {
            turn,
            action: format!("{} used {} on {}", attacker.0, move_name, defender.0),
            damage,
            result: result.into(),
            remaining_hp,
        }
    }
}

/// get_type_effectiveness response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessSummary {
    pub attacking_type: String,
    pub defending_type: String,
    pub effectiveness_multiplier: f64,
    pub effect: String,
}

/// Body returned for any failed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Pretty-print a response body
///
/// Serialization of these types cannot fail in practice; if it ever does the
/// failure is itself rendered as an error body.
pub fn render<T: Serialize>(body: &T) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|e| {
        format!(
            "{{\"error\": {}}}",
            serde_json::Value::String(format!("Failed to encode response: {}", e))
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn action(turn: u32) -> ActionSummary {
        ActionSummary::new(turn, ("Pikachu", 95), ("Squirtle", 40), "Tackle", 64, "hit")
    }

    #[test]
    fn test_action_summary_shape() {
        let value = serde_json::to_value(action(1)).unwrap();
        assert_eq!(value["action"], "Pikachu used Tackle on Squirtle");
        assert_eq!(value["remaining_hp"], json!({"Pikachu": 95, "Squirtle": 40}));
        assert_eq!(value["result"], "hit");
    }

    #[test]
    fn test_battle_summary_truncates_log() {
        let result = BattleResultSummary {
            winner: "Pikachu".into(),
            loser: "Squirtle".into(),
            total_turns: 7,
        };
        let summary = BattleSummary::new(result, (1..=13).map(action).collect());

        assert_eq!(summary.battle_log.len(), LOG_PREVIEW_LEN);
        assert_eq!(summary.battle_log[9].turn, 10);
        assert_eq!(summary.note, "Showing first 10 of 13 total battle actions");
    }

    #[test]
    fn test_move_summary_uses_type_key() {
        let value = serde_json::to_value(MoveSummary {
            name: "Thunder Shock".into(),
            move_type: "Electric".into(),
            power: 80,
            accuracy: 90,
        })
        .unwrap();
        assert_eq!(value["type"], "Electric");
        assert!(value.get("move_type").is_none());
    }

    #[test]
    fn test_render_error_body() {
        let rendered = render(&ErrorBody::new("Unknown tool: x"));
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!({"error": "Unknown tool: x"}));
    }
}
