use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::ParseError;

/// Level used when a battle request leaves one out
pub const DEFAULT_LEVEL: i64 = 50;

/// Tool invocations the server understands
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    /// get_pokemon { name_or_id }
    GetCreature { name_or_id: String },

    /// simulate_battle { pokemon1, pokemon2, level1?, level2? }
    SimulateBattle {
        first: String,
        second: String,
        first_level: i64,
        second_level: i64,
    },

    /// get_type_effectiveness { attacking_type, defending_type }
    TypeEffectiveness { attacking: String, defending: String },
}

impl ToolCall {
    pub const GET_CREATURE: &'static str = "get_pokemon";
    pub const SIMULATE_BATTLE: &'static str = "simulate_battle";
    pub const TYPE_EFFECTIVENESS: &'static str = "get_type_effectiveness";

    /// Wire name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetCreature { .. } => Self::GET_CREATURE,
            Self::SimulateBattle { .. } => Self::SIMULATE_BATTLE,
            Self::TypeEffectiveness { .. } => Self::TYPE_EFFECTIVENESS,
        }
    }
}

/// A tool as advertised by `list_tools`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Every tool the server exposes, with its JSON input schema
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: ToolCall::GET_CREATURE.to_string(),
            description: "Get detailed information about a specific Pokemon".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name_or_id": {
                        "type": "string",
                        "description": "Pokemon name (e.g., 'pikachu') or ID number (e.g., '25')"
                    }
                },
                "required": ["name_or_id"]
            }),
        },
        ToolDescriptor {
            name: ToolCall::SIMULATE_BATTLE.to_string(),
            description: "Simulate a battle between two Pokemon".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pokemon1": {"type": "string", "description": "Name of first Pokemon"},
                    "pokemon2": {"type": "string", "description": "Name of second Pokemon"},
                    "level1": {"type": "integer", "description": "Level of first Pokemon", "default": DEFAULT_LEVEL},
                    "level2": {"type": "integer", "description": "Level of second Pokemon", "default": DEFAULT_LEVEL}
                },
                "required": ["pokemon1", "pokemon2"]
            }),
        },
        ToolDescriptor {
            name: ToolCall::TYPE_EFFECTIVENESS.to_string(),
            description: "Get type effectiveness information".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "attacking_type": {"type": "string", "description": "Attacking type"},
                    "defending_type": {"type": "string", "description": "Defending type"}
                },
                "required": ["attacking_type", "defending_type"]
            }),
        },
    ]
}

/// Parse a tool name and its JSON arguments into a [`ToolCall`]
///
/// `arguments` may be `null` when a tool is called without any.
pub fn parse_tool_call(name: &str, arguments: &Value) -> Result<ToolCall> {
    let empty = Map::new();
    let args = match arguments {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => {
            return Err(ParseError::InvalidArgument {
                name: "arguments".to_string(),
                reason: "expected an object".to_string(),
            }
            .into());
        }
    };

    match name.trim() {
        ToolCall::GET_CREATURE => Ok(ToolCall::GetCreature {
            name_or_id: required_string(args, "name_or_id")?,
        }),
        ToolCall::SIMULATE_BATTLE => Ok(ToolCall::SimulateBattle {
            first: required_string(args, "pokemon1")?,
            second: required_string(args, "pokemon2")?,
            first_level: optional_level(args, "level1")?,
            second_level: optional_level(args, "level2")?,
        }),
        ToolCall::TYPE_EFFECTIVENESS => Ok(ToolCall::TypeEffectiveness {
            attacking: required_string(args, "attacking_type")?.to_lowercase(),
            defending: required_string(args, "defending_type")?.to_lowercase(),
        }),
        other => Err(ParseError::UnknownTool(other.to_string()).into()),
    }
}

fn required_string(args: &Map<String, Value>, key: &str) -> Result<String> {
    // Numeric ids are accepted as numbers as well as strings
    let value = match args.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        None | Some(Value::Null) => String::new(),
        Some(_) => {
            return Err(ParseError::InvalidArgument {
                name: key.to_string(),
                reason: "expected a string".to_string(),
            }
            .into());
        }
    };

    if value.is_empty() {
        return Err(ParseError::MissingArgument(key.to_string()).into());
    }
    Ok(value)
}

fn optional_level(args: &Map<String, Value>, key: &str) -> Result<i64> {
    let invalid = |reason: &str| ParseError::InvalidArgument {
        name: key.to_string(),
        reason: reason.to_string(),
    };

    match args.get(key) {
        None | Some(Value::Null) => Ok(DEFAULT_LEVEL),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| invalid("expected an integer").into()),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("expected an integer").into()),
        Some(_) => Err(invalid("expected an integer").into()),
    }
}
