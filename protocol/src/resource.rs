use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::ParseError;

const MIME_JSON: &str = "application/json";

/// Static resources the server can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceUri {
    /// pokemon://database
    Database,

    /// pokemon://pokedex
    Pokedex,
}

impl ResourceUri {
    pub const ALL: [ResourceUri; 2] = [ResourceUri::Database, ResourceUri::Pokedex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "pokemon://database",
            Self::Pokedex => "pokemon://pokedex",
        }
    }

    /// Listing entry for this resource
    pub fn descriptor(&self) -> ResourceDescriptor {
        let (name, description) = match self {
            Self::Database => (
                "Pokemon Database",
                "Complete Pokemon database with stats, types, abilities, and moves",
            ),
            Self::Pokedex => ("Pokedex Entries", "Detailed information about any Pokemon"),
        };

        ResourceDescriptor {
            uri: self.as_str().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            mime_type: MIME_JSON.to_string(),
        }
    }

    /// Body returned when the resource is read
    pub fn body(&self) -> Value {
        match self {
            Self::Database => json!({
                "name": "Pokemon Database",
                "description": "Access to comprehensive Pokemon data",
                "capabilities": [
                    "Fetch individual Pokemon data by name or ID",
                    "Get Pokemon stats and battle information",
                    "Access type effectiveness data",
                    "Retrieve move lists and abilities"
                ],
                "usage_examples": [
                    "Get Pokemon data: Use get_pokemon with a Pokemon name",
                    "Battle simulation: Use simulate_battle with two Pokemon names"
                ]
            }),
            Self::Pokedex => json!({
                "description": "Digital Pokemon encyclopedia",
                "available_data": {
                    "basic_info": ["name", "id", "types", "height", "weight"],
                    "battle_stats": ["hp", "attack", "defense", "special_attack", "special_defense", "speed"],
                    "abilities": "List of Pokemon abilities",
                    "moves": "Available moves with power, accuracy, and type"
                },
                "supported_pokemon": "All Pokemon from the official Pokedex (900+ species)"
            }),
        }
    }
}

impl std::fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource as advertised by `list_resources`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

pub fn resource_descriptors() -> Vec<ResourceDescriptor> {
    ResourceUri::ALL.iter().map(ResourceUri::descriptor).collect()
}

/// Parse a resource URI. Matching is exact apart from surrounding whitespace.
pub fn parse_resource_uri(uri: &str) -> Result<ResourceUri> {
    let uri = uri.trim();
    ResourceUri::ALL
        .into_iter()
        .find(|r| r.as_str() == uri)
        .ok_or_else(|| ParseError::UnknownResource(uri.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_uris() {
        assert_eq!(
            parse_resource_uri("pokemon://database").unwrap(),
            ResourceUri::Database
        );
        assert_eq!(
            parse_resource_uri(" pokemon://pokedex ").unwrap(),
            ResourceUri::Pokedex
        );
    }

    #[test]
    fn test_parse_unknown_uri() {
        let err = parse_resource_uri("pokemon://moves").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::UnknownResource("pokemon://moves".into()))
        );
    }

    #[test]
    fn test_descriptors_serialize_with_mime_type() {
        let listed = serde_json::to_value(resource_descriptors()).unwrap();
        assert_eq!(listed[0]["uri"], "pokemon://database");
        assert_eq!(listed[1]["mimeType"], "application/json");
        assert_eq!(listed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_bodies_describe_capabilities() {
        let database = ResourceUri::Database.body();
        assert_eq!(database["capabilities"].as_array().map(Vec::len), Some(4));

        let pokedex = ResourceUri::Pokedex.body();
        assert_eq!(pokedex["available_data"]["battle_stats"][3], "special_attack");
    }
}
