//! Elemental types

/// Elemental types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum ElementalType {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl ElementalType {
    /// All 18 elemental types
    pub const ALL: [ElementalType; 18] = [
        ElementalType::Normal,
        ElementalType::Fire,
        ElementalType::Water,
        ElementalType::Electric,
        ElementalType::Grass,
        ElementalType::Ice,
        ElementalType::Fighting,
        ElementalType::Poison,
        ElementalType::Ground,
        ElementalType::Flying,
        ElementalType::Psychic,
        ElementalType::Bug,
        ElementalType::Rock,
        ElementalType::Ghost,
        ElementalType::Dragon,
        ElementalType::Dark,
        ElementalType::Steel,
        ElementalType::Fairy,
    ];

    /// Parse a type name (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(ElementalType::Normal),
            "fire" => Some(ElementalType::Fire),
            "water" => Some(ElementalType::Water),
            "electric" => Some(ElementalType::Electric),
            "grass" => Some(ElementalType::Grass),
            "ice" => Some(ElementalType::Ice),
            "fighting" => Some(ElementalType::Fighting),
            "poison" => Some(ElementalType::Poison),
            "ground" => Some(ElementalType::Ground),
            "flying" => Some(ElementalType::Flying),
            "psychic" => Some(ElementalType::Psychic),
            "bug" => Some(ElementalType::Bug),
            "rock" => Some(ElementalType::Rock),
            "ghost" => Some(ElementalType::Ghost),
            "dragon" => Some(ElementalType::Dragon),
            "dark" => Some(ElementalType::Dark),
            "steel" => Some(ElementalType::Steel),
            "fairy" => Some(ElementalType::Fairy),
            _ => None,
        }
    }

    /// Lowercase identifier, as used by the remote catalog
    pub fn id(&self) -> &'static str {
        match self {
            ElementalType::Normal => "normal",
            ElementalType::Fire => "fire",
            ElementalType::Water => "water",
            ElementalType::Electric => "electric",
            ElementalType::Grass => "grass",
            ElementalType::Ice => "ice",
            ElementalType::Fighting => "fighting",
            ElementalType::Poison => "poison",
            ElementalType::Ground => "ground",
            ElementalType::Flying => "flying",
            ElementalType::Psychic => "psychic",
            ElementalType::Bug => "bug",
            ElementalType::Rock => "rock",
            ElementalType::Ghost => "ghost",
            ElementalType::Dragon => "dragon",
            ElementalType::Dark => "dark",
            ElementalType::Steel => "steel",
            ElementalType::Fairy => "fairy",
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementalType::Normal => "Normal",
            ElementalType::Fire => "Fire",
            ElementalType::Water => "Water",
            ElementalType::Electric => "Electric",
            ElementalType::Grass => "Grass",
            ElementalType::Ice => "Ice",
            ElementalType::Fighting => "Fighting",
            ElementalType::Poison => "Poison",
            ElementalType::Ground => "Ground",
            ElementalType::Flying => "Flying",
            ElementalType::Psychic => "Psychic",
            ElementalType::Bug => "Bug",
            ElementalType::Rock => "Rock",
            ElementalType::Ghost => "Ghost",
            ElementalType::Dragon => "Dragon",
            ElementalType::Dark => "Dark",
            ElementalType::Steel => "Steel",
            ElementalType::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for ElementalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
