//! Static creature data supplied by a catalog

use super::elemental_type::ElementalType;
use super::stats::BaseStats;

/// A move a creature knows
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    pub move_type: ElementalType,
    pub power: u32,
    pub accuracy: u32,
    pub pp: u32,
}

impl Move {
    pub fn new(name: impl Into<String>, move_type: ElementalType) -> Self {
        Self {
            name: name.into(),
            move_type,
            power: 80,
            accuracy: 90,
            pp: 15,
        }
    }
}

/// Immutable attribute data for one creature species
///
/// The engine reads templates but never mutates them; battle-scoped state
/// lives in [`Combatant`](crate::Combatant).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureTemplate {
    /// Catalog id (national dex number)
    pub id: u32,

    /// Display name (e.g. "Pikachu")
    pub name: String,

    /// One or two types, primary first
    pub types: Vec<ElementalType>,

    pub stats: BaseStats,

    pub abilities: Vec<String>,

    pub moves: Vec<Move>,

    /// Height in metres
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,
}

impl CreatureTemplate {
    /// Create a template with no abilities, moves or physical measurements
    pub fn new(
        id: u32,
        name: impl Into<String>,
        types: Vec<ElementalType>,
        stats: BaseStats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            stats,
            abilities: Vec::new(),
            moves: Vec::new(),
            height: 0.0,
            weight: 0.0,
        }
    }

    /// First-listed type, if the template has any
    pub fn primary_type(&self) -> Option<ElementalType> {
        self.types.first().copied()
    }

    /// Type used for effectiveness lookups (primary type, Normal when untyped)
    pub fn effective_type(&self) -> ElementalType {
        self.primary_type().unwrap_or(ElementalType::Normal)
    }

    /// Check if the template lists a type
    pub fn has_type(&self, t: ElementalType) -> bool {
        self.types.contains(&t)
    }
}
