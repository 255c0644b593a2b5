//! Type effectiveness lookup

use std::collections::HashMap;

use super::elemental_type::ElementalType;

/// Sparse (attacking, defending) -> multiplier table
///
/// Lookups are total: any pair without an entry, including attacking types
/// with no row at all, is neutral (1.0). The standard table deliberately
/// covers only a handful of attacking types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeEffectivenessTable {
    entries: HashMap<(ElementalType, ElementalType), f64>,
}

impl TypeEffectivenessTable {
    /// An empty table (every matchup neutral)
    pub fn new() -> Self {
        Self::default()
    }

    /// The chart the engine ships with
    pub fn standard() -> Self {
        use ElementalType::*;

        Self::new()
            .with_row(
                Fire,
                &[
                    (Grass, 2.0),
                    (Ice, 2.0),
                    (Bug, 2.0),
                    (Steel, 2.0),
                    (Fire, 0.5),
                    (Water, 0.5),
                    (Rock, 0.5),
                    (Dragon, 0.5),
                ],
            )
            .with_row(
                Water,
                &[
                    (Fire, 2.0),
                    (Ground, 2.0),
                    (Rock, 2.0),
                    (Water, 0.5),
                    (Grass, 0.5),
                    (Dragon, 0.5),
                ],
            )
            .with_row(
                Electric,
                &[
                    (Water, 2.0),
                    (Flying, 2.0),
                    (Electric, 0.5),
                    (Grass, 0.5),
                    (Dragon, 0.5),
                    (Ground, 0.0),
                ],
            )
            .with_row(
                Grass,
                &[
                    (Water, 2.0),
                    (Ground, 2.0),
                    (Rock, 2.0),
                    (Fire, 0.5),
                    (Grass, 0.5),
                    (Poison, 0.5),
                    (Flying, 0.5),
                    (Bug, 0.5),
                    (Dragon, 0.5),
                    (Steel, 0.5),
                ],
            )
    }

    /// Add or replace one matchup
    pub fn with_entry(
        mut self,
        attacking: ElementalType,
        defending: ElementalType,
        multiplier: f64,
    ) -> Self {
        self.entries.insert((attacking, defending), multiplier);
        self
    }

    /// Add a full row for one attacking type
    pub fn with_row(mut self, attacking: ElementalType, row: &[(ElementalType, f64)]) -> Self {
        for &(defending, multiplier) in row {
            self.entries.insert((attacking, defending), multiplier);
        }
        self
    }

    /// Multiplier for an attack of `attacking` type into a `defending` type
    pub fn lookup(&self, attacking: ElementalType, defending: ElementalType) -> f64 {
        self.entries
            .get(&(attacking, defending))
            .copied()
            .unwrap_or(1.0)
    }

    /// Check if the table has an explicit entry for a pair
    pub fn contains(&self, attacking: ElementalType, defending: ElementalType) -> bool {
        self.entries.contains_key(&(attacking, defending))
    }

    /// Number of explicit entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Coarse classification of a multiplier, for narration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    SuperEffective,
    NotVeryEffective,
    NoEffect,
    Normal,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier == 0.0 {
            Effectiveness::NoEffect
        } else if multiplier > 1.0 {
            Effectiveness::SuperEffective
        } else if multiplier < 1.0 {
            Effectiveness::NotVeryEffective
        } else {
            Effectiveness::Normal
        }
    }

    /// Human-readable description of the multiplier class
    pub fn description(&self) -> &'static str {
        match self {
            Effectiveness::SuperEffective => "Super effective! (2x damage)",
            Effectiveness::NotVeryEffective => "Not very effective... (0.5x damage)",
            Effectiveness::NoEffect => "No effect! (0x damage)",
            Effectiveness::Normal => "Normal effectiveness (1x damage)",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
