//! Status conditions

/// Persistent status conditions a combatant can carry through a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatusCondition {
    Burn,
    Poison,
    Paralysis,
}

impl StatusCondition {
    /// Every condition an attack can inflict, in roll order
    pub const ALL: [StatusCondition; 3] = [
        StatusCondition::Burn,
        StatusCondition::Poison,
        StatusCondition::Paralysis,
    ];

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCondition::Burn => "Burn",
            StatusCondition::Poison => "Poison",
            StatusCondition::Paralysis => "Paralysis",
        }
    }

    /// Past-tense form used in battle narration ("burned", "poisoned", "paralyzed")
    pub fn inflicted_verb(&self) -> &'static str {
        match self {
            StatusCondition::Burn => "burned",
            StatusCondition::Poison => "poisoned",
            StatusCondition::Paralysis => "paralyzed",
        }
    }
}

impl std::fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
