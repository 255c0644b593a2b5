use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Creature not found: {0}")]
    CombatantNotFound(String),

    #[error("Invalid level {0}: level must be positive")]
    InvalidLevel(i64),
}
