//! Battle-scoped combatant state

use crate::error::BattleError;

use super::creature::CreatureTemplate;
use super::elemental_type::ElementalType;
use super::stats::{actual_max_hp, actual_stat};
use super::status::StatusCondition;

/// A creature taking part in one battle
///
/// Wraps an immutable [`CreatureTemplate`] with the state that changes while
/// the battle runs. `max_hp` is fixed at construction and `current_hp` never
/// leaves `0..=max_hp`.
#[derive(Debug, Clone)]
pub struct Combatant {
    template: CreatureTemplate,
    level: u32,
    max_hp: u32,
    current_hp: u32,
    status: Option<StatusCondition>,
}

impl Combatant {
    /// Create a combatant at full HP with no status
    pub fn new(template: CreatureTemplate, level: i64) -> Result<Self, BattleError> {
        let level = u32::try_from(level)
            .ok()
            .filter(|l| *l > 0)
            .ok_or(BattleError::InvalidLevel(level))?;
        let max_hp = actual_max_hp(template.stats.hp, level);

        Ok(Self {
            template,
            level,
            max_hp,
            current_hp: max_hp,
            status: None,
        })
    }

    /// Start the battle with reduced HP (clamped to `0..=max_hp`)
    pub fn with_current_hp(mut self, hp: u32) -> Self {
        self.current_hp = hp.min(self.max_hp);
        self
    }

    /// Start the battle already afflicted
    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    pub fn template(&self) -> &CreatureTemplate {
        &self.template
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn status(&self) -> Option<StatusCondition> {
        self.status
    }

    /// Type used for effectiveness lookups
    pub fn effective_type(&self) -> ElementalType {
        self.template.effective_type()
    }

    pub fn attack(&self) -> u32 {
        actual_stat(self.template.stats.attack, self.level)
    }

    pub fn defense(&self) -> u32 {
        actual_stat(self.template.stats.defense, self.level)
    }

    pub fn speed(&self) -> u32 {
        actual_stat(self.template.stats.speed, self.level)
    }

    /// Check if the combatant can still fight
    pub fn is_standing(&self) -> bool {
        self.current_hp > 0
    }

    /// Subtract HP, stopping at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Afflict with a status. Does nothing if one is already present.
    pub fn inflict(&mut self, status: StatusCondition) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }
}
