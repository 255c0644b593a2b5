//! Creature lookup by name or id

use std::collections::HashMap;

use crate::error::BattleError;
use crate::types::CreatureTemplate;

/// Resolves a name or numeric id to a creature template
pub trait CreatureCatalog {
    fn resolve(&self, name_or_id: &str) -> Result<CreatureTemplate, BattleError>;
}

/// Catalog backed by templates held in memory
///
/// Templates are keyed by id. Each id owns exactly one lowercased name, so
/// a name and its id always resolve to the same template.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    by_id: HashMap<u32, CreatureTemplate>,
    by_name: HashMap<String, u32>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, template: CreatureTemplate) -> Self {
        self.insert(template);
        self
    }

    /// Add or replace a template
    ///
    /// Replaces any template with the same id and any template that held the
    /// same name under another id.
    pub fn insert(&mut self, template: CreatureTemplate) {
        let name_key = normalize(&template.name);

        if let Some(previous) = self.by_id.remove(&template.id) {
            self.by_name.remove(&normalize(&previous.name));
        }
        if let Some(owner) = self.by_name.remove(&name_key) {
            self.by_id.remove(&owner);
        }

        self.by_name.insert(name_key, template.id);
        self.by_id.insert(template.id, template);
    }

    /// Look up without cloning; names are tried before ids
    pub fn get(&self, name_or_id: &str) -> Option<&CreatureTemplate> {
        let key = normalize(name_or_id);
        match self.by_name.get(&key) {
            Some(id) => self.by_id.get(id),
            None => key.parse::<u32>().ok().and_then(|id| self.by_id.get(&id)),
        }
    }

    /// Number of distinct templates
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl CreatureCatalog for MemoryCatalog {
    fn resolve(&self, name_or_id: &str) -> Result<CreatureTemplate, BattleError> {
        self.get(name_or_id)
            .cloned()
            .ok_or_else(|| BattleError::CombatantNotFound(name_or_id.to_string()))
    }
}

impl FromIterator<CreatureTemplate> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = CreatureTemplate>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for template in iter {
            catalog.insert(template);
        }
        catalog
    }
}

/// Lookup key for an identifier: trimmed and lowercased
pub fn normalize(name_or_id: &str) -> String {
    name_or_id.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, ElementalType};

    fn charmander() -> CreatureTemplate {
        CreatureTemplate::new(
            4,
            "Charmander",
            vec![ElementalType::Fire],
            BaseStats::new(39, 52, 43, 60, 50, 65),
        )
    }

    #[test]
    fn test_resolve_by_name_and_id() {
        let catalog = MemoryCatalog::new().with(charmander());
        assert_eq!(catalog.resolve("charmander").unwrap().id, 4);
        assert_eq!(catalog.resolve("  CHARMANDER ").unwrap().id, 4);
        assert_eq!(catalog.resolve("4").unwrap().name, "Charmander");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let catalog = MemoryCatalog::new().with(charmander());
        assert_eq!(
            catalog.resolve("missingno"),
            Err(BattleError::CombatantNotFound("missingno".to_string()))
        );
    }

    #[test]
    fn test_reinsert_replaces() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert(charmander());
        let mut updated = charmander();
        updated.stats.speed = 100;
        catalog.insert(updated);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("4").unwrap().stats.speed, 100);
    }

    #[test]
    fn test_renamed_template_drops_old_name() {
        let mut catalog = MemoryCatalog::new().with(charmander());
        let mut renamed = charmander();
        renamed.name = "Hitokage".to_string();
        catalog.insert(renamed);

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("charmander").is_none());
        assert_eq!(catalog.resolve("hitokage").unwrap().id, 4);
        assert_eq!(catalog.resolve("4").unwrap().name, "Hitokage");
    }

    #[test]
    fn test_name_moved_to_new_id_drops_old_id() {
        let mut catalog = MemoryCatalog::new().with(charmander());
        let mut moved = charmander();
        moved.id = 5;
        catalog.insert(moved);

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("4").is_none());
        assert_eq!(catalog.resolve("charmander").unwrap().id, 5);
        assert_eq!(catalog.resolve("5").unwrap().name, "Charmander");
    }

    #[test]
    fn test_distinct_templates_are_counted() {
        let squirtle = CreatureTemplate::new(
            7,
            "Squirtle",
            vec![ElementalType::Water],
            BaseStats::new(44, 48, 65, 50, 64, 43),
        );
        let catalog: MemoryCatalog = [charmander(), squirtle].into_iter().collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("7").unwrap().name, "Squirtle");
    }
}
