//! Entry point for running battles

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::catalog::CreatureCatalog;
use crate::error::BattleError;
use crate::types::{Combatant, TypeEffectivenessTable};

use super::battle::BattleLoop;
use super::report::BattleOutcome;
use super::rng::RandomSource;

/// Runs battles against a shared effectiveness table
///
/// Cheap to clone. Each call to [`simulate`](Self::simulate) builds fresh
/// battle state, so one engine can serve concurrent battles as long as each
/// has its own random stream.
#[derive(Debug, Clone)]
pub struct BattleEngine {
    table: Arc<TypeEffectivenessTable>,
}

impl Default for BattleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleEngine {
    /// Engine using the standard chart
    pub fn new() -> Self {
        Self::with_table(Arc::new(TypeEffectivenessTable::standard()))
    }

    pub fn with_table(table: Arc<TypeEffectivenessTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TypeEffectivenessTable {
        &self.table
    }

    /// Shared handle to the table
    pub fn shared_table(&self) -> Arc<TypeEffectivenessTable> {
        Arc::clone(&self.table)
    }

    /// Battle two prepared combatants until one is down or the turn cap hits
    pub fn simulate<R: RandomSource + ?Sized>(
        &self,
        first: Combatant,
        second: Combatant,
        rng: &mut R,
    ) -> BattleOutcome {
        info!(first = first.name(), second = second.name(), "starting battle");

        let outcome = BattleLoop::new([first, second], &self.table, rng).run();

        info!(
            winner = outcome.winner(),
            turns = outcome.total_turns(),
            "battle finished"
        );
        outcome
    }

    /// [`simulate`](Self::simulate) with a reproducible stream
    pub fn simulate_seeded(&self, first: Combatant, second: Combatant, seed: u64) -> BattleOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        self.simulate(first, second, &mut rng)
    }

    /// Resolve both creatures, build combatants at the given levels and battle them
    ///
    /// Both names are resolved and both levels validated before any battle
    /// state exists.
    pub fn simulate_named<C, R>(
        &self,
        catalog: &C,
        first: (&str, i64),
        second: (&str, i64),
        rng: &mut R,
    ) -> Result<BattleOutcome, BattleError>
    where
        C: CreatureCatalog + ?Sized,
        R: RandomSource + ?Sized,
    {
        let first_template = catalog.resolve(first.0)?;
        let second_template = catalog.resolve(second.0)?;

        let first = Combatant::new(first_template, first.1)?;
        let second = Combatant::new(second_template, second.1)?;

        Ok(self.simulate(first, second, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::engine::battle::TURN_CAP;
    use crate::engine::rng::ScriptedRolls;
    use crate::types::{BaseStats, CreatureTemplate, DEFAULT_LEVEL, ElementalType};

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with(CreatureTemplate::new(
                25,
                "Pikachu",
                vec![ElementalType::Electric],
                BaseStats::new(35, 55, 40, 50, 50, 90),
            ))
            .with(CreatureTemplate::new(
                7,
                "Squirtle",
                vec![ElementalType::Water],
                BaseStats::new(44, 48, 65, 50, 64, 43),
            ))
            .with(CreatureTemplate::new(
                4,
                "Charmander",
                vec![ElementalType::Fire],
                BaseStats::new(39, 52, 43, 60, 50, 65),
            ))
    }

    fn combatant(name: &str) -> Combatant {
        Combatant::new(catalog().resolve(name).unwrap(), DEFAULT_LEVEL.into()).unwrap()
    }

    #[test]
    fn test_same_seed_same_battle() {
        let engine = BattleEngine::new();
        let a = engine.simulate_seeded(combatant("pikachu"), combatant("squirtle"), 2024);
        let b = engine.simulate_seeded(combatant("pikachu"), combatant("squirtle"), 2024);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_battles_respect_bounds() {
        let engine = BattleEngine::new();
        for seed in 0..50 {
            let outcome = engine.simulate_seeded(combatant("charmander"), combatant("squirtle"), seed);
            assert!(outcome.total_turns() <= TURN_CAP);
            assert!(!outcome.log().is_empty());
            for s in outcome.standings() {
                assert!(s.current_hp <= s.max_hp);
            }
        }
    }

    #[test]
    fn test_simulate_named_resolves_both() {
        let engine = BattleEngine::new();
        let mut rolls = ScriptedRolls::constant(0.99);
        let outcome = engine
            .simulate_named(&catalog(), ("Pikachu", 50), ("7", 50), &mut rolls)
            .unwrap();

        let names: Vec<&str> = outcome.standings().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Pikachu", "Squirtle"]);
        // Electric hits Water for double and Pikachu is faster
        assert_eq!(outcome.winner(), "Pikachu");
    }

    #[test]
    fn test_simulate_named_unknown_creature() {
        let engine = BattleEngine::new();
        let mut rolls = ScriptedRolls::constant(0.5);
        let err = engine
            .simulate_named(&catalog(), ("pikachu", 50), ("mewtwo", 50), &mut rolls)
            .unwrap_err();
        assert_eq!(err, BattleError::CombatantNotFound("mewtwo".to_string()));
        assert_eq!(rolls.drawn(), 0);
    }

    #[test]
    fn test_simulate_named_invalid_level() {
        let engine = BattleEngine::new();
        let mut rolls = ScriptedRolls::constant(0.5);
        let err = engine
            .simulate_named(&catalog(), ("pikachu", 0), ("squirtle", 50), &mut rolls)
            .unwrap_err();
        assert_eq!(err, BattleError::InvalidLevel(0));
    }

    #[test]
    fn test_engine_shares_its_table() {
        let engine = BattleEngine::new();
        let clone = engine.clone();
        assert!(Arc::ptr_eq(&engine.shared_table(), &clone.shared_table()));
        assert_eq!(engine.table().lookup(ElementalType::Fire, ElementalType::Grass), 2.0);
    }
}
