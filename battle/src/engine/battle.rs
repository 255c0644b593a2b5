//! The battle loop state machine

use tracing::debug;

use crate::types::{Combatant, TypeEffectivenessTable};

use super::report::{BattleLogEntry, BattleOutcome, BattleReport, StatusDamage};
use super::rng::RandomSource;
use super::turn::TurnResolver;

/// Completed turns after which an undecided battle is a draw
pub const TURN_CAP: u32 = 50;

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Index of the winning combatant
    Winner(usize),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    InProgress,
    Terminated(Verdict),
}

/// Drives turns between two combatants until one side is down or the cap is hit
///
/// The loop owns its combatants and borrows the battle's random stream, so
/// concurrent battles never share mutable state.
pub struct BattleLoop<'a, 'r, R: RandomSource + ?Sized> {
    combatants: [Combatant; 2],
    resolver: TurnResolver<'a>,
    rng: &'r mut R,
    log: Vec<BattleLogEntry>,
    status_damage: Vec<StatusDamage>,
    turn: u32,
    phase: BattlePhase,
}

impl<'a, 'r, R: RandomSource + ?Sized> BattleLoop<'a, 'r, R> {
    /// Start a battle
    ///
    /// A pair that already has a combatant down terminates immediately with
    /// zero turns played.
    pub fn new(
        combatants: [Combatant; 2],
        table: &'a TypeEffectivenessTable,
        rng: &'r mut R,
    ) -> Self {
        let phase = match knockout_verdict(&combatants) {
            Some(verdict) => BattlePhase::Terminated(verdict),
            None => BattlePhase::InProgress,
        };

        Self {
            combatants,
            resolver: TurnResolver::new(table),
            rng,
            log: Vec::new(),
            status_damage: Vec::new(),
            turn: 0,
            phase,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Number of completed turns
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    pub fn log(&self) -> &[BattleLogEntry] {
        &self.log
    }

    /// End-of-turn status damage recorded so far
    pub fn status_damage(&self) -> &[StatusDamage] {
        &self.status_damage
    }

    /// Play one turn and evaluate termination
    ///
    /// Does nothing once the battle has terminated.
    pub fn step(&mut self) -> BattlePhase {
        if self.phase != BattlePhase::InProgress {
            return self.phase;
        }

        self.turn += 1;
        let summary = self
            .resolver
            .resolve(self.turn, &mut self.combatants, &mut *self.rng);
        self.log.extend(summary.entries);
        for (combatant, tick) in self.combatants.iter().zip(summary.status_ticks) {
            if let Some(tick) = tick {
                self.status_damage
                    .push(StatusDamage::from_tick(self.turn, combatant, tick));
            }
        }

        self.phase = match knockout_verdict(&self.combatants) {
            Some(verdict) => BattlePhase::Terminated(verdict),
            None if self.turn >= TURN_CAP => BattlePhase::Terminated(Verdict::Draw),
            None => BattlePhase::InProgress,
        };

        if let BattlePhase::Terminated(verdict) = self.phase {
            debug!(turn = self.turn, ?verdict, "battle terminated");
        }

        self.phase
    }

    /// Play until termination and build the outcome
    pub fn run(mut self) -> BattleOutcome {
        let verdict = loop {
            if let BattlePhase::Terminated(verdict) = self.step() {
                break verdict;
            }
        };

        BattleReport::build(
            verdict,
            &self.combatants,
            self.turn,
            self.log,
            self.status_damage,
        )
    }
}

fn knockout_verdict(combatants: &[Combatant; 2]) -> Option<Verdict> {
    match (combatants[0].is_standing(), combatants[1].is_standing()) {
        (true, true) => None,
        (true, false) => Some(Verdict::Winner(0)),
        (false, true) => Some(Verdict::Winner(1)),
        (false, false) => Some(Verdict::Draw),
    }
}
