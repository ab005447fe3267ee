//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs world of transient combat entities, both
//! players, the seeded RNG, and the command queue; it runs the fixed-tick
//! pipeline and produces a `MatchSnapshot` per tick. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;
use std::path::Path;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use petri_core::constants::*;
use petri_core::enums::{CharacterId, ControlMode, MatchPhase, PlayerTag};
use petri_core::events::CombatEvent;
use petri_core::input::{InputSnapshot, MatchCommand};
use petri_core::state::MatchSnapshot;
use petri_core::types::SimTime;

use petri_data::{load_moveset_or_fallback, moveset_for_character};

use crate::player::Player;
use crate::systems;

/// Configuration for starting a new match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// RNG seed for determinism. Same seed + same inputs = same match.
    pub seed: u64,
    pub p1_character: CharacterId,
    pub p2_character: CharacterId,
    /// Whether player 2 is computer-controlled.
    pub p2_control: ControlMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            p1_character: CharacterId::Bacteriophage,
            p2_character: CharacterId::Amoeba,
            p2_control: ControlMode::Cpu,
        }
    }
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    players: [Player; 2],
    time: SimTime,
    phase: MatchPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<MatchCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<CombatEvent>,
    /// Ticks spent in the current non-fighting phase.
    phase_ticks: u32,
    match_winner: Option<PlayerTag>,
}

impl MatchEngine {
    /// Create an engine with the built-in move tables.
    pub fn new(config: MatchConfig) -> Self {
        let p1 = Player::new(
            PlayerTag::P1,
            config.p1_character,
            moveset_for_character(config.p1_character),
            ControlMode::Human,
        );
        let p2 = Player::new(
            PlayerTag::P2,
            config.p2_character,
            moveset_for_character(config.p2_character),
            config.p2_control,
        );
        Self::with_players(config.seed, p1, p2)
    }

    /// Create an engine from external move files, degrading to the built-in
    /// tables if a file is missing or malformed.
    pub fn with_move_files(config: MatchConfig, p1_moves: &Path, p2_moves: &Path) -> Self {
        let p1 = Player::new(
            PlayerTag::P1,
            config.p1_character,
            load_moveset_or_fallback(p1_moves, config.p1_character),
            ControlMode::Human,
        );
        let p2 = Player::new(
            PlayerTag::P2,
            config.p2_character,
            load_moveset_or_fallback(p2_moves, config.p2_character),
            config.p2_control,
        );
        Self::with_players(config.seed, p1, p2)
    }

    fn with_players(seed: u64, p1: Player, p2: Player) -> Self {
        Self {
            world: World::new(),
            players: [p1, p2],
            time: SimTime::default(),
            phase: MatchPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            phase_ticks: 0,
            match_winner: None,
        }
    }

    /// Queue a match command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the match by one tick and return the resulting snapshot.
    /// Inputs are sampled once, here, and hold for the whole tick.
    pub fn tick(&mut self, inputs: [InputSnapshot; 2]) -> MatchSnapshot {
        self.process_commands();

        match self.phase {
            MatchPhase::Countdown => {
                self.phase_ticks += 1;
                if self.phase_ticks >= COUNTDOWN_TICKS {
                    self.phase = MatchPhase::Fighting;
                    self.phase_ticks = 0;
                    self.events.push(CombatEvent::FightStart);
                }
            }
            MatchPhase::Fighting => {
                self.run_tick(&inputs);
                self.time.advance();
            }
            MatchPhase::Paused => {}
            MatchPhase::RoundEnd => {
                self.phase_ticks += 1;
                if self.phase_ticks >= ROUND_END_TICKS {
                    self.finish_round_break();
                }
            }
            MatchPhase::GameOver => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.players,
            &self.time,
            self.phase,
            self.match_winner,
            events,
        )
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world of transient entities.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Remove every transient combat entity. Idempotent.
    pub fn clear_entities(&mut self) {
        systems::combat::clear_pools(&mut self.world, &mut self.despawn_buffer);
    }

    #[cfg(test)]
    pub fn players_mut(&mut self) -> &mut [Player; 2] {
        &mut self.players
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Jump straight into live combat (skips the countdown).
    #[cfg(test)]
    pub fn skip_countdown(&mut self) {
        if self.phase == MatchPhase::Countdown {
            self.phase = MatchPhase::Fighting;
            self.phase_ticks = 0;
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: MatchCommand) {
        match command {
            MatchCommand::Pause => {
                if self.phase == MatchPhase::Fighting {
                    self.phase = MatchPhase::Paused;
                }
            }
            MatchCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::Fighting;
                }
            }
            MatchCommand::Rematch => {
                for player in self.players.iter_mut() {
                    player.reset_for_match();
                }
                self.clear_entities();
                self.time = SimTime::default();
                self.phase = MatchPhase::Countdown;
                self.phase_ticks = 0;
                self.match_winner = None;
            }
        }
    }

    /// One fighting tick, in contract order: player 1's state machine, then
    /// player 2's (or the computer driver), then the combat resolution
    /// pass, then status effects, then the round-end check.
    fn run_tick(&mut self, inputs: &[InputSnapshot; 2]) {
        let now = self.time.elapsed_secs;

        {
            let (p1, p2) = self.players.split_at_mut(1);
            systems::action::run(&mut p1[0], &inputs[0], &mut self.world, now, &mut self.events);
            match p2[0].control {
                ControlMode::Human => systems::action::run(
                    &mut p2[0],
                    &inputs[1],
                    &mut self.world,
                    now,
                    &mut self.events,
                ),
                ControlMode::Cpu => systems::ai_driver::run(
                    &mut p2[0],
                    &p1[0],
                    &mut self.world,
                    &mut self.rng,
                    now,
                    &mut self.events,
                ),
            }
        }

        systems::combat::run(
            &mut self.world,
            &mut self.players,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        systems::status::run(&mut self.players);

        self.check_round_end();
    }

    /// A round ends exactly once, on the tick health first reaches zero.
    /// Simultaneous KOs credit both players.
    fn check_round_end(&mut self) {
        let p1_down = self.players[0].health <= 0.0;
        let p2_down = self.players[1].health <= 0.0;
        if !p1_down && !p2_down {
            return;
        }

        if p2_down {
            self.players[0].rounds_won += 1;
            self.events.push(CombatEvent::RoundOver {
                winner: PlayerTag::P1,
            });
        }
        if p1_down {
            self.players[1].rounds_won += 1;
            self.events.push(CombatEvent::RoundOver {
                winner: PlayerTag::P2,
            });
        }

        info!(
            p1_rounds = self.players[0].rounds_won,
            p2_rounds = self.players[1].rounds_won,
            "round over"
        );

        self.phase = MatchPhase::RoundEnd;
        self.phase_ticks = 0;
    }

    /// Leave the post-KO break: either the match is decided or the next
    /// round starts.
    fn finish_round_break(&mut self) {
        let winner = self
            .players
            .iter()
            .find(|p| p.rounds_won >= ROUNDS_TO_WIN)
            .map(|p| p.tag);

        if let Some(winner) = winner {
            self.match_winner = Some(winner);
            self.phase = MatchPhase::GameOver;
            self.events.push(CombatEvent::MatchOver { winner });
            info!(?winner, "match over");
            return;
        }

        for player in self.players.iter_mut() {
            player.reset_for_round();
        }
        self.clear_entities();
        self.phase = MatchPhase::Countdown;
        self.phase_ticks = 0;
    }
}
