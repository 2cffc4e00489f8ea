//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the per-faction ledgers
//! and spawn gates, processes player commands, runs all systems in a
//! fixed order, and produces `BattleSnapshot`s. One logical thread of
//! control: every cooldown and the regeneration cadence derive from the
//! shared simulation clock, so a run is deterministically replayable
//! given a seed and a command sequence.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::config::BattleConfig;
use skirmish_core::constants::DT;
use skirmish_core::enums::{Faction, GamePhase, SpawnResult};
use skirmish_core::events::SimEvent;
use skirmish_core::state::BattleSnapshot;
use skirmish_core::types::SimTime;

use crate::ledger::ResourceLedger;
use crate::spatial::SpatialIndex;
use crate::spawn_gate::SpawnGate;
use crate::systems;
use crate::systems::unit_behavior::{DamageEvent, ProjectileShot};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gameplay tuning and roster.
    pub battle: BattleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            battle: BattleConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    winner: Option<Faction>,
    config: BattleConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    spatial: SpatialIndex,
    player_ledger: ResourceLedger,
    enemy_ledger: ResourceLedger,
    player_gate: SpawnGate,
    enemy_gate: SpawnGate,
    /// Simulation time of the next enemy auto-spawn attempt.
    auto_spawn_due_secs: f64,
    // Per-tick scratch buffers, pre-allocated.
    damage_buffer: Vec<DamageEvent>,
    shot_buffer: Vec<ProjectileShot>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let battle = config.battle;
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            winner: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            spatial: SpatialIndex::default(),
            player_ledger: ResourceLedger::new(&battle.player_ledger),
            enemy_ledger: ResourceLedger::new(&battle.enemy_ledger),
            player_gate: SpawnGate::new(&battle.roster),
            enemy_gate: SpawnGate::new(&battle.roster),
            auto_spawn_due_secs: battle.auto_spawn_interval_secs,
            damage_buffer: Vec::new(),
            shot_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config: battle,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> BattleSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.winner,
            &self.player_ledger,
            &self.enemy_ledger,
            &self.player_gate,
            events,
        )
    }

    /// Get the current match phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The winning faction, once a base has fallen.
    pub fn winner(&self) -> Option<Faction> {
        self.winner
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => {
                if matches!(self.phase, GamePhase::Lobby | GamePhase::MatchOver) {
                    self.reset_match();
                    self.phase = GamePhase::Active;
                    info!("match started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SpawnUnit { slot } => {
                if self.phase == GamePhase::Active {
                    self.request_player_spawn(slot);
                }
            }
        }
    }

    /// Put a player spawn request through the gate and instantiate the
    /// unit on admission. Rejection is non-fatal: an event is emitted and
    /// the caller may retry next tick.
    fn request_player_spawn(&mut self, slot: usize) {
        let now = self.time.elapsed_secs;
        let result = self
            .player_gate
            .request_spawn(slot, now, &mut self.player_ledger);
        match result {
            SpawnResult::Admitted => {
                if let Some(spec) = self.player_gate.slot(slot).map(|s| s.spec.clone()) {
                    world_setup::spawn_unit(&mut self.world, Faction::Player, &spec);
                    self.events.push(SimEvent::UnitSpawned {
                        faction: Faction::Player,
                        kind: spec.kind,
                    });
                }
            }
            result => {
                debug!(slot, ?result, "player spawn rejected");
                self.events.push(SimEvent::SpawnRejected {
                    faction: Faction::Player,
                    slot,
                    result,
                });
            }
        }
    }

    /// Tear down and rebuild all match state from the config.
    fn reset_match(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.winner = None;
        self.player_ledger = ResourceLedger::new(&self.config.player_ledger);
        self.enemy_ledger = ResourceLedger::new(&self.config.enemy_ledger);
        self.player_gate = SpawnGate::new(&self.config.roster);
        self.enemy_gate = SpawnGate::new(&self.config.roster);
        self.auto_spawn_due_secs = self.config.auto_spawn_interval_secs;
        world_setup::setup_match(&mut self.world, &self.config);
    }

    /// Run all systems in order: unit state machines, projectile motion
    /// and contact, damage resolution, auto-spawn, ledger regeneration,
    /// cleanup.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;

        // 1. Spatial index over the tick-start world state.
        self.spatial.rebuild(&self.world);

        // 2. Unit state machines: movement, detection, attack resolution.
        systems::unit_behavior::run(
            &mut self.world,
            &self.spatial,
            &self.config,
            now,
            DT,
            &mut self.damage_buffer,
            &mut self.shot_buffer,
        );

        // 3. Instantiate buffered ranged shots as projectile entities.
        let mut shots = std::mem::take(&mut self.shot_buffer);
        for shot in shots.drain(..) {
            systems::projectile::launch(&mut self.world, &shot);
            self.events.push(SimEvent::ProjectileLaunched {
                faction: shot.faction,
            });
        }
        self.shot_buffer = shots;

        // 4. Projectile homing and contact.
        systems::projectile::run(
            &mut self.world,
            DT,
            &mut self.damage_buffer,
            &mut self.despawn_buffer,
        );

        // 5. Damage, deaths, kill rewards, base loss.
        if let Some(loser) = systems::damage::run(
            &mut self.world,
            &mut self.damage_buffer,
            self.config.kill_reward_fraction,
            &mut self.player_ledger,
            &mut self.enemy_ledger,
            &mut self.events,
            &mut self.despawn_buffer,
        ) {
            self.winner = Some(loser.opponent());
            self.phase = GamePhase::MatchOver;
        }

        // 6. Enemy auto-spawn.
        systems::auto_spawn::run(
            &mut self.world,
            &mut self.enemy_gate,
            &mut self.enemy_ledger,
            &self.config,
            &mut self.rng,
            now,
            &mut self.auto_spawn_due_secs,
            &mut self.events,
        );

        // 7. Ledger regeneration on whole-second boundaries.
        systems::economy::run(
            self.time.tick + 1,
            &mut self.player_ledger,
            &mut self.enemy_ledger,
        );

        // 8. Cleanup: despawn everything marked this tick.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    // --- Test support ---

    /// Spawn a unit directly, bypassing the gate and ledger.
    #[cfg(test)]
    pub fn spawn_test_unit(
        &mut self,
        faction: Faction,
        spec: &skirmish_core::config::UnitSpec,
    ) -> hecs::Entity {
        world_setup::spawn_unit(&mut self.world, faction, spec)
    }

    /// Mutable world access for test scenario setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
