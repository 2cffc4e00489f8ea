//! Terminal front end: start a match, spawn units, watch the lane.

use std::io::{self, BufRead};
use std::sync::mpsc;

use tracing_subscriber::EnvFilter;

use skirmish_app::game_loop;
use skirmish_app::state::{shared_snapshot, GameLoopCommand, SharedSnapshot};
use skirmish_core::commands::PlayerCommand;
use skirmish_core::enums::Faction;
use skirmish_sim::engine::SimConfig;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SimConfig::default();
    let roster: Vec<String> = config
        .battle
        .roster
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            format!(
                "{}={} ({}g/{}w/{}f)",
                i, spec.name, spec.cost.gold, spec.cost.wood, spec.cost.food
            )
        })
        .collect();

    let latest = shared_snapshot();
    let cmd_tx = game_loop::spawn_game_loop(config, latest.clone())?;

    println!("skirmish — commands: start | spawn <slot> | pause | resume | status | quit");
    println!("roster: {}", roster.join("  "));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let closed = match parts.next().unwrap_or("") {
            "" => false,
            "start" => send(&cmd_tx, PlayerCommand::StartMatch),
            "spawn" => match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                Some(slot) => send(&cmd_tx, PlayerCommand::SpawnUnit { slot }),
                None => {
                    println!("usage: spawn <slot>");
                    false
                }
            },
            "pause" => send(&cmd_tx, PlayerCommand::Pause),
            "resume" => send(&cmd_tx, PlayerCommand::Resume),
            "status" => {
                print_status(&latest);
                false
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other}");
                false
            }
        };
        if closed {
            break;
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    Ok(())
}

/// Forward a player command; true means the game loop is gone.
fn send(cmd_tx: &mpsc::Sender<GameLoopCommand>, command: PlayerCommand) -> bool {
    cmd_tx.send(GameLoopCommand::PlayerCommand(command)).is_err()
}

fn print_status(latest: &SharedSnapshot) {
    let Ok(lock) = latest.lock() else {
        return;
    };
    let Some(snap) = lock.as_ref() else {
        println!("no snapshot yet");
        return;
    };

    let player_units = snap
        .units
        .iter()
        .filter(|u| u.faction == Faction::Player)
        .count();
    let enemy_units = snap.units.len() - player_units;

    println!("tick {} — {:?}", snap.time.tick, snap.phase);
    if let Some(winner) = snap.winner {
        println!("winner: {winner:?}");
    }
    println!(
        "player {}g/{}w/{}f ({player_units} units) | enemy {}g/{}w/{}f ({enemy_units} units) | {} projectiles",
        snap.player_ledger.gold,
        snap.player_ledger.wood,
        snap.player_ledger.food,
        snap.enemy_ledger.gold,
        snap.enemy_ledger.wood,
        snap.enemy_ledger.food,
        snap.projectiles.len(),
    );
    for base in &snap.bases {
        println!(
            "{:?} base: {}/{}",
            base.faction, base.health_current, base.health_max
        );
    }
    for slot in &snap.spawn_slots {
        if slot.ready {
            println!("slot {} ({}): ready", slot.slot, slot.name);
        } else {
            println!(
                "slot {} ({}): {:.1}s cooldown",
                slot.slot, slot.name, slot.cooldown_remaining_secs
            );
        }
    }
}
