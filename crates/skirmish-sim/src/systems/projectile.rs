//! Homing projectiles: detached ranged-attack payloads.
//!
//! A projectile chases its captured target's *current* position at
//! constant speed and applies its carried damage exactly once, to that
//! specific target, on entering the target's collision boundary. The
//! target reference is a generational entity handle, never owning: if
//! the target is gone before arrival the projectile expires silently.

use hecs::{Entity, World};

use skirmish_core::components::{Allegiance, BaseStructure};
use skirmish_core::constants::{BASE_CONTACT_RADIUS, PROJECTILE_SPEED, UNIT_CONTACT_RADIUS};
use skirmish_core::types::Position;

use crate::systems::unit_behavior::{DamageEvent, ProjectileShot};

/// Projectile state component (sim-side; the core stays ECS-agnostic).
#[derive(Debug, Clone, Copy)]
pub struct HomingProjectile {
    pub damage: i32,
    pub speed: f64,
    pub target: Entity,
}

enum Outcome {
    Advance(Position),
    Hit,
    Expire,
}

/// Instantiate a buffered ranged shot as a live projectile entity.
pub fn launch(world: &mut World, shot: &ProjectileShot) -> Entity {
    world.spawn((
        HomingProjectile {
            damage: shot.damage,
            speed: PROJECTILE_SPEED,
            target: shot.target,
        },
        Allegiance(shot.faction),
        shot.origin,
    ))
}

/// Advance every projectile one tick: home, check contact, expire lost
/// targets.
pub fn run(
    world: &mut World,
    dt: f64,
    damage_out: &mut Vec<DamageEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    // Resolve outcomes with shared borrows first; hecs disallows touching
    // other entities while iterating a mutable query.
    let mut outcomes: Vec<(Entity, Entity, i32, Outcome)> = Vec::new();

    for (entity, (proj, pos)) in world.query::<(&HomingProjectile, &Position)>().iter() {
        let Ok(target_pos) = world.get::<&Position>(proj.target) else {
            // Target destroyed before arrival: no damage, no crash.
            outcomes.push((entity, proj.target, proj.damage, Outcome::Expire));
            continue;
        };

        let boundary = if world.get::<&BaseStructure>(proj.target).is_ok() {
            BASE_CONTACT_RADIUS
        } else {
            UNIT_CONTACT_RADIUS
        };

        let dist = pos.distance_to(&target_pos);
        let step = proj.speed * dt;

        if dist <= boundary + step {
            outcomes.push((entity, proj.target, proj.damage, Outcome::Hit));
        } else {
            let dir_x = (target_pos.x - pos.x) / dist;
            let dir_y = (target_pos.y - pos.y) / dist;
            let next = Position::new(pos.x + dir_x * step, pos.y + dir_y * step);
            outcomes.push((entity, proj.target, proj.damage, Outcome::Advance(next)));
        }
    }

    for (entity, target, damage, outcome) in outcomes {
        match outcome {
            Outcome::Advance(next) => {
                if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    *pos = next;
                }
            }
            Outcome::Hit => {
                damage_out.push(DamageEvent {
                    target,
                    amount: damage,
                });
                despawn_buffer.push(entity);
            }
            Outcome::Expire => {
                despawn_buffer.push(entity);
            }
        }
    }
}
