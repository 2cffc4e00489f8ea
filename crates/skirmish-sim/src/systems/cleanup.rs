//! Cleanup system: despawns entities collected during the tick.
//!
//! Deaths and projectile removals are buffered so every system resolves
//! against a stable entity set; the buffer is drained once, at the end
//! of the tick. Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

/// Despawn everything the tick marked for removal.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
