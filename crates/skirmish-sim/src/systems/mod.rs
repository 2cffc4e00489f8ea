//! ECS systems that operate on the battle world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine
//! state they need. They do not own state; cross-system effects travel
//! through the damage and shot buffers the engine passes in.

pub mod auto_spawn;
pub mod cleanup;
pub mod damage;
pub mod economy;
pub mod projectile;
pub mod snapshot;
pub mod unit_behavior;
