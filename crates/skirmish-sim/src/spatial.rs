//! Spatial query service: circle-overlap lookups over the live entity set.
//!
//! The behavior systems consume only [`SpatialIndex::query_circle`]; they
//! never walk the world themselves. The index is rebuilt once per tick
//! from the pre-system world state, so every unit resolves its queries
//! against the same coherent picture regardless of update order.
//! A linear scan is adequate at lane-combat entity counts.

use hecs::{Entity, World};

use skirmish_core::components::{Allegiance, BaseStructure, Health, Unit, UnitStats};
use skirmish_core::constants::{BASE_CONTACT_RADIUS, UNIT_CONTACT_RADIUS};
use skirmish_core::enums::{ContactKind, Faction, UnitKind};
use skirmish_core::types::Position;

/// One overlappable entity, as seen by a query.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub entity: Entity,
    pub position: Position,
    pub faction: Faction,
    pub kind: ContactKind,
    /// Set for units; bases have no unit kind.
    pub unit_kind: Option<UnitKind>,
    /// Collision boundary radius used for overlap tests.
    pub contact_radius: f64,
}

/// Per-tick snapshot of everything that can be hit or block movement.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    contacts: Vec<Contact>,
}

impl SpatialIndex {
    /// Rebuild from the world. Depleted entities are excluded: a unit at
    /// 0 health is already terminal and must not be targeted.
    pub fn rebuild(&mut self, world: &World) {
        self.contacts.clear();

        for (entity, (_unit, allegiance, stats, health, pos)) in world
            .query::<(&Unit, &Allegiance, &UnitStats, &Health, &Position)>()
            .iter()
        {
            if health.is_depleted() {
                continue;
            }
            self.contacts.push(Contact {
                entity,
                position: *pos,
                faction: allegiance.0,
                kind: ContactKind::Unit,
                unit_kind: Some(stats.kind),
                contact_radius: UNIT_CONTACT_RADIUS,
            });
        }

        for (entity, (_base, allegiance, health, pos)) in world
            .query::<(&BaseStructure, &Allegiance, &Health, &Position)>()
            .iter()
        {
            if health.is_depleted() {
                continue;
            }
            self.contacts.push(Contact {
                entity,
                position: *pos,
                faction: allegiance.0,
                kind: ContactKind::Base,
                unit_kind: None,
                contact_radius: BASE_CONTACT_RADIUS,
            });
        }
    }

    /// All contacts whose collision boundary overlaps the given circle.
    pub fn query_circle<'a>(
        &'a self,
        center: Position,
        radius: f64,
    ) -> impl Iterator<Item = &'a Contact> {
        self.contacts
            .iter()
            .filter(move |c| center.distance_to(&c.position) <= radius + c.contact_radius)
    }
}
