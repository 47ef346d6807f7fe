//! Entity-damage notification.

use crate::cause::Cause;
use crate::events::traits::{Cancellable, EventKind, ServerEvent};
use crate::ids::{EntityId, WorldId};
use crate::projectile::Projectile;

/// What dealt the damage.
///
/// Projectiles are classified into their tagged variant once, when the host
/// notification is translated into this event; listeners never re-check
/// entity types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Damager {
    /// Another entity (melee, explosion source, etc.).
    Entity(EntityId),
    /// A projectile in flight.
    Projectile(Projectile),
}

/// An entity is about to take damage from a damager.
#[derive(Debug, Clone)]
pub struct DamageEntityEvent {
    world: WorldId,
    cause: Cause,
    /// The entity taking the damage.
    pub target: EntityId,
    /// What dealt the damage.
    pub damager: Damager,
    cancelled: bool,
}

impl DamageEntityEvent {
    pub fn new(world: WorldId, cause: Cause, target: EntityId, damager: Damager) -> Self {
        Self {
            world,
            cause,
            target,
            damager,
            cancelled: false,
        }
    }

    /// The damaging projectile, when the damager is one.
    pub fn projectile(&self) -> Option<&Projectile> {
        match &self.damager {
            Damager::Projectile(projectile) => Some(projectile),
            Damager::Entity(_) => None,
        }
    }
}

impl ServerEvent for DamageEntityEvent {
    fn event_kind(&self) -> EventKind {
        EventKind::DamageEntity
    }

    fn world(&self) -> WorldId {
        self.world
    }

    fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl Cancellable for DamageEntityEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
