//! Entity-destruction notification.

use crate::cause::Cause;
use crate::events::traits::{Cancellable, EventKind, ServerEvent};
use crate::ids::{EntityId, WorldId};

/// An entity is about to be forcibly removed.
///
/// Defined here alongside the other notifications; raised by the parts of
/// the plugin that clear entities out of protected areas. The target is
/// always present, unlike causes, which may be environmental.
#[derive(Debug, Clone)]
pub struct DestroyEntityEvent {
    world: WorldId,
    cause: Cause,
    /// The entity being removed.
    pub target: EntityId,
    cancelled: bool,
}

impl DestroyEntityEvent {
    pub fn new(world: WorldId, cause: Cause, target: EntityId) -> Self {
        Self {
            world,
            cause,
            target,
            cancelled: false,
        }
    }
}

impl ServerEvent for DestroyEntityEvent {
    fn event_kind(&self) -> EventKind {
        EventKind::DestroyEntity
    }

    fn world(&self) -> WorldId {
        self.world
    }

    fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl Cancellable for DestroyEntityEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
