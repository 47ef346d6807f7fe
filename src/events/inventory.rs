//! Use-item notification.

use crate::cause::Cause;
use crate::events::traits::{Cancellable, EventKind, ServerEvent};
use crate::ids::WorldId;
use crate::item::ItemStack;

/// A held or thrown item is about to be used.
#[derive(Debug, Clone)]
pub struct UseItemEvent {
    world: WorldId,
    cause: Cause,
    /// The item being used.
    pub item: ItemStack,
    cancelled: bool,
}

impl UseItemEvent {
    pub fn new(world: WorldId, cause: Cause, item: ItemStack) -> Self {
        Self {
            world,
            cause,
            item,
            cancelled: false,
        }
    }
}

impl ServerEvent for UseItemEvent {
    fn event_kind(&self) -> EventKind {
        EventKind::UseItem
    }

    fn world(&self) -> WorldId {
        self.world
    }

    fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl Cancellable for UseItemEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
