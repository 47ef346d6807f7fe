//! Core traits shared by all event notifications.

use std::fmt::Debug;

use crate::cause::Cause;
use crate::ids::WorldId;

/// Fast dispatch enum for event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An entity taking damage
    DamageEntity,
    /// A held item being used
    UseItem,
    /// An entity being forcibly removed
    DestroyEntity,
}

/// Common interface of all host notifications.
pub trait ServerEvent: Debug {
    /// Get the event kind for dispatch without downcasting.
    fn event_kind(&self) -> EventKind;

    /// The world the event happened in.
    fn world(&self) -> WorldId;

    /// The actor chain responsible for the event.
    fn cause(&self) -> &Cause;
}

/// An event whose outcome a listener can veto.
///
/// The flag is owned by the single event instance being dispatched; only the
/// adapter handling that instance ever writes it.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    fn set_cancelled(&mut self, cancelled: bool);
}
