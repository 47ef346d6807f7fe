//! Host-shaped event notifications.
//!
//! The host event bus delivers these synchronously to registered listeners;
//! each carries the world it happened in, a cause chain for attribution, and
//! a mutable cancellation flag. Event instances are constructed fresh per
//! notification, read once, and discarded - there is no cross-event state.
//!
//! - `DamageEntityEvent` - an entity is about to take damage from a damager
//! - `UseItemEvent` - a player-held item is about to be used
//! - `DestroyEntityEvent` - an entity is about to be forcibly removed
//!   (defined here, raised by other parts of the plugin)

pub mod damage;
pub mod destroy;
pub mod inventory;
pub mod traits;

pub use damage::{DamageEntityEvent, Damager};
pub use destroy::DestroyEntityEvent;
pub use inventory::UseItemEvent;
pub use traits::{Cancellable, EventKind, ServerEvent};
