//! potionguard - blocked-potions enforcement for a world protection plugin.
//!
//! A world's configuration can forbid certain potion effects. This crate
//! holds the decision procedure for that policy and the two event adapters
//! that apply it: one for potion-carrying projectiles showing up in damage
//! notifications, one for potion items showing up in use-item notifications.
//! The host server supplies configuration, permission resolution, and chat
//! delivery through narrow traits; the decision itself is a pure function.

pub mod blocklist;
pub mod cause;
pub mod config;
pub mod decider;
pub mod effect;
pub mod events;
pub mod ids;
pub mod item;
pub mod listener;
pub mod messaging;
pub mod permission;
pub mod projectile;
pub mod source;

#[cfg(test)]
mod tests;

pub use blocklist::BlockList;
pub use cause::{Actor, Cause};
pub use config::{ConfigProvider, StaticConfigProvider, WorldConfig};
#[cfg(feature = "serialization")]
pub use config::loader::{ConfigError, load_world_config, world_config_from_json};
pub use decider::{Decision, decide};
pub use effect::{ALL_EFFECT_TYPES, EffectType, PotionContents, PotionEffect, PotionType};
pub use events::{
    Cancellable, DamageEntityEvent, Damager, DestroyEntityEvent, EventKind, ServerEvent,
    UseItemEvent,
};
pub use ids::{EntityId, PlayerId, WorldId};
pub use item::{ItemKind, ItemStack};
pub use listener::BlockedPotionsListener;
pub use messaging::{
    Messenger, blocked_arrow_message, blocked_potion_message, override_denied_message,
};
pub use permission::{NoPermissions, POTION_OVERRIDE, PermissionChecker};
pub use projectile::Projectile;
pub use source::EffectSource;
