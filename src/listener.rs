//! The blocked-potions listener.
//!
//! Two thin adapters over the host notifications: both extract an
//! `EffectSource`, feed it with the active world's block list to
//! [`decide`](crate::decider::decide), and translate a blocked decision into
//! a cancellation flag and, when a player is attributable, a chat message.
//! All policy lives in the decision function; the adapters only resolve who
//! (if anyone) gets told and whether the override permission applies.

use crate::config::ConfigProvider;
use crate::decider::{Decision, decide};
use crate::events::{Cancellable, DamageEntityEvent, ServerEvent, UseItemEvent};
use crate::messaging::{
    Messenger, blocked_arrow_message, blocked_potion_message, override_denied_message,
};
use crate::permission::{POTION_OVERRIDE, PermissionChecker};
use crate::source::EffectSource;

/// Handles blocked potions.
#[derive(Debug)]
pub struct BlockedPotionsListener<C, P, M> {
    config: C,
    permissions: P,
    messenger: M,
}

impl<C, P, M> BlockedPotionsListener<C, P, M>
where
    C: ConfigProvider,
    P: PermissionChecker,
    M: Messenger,
{
    pub fn new(config: C, permissions: P, messenger: M) -> Self {
        Self {
            config,
            permissions,
            messenger,
        }
    }

    /// Handle a damage notification whose damager may be a potion-carrying
    /// projectile.
    ///
    /// Non-projectile damagers and projectile kinds without potion effects
    /// pass through untouched. On a blocked decision: a player holding the
    /// override permission is let through; a player without it is messaged
    /// and the event cancelled; with no attributable player the event is
    /// cancelled anyway and no one is messaged.
    pub fn on_projectile_damage(&self, event: &mut DamageEntityEvent) {
        let Some(projectile) = event.projectile() else {
            return;
        };
        let Some(source) = EffectSource::from_projectile(projectile) else {
            return;
        };

        let wcfg = self.config.world_config(event.world());
        let Decision::Blocked(effect) = decide(&source, &wcfg.block_potions) else {
            return;
        };
        tracing::debug!(effect = %effect, world = ?event.world(), "blocked arrow effect");

        match event.cause().first_player() {
            None => {
                // No one to message or to check for an override; fail closed.
                event.set_cancelled(true);
            }
            Some(player) => {
                if self.permissions.has_permission(player, POTION_OVERRIDE) {
                    return;
                }
                self.messenger
                    .send_message(player, &blocked_arrow_message(effect));
                event.set_cancelled(true);
            }
        }
    }

    /// Handle a use-item notification.
    ///
    /// Only the three potion item kinds are considered, and only when the
    /// world actually configures a block list. The override permission lets
    /// a player drink blocked potions, but when `block_potions_always` is
    /// set it does not extend to splash/lingering delivery: those are
    /// cancelled with an explanatory message even for override holders.
    pub fn on_item_use(&self, event: &mut UseItemEvent) {
        if !event.item.kind.is_potion() {
            return;
        }

        let wcfg = self.config.world_config(event.world());
        if wcfg.block_potions.is_empty() {
            return;
        }

        // A potion-kind item may arrive without potion contents; it is
        // passed through rather than treated as suspect.
        let Some(source) = EffectSource::from_item(&event.item) else {
            return;
        };
        let Decision::Blocked(effect) = decide(&source, &wcfg.block_potions) else {
            return;
        };
        tracing::debug!(effect = %effect, world = ?event.world(), "blocked potion effect");

        let kind = event.item.kind;
        match event.cause().first_player() {
            None => {
                event.set_cancelled(true);
            }
            Some(player) => {
                if self.permissions.has_permission(player, POTION_OVERRIDE) {
                    if wcfg.block_potions_always && kind.is_thrown_potion() {
                        self.messenger
                            .send_message(player, &override_denied_message(effect));
                        event.set_cancelled(true);
                    }
                } else {
                    self.messenger
                        .send_message(player, &blocked_potion_message(effect));
                    event.set_cancelled(true);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocklist::BlockList;
    use crate::cause::Cause;
    use crate::config::{StaticConfigProvider, WorldConfig};
    use crate::effect::{EffectType, PotionContents, PotionType};
    use crate::events::Damager;
    use crate::ids::{EntityId, PlayerId, WorldId};
    use crate::item::{ItemKind, ItemStack};
    use crate::permission::NoPermissions;
    use crate::projectile::Projectile;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct RecordedMessages(RefCell<Vec<(PlayerId, String)>>);

    impl Messenger for RecordedMessages {
        fn send_message(&self, player: PlayerId, message: &str) {
            self.0.borrow_mut().push((player, message.to_string()));
        }
    }

    fn world_blocking(effects: &[EffectType]) -> StaticConfigProvider {
        StaticConfigProvider::new().with_world(
            WorldId::from_index(0),
            WorldConfig {
                block_potions: effects.iter().copied().collect::<BlockList>(),
                block_potions_always: false,
            },
        )
    }

    #[test]
    fn test_spectral_arrow_blocked_and_messaged() {
        let shooter = PlayerId::from_raw(1);
        let listener = BlockedPotionsListener::new(
            world_blocking(&[EffectType::Glowing]),
            NoPermissions,
            RecordedMessages::default(),
        );

        let mut event = DamageEntityEvent::new(
            WorldId::from_index(0),
            Cause::from_player(shooter),
            EntityId::from_raw(2),
            Damager::Projectile(Projectile::SpectralArrow),
        );
        listener.on_projectile_damage(&mut event);

        assert!(event.is_cancelled());
        let messages = listener.messenger.0.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, shooter);
        assert!(messages[0].1.contains("Glowing"));
    }

    #[test]
    fn test_melee_damager_ignored() {
        let listener = BlockedPotionsListener::new(
            world_blocking(&[EffectType::Glowing]),
            NoPermissions,
            RecordedMessages::default(),
        );

        let mut event = DamageEntityEvent::new(
            WorldId::from_index(0),
            Cause::from_player(PlayerId::from_raw(1)),
            EntityId::from_raw(2),
            Damager::Entity(EntityId::from_raw(3)),
        );
        listener.on_projectile_damage(&mut event);
        assert!(!event.is_cancelled());
    }

    #[test]
    fn test_non_potion_projectile_ignored() {
        let listener = BlockedPotionsListener::new(
            world_blocking(&[EffectType::Glowing]),
            NoPermissions,
            RecordedMessages::default(),
        );

        let mut event = DamageEntityEvent::new(
            WorldId::from_index(0),
            Cause::from_player(PlayerId::from_raw(1)),
            EntityId::from_raw(2),
            Damager::Projectile(Projectile::Trident),
        );
        listener.on_projectile_damage(&mut event);
        assert!(!event.is_cancelled());
    }

    #[test]
    fn test_unlisted_tipped_arrow_passes() {
        let listener = BlockedPotionsListener::new(
            world_blocking(&[EffectType::Wither]),
            NoPermissions,
            RecordedMessages::default(),
        );

        let mut event = DamageEntityEvent::new(
            WorldId::from_index(0),
            Cause::from_player(PlayerId::from_raw(1)),
            EntityId::from_raw(2),
            Damager::Projectile(Projectile::TippedArrow(PotionContents::of(
                PotionType::Swiftness,
            ))),
        );
        listener.on_projectile_damage(&mut event);
        assert!(!event.is_cancelled());
        assert!(listener.messenger.0.borrow().is_empty());
    }

    #[test]
    fn test_item_use_blocked_and_messaged() {
        let drinker = PlayerId::from_raw(5);
        let listener = BlockedPotionsListener::new(
            world_blocking(&[EffectType::Poison]),
            NoPermissions,
            RecordedMessages::default(),
        );

        let mut event = UseItemEvent::new(
            WorldId::from_index(0),
            Cause::from_player(drinker),
            ItemStack::with_contents(ItemKind::Potion, PotionContents::of(PotionType::Poison)),
        );
        listener.on_item_use(&mut event);

        assert!(event.is_cancelled());
        let messages = listener.messenger.0.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.contains("Poison"));
    }
}
