//! Item kinds and stacks, as delivered by use-item notifications.

use crate::effect::PotionContents;

/// The material kind of an item stack.
///
/// Only the kinds this plugin inspects are enumerated individually; everything
/// else the host can deliver behaves like the non-potion kinds here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A drinkable potion bottle.
    Potion,
    /// A throwable splash potion.
    SplashPotion,
    /// A throwable lingering potion, leaving an effect cloud.
    LingeringPotion,
    Stone,
    Apple,
    Bow,
    Arrow,
}

impl ItemKind {
    /// Whether this kind is one of the potion item kinds.
    pub fn is_potion(self) -> bool {
        matches!(
            self,
            ItemKind::Potion | ItemKind::SplashPotion | ItemKind::LingeringPotion
        )
    }

    /// Whether this kind delivers its effects by being thrown
    /// (splash or lingering, as opposed to directly drunk).
    pub fn is_thrown_potion(self) -> bool {
        matches!(self, ItemKind::SplashPotion | ItemKind::LingeringPotion)
    }
}

/// An item stack as seen by a use-item notification.
///
/// Potion-kind stacks usually carry `PotionContents`, but the host does not
/// guarantee it; a potion item without contents is possible and is handled as
/// a pass-through by the listener, not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub potion: Option<PotionContents>,
}

impl ItemStack {
    /// Create a stack with no potion payload.
    pub fn new(kind: ItemKind) -> Self {
        Self { kind, potion: None }
    }

    /// Create a stack carrying potion contents.
    pub fn with_contents(kind: ItemKind, contents: PotionContents) -> Self {
        Self {
            kind,
            potion: Some(contents),
        }
    }

    /// The potion payload, if this stack carries one.
    pub fn potion_contents(&self) -> Option<&PotionContents> {
        self.potion.as_ref()
    }
}
