//! The effect source abstraction fed to the blocking decision.
//!
//! Damage and use-item notifications have different shapes, but both boil
//! down to "a thing that may carry potion effects". `EffectSource` is that
//! single capability: an optional base effect plus an ordered custom-effect
//! sequence, with one constructor per notification shape. The decision logic
//! itself never branches on where the source came from.

use crate::effect::{EffectType, PotionContents, PotionEffect};
use crate::item::ItemStack;
use crate::projectile::Projectile;

/// A source of potion effects, normalized from either notification shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectSource {
    /// The primary effect encoded by the underlying potion variant, if any.
    pub base_effect: Option<EffectType>,
    /// Additional effects attached to this specific instance, in order.
    pub custom_effects: Vec<PotionEffect>,
}

impl EffectSource {
    /// A source that applies only the fixed residual glow effect.
    ///
    /// This is what a spectral arrow amounts to: glow as the base effect,
    /// no customizable payload.
    pub fn residual_glow() -> Self {
        Self {
            base_effect: Some(EffectType::Glowing),
            custom_effects: Vec::new(),
        }
    }

    /// A source built from a potion payload (tipped arrow or potion item).
    pub fn from_contents(contents: &PotionContents) -> Self {
        Self {
            base_effect: contents.base_effect(),
            custom_effects: contents.custom_effects.clone(),
        }
    }

    /// Classify a projectile into an effect source.
    ///
    /// Returns `None` for projectile kinds that cannot apply potion effects.
    pub fn from_projectile(projectile: &Projectile) -> Option<Self> {
        match projectile {
            Projectile::SpectralArrow => Some(Self::residual_glow()),
            Projectile::TippedArrow(contents) => Some(Self::from_contents(contents)),
            Projectile::Trident | Projectile::Snowball => None,
        }
    }

    /// Build a source from an item stack's potion payload.
    ///
    /// Returns `None` when the stack carries no potion contents.
    pub fn from_item(item: &ItemStack) -> Option<Self> {
        item.potion_contents().map(Self::from_contents)
    }
}
