//! The player messaging seam and the blocked-effect message texts.

use crate::effect::EffectType;
use crate::ids::PlayerId;

/// Fire-and-forget chat sink. Implemented by the host; no delivery guarantee
/// is required.
pub trait Messenger {
    fn send_message(&self, player: PlayerId, message: &str);
}

/// Message shown when an arrow with a blocked effect is cancelled.
pub fn blocked_arrow_message(effect: EffectType) -> String {
    format!("Sorry, arrows with {} are presently disabled.", effect)
}

/// Message shown when a potion with a blocked effect is cancelled.
pub fn blocked_potion_message(effect: EffectType) -> String {
    format!("Sorry, potions with {} are presently disabled.", effect)
}

/// Message shown when a player holds the override permission but the world
/// blocks thrown delivery of blocked effects regardless.
pub fn override_denied_message(effect: EffectType) -> String {
    format!(
        "Sorry, potions with {} can't be thrown, even if you have \
         permission to bypass it, due to limitations (and because \
         overly-reliable potion blocking is on).",
        effect
    )
}
