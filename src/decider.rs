//! The potion-effect blocking decision.
//!
//! A pure function of its inputs: given an effect source and a world's block
//! list, determine whether the interaction should be blocked and by which
//! effect. Absent optional fields mean "no match", never an error.

use crate::blocklist::BlockList;
use crate::effect::EffectType;
use crate::source::EffectSource;

/// The outcome of evaluating an effect source against a block list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No blocked effect was found; the interaction proceeds.
    NotBlocked,
    /// A blocked effect was found; the interaction should be cancelled.
    Blocked(EffectType),
}

impl Decision {
    pub fn is_blocked(self) -> bool {
        matches!(self, Decision::Blocked(_))
    }

    /// The effect that triggered the block, if any.
    pub fn blocked_effect(self) -> Option<EffectType> {
        match self {
            Decision::NotBlocked => None,
            Decision::Blocked(effect) => Some(effect),
        }
    }
}

/// Decide whether an effect source is blocked by a world's block list.
///
/// Checks run in a fixed order:
/// 1. An empty block list never blocks (no scan when no policy is configured).
/// 2. The base effect, if present and listed, wins.
/// 3. Otherwise the custom effects are scanned in their given order and the
///    first listed one wins; the scan stops at the first match.
/// 4. No match means not blocked.
pub fn decide(source: &EffectSource, block_list: &BlockList) -> Decision {
    if block_list.is_empty() {
        return Decision::NotBlocked;
    }

    if let Some(base) = source.base_effect
        && block_list.contains(base)
    {
        return Decision::Blocked(base);
    }

    for effect in &source.custom_effects {
        if block_list.contains(effect.effect_type) {
            return Decision::Blocked(effect.effect_type);
        }
    }

    Decision::NotBlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{PotionContents, PotionEffect, PotionType};

    fn list(effects: &[EffectType]) -> BlockList {
        effects.iter().copied().collect()
    }

    #[test]
    fn test_empty_list_never_blocks() {
        let empty = BlockList::new();

        let sources = [
            EffectSource::residual_glow(),
            EffectSource::from_contents(
                &PotionContents::of(PotionType::Poison)
                    .with_custom_effects(vec![PotionEffect::new(EffectType::Wither, 100, 0)]),
            ),
            EffectSource::from_contents(&PotionContents::of(PotionType::Water)),
        ];
        for source in &sources {
            assert_eq!(decide(source, &empty), Decision::NotBlocked);
        }
    }

    #[test]
    fn test_base_effect_match() {
        let source = EffectSource::from_contents(&PotionContents::of(PotionType::Poison));
        assert_eq!(
            decide(&source, &list(&[EffectType::Poison])),
            Decision::Blocked(EffectType::Poison)
        );
    }

    #[test]
    fn test_base_effect_takes_priority_over_customs() {
        // Base and a custom are both listed; the base wins.
        let source = EffectSource::from_contents(
            &PotionContents::of(PotionType::Weakness)
                .with_custom_effects(vec![PotionEffect::new(EffectType::Poison, 200, 0)]),
        );
        assert_eq!(
            decide(&source, &list(&[EffectType::Poison, EffectType::Weakness])),
            Decision::Blocked(EffectType::Weakness)
        );
    }

    #[test]
    fn test_first_matching_custom_wins() {
        let source = EffectSource::from_contents(
            &PotionContents::of(PotionType::Awkward).with_custom_effects(vec![
                PotionEffect::new(EffectType::Speed, 100, 0),
                PotionEffect::new(EffectType::Poison, 100, 0),
                PotionEffect::new(EffectType::Wither, 100, 0),
            ]),
        );
        // Poison and Wither are both listed; Poison comes first in sequence order.
        assert_eq!(
            decide(&source, &list(&[EffectType::Poison, EffectType::Wither])),
            Decision::Blocked(EffectType::Poison)
        );
    }

    #[test]
    fn test_no_match() {
        let source = EffectSource::from_contents(
            &PotionContents::of(PotionType::Swiftness)
                .with_custom_effects(vec![PotionEffect::new(EffectType::JumpBoost, 100, 0)]),
        );
        assert_eq!(
            decide(&source, &list(&[EffectType::Poison])),
            Decision::NotBlocked
        );
    }

    #[test]
    fn test_absent_base_is_no_match() {
        let source = EffectSource::from_contents(&PotionContents::of(PotionType::Water));
        assert_eq!(
            decide(&source, &list(&[EffectType::Poison])),
            Decision::NotBlocked
        );
    }

    #[test]
    fn test_residual_glow_blocked() {
        let source = EffectSource::residual_glow();
        assert_eq!(
            decide(&source, &list(&[EffectType::Glowing])),
            Decision::Blocked(EffectType::Glowing)
        );
    }

    #[test]
    fn test_tipped_arrow_scenario() {
        // base=WEAKNESS, custom=[POISON, SPEED], list={POISON} -> blocked with POISON
        let source = EffectSource::from_contents(
            &PotionContents::of(PotionType::Weakness).with_custom_effects(vec![
                PotionEffect::new(EffectType::Poison, 200, 0),
                PotionEffect::new(EffectType::Speed, 200, 0),
            ]),
        );
        assert_eq!(
            decide(&source, &list(&[EffectType::Poison])),
            Decision::Blocked(EffectType::Poison)
        );
    }

    #[test]
    fn test_decide_is_idempotent() {
        let source = EffectSource::from_contents(
            &PotionContents::of(PotionType::Harming)
                .with_custom_effects(vec![PotionEffect::new(EffectType::Wither, 100, 1)]),
        );
        let block_list = list(&[EffectType::Wither, EffectType::InstantDamage]);

        let first = decide(&source, &block_list);
        let second = decide(&source, &block_list);
        assert_eq!(first, second);
        assert_eq!(first, Decision::Blocked(EffectType::InstantDamage));
    }

    #[test]
    fn test_decision_accessors() {
        assert!(!Decision::NotBlocked.is_blocked());
        assert_eq!(Decision::NotBlocked.blocked_effect(), None);

        let blocked = Decision::Blocked(EffectType::Glowing);
        assert!(blocked.is_blocked());
        assert_eq!(blocked.blocked_effect(), Some(EffectType::Glowing));
    }
}
