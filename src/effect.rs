//! Status effect vocabulary.
//!
//! The host engine defines a fixed set of status effects that potions and
//! tipped arrows can apply. This module mirrors that vocabulary:
//! - `EffectType` - the effect kinds themselves, compared by identity only
//! - `PotionType` - the brewable potion variants, each with an optional base effect
//! - `PotionEffect` - a concrete applied effect (type + duration + amplifier)
//! - `PotionContents` - the effect payload a potion or tipped arrow carries

use std::fmt;

/// A status-altering effect kind, as defined by the host engine.
///
/// Externally defined and fixed; compared by identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectType {
    Speed,
    Slowness,
    Haste,
    MiningFatigue,
    Strength,
    InstantHealth,
    InstantDamage,
    JumpBoost,
    Nausea,
    Regeneration,
    Resistance,
    FireResistance,
    WaterBreathing,
    Invisibility,
    Blindness,
    NightVision,
    Hunger,
    Weakness,
    Poison,
    Wither,
    HealthBoost,
    Absorption,
    Saturation,
    Glowing,
    Levitation,
    Luck,
    BadLuck,
    SlowFalling,
}

/// All effect types, for name lookup and config validation.
pub const ALL_EFFECT_TYPES: &[EffectType] = &[
    EffectType::Speed,
    EffectType::Slowness,
    EffectType::Haste,
    EffectType::MiningFatigue,
    EffectType::Strength,
    EffectType::InstantHealth,
    EffectType::InstantDamage,
    EffectType::JumpBoost,
    EffectType::Nausea,
    EffectType::Regeneration,
    EffectType::Resistance,
    EffectType::FireResistance,
    EffectType::WaterBreathing,
    EffectType::Invisibility,
    EffectType::Blindness,
    EffectType::NightVision,
    EffectType::Hunger,
    EffectType::Weakness,
    EffectType::Poison,
    EffectType::Wither,
    EffectType::HealthBoost,
    EffectType::Absorption,
    EffectType::Saturation,
    EffectType::Glowing,
    EffectType::Levitation,
    EffectType::Luck,
    EffectType::BadLuck,
    EffectType::SlowFalling,
];

impl EffectType {
    /// The stable lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            EffectType::Speed => "speed",
            EffectType::Slowness => "slowness",
            EffectType::Haste => "haste",
            EffectType::MiningFatigue => "mining_fatigue",
            EffectType::Strength => "strength",
            EffectType::InstantHealth => "instant_health",
            EffectType::InstantDamage => "instant_damage",
            EffectType::JumpBoost => "jump_boost",
            EffectType::Nausea => "nausea",
            EffectType::Regeneration => "regeneration",
            EffectType::Resistance => "resistance",
            EffectType::FireResistance => "fire_resistance",
            EffectType::WaterBreathing => "water_breathing",
            EffectType::Invisibility => "invisibility",
            EffectType::Blindness => "blindness",
            EffectType::NightVision => "night_vision",
            EffectType::Hunger => "hunger",
            EffectType::Weakness => "weakness",
            EffectType::Poison => "poison",
            EffectType::Wither => "wither",
            EffectType::HealthBoost => "health_boost",
            EffectType::Absorption => "absorption",
            EffectType::Saturation => "saturation",
            EffectType::Glowing => "glowing",
            EffectType::Levitation => "levitation",
            EffectType::Luck => "luck",
            EffectType::BadLuck => "bad_luck",
            EffectType::SlowFalling => "slow_falling",
        }
    }

    /// Look up an effect type by its configuration name.
    ///
    /// Matching is case-insensitive; returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_ascii_lowercase();
        ALL_EFFECT_TYPES
            .iter()
            .copied()
            .find(|e| e.name() == lowered)
    }

    /// Human-readable name, for player-facing messages.
    pub fn display_name(self) -> &'static str {
        match self {
            EffectType::Speed => "Speed",
            EffectType::Slowness => "Slowness",
            EffectType::Haste => "Haste",
            EffectType::MiningFatigue => "Mining Fatigue",
            EffectType::Strength => "Strength",
            EffectType::InstantHealth => "Instant Health",
            EffectType::InstantDamage => "Instant Damage",
            EffectType::JumpBoost => "Jump Boost",
            EffectType::Nausea => "Nausea",
            EffectType::Regeneration => "Regeneration",
            EffectType::Resistance => "Resistance",
            EffectType::FireResistance => "Fire Resistance",
            EffectType::WaterBreathing => "Water Breathing",
            EffectType::Invisibility => "Invisibility",
            EffectType::Blindness => "Blindness",
            EffectType::NightVision => "Night Vision",
            EffectType::Hunger => "Hunger",
            EffectType::Weakness => "Weakness",
            EffectType::Poison => "Poison",
            EffectType::Wither => "Wither",
            EffectType::HealthBoost => "Health Boost",
            EffectType::Absorption => "Absorption",
            EffectType::Saturation => "Saturation",
            EffectType::Glowing => "Glowing",
            EffectType::Levitation => "Levitation",
            EffectType::Luck => "Luck",
            EffectType::BadLuck => "Bad Luck",
            EffectType::SlowFalling => "Slow Falling",
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A brewable potion variant.
///
/// The variant determines the potion's base effect. Some variants (water,
/// mundane, thick, awkward) carry no effect at all, which is why the base
/// effect is optional everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotionType {
    Water,
    Mundane,
    Thick,
    Awkward,
    NightVision,
    Invisibility,
    Leaping,
    FireResistance,
    Swiftness,
    Slowness,
    WaterBreathing,
    Healing,
    Harming,
    Poison,
    Regeneration,
    Strength,
    Weakness,
    Luck,
    /// Applies slowness and resistance together; has no single base type.
    TurtleMaster,
    SlowFalling,
}

impl PotionType {
    /// The base effect this potion variant applies, if any.
    pub fn effect_type(self) -> Option<EffectType> {
        match self {
            PotionType::Water | PotionType::Mundane | PotionType::Thick | PotionType::Awkward => {
                None
            }
            PotionType::TurtleMaster => None,
            PotionType::NightVision => Some(EffectType::NightVision),
            PotionType::Invisibility => Some(EffectType::Invisibility),
            PotionType::Leaping => Some(EffectType::JumpBoost),
            PotionType::FireResistance => Some(EffectType::FireResistance),
            PotionType::Swiftness => Some(EffectType::Speed),
            PotionType::Slowness => Some(EffectType::Slowness),
            PotionType::WaterBreathing => Some(EffectType::WaterBreathing),
            PotionType::Healing => Some(EffectType::InstantHealth),
            PotionType::Harming => Some(EffectType::InstantDamage),
            PotionType::Poison => Some(EffectType::Poison),
            PotionType::Regeneration => Some(EffectType::Regeneration),
            PotionType::Strength => Some(EffectType::Strength),
            PotionType::Weakness => Some(EffectType::Weakness),
            PotionType::Luck => Some(EffectType::Luck),
            PotionType::SlowFalling => Some(EffectType::SlowFalling),
        }
    }
}

/// A concrete applied effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotionEffect {
    /// The kind of effect applied.
    pub effect_type: EffectType,
    /// Duration in ticks.
    pub duration: u32,
    /// Effect level, zero-based (0 = level I).
    pub amplifier: u8,
}

impl PotionEffect {
    /// Create a new effect instance.
    pub fn new(effect_type: EffectType, duration: u32, amplifier: u8) -> Self {
        Self {
            effect_type,
            duration,
            amplifier,
        }
    }
}

/// The effect payload of a potion item or tipped projectile: a brewed base
/// variant plus zero-or-more custom effects layered on top, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionContents {
    /// The brewed potion variant.
    pub potion_type: PotionType,
    /// Custom effects attached to this specific instance, in application order.
    pub custom_effects: Vec<PotionEffect>,
}

impl PotionContents {
    /// Contents with a base variant and no custom effects.
    pub fn of(potion_type: PotionType) -> Self {
        Self {
            potion_type,
            custom_effects: Vec::new(),
        }
    }

    /// Attach custom effects to these contents.
    pub fn with_custom_effects(mut self, effects: Vec<PotionEffect>) -> Self {
        self.custom_effects = effects;
        self
    }

    /// The base effect encoded by the potion variant, if any.
    pub fn base_effect(&self) -> Option<EffectType> {
        self.potion_type.effect_type()
    }

    pub fn has_custom_effects(&self) -> bool {
        !self.custom_effects.is_empty()
    }
}
