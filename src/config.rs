//! Per-world configuration and the provider seam.
//!
//! The listener never looks configuration up on its own; it asks a
//! `ConfigProvider` for the active world's settings and passes the block
//! list into the decision function explicitly, keeping the decision logic
//! pure and independently testable.

use std::collections::HashMap;

use crate::blocklist::BlockList;
use crate::ids::WorldId;

/// The potion-blocking settings of a single world.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldConfig {
    /// Effect types blocked in this world. Empty means no policy.
    pub block_potions: BlockList,
    /// When set, splash and lingering potions with blocked effects are
    /// cancelled even for players holding the override permission.
    pub block_potions_always: bool,
}

/// Supplies per-world configuration to the listener.
pub trait ConfigProvider {
    fn world_config(&self, world: WorldId) -> &WorldConfig;
}

/// A map-backed provider with a fallback for unconfigured worlds.
///
/// The fallback defaults to an empty block list, so worlds without explicit
/// configuration never block anything.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    worlds: HashMap<WorldId, WorldConfig>,
    fallback: WorldConfig,
}

impl StaticConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration of one world.
    pub fn with_world(mut self, world: WorldId, config: WorldConfig) -> Self {
        self.worlds.insert(world, config);
        self
    }

    /// Set the fallback used for worlds without explicit configuration.
    pub fn with_fallback(mut self, config: WorldConfig) -> Self {
        self.fallback = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn world_config(&self, world: WorldId) -> &WorldConfig {
        self.worlds.get(&world).unwrap_or(&self.fallback)
    }
}

#[cfg(feature = "serialization")]
pub mod loader {
    //! Loading world configuration from JSON documents.
    //!
    //! Effect types appear in config files by their stable lowercase names;
    //! unknown names are a load-time error rather than being silently ignored.

    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use serde::Deserialize;

    use crate::blocklist::BlockList;
    use crate::effect::EffectType;

    use super::WorldConfig;

    /// Raw config document shape, before effect names are resolved.
    #[derive(Debug, Deserialize)]
    struct RawWorldConfig {
        #[serde(default)]
        block_potions: Vec<String>,
        #[serde(default)]
        block_potions_always: bool,
    }

    /// Errors that can occur while loading a world config document.
    #[derive(Debug)]
    pub enum ConfigError {
        /// The file could not be read.
        Io(std::io::Error),
        /// The document is not valid JSON of the expected shape.
        Parse(serde_json::Error),
        /// An entry in `block_potions` names no known effect type.
        UnknownEffect(String),
    }

    impl std::fmt::Display for ConfigError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                ConfigError::Io(err) => write!(f, "failed to read config: {}", err),
                ConfigError::Parse(err) => write!(f, "failed to parse config: {}", err),
                ConfigError::UnknownEffect(name) => {
                    write!(f, "unknown effect type in block_potions: {:?}", name)
                }
            }
        }
    }

    impl std::error::Error for ConfigError {}

    impl From<std::io::Error> for ConfigError {
        fn from(err: std::io::Error) -> Self {
            ConfigError::Io(err)
        }
    }

    impl From<serde_json::Error> for ConfigError {
        fn from(err: serde_json::Error) -> Self {
            ConfigError::Parse(err)
        }
    }

    /// Load one world's configuration from a JSON file.
    pub fn load_world_config(path: &Path) -> Result<WorldConfig, ConfigError> {
        let file = File::open(path)?;
        let raw: RawWorldConfig = serde_json::from_reader(BufReader::new(file))?;
        resolve(raw)
    }

    /// Parse one world's configuration from a JSON string.
    pub fn world_config_from_json(json: &str) -> Result<WorldConfig, ConfigError> {
        let raw: RawWorldConfig = serde_json::from_str(json)?;
        resolve(raw)
    }

    fn resolve(raw: RawWorldConfig) -> Result<WorldConfig, ConfigError> {
        let mut block_potions = BlockList::new();
        for name in raw.block_potions {
            let Some(effect) = EffectType::from_name(&name) else {
                return Err(ConfigError::UnknownEffect(name));
            };
            block_potions.insert(effect);
        }
        Ok(WorldConfig {
            block_potions,
            block_potions_always: raw.block_potions_always,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectType;

    #[test]
    fn test_default_world_config_blocks_nothing() {
        let config = WorldConfig::default();
        assert!(config.block_potions.is_empty());
        assert!(!config.block_potions_always);
    }

    #[test]
    fn test_static_provider_lookup() {
        let poison_world = WorldId::from_index(0);
        let other_world = WorldId::from_index(1);

        let provider = StaticConfigProvider::new().with_world(
            poison_world,
            WorldConfig {
                block_potions: [EffectType::Poison].into_iter().collect(),
                block_potions_always: false,
            },
        );

        assert!(
            provider
                .world_config(poison_world)
                .block_potions
                .contains(EffectType::Poison)
        );
        // Unconfigured world falls back to the empty default.
        assert!(provider.world_config(other_world).block_potions.is_empty());
    }

    #[test]
    fn test_custom_fallback() {
        let provider = StaticConfigProvider::new().with_fallback(WorldConfig {
            block_potions: [EffectType::Wither].into_iter().collect(),
            block_potions_always: true,
        });

        let config = provider.world_config(WorldId::from_index(9));
        assert!(config.block_potions.contains(EffectType::Wither));
        assert!(config.block_potions_always);
    }
}
