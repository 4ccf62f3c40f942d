//! Optional TOML configuration
//!
//! ```toml
//! [scene]
//! overflow = { wrap = 999 }
//!
//! [keys]
//! "+" = "take_up"
//! ```

use ahash::HashMap;
use eyre::{Context as _, Result, bail};
use log::{debug, info};
use serde::Deserialize;
use slate_core::{KeyCommand, Keymap, SceneOverflow};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scene: SceneConfig,

    /// Extra or replacement key bindings, one character per key
    #[serde(default)]
    pub keys: HashMap<String, KeyCommand>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default)]
    pub overflow: SceneOverflow,
}

impl Config {
    /// Load from `path`, or fall back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;

        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let SceneOverflow::Wrap(ceiling) = self.scene.overflow
            && !(1..=999).contains(&ceiling)
        {
            bail!("scene overflow wrap ceiling must be between 1 and 999, got {ceiling}");
        }

        for key in self.keys.keys() {
            if key.chars().count() != 1 {
                bail!("key binding {key:?} must be exactly one character");
            }
        }

        Ok(())
    }

    /// Default key table with the configured bindings applied on top
    pub fn keymap(&self) -> Keymap {
        let mut keymap = Keymap::default();
        for (key, &command) in &self.keys {
            let Some(key) = key.chars().next() else {
                continue;
            };
            if let Some(previous) = keymap.bind(key, command) {
                debug!("rebound {key:?} from {previous:?} to {command:?}");
            }
        }
        keymap
    }

    pub fn overflow(&self) -> SceneOverflow {
        self.scene.overflow
    }
}
