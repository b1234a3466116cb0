use std::collections::HashMap;
use std::sync::Arc;

use lumen_core::{LumenError, Result};
use parking_lot::RwLock;

use crate::light::LightSetup;

/// Key of the setup used when no explicit key is given.
pub const DEFAULT_LIGHTING_KEY: &str = "";

/// Key of the reserved empty setup for unlit drawables. Write-protected.
pub const NO_LIGHT_KEY: &str = "no_lights";

/// Registry of named light setups. Setups are stored as immutable
/// snapshots; replacing one swaps the whole `Arc`, so a reader holding a
/// snapshot never observes a partial update.
#[derive(Clone)]
pub struct LightSetupRegistry {
    setups: Arc<RwLock<HashMap<String, Arc<LightSetup>>>>,
}

impl LightSetupRegistry {
    pub fn new() -> Self {
        let mut setups = HashMap::new();
        setups.insert(DEFAULT_LIGHTING_KEY.to_string(), Arc::new(LightSetup::new()));
        setups.insert(NO_LIGHT_KEY.to_string(), Arc::new(LightSetup::new()));
        Self {
            setups: Arc::new(RwLock::new(setups)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<LightSetup>> {
        self.setups.read().get(key).cloned()
    }

    /// Replace the setup stored under `key`, creating it if absent.
    pub fn set(&self, key: &str, setup: LightSetup) -> Result<()> {
        if key == NO_LIGHT_KEY {
            return Err(LumenError::InvalidConfiguration(format!(
                "light setup key '{}' is reserved and cannot be replaced",
                NO_LIGHT_KEY
            )));
        }
        log::debug!("Replacing light setup '{}' ({} lights)", key, setup.len());
        self.setups.write().insert(key.to_string(), Arc::new(setup));
        Ok(())
    }

    /// Ensure `key` exists, backed by an empty setup. Existing setups are
    /// left untouched.
    pub fn ensure(&self, key: &str) {
        self.setups
            .write()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(LightSetup::new()));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.setups.read().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.setups.read().keys().cloned().collect()
    }

    pub fn setup_count(&self) -> usize {
        self.setups.read().len()
    }
}

impl Default for LightSetupRegistry {
    fn default() -> Self {
        Self::new()
    }
}
