use lumen_core::Result;
use lumen_lighting::{LightSetup, LightSetupRegistry};
use lumen_scene::{DrawableManager, SceneGraph};

use crate::config::SimulationConfig;

/// Owns the scene graph, the drawables and the light setups of one
/// simulated scene.
pub struct Simulation {
    config: SimulationConfig,
    scene_graph: SceneGraph,
    drawables: DrawableManager,
    light_setups: LightSetupRegistry,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let drawables = DrawableManager::new(
            config.default_drawable_group_id.clone(),
            config.default_shader.clone(),
        )?;

        let light_setups = LightSetupRegistry::new();
        light_setups.ensure(&config.scene_light_setup_key);

        log::info!(
            "Simulation created, scene lit by setup '{}'",
            config.scene_light_setup_key
        );
        Ok(Self {
            config,
            scene_graph: SceneGraph::new(),
            drawables,
            light_setups,
        })
    }

    /// Current light setup of the scene. Empty on a fresh simulation.
    pub fn get_light_setup(&self) -> LightSetup {
        self.get_light_setup_for(&self.config.scene_light_setup_key)
    }

    /// Replace the scene's light setup wholesale. An empty setup clears
    /// all lights.
    pub fn set_light_setup(&self, setup: LightSetup) -> Result<()> {
        let key = self.config.scene_light_setup_key.clone();
        self.set_light_setup_for(&key, setup)
    }

    pub fn get_light_setup_for(&self, key: &str) -> LightSetup {
        self.light_setups
            .get(key)
            .map(|setup| (*setup).clone())
            .unwrap_or_default()
    }

    pub fn set_light_setup_for(&self, key: &str, setup: LightSetup) -> Result<()> {
        self.light_setups.set(key, setup)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn scene_graph(&self) -> &SceneGraph {
        &self.scene_graph
    }

    pub fn drawables(&self) -> &DrawableManager {
        &self.drawables
    }

    pub fn drawables_mut(&mut self) -> &mut DrawableManager {
        &mut self.drawables
    }

    pub fn light_setups(&self) -> &LightSetupRegistry {
        &self.light_setups
    }
}
