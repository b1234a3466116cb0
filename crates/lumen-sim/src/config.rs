use lumen_lighting::DEFAULT_LIGHTING_KEY;
use lumen_scene::ShaderConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Light setup the scene is lit by. Setups under other keys can still
    /// be registered and assigned to individual drawables.
    pub scene_light_setup_key: String,
    pub default_drawable_group_id: String,
    pub default_shader: ShaderConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scene_light_setup_key: DEFAULT_LIGHTING_KEY.to_string(),
            default_drawable_group_id: String::new(),
            default_shader: ShaderConfig::default(),
        }
    }
}
