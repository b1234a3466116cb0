use glam::{Mat4, Vec3};
use lumen_core::{LumenError, Result};
use serde::{Deserialize, Serialize};

/// Frame a light position is expressed in. Resolution into eye space
/// happens per drawable at draw time, see [`LightInfo::position_in_eye_space`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightPositionModel {
    /// Position is in world coordinates.
    Global,
    /// Position follows the object the light is attached to.
    Object,
    /// Position is already in eye coordinates.
    Camera,
}

impl Default for LightPositionModel {
    fn default() -> Self {
        LightPositionModel::Global
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightInfo {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub model: LightPositionModel,
}

impl LightInfo {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            color: Vec3::ONE,
            intensity: 1.0,
            model: LightPositionModel::Global,
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_model(mut self, model: LightPositionModel) -> Self {
        self.model = model;
        self
    }

    /// Build a light from raw position components, e.g. parsed from a
    /// config file. Anything but exactly 3 components is rejected.
    pub fn from_slice(components: &[f32]) -> Result<Self> {
        if components.len() != 3 {
            return Err(LumenError::InvalidLight(format!(
                "light position needs 3 components, got {}",
                components.len()
            )));
        }
        Ok(Self::new(Vec3::new(components[0], components[1], components[2])))
    }

    /// Resolve the light position into eye space. `camera_matrix` maps world
    /// to eye, `modelview_matrix` maps the owning object to eye.
    pub fn position_in_eye_space(&self, camera_matrix: Mat4, modelview_matrix: Mat4) -> Vec3 {
        match self.model {
            LightPositionModel::Global => camera_matrix.transform_point3(self.position),
            LightPositionModel::Object => modelview_matrix.transform_point3(self.position),
            LightPositionModel::Camera => self.position,
        }
    }
}

/// All active lights of a scene, in submission order.
pub type LightSetup = Vec<LightInfo>;
