use lumen_core::{LumenError, Result};
use lumen_lighting::{LightPositionModel, DEFAULT_LIGHTING_KEY};

use crate::node::NodeId;

pub type DrawableId = u64;

/// Descriptor of one drawn object. Each drawable names the light setup it
/// is lit by; unlit drawables point at the reserved no-light setup.
#[derive(Clone, Debug)]
pub struct Drawable {
    pub id: DrawableId,
    pub node: NodeId,
    pub light_setup_key: String,
    pub light_position_model: LightPositionModel,
}

impl Drawable {
    pub fn new(id: DrawableId, node: NodeId) -> Self {
        Self {
            id,
            node,
            light_setup_key: DEFAULT_LIGHTING_KEY.to_string(),
            light_position_model: LightPositionModel::Global,
        }
    }

    pub fn with_light_setup_key(mut self, key: impl Into<String>) -> Self {
        self.light_setup_key = key.into();
        self
    }
}

/// Named set of drawables sharing one shader.
#[derive(Clone, Debug)]
pub struct DrawableGroup {
    id: String,
    shader_id: String,
    drawables: Vec<DrawableId>,
}

impl DrawableGroup {
    pub fn new(id: impl Into<String>, shader_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shader_id: shader_id.into(),
            drawables: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shader_id(&self) -> &str {
        &self.shader_id
    }

    pub fn set_shader_id(&mut self, shader_id: impl Into<String>) {
        self.shader_id = shader_id.into();
    }

    pub fn add(&mut self, drawable: DrawableId) {
        log::debug!("New drawable {} in group '{}'", drawable, self.id);
        self.drawables.push(drawable);
    }

    pub fn remove(&mut self, drawable: DrawableId) -> Result<()> {
        let index = self
            .drawables
            .iter()
            .position(|&d| d == drawable)
            .ok_or_else(|| {
                LumenError::ResourceNotFound(format!(
                    "drawable {} is not part of group '{}'",
                    drawable, self.id
                ))
            })?;
        self.drawables.remove(index);
        Ok(())
    }

    pub fn contains(&self, drawable: DrawableId) -> bool {
        self.drawables.contains(&drawable)
    }

    pub fn drawables(&self) -> &[DrawableId] {
        &self.drawables
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}
