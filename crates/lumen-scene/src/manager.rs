use std::collections::HashMap;

use lumen_core::{LumenError, Result};

use crate::drawable::{Drawable, DrawableGroup, DrawableId};
use crate::node::NodeId;
use crate::shader::{Shader, ShaderConfig};

struct ShaderEntry {
    shader: Shader,
    ref_count: usize,
}

/// Owns shader configs and drawable groups. Constructed with a default
/// shader and a default group wired to it, so drawables always have
/// somewhere to land.
pub struct DrawableManager {
    default_shader_id: String,
    default_group_id: String,
    shaders: HashMap<String, ShaderEntry>,
    groups: HashMap<String, DrawableGroup>,
    drawables: HashMap<DrawableId, Drawable>,
    next_drawable_id: DrawableId,
}

impl DrawableManager {
    pub fn new(default_group_id: impl Into<String>, default_shader_config: ShaderConfig) -> Result<Self> {
        let default_group_id = default_group_id.into();
        let default_shader_id = default_shader_config.id.clone();

        let mut manager = Self {
            default_shader_id: default_shader_id.clone(),
            default_group_id: default_group_id.clone(),
            shaders: HashMap::new(),
            groups: HashMap::new(),
            drawables: HashMap::new(),
            next_drawable_id: 0,
        };
        manager.create_shader(default_shader_config)?;
        manager.create_drawable_group(default_group_id, &default_shader_id)?;
        Ok(manager)
    }

    // Shader management

    pub fn create_shader(&mut self, config: ShaderConfig) -> Result<()> {
        if self.shaders.contains_key(&config.id) {
            return Err(LumenError::DuplicateResource(format!(
                "shader '{}' already exists",
                config.id
            )));
        }
        let shader = Shader::new(config)?;
        let id = shader.config().id.clone();
        log::debug!("Created shader '{}'", id);
        self.shaders.insert(id, ShaderEntry { shader, ref_count: 0 });
        Ok(())
    }

    pub fn get_shader(&self, id: &str) -> Option<&Shader> {
        self.shaders.get(id).map(|entry| &entry.shader)
    }

    pub fn default_shader(&self) -> &Shader {
        &self.shaders[&self.default_shader_id].shader
    }

    pub fn shader_ref_count(&self, id: &str) -> Option<usize> {
        self.shaders.get(id).map(|entry| entry.ref_count)
    }

    // Drawable group management

    pub fn create_drawable_group(
        &mut self,
        id: impl Into<String>,
        shader_id: &str,
    ) -> Result<&mut DrawableGroup> {
        let id = id.into();
        if self.groups.contains_key(&id) {
            return Err(LumenError::DuplicateResource(format!(
                "drawable group '{}' already exists",
                id
            )));
        }
        let entry = self.shaders.get_mut(shader_id).ok_or_else(|| {
            LumenError::ResourceNotFound(format!("shader '{}' does not exist", shader_id))
        })?;
        entry.ref_count += 1;

        log::debug!("Created drawable group '{}' with shader '{}'", id, shader_id);
        let group = DrawableGroup::new(id.clone(), shader_id);
        Ok(self.groups.entry(id).or_insert(group))
    }

    /// Delete a group, dropping the shader reference it holds. Returns
    /// whether the group existed. The default group stays.
    pub fn delete_drawable_group(&mut self, id: &str) -> Result<bool> {
        if id == self.default_group_id {
            return Err(LumenError::InvalidConfiguration(format!(
                "default drawable group '{}' cannot be deleted",
                id
            )));
        }
        match self.groups.remove(id) {
            Some(group) => {
                if let Some(entry) = self.shaders.get_mut(group.shader_id()) {
                    entry.ref_count -= 1;
                }
                for drawable in group.drawables() {
                    self.drawables.remove(drawable);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get_drawable_group(&self, id: &str) -> Option<&DrawableGroup> {
        self.groups.get(id)
    }

    pub fn get_drawable_group_mut(&mut self, id: &str) -> Option<&mut DrawableGroup> {
        self.groups.get_mut(id)
    }

    pub fn default_drawable_group(&self) -> &DrawableGroup {
        &self.groups[&self.default_group_id]
    }

    pub fn group_ids(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    // Drawable management

    /// Create a drawable attached to `node` and add it to `group_id`.
    pub fn create_drawable(&mut self, group_id: &str, node: NodeId) -> Result<DrawableId> {
        let group = self.groups.get_mut(group_id).ok_or_else(|| {
            LumenError::ResourceNotFound(format!(
                "drawable group '{}' does not exist",
                group_id
            ))
        })?;

        let id = self.next_drawable_id;
        self.next_drawable_id += 1;

        group.add(id);
        self.drawables.insert(id, Drawable::new(id, node));
        Ok(id)
    }

    pub fn get_drawable(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(&id)
    }

    pub fn get_drawable_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.get_mut(&id)
    }

    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }
}
