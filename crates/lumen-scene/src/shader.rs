use lumen_core::{LumenError, Result};
use serde::{Deserialize, Serialize};

/// CPU-side shader flavors. The flat variants ignore lights entirely;
/// the Phong variants consume a light setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShaderType {
    Colored,
    VertexColored,
    Textured,
    ColoredPhong,
    VertexColoredPhong,
    TexturedPhong,
}

impl ShaderType {
    pub fn is_lit(self) -> bool {
        matches!(
            self,
            ShaderType::ColoredPhong | ShaderType::VertexColoredPhong | ShaderType::TexturedPhong
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShaderConfig {
    pub id: String,
    pub shader_type: ShaderType,
    pub num_lights: usize,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            shader_type: ShaderType::Colored,
            num_lights: 1,
        }
    }
}

impl ShaderConfig {
    fn validate(&self) -> Result<()> {
        if self.shader_type.is_lit() && self.num_lights == 0 {
            return Err(LumenError::InvalidConfiguration(format!(
                "lit shader '{}' needs at least one light",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Shader {
    config: ShaderConfig,
}

impl Shader {
    pub fn new(config: ShaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ShaderConfig {
        &self.config
    }

    /// Swap in a new config. The id identifies the shader in its manager
    /// and stays fixed.
    pub fn set_config(&mut self, config: ShaderConfig) -> Result<()> {
        if config.id != self.config.id {
            return Err(LumenError::InvalidConfiguration(format!(
                "cannot change shader id '{}' to '{}'",
                self.config.id, config.id
            )));
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_shader_requires_lights() {
        let config = ShaderConfig {
            id: "phong".to_string(),
            shader_type: ShaderType::ColoredPhong,
            num_lights: 0,
        };
        assert!(matches!(
            Shader::new(config),
            Err(LumenError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn flat_shader_ignores_light_count() {
        let config = ShaderConfig {
            id: "flat".to_string(),
            shader_type: ShaderType::Colored,
            num_lights: 0,
        };
        assert!(Shader::new(config).is_ok());
    }

    #[test]
    fn set_config_keeps_the_id_stable() {
        let mut shader = Shader::new(ShaderConfig {
            id: "main".to_string(),
            ..ShaderConfig::default()
        })
        .unwrap();

        let renamed = ShaderConfig {
            id: "other".to_string(),
            ..ShaderConfig::default()
        };
        assert!(shader.set_config(renamed).is_err());

        let retyped = ShaderConfig {
            id: "main".to_string(),
            shader_type: ShaderType::TexturedPhong,
            num_lights: 3,
        };
        shader.set_config(retyped.clone()).unwrap();
        assert_eq!(*shader.config(), retyped);
    }
}
