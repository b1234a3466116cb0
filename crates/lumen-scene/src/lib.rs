pub mod camera;
pub mod drawable;
pub mod graph;
pub mod manager;
pub mod node;
pub mod shader;

pub use camera::RenderCamera;
pub use drawable::{Drawable, DrawableGroup, DrawableId};
pub use graph::SceneGraph;
pub use manager::DrawableManager;
pub use node::{NodeId, SceneNode, SceneNodeType};
pub use shader::{Shader, ShaderConfig, ShaderType};
