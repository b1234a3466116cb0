pub mod camera;
pub mod error;
pub mod transform;

pub use camera::Camera;
pub use error::{LumenError, Result};
pub use transform::Transform;
