use glam::{Mat4, Vec3};
use lumen_core::Camera;

use crate::node::NodeId;

/// Camera bound to a scene node. The node carries the pose; projection
/// parameters live on the wrapped [`Camera`].
#[derive(Clone, Copy, Debug)]
pub struct RenderCamera {
    node: NodeId,
    pub camera: Camera,
}

impl RenderCamera {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            camera: Camera::default(),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.camera.position = eye;
        self.camera.look_at(target, up);
    }

    pub fn set_projection(&mut self, width: u32, height: u32, znear: f32, zfar: f32, hfov: f32) {
        self.camera.set_projection(width, height, znear, zfar, hfov);
    }

    /// World-to-eye matrix, the frame light positions get resolved into.
    pub fn camera_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }
}
