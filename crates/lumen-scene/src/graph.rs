use std::collections::HashMap;
use std::sync::Arc;

use glam::Mat4;
use lumen_core::{LumenError, Result, Transform};
use parking_lot::RwLock;

use crate::camera::RenderCamera;
use crate::node::{NodeId, SceneNode, SceneNodeType};

/// Scene graph with a fixed root node. The root's transform stays at
/// identity; everything else hangs off it.
pub struct SceneGraph {
    nodes: Arc<RwLock<HashMap<NodeId, SceneNode>>>,
    next_node_id: Arc<RwLock<NodeId>>,
    root: NodeId,
    pub default_render_camera: RenderCamera,
}

impl SceneGraph {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        let root = 0;
        nodes.insert(root, SceneNode::new(root, None));

        // Camera node is a direct child of the root, like everything else.
        let camera_node_id = 1;
        let mut camera_node = SceneNode::new(camera_node_id, Some(root));
        camera_node.node_type = SceneNodeType::Camera;
        nodes.insert(camera_node_id, camera_node);

        Self {
            nodes: Arc::new(RwLock::new(nodes)),
            next_node_id: Arc::new(RwLock::new(2)),
            root,
            default_render_camera: RenderCamera::new(camera_node_id),
        }
    }

    pub fn root_node(&self) -> NodeId {
        self.root
    }

    pub fn is_root_node(&self, id: NodeId) -> bool {
        id == self.root
    }

    pub fn create_child_node(&self, parent: NodeId) -> Result<NodeId> {
        if !self.nodes.read().contains_key(&parent) {
            return Err(LumenError::ResourceNotFound(format!(
                "parent node {} does not exist",
                parent
            )));
        }

        let mut next_id = self.next_node_id.write();
        let id = *next_id;
        *next_id += 1;

        self.nodes.write().insert(id, SceneNode::new(id, Some(parent)));
        Ok(id)
    }

    pub fn remove_node(&self, id: NodeId) -> Result<SceneNode> {
        if self.is_root_node(id) {
            return Err(LumenError::InvalidConfiguration(
                "the root node cannot be removed".to_string(),
            ));
        }
        self.nodes.write().remove(&id).ok_or_else(|| {
            LumenError::ResourceNotFound(format!("node {} does not exist", id))
        })
    }

    pub fn get_node(&self, id: NodeId) -> Option<SceneNode> {
        self.nodes.read().get(&id).cloned()
    }

    pub fn update_node<F, R>(&self, id: NodeId, f: F) -> Option<R>
    where
        F: FnOnce(&mut SceneNode) -> R,
    {
        let mut nodes = self.nodes.write();
        nodes.get_mut(&id).map(f)
    }

    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&SceneNode),
    {
        let nodes = self.nodes.read();
        for node in nodes.values() {
            f(node);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }

    /// Transform of `id` relative to the world, accumulated up the parent
    /// chain.
    pub fn world_transform(&self, id: NodeId) -> Result<Mat4> {
        let nodes = self.nodes.read();
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = nodes.get(&node_id).ok_or_else(|| {
                LumenError::ResourceNotFound(format!("node {} does not exist", node_id))
            })?;
            matrix = node.transform.to_matrix() * matrix;
            current = node.parent;
        }
        Ok(matrix)
    }

    pub fn set_node_transform(&self, id: NodeId, transform: Transform) -> Result<()> {
        self.update_node(id, |node| node.transform = transform)
            .ok_or_else(|| LumenError::ResourceNotFound(format!("node {} does not exist", id)))
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
