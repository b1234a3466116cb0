use lumen_core::Transform;

pub type NodeId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneNodeType {
    Empty,
    Camera,
    Object,
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub node_type: SceneNodeType,
    pub transform: Transform,
}

impl SceneNode {
    pub fn new(id: NodeId, parent: Option<NodeId>) -> Self {
        Self {
            id,
            parent,
            node_type: SceneNodeType::Empty,
            transform: Transform::default(),
        }
    }
}
