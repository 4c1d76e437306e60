//! Scene-graph object store
//!
//! A single handle-addressed store holds every scene object behind a tagged
//! variant. Hierarchy nodes record which component handles are attached to
//! them; handles returned to callers are shared references into the store
//! and stay valid for as long as the object is referenced by the scene.

use crate::foundation::collections::{Handle, HandleMap};
use crate::foundation::math::Vec3;
use crate::scene::mesh::{Mesh, MeshInstance};
use crate::scene::skeleton::Skeleton;
use crate::scene::text::TextNode;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Fold a flat `[x, y, z, x, y, z, ..]` position stream into its bounds.
    ///
    /// Returns `None` when the stream holds no complete triplet.
    pub fn from_positions(positions: &[f32]) -> Option<Self> {
        let mut triplets = positions.chunks_exact(3);
        let first = triplets.next()?;
        let mut min = Vec3::new(first[0], first[1], first[2]);
        let mut max = min;
        for triplet in triplets {
            min.x = min.x.min(triplet[0]);
            min.y = min.y.min(triplet[1]);
            min.z = min.z.min(triplet[2]);
            max.x = max.x.max(triplet[0]);
            max.y = max.y.max(triplet[1]);
            max.z = max.z.max(triplet[2]);
        }
        Some(Self { min, max })
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}

/// Discriminant for everything the object store can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// A hierarchy node
    Node,
    /// A renderable mesh asset
    Mesh,
    /// A scene instance of a registered mesh asset
    MeshInstance,
    /// A skeletal hierarchy asset
    Skeleton,
    /// A pooled text drawable
    Text,
}

/// Tagged variant stored per scene object.
#[derive(Debug)]
pub enum SceneObject {
    /// A hierarchy node
    Node(SceneNode),
    /// A renderable mesh asset
    Mesh(Mesh),
    /// A scene instance of a registered mesh asset
    MeshInstance(MeshInstance),
    /// A skeletal hierarchy asset
    Skeleton(Skeleton),
    /// A pooled text drawable
    Text(TextNode),
}

impl SceneObject {
    /// Which kind of object this entry holds.
    pub fn kind(&self) -> ComponentKind {
        match self {
            SceneObject::Node(_) => ComponentKind::Node,
            SceneObject::Mesh(_) => ComponentKind::Mesh,
            SceneObject::MeshInstance(_) => ComponentKind::MeshInstance,
            SceneObject::Skeleton(_) => ComponentKind::Skeleton,
            SceneObject::Text(_) => ComponentKind::Text,
        }
    }
}

/// A hierarchy node: a named attachment point for components.
#[derive(Debug, Default)]
pub struct SceneNode {
    name: String,
    components: Vec<Handle>,
}

impl SceneNode {
    /// Create a named, empty node.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            components: Vec::new(),
        }
    }

    /// The node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handles attached to this node, in attachment order.
    pub fn components(&self) -> &[Handle] {
        &self.components
    }
}

/// The scene-graph object store.
///
/// Constructed with a root node; all loaded and generated assets hang off
/// the root, and subsystems create their own attachment nodes beneath it.
#[derive(Debug)]
pub struct SceneGraph {
    objects: HandleMap<SceneObject>,
    root: Handle,
}

impl SceneGraph {
    /// Create a store containing only the root node.
    pub fn new() -> Self {
        let mut objects = HandleMap::default();
        let root = objects.insert(SceneObject::Node(SceneNode::new("root")));
        Self { objects, root }
    }

    /// Handle of the root node.
    pub fn root(&self) -> Handle {
        self.root
    }

    /// Insert an object and return its handle.
    pub fn insert(&mut self, object: SceneObject) -> Handle {
        self.objects.insert(object)
    }

    /// Attach a component handle to a hierarchy node.
    ///
    /// Panics when `parent` does not refer to a node; attaching to a
    /// non-node is a programming error, not a runtime condition.
    pub fn add_component(&mut self, parent: Handle, component: Handle) {
        match self.objects.get_mut(parent) {
            Some(SceneObject::Node(node)) => node.components.push(component),
            _ => panic!("add_component parent is not a scene node"),
        }
    }

    /// Create a named child node attached to `parent`.
    pub fn add_node(&mut self, parent: Handle, name: &str) -> Handle {
        let handle = self.objects.insert(SceneObject::Node(SceneNode::new(name)));
        self.add_component(parent, handle);
        handle
    }

    /// Look up any object.
    pub fn get(&self, handle: Handle) -> Option<&SceneObject> {
        self.objects.get(handle)
    }

    /// Look up any object mutably.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut SceneObject> {
        self.objects.get_mut(handle)
    }

    /// Kind of the object behind `handle`, if it exists.
    pub fn kind(&self, handle: Handle) -> Option<ComponentKind> {
        self.objects.get(handle).map(SceneObject::kind)
    }

    /// Typed access to a hierarchy node.
    pub fn node(&self, handle: Handle) -> Option<&SceneNode> {
        match self.objects.get(handle) {
            Some(SceneObject::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Typed access to a mesh asset.
    pub fn mesh(&self, handle: Handle) -> Option<&Mesh> {
        match self.objects.get(handle) {
            Some(SceneObject::Mesh(mesh)) => Some(mesh),
            _ => None,
        }
    }

    /// Typed mutable access to a mesh asset.
    pub fn mesh_mut(&mut self, handle: Handle) -> Option<&mut Mesh> {
        match self.objects.get_mut(handle) {
            Some(SceneObject::Mesh(mesh)) => Some(mesh),
            _ => None,
        }
    }

    /// Typed access to a mesh instance.
    pub fn instance(&self, handle: Handle) -> Option<&MeshInstance> {
        match self.objects.get(handle) {
            Some(SceneObject::MeshInstance(instance)) => Some(instance),
            _ => None,
        }
    }

    /// Typed mutable access to a mesh instance.
    pub fn instance_mut(&mut self, handle: Handle) -> Option<&mut MeshInstance> {
        match self.objects.get_mut(handle) {
            Some(SceneObject::MeshInstance(instance)) => Some(instance),
            _ => None,
        }
    }

    /// Typed access to a skeleton.
    pub fn skeleton(&self, handle: Handle) -> Option<&Skeleton> {
        match self.objects.get(handle) {
            Some(SceneObject::Skeleton(skeleton)) => Some(skeleton),
            _ => None,
        }
    }

    /// Typed access to a text drawable.
    pub fn text(&self, handle: Handle) -> Option<&TextNode> {
        match self.objects.get(handle) {
            Some(SceneObject::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Typed mutable access to a text drawable.
    pub fn text_mut(&mut self, handle: Handle) -> Option<&mut TextNode> {
        match self.objects.get_mut(handle) {
            Some(SceneObject::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Total number of objects in the store (including the root).
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over every object with its handle.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &SceneObject)> {
        self.objects.iter()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_contains_root_node() {
        let graph = SceneGraph::new();
        assert_eq!(graph.object_count(), 1);
        assert_eq!(graph.kind(graph.root()), Some(ComponentKind::Node));
    }

    #[test]
    fn test_add_component_records_membership() {
        let mut graph = SceneGraph::new();
        let mesh = graph.insert(SceneObject::Mesh(Mesh::new("test")));
        let root = graph.root();
        graph.add_component(root, mesh);
        assert_eq!(graph.node(root).unwrap().components(), &[mesh]);
    }

    #[test]
    fn test_add_node_attaches_to_parent() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let child = graph.add_node(root, "child");
        assert_eq!(graph.node(child).unwrap().name(), "child");
        assert!(graph.node(root).unwrap().components().contains(&child));
    }

    #[test]
    fn test_typed_accessors_reject_mismatched_kind() {
        let mut graph = SceneGraph::new();
        let text = graph.insert(SceneObject::Text(TextNode::new()));
        assert!(graph.mesh(text).is_none());
        assert!(graph.text(text).is_some());
    }

    #[test]
    #[should_panic(expected = "not a scene node")]
    fn test_add_component_to_non_node_panics() {
        let mut graph = SceneGraph::new();
        let mesh = graph.insert(SceneObject::Mesh(Mesh::new("test")));
        let other = graph.insert(SceneObject::Mesh(Mesh::new("other")));
        graph.add_component(mesh, other);
    }

    #[test]
    fn test_aabb_from_positions() {
        let positions = [0.0, 1.0, 2.0, -3.0, 4.0, 0.5, 1.0, -1.0, 1.0];
        let bounds = Aabb::from_positions(&positions).unwrap();
        assert_eq!(bounds.min, Vec3::new(-3.0, -1.0, 0.5));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 2.0));
    }

    #[test]
    fn test_aabb_from_empty_positions_is_none() {
        assert!(Aabb::from_positions(&[]).is_none());
        assert!(Aabb::from_positions(&[1.0, 2.0]).is_none());
    }
}
