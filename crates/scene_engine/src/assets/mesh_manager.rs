//! Keyed asset cache over the scene-graph object store
//!
//! Resolves `(package, name)` pairs to scene handles, loading lazily on the
//! first request. Engine-generated meshes (debug line meshes and other
//! procedural geometry) are registered under synthetic keys so they share
//! the same cache and root attachment as file-backed assets.

use std::collections::HashMap;

use crate::assets::AssetSource;
use crate::foundation::collections::Handle;
use crate::foundation::threading::ThreadOwnershipMask;
use crate::scene::graph::{SceneGraph, SceneObject};
use crate::scene::mesh::Mesh;
use crate::scene::skeleton::Skeleton;

/// Keyed asset cache: `"{package}/{name}"` → scene handle.
pub struct MeshManager {
    assets: HashMap<String, Handle>,
    source: Box<dyn AssetSource>,
    next_generated_id: u64,
}

impl MeshManager {
    /// Create an empty cache over the given loader.
    pub fn new(source: Box<dyn AssetSource>) -> Self {
        Self {
            assets: HashMap::new(),
            source,
            next_generated_id: 0,
        }
    }

    /// Resolve an asset handle, loading and attaching it on first use.
    ///
    /// Dispatches on the asset-name suffix: `skela` builds a [`Skeleton`],
    /// `mesha` builds a [`Mesh`]. Any other suffix is a content-pipeline
    /// configuration error and panics.
    pub fn get_asset(
        &mut self,
        graph: &mut SceneGraph,
        name: &str,
        package: &str,
        mask: ThreadOwnershipMask,
    ) -> Handle {
        let key = format!("{package}/{name}");
        if let Some(&handle) = self.assets.get(&key) {
            return handle;
        }

        let handle = if name.ends_with("skela") {
            let cpu = self.source.read_skeleton(name, package, mask);
            graph.insert(SceneObject::Skeleton(Skeleton::from_cpu(&cpu)))
        } else if name.ends_with("mesha") {
            let cpu = self.source.read_mesh(name, package, mask);
            graph.insert(SceneObject::Mesh(Mesh::from_cpu(&cpu)))
        } else {
            panic!("asset '{key}' has no recognized suffix (expected 'skela' or 'mesha')");
        };

        let root = graph.root();
        graph.add_component(root, handle);
        self.assets.insert(key.clone(), handle);
        log::debug!("loaded asset '{key}'");
        handle
    }

    /// Register an externally created object under a generated unique key.
    ///
    /// Used for procedural meshes that never go through the loader path.
    /// The monotonic counter makes key collisions unreachable; one firing
    /// anyway is an invariant violation and panics.
    pub fn register_asset(&mut self, graph: &mut SceneGraph, handle: Handle) {
        self.next_generated_id += 1;
        let key = format!("__generated_{}", self.next_generated_id);

        let root = graph.root();
        graph.add_component(root, handle);
        let previous = self.assets.insert(key, handle);
        assert!(previous.is_none(), "generated asset keys must be unique");
    }

    /// Number of cached assets (loaded plus generated).
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Whether a `(package, name)` pair has already been loaded.
    pub fn contains(&self, name: &str, package: &str) -> bool {
        self.assets.contains_key(&format!("{package}/{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{MeshCpu, SkeletonCpu};
    use crate::foundation::math::Mat4;
    use crate::scene::graph::ComponentKind;

    struct StubSource;

    impl AssetSource for StubSource {
        fn read_mesh(&self, name: &str, package: &str, _mask: ThreadOwnershipMask) -> MeshCpu {
            MeshCpu {
                name: format!("{package}/{name}"),
                positions: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 0.0, 0.0],
                indices: vec![0, 1, 2],
            }
        }

        fn read_skeleton(
            &self,
            name: &str,
            package: &str,
            _mask: ThreadOwnershipMask,
        ) -> SkeletonCpu {
            SkeletonCpu {
                name: format!("{package}/{name}"),
                joint_names: vec!["root".to_string()],
                joint_parents: vec![None],
                local_binds: vec![Mat4::identity()],
            }
        }
    }

    fn manager() -> MeshManager {
        MeshManager::new(Box::new(StubSource))
    }

    #[test]
    fn test_get_asset_returns_cached_handle() {
        let mut graph = SceneGraph::new();
        let mut manager = manager();
        let mask = ThreadOwnershipMask::GAME;

        let first = manager.get_asset(&mut graph, "foo.mesha", "core", mask);
        let second = manager.get_asset(&mut graph, "foo.mesha", "core", mask);
        assert_eq!(first, second);
        assert_eq!(manager.asset_count(), 1);
    }

    #[test]
    fn test_mesh_and_skeleton_assets_are_distinct() {
        let mut graph = SceneGraph::new();
        let mut manager = manager();
        let mask = ThreadOwnershipMask::GAME;

        let mesh = manager.get_asset(&mut graph, "foo.mesha", "core", mask);
        let skeleton = manager.get_asset(&mut graph, "foo.skela", "core", mask);
        assert_ne!(mesh, skeleton);
        assert_eq!(graph.kind(mesh), Some(ComponentKind::Mesh));
        assert_eq!(graph.kind(skeleton), Some(ComponentKind::Skeleton));
    }

    #[test]
    fn test_loaded_assets_attach_to_root() {
        let mut graph = SceneGraph::new();
        let mut manager = manager();

        let mesh = manager.get_asset(&mut graph, "foo.mesha", "core", ThreadOwnershipMask::GAME);
        let root = graph.root();
        assert!(graph.node(root).unwrap().components().contains(&mesh));
    }

    #[test]
    #[should_panic(expected = "no recognized suffix")]
    fn test_unknown_suffix_panics() {
        let mut graph = SceneGraph::new();
        let mut manager = manager();
        manager.get_asset(&mut graph, "foo.texture", "core", ThreadOwnershipMask::GAME);
    }

    #[test]
    fn test_register_asset_generates_unique_keys() {
        let mut graph = SceneGraph::new();
        let mut manager = manager();

        let a = graph.insert(SceneObject::Mesh(Mesh::new("generated-a")));
        let b = graph.insert(SceneObject::Mesh(Mesh::new("generated-b")));
        manager.register_asset(&mut graph, a);
        manager.register_asset(&mut graph, b);
        assert_eq!(manager.asset_count(), 2);

        let root = graph.root();
        let components = graph.node(root).unwrap().components();
        assert!(components.contains(&a));
        assert!(components.contains(&b));
    }

    #[test]
    fn test_different_packages_cache_separately() {
        let mut graph = SceneGraph::new();
        let mut manager = manager();
        let mask = ThreadOwnershipMask::GAME;

        let core = manager.get_asset(&mut graph, "foo.mesha", "core", mask);
        let demo = manager.get_asset(&mut graph, "foo.mesha", "demo", mask);
        assert_ne!(core, demo);
        assert!(manager.contains("foo.mesha", "core"));
        assert!(manager.contains("foo.mesha", "demo"));
    }
}
