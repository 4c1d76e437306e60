//! Asset intermediates and the loader contract
//!
//! File and package parsing live outside this crate. The engine consumes
//! loaders through [`AssetSource`], which hands back CPU-side intermediate
//! representations ready to be turned into scene objects.

pub mod mesh_manager;

pub use mesh_manager::MeshManager;

use crate::foundation::math::Mat4;
use crate::foundation::threading::ThreadOwnershipMask;
use crate::scene::graph::Aabb;

/// CPU-side mesh intermediate produced by an external loader.
#[derive(Debug, Clone, Default)]
pub struct MeshCpu {
    /// Asset name.
    pub name: String,
    /// Flat `[x, y, z, ..]` position stream.
    pub positions: Vec<f32>,
    /// Triangle indices into the position stream.
    pub indices: Vec<u32>,
}

impl MeshCpu {
    /// Number of positions in the stream.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Axis-aligned bounds over the position stream.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_positions(&self.positions)
    }
}

/// CPU-side skeleton intermediate produced by an external loader.
///
/// The three streams are parallel, one entry per joint.
#[derive(Debug, Clone, Default)]
pub struct SkeletonCpu {
    /// Asset name.
    pub name: String,
    /// Joint names.
    pub joint_names: Vec<String>,
    /// Parent joint indices; `None` marks a root joint.
    pub joint_parents: Vec<Option<usize>>,
    /// Local bind-pose transforms.
    pub local_binds: Vec<Mat4>,
}

/// Narrow contract to the external file/package pipeline.
///
/// Implementations resolve `(name, package)` pairs to parsed intermediates.
/// Failure to parse is the loader's problem (it asserts on its side); the
/// engine only dispatches by asset-name suffix. The ownership mask is
/// carried through so loaders can tag GPU-facing work.
pub trait AssetSource {
    /// Read a `.mesha` asset into its CPU intermediate.
    fn read_mesh(&self, name: &str, package: &str, mask: ThreadOwnershipMask) -> MeshCpu;

    /// Read a `.skela` asset into its CPU intermediate.
    fn read_skeleton(&self, name: &str, package: &str, mask: ThreadOwnershipMask) -> SkeletonCpu;
}
