//! Renderable mesh assets and their scene instances
//!
//! A [`Mesh`] owns the CPU-side copy of the geometry the upload backend
//! consumes; a [`MeshInstance`] is the drawable that points at a registered
//! mesh asset. Both carry an enabled flag that the draw gather honors.

use crate::assets::MeshCpu;
use crate::foundation::collections::Handle;
use crate::foundation::threading::ThreadOwnershipMask;
use crate::scene::graph::Aabb;

/// Floats per interleaved line vertex (position xyz + color rgb).
pub const FLOATS_PER_VERTEX: usize = 6;

/// A renderable mesh asset.
///
/// Holds either indexed geometry loaded from a CPU intermediate, or a raw
/// interleaved float stream authored at runtime (debug line meshes).
#[derive(Debug)]
pub struct Mesh {
    name: String,
    enabled: bool,
    vertex_data: Vec<f32>,
    vertex_count: usize,
    indices: Vec<u32>,
    bounds: Option<Aabb>,
}

impl Mesh {
    /// Create an empty, disabled mesh with a debug name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: false,
            vertex_data: Vec::new(),
            vertex_count: 0,
            indices: Vec::new(),
            bounds: None,
        }
    }

    /// Build a mesh from a loader-produced CPU intermediate.
    pub fn from_cpu(cpu: &MeshCpu) -> Self {
        Self {
            name: cpu.name.clone(),
            enabled: true,
            vertex_data: cpu.positions.clone(),
            vertex_count: cpu.vertex_count(),
            indices: cpu.indices.clone(),
            bounds: cpu.bounding_box(),
        }
    }

    /// Replace the geometry with an interleaved pos+color float stream.
    ///
    /// `points` must hold exactly `vertex_count * 6` floats. The mask tags
    /// the worker that owns the downstream GPU upload; it is carried
    /// through untouched.
    pub fn load_from_3d_points(
        &mut self,
        points: &[f32],
        vertex_count: usize,
        debug_name: &str,
        _mask: ThreadOwnershipMask,
    ) {
        debug_assert_eq!(points.len(), vertex_count * FLOATS_PER_VERTEX);
        self.vertex_data.clear();
        self.vertex_data.extend_from_slice(points);
        self.vertex_count = vertex_count;
        self.indices.clear();
        self.bounds = None;
        if !debug_name.is_empty() {
            self.name = debug_name.to_string();
        }
        log::trace!("mesh '{}' reloaded with {} vertices", self.name, vertex_count);
    }

    /// Enable or disable submission of this asset.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the asset may be submitted this frame.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of vertices in the current geometry.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Raw interleaved vertex floats.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    /// Vertex stream as bytes, as handed to the upload backend.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_data)
    }

    /// Triangle indices, empty for raw line meshes.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Axis-aligned bounds of file-loaded geometry.
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    /// Debug name of the mesh.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A scene drawable referencing a registered mesh asset.
#[derive(Debug, Default)]
pub struct MeshInstance {
    mesh: Option<Handle>,
    enabled: bool,
}

impl MeshInstance {
    /// Create an unbound, disabled instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind this instance to a mesh asset already registered with the
    /// asset cache.
    pub fn init_from_registered_asset(&mut self, mesh: Handle) {
        self.mesh = Some(mesh);
    }

    /// The bound mesh asset, if any.
    pub fn mesh(&self) -> Option<Handle> {
        self.mesh
    }

    /// Enable or disable this drawable.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether this drawable is submitted this frame.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
