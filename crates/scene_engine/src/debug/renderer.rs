//! Transient debug-draw coordination
//!
//! The coordinator owns two fixed-size pools (line batches, text nodes),
//! ages every live entry by one frame per expiration pass, and merges the
//! surviving line geometry into one of two alternating mesh/instance pairs.
//! The pair displayed this frame was populated last frame, so the renderer
//! never reads a mesh that is being rewritten by the next frame's merge.
//!
//! Frame lifecycle, driven explicitly by the engine:
//! 1. [`DebugRenderer::pre_gather_draw_calls`] — expire timed-out entries.
//! 2. [`DebugRenderer::post_pre_draw`] — merge live batches, flip the
//!    double buffer, upload and enable the populated side.
//!
//! All authoring and both phases run on the single frame-update thread;
//! there is no internal locking.

use crate::config::EngineConfig;
use crate::foundation::collections::{Handle, SlotPool};
use crate::foundation::math::{self, Mat4, Vec3};
use crate::foundation::threading::ThreadOwnershipMask;
use crate::assets::MeshManager;
use crate::scene::graph::{SceneGraph, SceneObject};
use crate::scene::mesh::{Mesh, MeshInstance, FLOATS_PER_VERTEX};
use crate::scene::text::{TextDrawMode, TextNode};
use crate::debug::line_batch::{grid_line_points, LineBatch};

/// Vertices appended by the axis gizmo: three lines, two points each.
const GIZMO_VERTICES: usize = 6;

/// Per-slot bookkeeping for a pooled text drawable.
#[derive(Debug, Default)]
struct TextSlot {
    node: Option<Handle>,
    lifetime: f32,
}

/// Flag set carried by a text authoring request.
///
/// `in_world_3d` and `faces_camera_locked_y_axis` are part of the call
/// contract for downstream text backends; the draw-mode mapping here does
/// not read them.
#[derive(Debug, Clone, Copy)]
pub struct TextMeshParams {
    /// Draw as a screen-space overlay. Position is given in `[0, 1]` with
    /// a top-left origin and is remapped to clip space.
    pub overlay_2d: bool,
    /// Request world-space 3D text.
    pub in_world_3d: bool,
    /// Billboard the text toward the camera (ignored for overlays).
    pub faces_camera: bool,
    /// Billboard around the Y axis only.
    pub faces_camera_locked_y_axis: bool,
    /// Frames the text stays alive; negative is already expired.
    pub time_to_live: f32,
    /// Anchor position (normalized screen space for overlays, world
    /// space otherwise).
    pub position: Vec3,
    /// Glyph scale.
    pub scale: f32,
}

impl Default for TextMeshParams {
    fn default() -> Self {
        Self {
            overlay_2d: false,
            in_world_3d: false,
            faces_camera: false,
            faces_camera_locked_y_axis: false,
            time_to_live: 0.0,
            position: Vec3::zeros(),
            scale: 1.0,
        }
    }
}

/// Snapshot of the coordinator's pool and buffer state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebugDrawStats {
    /// Line batches currently holding geometry.
    pub live_line_batches: usize,
    /// Free line-batch slots.
    pub free_line_slots: usize,
    /// Free text-node slots.
    pub free_text_slots: usize,
    /// Floats merged by the most recent submit pass.
    pub merged_floats: usize,
    /// Index of the mesh/instance pair selected by the last flip.
    pub current_pair: usize,
}

/// Owns the transient debug-draw pools and the double-buffered line mesh.
///
/// Constructed once at startup and injected wherever debug-draw services
/// are needed; all state is owned exclusively by this instance.
pub struct DebugRenderer {
    enabled: bool,
    node: Handle,

    line_slots: SlotPool,
    line_batches: Vec<LineBatch>,

    text_slots: SlotPool,
    text_entries: Vec<TextSlot>,
    // Text slots disabled last pass, reusable after the next one.
    freeing: Vec<usize>,

    line_meshes: [Handle; 2],
    line_instances: [Handle; 2],
    current_pair: usize,

    upload: Vec<f32>,
    merged_floats: usize,
}

impl DebugRenderer {
    /// Build the coordinator: its attachment node, both pools, and the two
    /// registered (initially disabled) mesh/instance pairs.
    pub fn new(
        graph: &mut SceneGraph,
        mesh_manager: &mut MeshManager,
        config: &EngineConfig,
    ) -> Self {
        let root = graph.root();
        let node = graph.add_node(root, "debug-draw");

        let mut line_meshes = [Handle::default(); 2];
        let mut line_instances = [Handle::default(); 2];
        for side in 0..2 {
            let mesh = graph.insert(SceneObject::Mesh(Mesh::new("debug-lines")));
            mesh_manager.register_asset(graph, mesh);

            let mut instance = MeshInstance::new();
            instance.init_from_registered_asset(mesh);
            let instance = graph.insert(SceneObject::MeshInstance(instance));
            graph.add_component(node, instance);

            line_meshes[side] = mesh;
            line_instances[side] = instance;
        }

        log::debug!(
            "debug draw ready: {} line slots, {} text slots",
            config.line_pool_capacity,
            config.text_pool_capacity
        );

        Self {
            enabled: config.debug_draw_enabled,
            node,
            line_slots: SlotPool::new(config.line_pool_capacity),
            line_batches: (0..config.line_pool_capacity)
                .map(|_| LineBatch::default())
                .collect(),
            text_slots: SlotPool::new(config.text_pool_capacity),
            text_entries: (0..config.text_pool_capacity)
                .map(|_| TextSlot::default())
                .collect(),
            freeing: Vec::new(),
            line_meshes,
            line_instances,
            current_pair: 0,
            upload: Vec::new(),
            merged_floats: 0,
        }
    }

    /// Master switch; while disabled every authoring call is a no-op.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether authoring is currently accepted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Author a short-lived batch of debug lines.
    ///
    /// With `axis_gizmo`, three axis lines (X red, Y green, Z blue) run
    /// from the transform's origin to origin + `scale` · basis column.
    /// Those six vertices are authored directly in world space; the
    /// transform is not applied to them again.
    ///
    /// `raw_pairs` is consumed in 6-float chunks, each one two 3-float
    /// points forming a line; both points go through `transform`. The
    /// second point of every chunk occupies the color lanes of the merged
    /// vertex layout.
    ///
    /// Dropped silently when debug drawing is disabled or the pool is
    /// exhausted.
    pub fn create_line_mesh(
        &mut self,
        axis_gizmo: bool,
        transform: &Mat4,
        raw_pairs: Option<&[f32]>,
        time_to_live: f32,
        scale: f32,
    ) {
        if !self.enabled {
            return;
        }
        let raw = raw_pairs.unwrap_or(&[]);
        debug_assert_eq!(raw.len() % FLOATS_PER_VERTEX, 0);
        let vertex_count =
            if axis_gizmo { GIZMO_VERTICES } else { 0 } + raw.len() / FLOATS_PER_VERTEX;
        if vertex_count == 0 {
            return;
        }
        let Some(index) = self.line_slots.acquire() else {
            log::trace!("debug line pool exhausted, dropping request");
            return;
        };

        let batch = &mut self.line_batches[index];
        batch.set_lifetime(time_to_live);
        batch.reset(vertex_count);

        if axis_gizmo {
            let origin = math::matrix_position(transform);
            let x_end = origin + math::matrix_basis_x(transform) * scale;
            let y_end = origin + math::matrix_basis_y(transform) * scale;
            let z_end = origin + math::matrix_basis_z(transform) * scale;

            let red = Vec3::new(1.0, 0.0, 0.0);
            let green = Vec3::new(0.0, 1.0, 0.0);
            let blue = Vec3::new(0.0, 0.0, 1.0);

            batch.push_vertex(origin, red);
            batch.push_vertex(x_end, red);
            batch.push_vertex(origin, green);
            batch.push_vertex(y_end, green);
            batch.push_vertex(origin, blue);
            batch.push_vertex(z_end, blue);
        }

        for chunk in raw.chunks_exact(FLOATS_PER_VERTEX) {
            let first =
                math::transform_point(transform, Vec3::new(chunk[0], chunk[1], chunk[2]));
            let second =
                math::transform_point(transform, Vec3::new(chunk[3], chunk[4], chunk[5]));
            batch.push_floats(&[first.x, first.y, first.z, second.x, second.y, second.z]);
        }
    }

    /// Author the reference ground grid: an 11x11 unit grid on the XZ
    /// plane under a uniform scale-5 transform, axis gizmo included.
    pub fn create_root_grid(&mut self, time_to_live: f32) {
        let points = grid_line_points(5, Vec3::new(0.5, 0.5, 0.5));
        let transform = Mat4::new_scaling(5.0);
        self.create_line_mesh(true, &transform, Some(&points), time_to_live, 1.0);
    }

    /// Author a short-lived text drawable.
    ///
    /// Reuses the slot's pooled node when one exists (it must be disabled;
    /// an enabled node in the free list is a contract violation), lazily
    /// constructing and attaching it otherwise. Overlay positions are
    /// remapped from `[0, 1]` top-left to clip space with the Y axis
    /// flipped.
    ///
    /// Dropped silently when debug drawing is disabled or the pool is
    /// exhausted.
    pub fn create_text_mesh(
        &mut self,
        graph: &mut SceneGraph,
        text: &str,
        params: TextMeshParams,
        mask: ThreadOwnershipMask,
    ) {
        if !self.enabled {
            return;
        }
        let Some(index) = self.text_slots.acquire() else {
            log::trace!("debug text pool exhausted, dropping request");
            return;
        };

        let entry = &mut self.text_entries[index];
        let node_handle = match entry.node {
            Some(handle) => {
                let node = graph
                    .text_mut(handle)
                    .expect("pooled text slot refers to a missing drawable");
                assert!(
                    !node.is_enabled(),
                    "pooled text node re-acquired while enabled"
                );
                node.set_self_and_mesh_asset_enabled(true);
                handle
            }
            None => {
                let handle = graph.insert(SceneObject::Text(TextNode::new()));
                graph.add_component(self.node, handle);
                graph
                    .text_mut(handle)
                    .expect("freshly inserted text node must resolve")
                    .set_self_and_mesh_asset_enabled(true);
                entry.node = Some(handle);
                handle
            }
        };
        entry.lifetime = params.time_to_live;

        let mut position = params.position;
        let mut draw_mode = TextDrawMode::InWorld;
        if params.overlay_2d {
            draw_mode = TextDrawMode::Overlay2D;
            // [0,1] top-left origin -> [-1,1] clip space, Y flipped.
            position.x = -1.0 + 2.0 * position.x;
            position.y = -1.0 + 2.0 * (1.0 - position.y);
        } else if params.faces_camera {
            draw_mode = TextDrawMode::Overlay2DFacingCamera;
        }

        let node = graph
            .text_mut(node_handle)
            .expect("pooled text slot refers to a missing drawable");
        node.load_from_string(text, draw_mode, mask);
        node.set_position(position);
        node.set_scale(params.scale);
    }

    /// Expiration pass, run once per frame before draw-call gathering.
    ///
    /// Text slots disabled by the previous pass return to the pool first,
    /// so a disable stays observable for exactly one frame. Line batches
    /// have no attached scene resources and are reclaimed the moment they
    /// expire.
    pub fn pre_gather_draw_calls(&mut self, graph: &mut SceneGraph) {
        for index in self.freeing.drain(..) {
            self.text_slots.release(index);
        }

        for (index, entry) in self.text_entries.iter_mut().enumerate() {
            let Some(handle) = entry.node else {
                continue;
            };
            let node = graph
                .text_mut(handle)
                .expect("pooled text slot refers to a missing drawable");
            if !node.is_enabled() {
                continue;
            }
            entry.lifetime -= 1.0;
            if entry.lifetime < 0.0 {
                node.set_self_and_mesh_asset_enabled(false);
                self.freeing.push(index);
            }
        }

        for (index, batch) in self.line_batches.iter_mut().enumerate() {
            if batch.is_empty() {
                continue;
            }
            if batch.age_one_frame() < 0.0 {
                batch.clear();
                self.line_slots.release(index);
            }
        }
    }

    /// Merge-and-submit pass, run once per frame after all authoring.
    ///
    /// Concatenates every still-live batch in pool-index order, disables
    /// the pair the renderer consumed this frame, flips, and uploads the
    /// merged stream into the newly selected pair (left disabled when the
    /// stream is empty).
    pub fn post_pre_draw(&mut self, graph: &mut SceneGraph, mask: ThreadOwnershipMask) {
        let mut total = 0;
        for batch in &self.line_batches {
            if !batch.is_empty() && batch.lifetime() >= 0.0 {
                total += batch.len();
            }
        }
        self.upload.reserve(total);
        for batch in &self.line_batches {
            if !batch.is_empty() && batch.lifetime() >= 0.0 {
                self.upload.extend_from_slice(batch.data());
            }
        }

        // This pair was submitted to the renderer already; hide it before
        // the next frame starts reading the other side.
        let displayed = self.current_pair;
        graph
            .mesh_mut(self.line_meshes[displayed])
            .expect("double-buffered line mesh missing")
            .set_enabled(false);
        graph
            .instance_mut(self.line_instances[displayed])
            .expect("double-buffered mesh instance missing")
            .set_enabled(false);

        self.current_pair = (self.current_pair + 1) % 2;
        let mesh_handle = self.line_meshes[self.current_pair];
        let instance_handle = self.line_instances[self.current_pair];

        if self.upload.is_empty() {
            graph
                .mesh_mut(mesh_handle)
                .expect("double-buffered line mesh missing")
                .set_enabled(false);
            graph
                .instance_mut(instance_handle)
                .expect("double-buffered mesh instance missing")
                .set_enabled(false);
        } else {
            let vertex_count = self.upload.len() / FLOATS_PER_VERTEX;
            let mesh = graph
                .mesh_mut(mesh_handle)
                .expect("double-buffered line mesh missing");
            mesh.load_from_3d_points(&self.upload, vertex_count, "debug-lines", mask);
            mesh.set_enabled(true);
            graph
                .instance_mut(instance_handle)
                .expect("double-buffered mesh instance missing")
                .set_enabled(true);
        }

        self.merged_floats = self.upload.len();
        self.upload.clear();
    }

    /// Current pool and buffer state.
    pub fn stats(&self) -> DebugDrawStats {
        DebugDrawStats {
            live_line_batches: self
                .line_batches
                .iter()
                .filter(|batch| !batch.is_empty())
                .count(),
            free_line_slots: self.line_slots.free_count(),
            free_text_slots: self.text_slots.free_count(),
            merged_floats: self.merged_floats,
            current_pair: self.current_pair,
        }
    }
}
