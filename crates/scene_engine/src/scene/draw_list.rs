//! Per-frame draw-call gathering
//!
//! Walks the object store once per frame and collects everything the
//! renderer should submit: enabled mesh instances (resolved through their
//! registered mesh asset) and enabled text drawables.

use crate::foundation::collections::Handle;
use crate::foundation::math::Vec3;
use crate::scene::graph::{SceneGraph, SceneObject};
use crate::scene::text::TextDrawMode;

/// One renderer submission produced by the gather pass.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// An enabled mesh instance whose asset holds uploaded geometry.
    Mesh {
        /// The instance that triggered the draw.
        instance: Handle,
        /// The registered mesh asset to bind.
        mesh: Handle,
        /// Vertices to submit.
        vertex_count: usize,
    },
    /// An enabled text drawable.
    Text {
        /// The text node to draw.
        node: Handle,
        /// Projection mode.
        mode: TextDrawMode,
        /// Position (clip space for overlays, world otherwise).
        position: Vec3,
        /// Glyph scale.
        scale: f32,
    },
}

/// Draw calls gathered for one frame.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Collect draw commands from every enabled drawable in the store.
    ///
    /// A mesh instance is skipped unless it is enabled, bound to a mesh,
    /// and that mesh is itself enabled with nonzero geometry.
    pub fn gather(graph: &SceneGraph) -> Self {
        let mut commands = Vec::new();
        for (handle, object) in graph.iter() {
            match object {
                SceneObject::MeshInstance(instance) if instance.is_enabled() => {
                    let Some(mesh_handle) = instance.mesh() else {
                        continue;
                    };
                    if let Some(mesh) = graph.mesh(mesh_handle) {
                        if mesh.is_enabled() && mesh.vertex_count() > 0 {
                            commands.push(DrawCommand::Mesh {
                                instance: handle,
                                mesh: mesh_handle,
                                vertex_count: mesh.vertex_count(),
                            });
                        }
                    }
                }
                SceneObject::Text(text) if text.is_enabled() => {
                    commands.push(DrawCommand::Text {
                        node: handle,
                        mode: text.draw_mode(),
                        position: text.position(),
                        scale: text.scale(),
                    });
                }
                _ => {}
            }
        }
        Self { commands }
    }

    /// The gathered commands in store order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Total number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing was gathered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of mesh submissions.
    pub fn mesh_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Mesh { .. }))
            .count()
    }

    /// Number of text submissions.
    pub fn text_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Text { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::threading::ThreadOwnershipMask;
    use crate::scene::mesh::{Mesh, MeshInstance};
    use crate::scene::text::TextNode;

    fn enabled_line_mesh(vertices: usize) -> Mesh {
        let mut mesh = Mesh::new("lines");
        let floats = vec![0.0; vertices * 6];
        mesh.load_from_3d_points(&floats, vertices, "", ThreadOwnershipMask::RENDER);
        mesh.set_enabled(true);
        mesh
    }

    #[test]
    fn test_gather_collects_enabled_instances() {
        let mut graph = SceneGraph::new();
        let mesh = graph.insert(SceneObject::Mesh(enabled_line_mesh(4)));
        let mut instance = MeshInstance::new();
        instance.init_from_registered_asset(mesh);
        instance.set_enabled(true);
        graph.insert(SceneObject::MeshInstance(instance));

        let draws = DrawList::gather(&graph);
        assert_eq!(draws.mesh_count(), 1);
        match &draws.commands()[0] {
            DrawCommand::Mesh { vertex_count, .. } => assert_eq!(*vertex_count, 4),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_gather_skips_disabled_and_empty() {
        let mut graph = SceneGraph::new();

        // Disabled instance over a live mesh.
        let mesh = graph.insert(SceneObject::Mesh(enabled_line_mesh(4)));
        let mut off_instance = MeshInstance::new();
        off_instance.init_from_registered_asset(mesh);
        graph.insert(SceneObject::MeshInstance(off_instance));

        // Enabled instance over a disabled mesh.
        let mut dark_mesh = enabled_line_mesh(2);
        dark_mesh.set_enabled(false);
        let dark = graph.insert(SceneObject::Mesh(dark_mesh));
        let mut on_instance = MeshInstance::new();
        on_instance.init_from_registered_asset(dark);
        on_instance.set_enabled(true);
        graph.insert(SceneObject::MeshInstance(on_instance));

        // Disabled text.
        graph.insert(SceneObject::Text(TextNode::new()));

        let draws = DrawList::gather(&graph);
        assert!(draws.is_empty());
    }

    #[test]
    fn test_gather_collects_enabled_text() {
        let mut graph = SceneGraph::new();
        let mut text = TextNode::new();
        text.set_self_and_mesh_asset_enabled(true);
        text.load_from_string("hello", TextDrawMode::InWorld, ThreadOwnershipMask::GAME);
        graph.insert(SceneObject::Text(text));

        let draws = DrawList::gather(&graph);
        assert_eq!(draws.text_count(), 1);
        assert_eq!(draws.len(), 1);
    }
}
