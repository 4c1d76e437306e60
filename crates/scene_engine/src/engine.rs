//! Engine context and frame driver
//!
//! The engine is an explicit context object: constructed once at startup
//! and passed to the call sites that need scene or debug-draw services.
//! There is no global instance.

use crate::assets::{AssetSource, MeshManager};
use crate::config::EngineConfig;
use crate::debug::renderer::DebugRenderer;
use crate::events::{FrameHook, PreGatherDrawCalls};
use crate::foundation::threading::ThreadOwnershipMask;
use crate::scene::draw_list::DrawList;
use crate::scene::graph::SceneGraph;

/// Split borrows over the engine's subsystems, handed to authoring code.
pub struct FrameContext<'a> {
    /// The scene-graph object store.
    pub graph: &'a mut SceneGraph,
    /// The debug-draw coordinator.
    pub debug: &'a mut DebugRenderer,
    /// The asset cache.
    pub meshes: &'a mut MeshManager,
}

/// Owns every engine subsystem and drives the per-frame sequence.
pub struct Engine {
    graph: SceneGraph,
    meshes: MeshManager,
    debug: DebugRenderer,
    hooks: Vec<Box<dyn FrameHook>>,
    frame_index: u64,
}

impl Engine {
    /// Construct the scene store, asset cache and debug-draw coordinator.
    pub fn new(config: &EngineConfig, source: Box<dyn AssetSource>) -> Self {
        let mut graph = SceneGraph::new();
        let mut meshes = MeshManager::new(source);
        let debug = DebugRenderer::new(&mut graph, &mut meshes, config);
        Self {
            graph,
            meshes,
            debug,
            hooks: Vec::new(),
            frame_index: 0,
        }
    }

    /// Register a pre-gather authoring hook.
    pub fn add_frame_hook(&mut self, hook: Box<dyn FrameHook>) {
        self.hooks.push(hook);
    }

    /// Borrow the subsystems for authoring outside the frame sequence.
    pub fn context(&mut self) -> FrameContext<'_> {
        FrameContext {
            graph: &mut self.graph,
            debug: &mut self.debug,
            meshes: &mut self.meshes,
        }
    }

    /// Read access to the scene store.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Frames completed so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Run one frame.
    ///
    /// Sequence: pre-gather hooks (authoring), the expiration pass, the
    /// merge/flip/upload pass, then draw-call gathering over whatever is
    /// enabled. The returned list is what the renderer submits.
    pub fn frame(&mut self, mask: ThreadOwnershipMask) -> DrawList {
        self.frame_index += 1;
        let event = PreGatherDrawCalls {
            frame_index: self.frame_index,
        };

        let mut hooks = std::mem::take(&mut self.hooks);
        for hook in &mut hooks {
            hook.pre_gather(
                &event,
                &mut FrameContext {
                    graph: &mut self.graph,
                    debug: &mut self.debug,
                    meshes: &mut self.meshes,
                },
            );
        }
        self.hooks = hooks;

        self.debug.pre_gather_draw_calls(&mut self.graph);
        self.debug.post_pre_draw(&mut self.graph, mask);

        let draws = DrawList::gather(&self.graph);
        log::trace!(
            "frame {}: {} draw commands gathered",
            self.frame_index,
            draws.len()
        );
        draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{MeshCpu, SkeletonCpu};
    use crate::debug::renderer::TextMeshParams;
    use crate::foundation::math::{Mat4, Vec3};
    use crate::scene::draw_list::DrawCommand;

    struct NoAssets;

    impl AssetSource for NoAssets {
        fn read_mesh(&self, _: &str, _: &str, _: ThreadOwnershipMask) -> MeshCpu {
            MeshCpu::default()
        }

        fn read_skeleton(&self, _: &str, _: &str, _: ThreadOwnershipMask) -> SkeletonCpu {
            SkeletonCpu::default()
        }
    }

    fn engine() -> Engine {
        Engine::new(&EngineConfig::default(), Box::new(NoAssets))
    }

    const MASK: ThreadOwnershipMask = ThreadOwnershipMask::GAME;

    #[test]
    fn test_frame_submits_authored_lines() {
        let mut engine = engine();
        engine
            .context()
            .debug
            .create_line_mesh(true, &Mat4::identity(), None, 10.0, 1.0);

        let draws = engine.frame(MASK);
        assert_eq!(draws.mesh_count(), 1);
        match &draws.commands()[0] {
            DrawCommand::Mesh { vertex_count, .. } => assert_eq!(*vertex_count, 6),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_empty_frame_submits_nothing() {
        let mut engine = engine();
        let draws = engine.frame(MASK);
        assert!(draws.is_empty());
    }

    #[test]
    fn test_consecutive_frames_alternate_buffer_pairs() {
        let mut engine = engine();
        engine
            .context()
            .debug
            .create_line_mesh(true, &Mat4::identity(), None, 100.0, 1.0);

        engine.frame(MASK);
        let first = engine.context().debug.stats().current_pair;
        engine.frame(MASK);
        let second = engine.context().debug.stats().current_pair;
        assert_ne!(first, second);

        engine.frame(MASK);
        assert_eq!(engine.context().debug.stats().current_pair, first);
    }

    #[test]
    fn test_frame_hooks_author_each_frame() {
        struct Hud;

        impl FrameHook for Hud {
            fn pre_gather(&mut self, event: &PreGatherDrawCalls, ctx: &mut FrameContext<'_>) {
                let params = TextMeshParams {
                    overlay_2d: true,
                    position: Vec3::new(0.1, 0.1, 0.0),
                    time_to_live: 1.0,
                    ..Default::default()
                };
                ctx.debug.create_text_mesh(
                    ctx.graph,
                    &format!("frame {}", event.frame_index),
                    params,
                    MASK,
                );
            }
        }

        let mut engine = engine();
        engine.add_frame_hook(Box::new(Hud));

        // Each frame's overlay survives that frame's expiration pass and
        // is disabled by the next one, so exactly one is ever gathered.
        for _ in 0..3 {
            let draws = engine.frame(MASK);
            assert_eq!(draws.text_count(), 1);
        }
    }

    #[test]
    fn test_expired_content_disappears_from_draw_list() {
        let mut engine = engine();
        engine
            .context()
            .debug
            .create_line_mesh(true, &Mat4::identity(), None, 2.0, 1.0);

        assert_eq!(engine.frame(MASK).mesh_count(), 1); // lifetime 2 -> 1
        assert_eq!(engine.frame(MASK).mesh_count(), 1); // lifetime 1 -> 0
        assert_eq!(engine.frame(MASK).mesh_count(), 0); // freed, nothing merged
    }
}
