//! Ground-grid demo
//!
//! Drives the engine's frame loop headlessly: authors the reference grid,
//! an axis gizmo, a bounding-box outline around a loaded mesh, and a HUD
//! overlay re-authored by a frame hook, then logs what each frame would
//! submit to the renderer.

use scene_engine::debug::line_batch::aabb_outline_points;
use scene_engine::prelude::*;

/// In-memory stand-in for the file-backed asset pipeline.
struct DemoAssets;

impl AssetSource for DemoAssets {
    fn read_mesh(&self, name: &str, package: &str, _mask: ThreadOwnershipMask) -> MeshCpu {
        // A unit quad on the XZ plane.
        MeshCpu {
            name: format!("{package}/{name}"),
            positions: vec![
                -0.5, 0.0, -0.5, //
                0.5, 0.0, -0.5, //
                0.5, 0.0, 0.5, //
                -0.5, 0.0, 0.5,
            ],
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    fn read_skeleton(&self, name: &str, package: &str, _mask: ThreadOwnershipMask) -> SkeletonCpu {
        SkeletonCpu {
            name: format!("{package}/{name}"),
            joint_names: vec!["root".to_string(), "tip".to_string()],
            joint_parents: vec![None, Some(0)],
            local_binds: vec![Mat4::identity(), Mat4::new_translation(&Vec3::new(0.0, 1.0, 0.0))],
        }
    }
}

/// Re-authors the HUD overlay every frame.
struct HudHook;

impl FrameHook for HudHook {
    fn pre_gather(&mut self, event: &PreGatherDrawCalls, ctx: &mut FrameContext<'_>) {
        let params = TextMeshParams {
            overlay_2d: true,
            position: Vec3::new(0.05, 0.05, 0.0),
            scale: 0.5,
            time_to_live: 1.0,
            ..Default::default()
        };
        ctx.debug.create_text_mesh(
            ctx.graph,
            &format!("HP:100  frame {}", event.frame_index),
            params,
            ThreadOwnershipMask::GAME,
        );
    }
}

fn main() {
    scene_engine::foundation::logging::init();

    let config = EngineConfig::load_from_file("grid_app.toml").unwrap_or_else(|err| {
        log::debug!("no config file loaded ({err}); using defaults");
        EngineConfig::default()
    });
    let mut engine = Engine::new(&config, Box::new(DemoAssets));
    let mask = ThreadOwnershipMask::GAME;

    {
        let ctx = engine.context();
        ctx.debug.create_root_grid(600.0);
        ctx.debug.create_line_mesh(true, &Mat4::identity(), None, 600.0, 2.0);

        let quad = ctx.meshes.get_asset(ctx.graph, "quad.mesha", "demo", mask);
        if let Some(bounds) = ctx.graph.mesh(quad).and_then(|mesh| mesh.bounds()) {
            let outline = aabb_outline_points(&bounds);
            ctx.debug
                .create_line_mesh(false, &Mat4::identity(), Some(&outline), 600.0, 1.0);
        }

        let skeleton = ctx.meshes.get_asset(ctx.graph, "biped.skela", "demo", mask);
        log::info!(
            "loaded {} joints",
            ctx.graph.skeleton(skeleton).map_or(0, |s| s.joint_count())
        );
    }

    engine.add_frame_hook(Box::new(HudHook));

    for _ in 0..5 {
        let draws = engine.frame(mask);
        let stats = engine.context().debug.stats();
        log::info!(
            "frame {}: {} mesh draws, {} text draws, {} floats merged (pair {})",
            engine.frame_index(),
            draws.mesh_count(),
            draws.text_count(),
            stats.merged_floats,
            stats.current_pair,
        );
    }
}
