//! # Scene Engine
//!
//! A scene-graph runtime with pooled, double-buffered debug rendering.
//!
//! ## Features
//!
//! - **Scene Graph**: a handle-addressed object store of hierarchy nodes
//!   and attachable components (meshes, mesh instances, skeletons, text)
//! - **Asset Cache**: lazy, keyed loading of mesh and skeleton assets plus
//!   registration of engine-generated geometry
//! - **Debug Drawing**: short-lived line batches and floating text from
//!   fixed-size pools, aged per frame and merged into a double-buffered
//!   vertex stream
//! - **Explicit Frame Driver**: the two-phase expiration/merge contract is
//!   visible at the call site instead of hidden behind event registration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! struct NoAssets;
//!
//! impl AssetSource for NoAssets {
//!     fn read_mesh(&self, _: &str, _: &str, _: ThreadOwnershipMask) -> MeshCpu {
//!         MeshCpu::default()
//!     }
//!     fn read_skeleton(&self, _: &str, _: &str, _: ThreadOwnershipMask) -> SkeletonCpu {
//!         SkeletonCpu::default()
//!     }
//! }
//!
//! fn main() {
//!     let config = EngineConfig::default();
//!     let mut engine = Engine::new(&config, Box::new(NoAssets));
//!
//!     engine.context().debug.create_root_grid(600.0);
//!     loop {
//!         let draws = engine.frame(ThreadOwnershipMask::GAME);
//!         // hand `draws` to the render backend
//!         # break;
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod debug;
pub mod engine;
pub mod events;
pub mod foundation;
pub mod scene;

pub use engine::{Engine, FrameContext};

/// Common imports for engine users
pub mod prelude {
    pub use crate::assets::{AssetSource, MeshCpu, MeshManager, SkeletonCpu};
    pub use crate::config::{Config, EngineConfig};
    pub use crate::debug::{DebugDrawStats, DebugRenderer, TextMeshParams};
    pub use crate::engine::{Engine, FrameContext};
    pub use crate::events::{FrameHook, PreGatherDrawCalls};
    pub use crate::foundation::collections::Handle;
    pub use crate::foundation::math::{Mat4, Vec3};
    pub use crate::foundation::threading::ThreadOwnershipMask;
    pub use crate::scene::{
        Aabb, DrawCommand, DrawList, SceneGraph, SceneObject, TextDrawMode,
    };
}
