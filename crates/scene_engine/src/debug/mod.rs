//! Debug-draw subsystem
//!
//! Short-lived visual primitives (line batches, floating text) are
//! allocated from fixed-size pools, aged by a per-frame lifetime counter,
//! and merged into a single double-buffered vertex stream for submission.

pub mod line_batch;
pub mod renderer;

pub use line_batch::{aabb_outline_points, grid_line_points, LineBatch};
pub use renderer::{DebugDrawStats, DebugRenderer, TextMeshParams};
