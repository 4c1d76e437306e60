//! Frame-lifecycle events
//!
//! The two debug-draw phases are invoked explicitly by the engine's frame
//! driver so the ordering contract stays visible at the call site. The one
//! subscription surface is the pre-gather hook: systems register to author
//! draw calls for the coming frame before expiration and merge run.

use crate::engine::FrameContext;

/// Payload delivered to pre-gather hooks once per frame.
#[derive(Debug, Clone, Copy)]
pub struct PreGatherDrawCalls {
    /// Monotonic frame counter maintained by the engine.
    pub frame_index: u64,
}

/// Per-frame authoring hook, fired before expiration and merge.
pub trait FrameHook {
    /// Called once per frame before draw-call gathering begins.
    fn pre_gather(&mut self, event: &PreGatherDrawCalls, ctx: &mut FrameContext<'_>);
}
