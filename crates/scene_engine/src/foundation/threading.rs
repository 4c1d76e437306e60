//! Cooperative thread-ownership tagging
//!
//! GPU-resource creation paths are tagged with the worker that may legally
//! touch them. The mask is carried through load/create calls unchanged; it
//! is a cooperative marker, not a lock, and nothing in this crate inspects
//! its bits.

use bitflags::bitflags;

bitflags! {
    /// Marks which worker owns the downstream resource-creation path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ThreadOwnershipMask: u32 {
        /// The simulation/game thread.
        const GAME = 1 << 0;
        /// The render-command thread.
        const RENDER = 1 << 1;
        /// The asset-streaming worker.
        const LOADING = 1 << 2;
    }
}
