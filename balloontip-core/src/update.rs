//! Flags signalling which host passes a state change invalidates.

use bitflags::bitflags;

bitflags! {
    /// An update to the application state.
    ///
    /// Returned from state transitions so the host knows which pipeline
    /// stages to re-run on the next frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Update: u8 {
        /// Re-evaluate reactive state.
        const EVAL = 1 << 0;
        /// Repaint the scene.
        const DRAW = 1 << 1;
        /// Recompute layout.
        const LAYOUT = 1 << 2;
        /// Force a full rebuild.
        const FORCE = 1 << 3;
    }
}
