//! Show/hide transition state machine for floating tooltips.
//!
//! A floating tooltip's position depends on its measured content size, so
//! it cannot become visible on the same pass that mounts it: it first
//! renders once invisibly to obtain a measurement, then starts its enter
//! transition on the next scheduling tick. This module tracks that
//! lifecycle and keeps rapid show/hide toggles from unmounting the popup
//! in between.

use log::trace;

use crate::update::Update;

/// Phase of a floating tooltip's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Not mounted.
    Gone,
    /// Mounted invisibly to obtain a measurement pass.
    Initializing,
    /// Shown; the enter transition is running or has settled.
    Visible,
    /// The exit transition is running.
    Exiting,
}

/// Why a transition stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEnd {
    /// The exit transition ran to completion.
    Completed,
    /// The host tore the tooltip down mid-transition.
    Abandoned,
}

/// Drives [TransitionPhase] from visibility requests and scheduling ticks.
///
/// Requests are buffered and applied once per tick, last request wins, so
/// `request(true); request(false); request(true)` within one tick behaves
/// like a single show and never unmounts in between.
#[derive(Debug, Default)]
pub struct TooltipTransition {
    phase: TransitionPhase,
    pending: Option<bool>,
}

impl Default for TransitionPhase {
    fn default() -> Self {
        TransitionPhase::Gone
    }
}

impl TooltipTransition {
    /// Create a transition state machine in the [Gone](TransitionPhase::Gone) phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the tooltip shown or hidden.
    ///
    /// Takes effect at the next [tick](TooltipTransition::tick).
    pub fn request(&mut self, visible: bool) {
        self.pending = Some(visible);
    }

    /// Advance one scheduling tick.
    ///
    /// Call once per frame/recomposition. A popup that spent a tick in
    /// [Initializing](TransitionPhase::Initializing) has had its
    /// measurement pass committed and moves on to
    /// [Visible](TransitionPhase::Visible); a re-show during
    /// [Exiting](TransitionPhase::Exiting) reverses the exit without
    /// restarting from scratch.
    pub fn tick(&mut self) -> Update {
        let request = self.pending.take();
        let next = match (self.phase, request) {
            (TransitionPhase::Initializing, Some(false)) => TransitionPhase::Gone,
            (TransitionPhase::Initializing, _) => TransitionPhase::Visible,
            (TransitionPhase::Gone, Some(true)) => TransitionPhase::Initializing,
            (TransitionPhase::Exiting, Some(true)) => TransitionPhase::Visible,
            (TransitionPhase::Visible, Some(false)) => TransitionPhase::Exiting,
            (phase, _) => phase,
        };
        self.set_phase(next)
    }

    /// The enter/exit transition finished or was torn down.
    ///
    /// Completed and abandoned transitions resolve identically: the popup
    /// unmounts. Hosts must call this from their transition-finished and
    /// teardown hooks so no overlay window outlives its tooltip.
    pub fn transition_finished(&mut self, end: TransitionEnd) -> Update {
        trace!("tooltip transition finished: {:?}", end);
        self.set_phase(TransitionPhase::Gone)
    }

    /// The current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether the popup window exists (any phase but Gone).
    pub fn is_mounted(&self) -> bool {
        self.phase != TransitionPhase::Gone
    }

    /// Whether the popup is rendering invisibly for measurement.
    pub fn is_measuring(&self) -> bool {
        self.phase == TransitionPhase::Initializing
    }

    /// Whether the popup is shown.
    pub fn is_entered(&self) -> bool {
        self.phase == TransitionPhase::Visible
    }

    fn set_phase(&mut self, next: TransitionPhase) -> Update {
        if next == self.phase {
            return Update::empty();
        }
        trace!("tooltip transition {:?} -> {:?}", self.phase, next);
        let update = match next {
            // Mounting and unmounting change the overlay tree.
            TransitionPhase::Initializing | TransitionPhase::Gone => {
                Update::LAYOUT | Update::DRAW
            }
            TransitionPhase::Visible | TransitionPhase::Exiting => Update::DRAW,
        };
        self.phase = next;
        update
    }
}
