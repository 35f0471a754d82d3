// SPDX-License-Identifier: LGPL-3.0-only

//! Layout interaction types for tooltip positioning.
//!
//! The inline path ([inline]) emits directional link declarations into a
//! caller-supplied [ConstraintScope]; the floating path ([popup]) computes
//! an absolute window offset from the anchor's screen bounds and the
//! tooltip's measured content size. Both share the edge-specific geometry
//! on [AnchorEdge].

/// Layout direction and RTL mirroring helpers.
pub mod direction;
/// The four anchor edges and their geometry operations.
pub mod edge;
/// Inline constraint composition.
pub mod inline;
/// Taffy absolute-inset conversion for computed offsets.
pub mod inset;
/// Absolute positioning for floating tooltips.
pub mod popup;
/// Fractional positions along an edge.
pub mod position;
/// Constraint declaration vocabulary and recording scope.
pub mod scope;

pub use direction::LayoutDirection;
pub use edge::AnchorEdge;
pub use inline::{compose_container, compose_inline, ContainerParts, TooltipReferences};
pub use inset::{overlay_inset, OverlayInset};
pub use popup::TooltipPositionProvider;
pub use position::EdgePosition;
pub use scope::{ConstraintScope, RecordingScope, ReferenceId, Side};

/// Direction-relative padding inside a layout reference.
///
/// `start`/`end` resolve against the host's [LayoutDirection]; `top` and
/// `bottom` are physical.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Padding on the leading side (left in LTR, right in RTL).
    pub start: f32,
    /// Padding on the top side.
    pub top: f32,
    /// Padding on the trailing side (right in LTR, left in RTL).
    pub end: f32,
    /// Padding on the bottom side.
    pub bottom: f32,
}

impl Padding {
    /// Padding along the horizontal axis only.
    pub fn horizontal(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Padding along the vertical axis only.
    pub fn vertical(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom,
            ..Self::default()
        }
    }
}
