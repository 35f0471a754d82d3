// SPDX-License-Identifier: LGPL-3.0-only

use nalgebra::Vector2;
use taffy::{LengthPercentageAuto, Position, Rect};

/// Absolute-position styles pinning an overlay at a computed offset.
///
/// For hosts that place overlay layers inside a taffy tree: apply the
/// `position` and `inset` to the overlay node's style and the solver puts
/// it at the offset the popup calculator produced.
pub struct OverlayInset {
    /// The position type (always Absolute for overlays).
    pub position: Position,
    /// The inset values pinning the overlay to its parent's top-left.
    pub inset: Rect<LengthPercentageAuto>,
}

/// Convert a computed popup offset into absolute-position styles.
pub fn overlay_inset(offset: Vector2<f64>) -> OverlayInset {
    let auto = LengthPercentageAuto::auto();
    OverlayInset {
        position: Position::Absolute,
        inset: Rect {
            left: LengthPercentageAuto::length(offset.x as f32),
            top: LengthPercentageAuto::length(offset.y as f32),
            right: auto,
            bottom: auto,
        },
    }
}
