// SPDX-License-Identifier: LGPL-3.0-only

//! Absolute positioning for floating tooltips.
//!
//! A floating tooltip's pixel position depends on its measured content
//! size, which is only known after a first layout pass. Hosts therefore
//! follow a two-phase protocol: measure the tooltip content, then ask
//! [TooltipPositionProvider::calculate_position] for the window offset.

use nalgebra::Vector2;
use vello::kurbo::{Rect, Size};

use crate::layout::edge::AnchorEdge;
use crate::layout::position::EdgePosition;
use crate::layout::LayoutDirection;
use crate::style::TooltipStyle;

/// Computes the window offset of a floating tooltip near an anchor.
///
/// Pure function of its inputs; calling it twice with the same arguments
/// yields the same offset.
#[derive(Debug, Clone)]
pub struct TooltipPositionProvider {
    edge: AnchorEdge,
    style: TooltipStyle,
    tip_position: EdgePosition,
    anchor_position: EdgePosition,
    margin: f32,
}

impl TooltipPositionProvider {
    /// Create a position provider for the given edge and style.
    pub fn new(
        edge: AnchorEdge,
        style: TooltipStyle,
        tip_position: EdgePosition,
        anchor_position: EdgePosition,
        margin: f32,
    ) -> Self {
        Self {
            edge,
            style,
            tip_position,
            anchor_position,
            margin,
        }
    }

    /// Compute the popup offset in window coordinates.
    ///
    /// `content_size` is the measured size of the whole popup content
    /// (balloon plus tip). `window_size` is part of the host's
    /// position-provider contract; clamping the popup into the window is
    /// the overlay host's job, not this calculator's. The result is
    /// rounded to whole pixels.
    pub fn calculate_position(
        &self,
        anchor_bounds: Rect,
        _window_size: Size,
        direction: LayoutDirection,
        content_size: Size,
    ) -> Vector2<f64> {
        let margin = self.margin as f64;
        let span = self.edge.tangent_span(&self.style, self.tip_position) as f64;
        let contact = self
            .edge
            .contact_coord(anchor_bounds, self.anchor_position, direction);
        let tangent_start = contact - span / 2.0;

        let (x, y) = if self.edge.is_horizontal() {
            let fraction = direction.resolve_bias(self.tip_position.percent) as f64;
            let tip_margin = (content_size.width - span) * fraction;
            let x = tangent_start - tip_margin;
            let y = match self.edge {
                AnchorEdge::Top => anchor_bounds.y0 - margin - content_size.height,
                AnchorEdge::Bottom => anchor_bounds.y1 + margin,
                AnchorEdge::Start | AnchorEdge::End => unreachable!("horizontal edge"),
            };
            (x, y)
        } else {
            let fraction = self.tip_position.percent as f64;
            let tip_margin = (content_size.height - span) * fraction;
            let y = tangent_start - tip_margin;
            // Start/End resolve to physical sides against the direction.
            let before = matches!(self.edge, AnchorEdge::Start) != direction.is_rtl();
            let x = if before {
                anchor_bounds.x0 - margin - content_size.width
            } else {
                anchor_bounds.x1 + margin
            };
            (x, y)
        };

        Vector2::new(x.round(), y.round())
    }
}
