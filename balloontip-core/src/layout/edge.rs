// SPDX-License-Identifier: LGPL-3.0-only

use vello::kurbo::Rect;

use crate::layout::position::EdgePosition;
use crate::layout::scope::{ConstraintScope, ReferenceId, Side};
use crate::layout::LayoutDirection;
use crate::style::TooltipStyle;

/// The side of an anchor a tooltip is attached to.
///
/// Start and End are *vertical* edges: the tip points horizontally and
/// positions along the edge run down the anchor's vertical span. Top and
/// Bottom are *horizontal* edges with the transposed behavior. Start/End
/// are direction-relative and swap physical sides under RTL.
///
/// Every operation matches exhaustively over the four variants, so adding
/// a variant without extending the geometry is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorEdge {
    /// The leading edge (left in LTR, right in RTL).
    Start,
    /// The top edge.
    Top,
    /// The trailing edge (right in LTR, left in RTL).
    End,
    /// The bottom edge.
    Bottom,
}

impl AnchorEdge {
    /// Whether positioning runs along the anchor's horizontal span.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, AnchorEdge::Top | AnchorEdge::Bottom)
    }

    /// Whether positioning runs along the anchor's vertical span.
    pub fn is_vertical(&self) -> bool {
        !self.is_horizontal()
    }

    /// Pick the width of a box whose long axis runs along this edge.
    ///
    /// For vertical edges the tip's long axis is vertical, so the smaller
    /// of the two dimensions becomes the width; horizontal edges take the
    /// larger.
    pub fn select_width(&self, width: f32, height: f32) -> f32 {
        match self {
            AnchorEdge::Start | AnchorEdge::End => width.min(height),
            AnchorEdge::Top | AnchorEdge::Bottom => width.max(height),
        }
    }

    /// The complementary choice to [select_width](AnchorEdge::select_width).
    pub fn select_height(&self, width: f32, height: f32) -> f32 {
        match self {
            AnchorEdge::Start | AnchorEdge::End => width.max(height),
            AnchorEdge::Top | AnchorEdge::Bottom => width.min(height),
        }
    }

    /// Minimum balloon size along the edge-parallel axis.
    ///
    /// The tip must fit between the two rounded corners, so the balloon
    /// can never shrink below `corner_radius * 2 + max(tip_width, tip_height)`.
    pub fn min_cross_size(&self, style: &TooltipStyle) -> f32 {
        style.corner_radius * 2.0 + style.tip_width.max(style.tip_height)
    }

    /// Extent of the tangent span the tip can traverse.
    ///
    /// Grows past [min_cross_size](AnchorEdge::min_cross_size) when the
    /// tip position carries an offset, since the tip must clear the
    /// rounded corners on both sides of its shifted position.
    pub fn tangent_span(&self, style: &TooltipStyle, tip_position: EdgePosition) -> f32 {
        style.corner_radius * 2.0
            + tip_position.offset.abs() * 2.0
            + style.tip_width.max(style.tip_height)
    }

    /// Coordinate just outside the anchor on this edge, `margin` away.
    ///
    /// For Start/End this is an x-coordinate in LTR terms (Start resolves
    /// to the left side); use [contact_coord](AnchorEdge::contact_coord)
    /// where direction matters.
    pub fn outside_coord(&self, anchor_bounds: Rect, margin: f64) -> f64 {
        match self {
            AnchorEdge::Start => anchor_bounds.x0 - margin,
            AnchorEdge::Top => anchor_bounds.y0 - margin,
            AnchorEdge::End => anchor_bounds.x1 + margin,
            AnchorEdge::Bottom => anchor_bounds.y1 + margin,
        }
    }

    /// Coordinate at fraction `bias` along the anchor's edge-parallel span.
    pub fn align_coord(&self, anchor_bounds: Rect, bias: f64) -> f64 {
        if self.is_horizontal() {
            anchor_bounds.x0 + anchor_bounds.width() * bias
        } else {
            anchor_bounds.y0 + anchor_bounds.height() * bias
        }
    }

    /// Edge-parallel coordinate of the point the tip visually touches.
    ///
    /// Horizontal edges mirror under RTL; vertical edges run down the
    /// y-axis and are direction-invariant.
    pub fn contact_coord(
        &self,
        anchor_bounds: Rect,
        position: EdgePosition,
        direction: LayoutDirection,
    ) -> f64 {
        if self.is_horizontal() {
            if direction.is_rtl() {
                anchor_bounds.x1
                    - anchor_bounds.width() * position.percent as f64
                    - position.offset as f64
            } else {
                anchor_bounds.x0
                    + anchor_bounds.width() * position.percent as f64
                    + position.offset as f64
            }
        } else {
            anchor_bounds.y0
                + anchor_bounds.height() * position.percent as f64
                + position.offset as f64
        }
    }

    /// Link `reference` so it sits just outside `target` on this edge.
    pub fn outside(
        &self,
        scope: &mut dyn ConstraintScope,
        reference: ReferenceId,
        target: ReferenceId,
        margin: f32,
    ) {
        match self {
            AnchorEdge::Start => scope.link(reference, Side::End, target, Side::Start, margin),
            AnchorEdge::Top => scope.link(reference, Side::Bottom, target, Side::Top, margin),
            AnchorEdge::End => scope.link(reference, Side::Start, target, Side::End, margin),
            AnchorEdge::Bottom => scope.link(reference, Side::Top, target, Side::Bottom, margin),
        }
    }

    /// Link `reference` at fraction `bias` along `target`'s edge-parallel span.
    pub fn align(
        &self,
        scope: &mut dyn ConstraintScope,
        reference: ReferenceId,
        target: ReferenceId,
        bias: f32,
    ) {
        if self.is_vertical() {
            scope.link_between(reference, target, Side::Top, Side::Bottom, bias);
        } else {
            scope.link_between(reference, target, Side::Start, Side::End, bias);
        }
    }

    /// Link `reference` right after `target` along this edge, `margin` apart.
    pub fn next_to(
        &self,
        scope: &mut dyn ConstraintScope,
        reference: ReferenceId,
        target: ReferenceId,
        margin: f32,
    ) {
        if self.is_vertical() {
            scope.link(reference, Side::Top, target, Side::Bottom, margin);
        } else {
            scope.link(reference, Side::Start, target, Side::End, margin);
        }
    }

    /// Link `reference` right before `target` along this edge, `margin` apart.
    pub fn before_to(
        &self,
        scope: &mut dyn ConstraintScope,
        reference: ReferenceId,
        target: ReferenceId,
        margin: f32,
    ) {
        if self.is_vertical() {
            scope.link(reference, Side::Bottom, target, Side::Top, margin);
        } else {
            scope.link(reference, Side::End, target, Side::Start, margin);
        }
    }
}
