// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scene painting for tooltip balloons and tips.

use balloontip_core::layout::{AnchorEdge, EdgePosition, LayoutDirection};
use balloontip_core::style::TooltipStyle;
use balloontip_core::tip::{tip_border_polyline, tip_polygon};
use balloontip_core::vg::kurbo::{
    Affine, BezPath, Rect, RoundedRect, RoundedRectRadii, Shape, Size, Stroke,
};
use balloontip_core::vg::peniko::Fill;
use balloontip_core::vg::Scene;

/// Balloon and tip rectangles inside a measured popup frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupFrame {
    /// The balloon rectangle.
    pub balloon: Rect,
    /// The tip box rectangle, flush against the balloon on the anchor side.
    pub tip: Rect,
}

/// Split a measured popup frame into balloon and tip rectangles.
///
/// Mirrors the inline container arrangement: the tip strip is carved off
/// the anchor side, the balloon shrinks along the edge by twice the tip
/// offset on the side the offset leans away from, and the tip lands at
/// `tip_position.percent` across the frame, inset by
/// `corner_radius + |offset|` so it clears the rounded corners.
pub fn split_frame(
    edge: AnchorEdge,
    style: &TooltipStyle,
    tip_position: EdgePosition,
    direction: LayoutDirection,
    frame: Rect,
) -> PopupFrame {
    let tip_w = edge.select_width(style.tip_width, style.tip_height) as f64;
    let tip_h = edge.select_height(style.tip_width, style.tip_height) as f64;
    let offset = tip_position.offset as f64;
    let lead = if offset < 0.0 { -offset * 2.0 } else { 0.0 };
    let trail = if offset > 0.0 { offset * 2.0 } else { 0.0 };
    let tip_pad = style.corner_radius as f64 + offset.abs();

    if edge.is_horizontal() {
        let (pad_left, pad_right) = if direction.is_rtl() {
            (trail, lead)
        } else {
            (lead, trail)
        };
        let bias = direction.resolve_bias(tip_position.percent) as f64;
        let band = tip_w + tip_pad * 2.0;
        let tip_x0 = frame.x0 + (frame.width() - band) * bias + tip_pad;
        match edge {
            AnchorEdge::Top => PopupFrame {
                balloon: Rect::new(
                    frame.x0 + pad_left,
                    frame.y0,
                    frame.x1 - pad_right,
                    frame.y1 - tip_h,
                ),
                tip: Rect::new(tip_x0, frame.y1 - tip_h, tip_x0 + tip_w, frame.y1),
            },
            AnchorEdge::Bottom => PopupFrame {
                balloon: Rect::new(
                    frame.x0 + pad_left,
                    frame.y0 + tip_h,
                    frame.x1 - pad_right,
                    frame.y1,
                ),
                tip: Rect::new(tip_x0, frame.y0, tip_x0 + tip_w, frame.y0 + tip_h),
            },
            AnchorEdge::Start | AnchorEdge::End => unreachable!("horizontal edge"),
        }
    } else {
        let band = tip_h + tip_pad * 2.0;
        let tip_y0 = frame.y0 + (frame.height() - band) * tip_position.percent as f64 + tip_pad;
        let tip_on_left = matches!(edge, AnchorEdge::End) != direction.is_rtl();
        if tip_on_left {
            PopupFrame {
                balloon: Rect::new(
                    frame.x0 + tip_w,
                    frame.y0 + lead,
                    frame.x1,
                    frame.y1 - trail,
                ),
                tip: Rect::new(frame.x0, tip_y0, frame.x0 + tip_w, tip_y0 + tip_h),
            }
        } else {
            PopupFrame {
                balloon: Rect::new(
                    frame.x0,
                    frame.y0 + lead,
                    frame.x1 - tip_w,
                    frame.y1 - trail,
                ),
                tip: Rect::new(frame.x1 - tip_w, tip_y0, frame.x1, tip_y0 + tip_h),
            }
        }
    }
}

/// Paint the balloon as a rounded rectangle, stroking the border when set.
pub fn paint_balloon(scene: &mut Scene, style: &TooltipStyle, bounds: Rect) {
    let shape = RoundedRect::from_rect(
        bounds,
        RoundedRectRadii::from_single_radius(style.corner_radius as f64),
    )
    .to_path(0.1);
    scene.fill(Fill::NonZero, Affine::IDENTITY, style.color, None, &shape);
    if style.has_border() {
        scene.stroke(
            &Stroke::new(style.border.width as f64),
            Affine::IDENTITY,
            style.border.color,
            None,
            &shape,
        );
    }
}

/// Paint the tip polygon into its box, stroking the free edges when a
/// border is set.
pub fn paint_tip(
    scene: &mut Scene,
    edge: AnchorEdge,
    style: &TooltipStyle,
    direction: LayoutDirection,
    bounds: Rect,
) {
    let size = Size::new(bounds.width(), bounds.height());
    let origin = bounds.origin().to_vec2();

    let points = tip_polygon(edge, size, direction);
    let mut path = BezPath::new();
    path.move_to(points[0] + origin);
    for point in &points[1..] {
        path.line_to(*point + origin);
    }
    path.close_path();
    scene.fill(Fill::NonZero, Affine::IDENTITY, style.color, None, &path);

    if style.has_border() {
        // The base edge sits against the balloon; stroke only the two
        // sides meeting at the apex.
        let outline = tip_border_polyline(edge, size, direction);
        let mut border = BezPath::new();
        border.move_to(outline[0] + origin);
        for point in &outline[1..] {
            border.line_to(*point + origin);
        }
        scene.stroke(
            &Stroke::new(style.border.width as f64),
            Affine::IDENTITY,
            style.border.color,
            None,
            &border,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_edge_frame_carves_the_tip_off_the_bottom() {
        let style = TooltipStyle::default();
        let frame = Rect::new(72.0, 44.0, 192.0, 92.0);
        let parts = split_frame(
            AnchorEdge::Top,
            &style,
            EdgePosition::default(),
            LayoutDirection::Ltr,
            frame,
        );
        assert_eq!(parts.balloon, Rect::new(72.0, 44.0, 192.0, 84.0));
        // Tip band is 24 + 8*2 wide; at percent 0.5 the tip is centered
        // over the anchor's midpoint.
        assert_eq!(parts.tip, Rect::new(120.0, 84.0, 144.0, 92.0));
        let tip_center = (parts.tip.x0 + parts.tip.x1) / 2.0;
        assert_eq!(tip_center, 132.0);
    }

    #[test]
    fn vertical_edges_put_the_tip_beside_the_balloon() {
        let style = TooltipStyle::default();
        let frame = Rect::new(0.0, 0.0, 98.0, 40.0);
        let start = split_frame(
            AnchorEdge::Start,
            &style,
            EdgePosition::default(),
            LayoutDirection::Ltr,
            frame,
        );
        // Start edge in LTR: balloon left, tip strip on the right.
        assert_eq!(start.balloon.x1, 90.0);
        assert_eq!(start.tip.x0, 90.0);

        let end = split_frame(
            AnchorEdge::End,
            &style,
            EdgePosition::default(),
            LayoutDirection::Ltr,
            frame,
        );
        assert_eq!(end.balloon.x0, 8.0);
        assert_eq!(end.tip.x1, 8.0);

        // Under RTL the sides swap.
        let start_rtl = split_frame(
            AnchorEdge::Start,
            &style,
            EdgePosition::default(),
            LayoutDirection::Rtl,
            frame,
        );
        assert_eq!(start_rtl.tip.x0, 0.0);
    }

    #[test]
    fn tip_offset_shifts_the_balloon_padding() {
        let style = TooltipStyle::default();
        let frame = Rect::new(0.0, 0.0, 120.0, 48.0);
        let parts = split_frame(
            AnchorEdge::Top,
            &style,
            EdgePosition::new(0.5, 6.0),
            LayoutDirection::Ltr,
            frame,
        );
        // Positive offset leans toward the trailing side; the balloon
        // gives up twice the offset there.
        assert_eq!(parts.balloon.x0, 0.0);
        assert_eq!(parts.balloon.x1, 108.0);
    }
}
