//! Tip outline geometry.
//!
//! The tip is a triangle in its own box's local coordinates, pointing away
//! from the balloon toward the anchor. Start/End tips point horizontally
//! and mirror across the vertical midline under RTL; Top/Bottom tips point
//! vertically and ignore direction.

use vello::kurbo::{Point, Size};

use crate::layout::{AnchorEdge, LayoutDirection};

/// Vertices of the triangular tip outline for `edge`.
///
/// Returned in outline order; the first and last vertex lie on the base
/// edge shared with the balloon, the middle vertex is the apex.
pub fn tip_polygon(edge: AnchorEdge, size: Size, direction: LayoutDirection) -> [Point; 3] {
    let Size { width, height } = size;
    match edge {
        AnchorEdge::Start => {
            if direction.is_rtl() {
                [
                    Point::new(width, 0.0),
                    Point::new(0.0, height / 2.0),
                    Point::new(width, height),
                ]
            } else {
                [
                    Point::new(0.0, 0.0),
                    Point::new(width, height / 2.0),
                    Point::new(0.0, height),
                ]
            }
        }
        AnchorEdge::End => {
            if direction.is_rtl() {
                [
                    Point::new(0.0, 0.0),
                    Point::new(width, height / 2.0),
                    Point::new(0.0, height),
                ]
            } else {
                [
                    Point::new(width, 0.0),
                    Point::new(0.0, height / 2.0),
                    Point::new(width, height),
                ]
            }
        }
        AnchorEdge::Top => [
            Point::new(0.0, 0.0),
            Point::new(width / 2.0, height),
            Point::new(width, 0.0),
        ],
        AnchorEdge::Bottom => [
            Point::new(0.0, height),
            Point::new(width / 2.0, 0.0),
            Point::new(width, height),
        ],
    }
}

/// Open outline of the tip border, excluding the base edge.
///
/// The base edge sits flush against the balloon; stroking it would draw a
/// line across the seam, so the border path covers only the two sides
/// meeting at the apex.
pub fn tip_border_polyline(
    edge: AnchorEdge,
    size: Size,
    direction: LayoutDirection,
) -> [Point; 3] {
    tip_polygon(edge, size, direction)
}
