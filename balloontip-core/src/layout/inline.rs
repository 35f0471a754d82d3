// SPDX-License-Identifier: LGPL-3.0-only

//! Inline constraint composition for tooltips.
//!
//! Positions a tooltip inside the same constraint layout as its anchor by
//! chaining three references: a *contact point* on the anchor's boundary,
//! a *tangent* span centered on it that reserves room for the tip to
//! traverse, and the tooltip *container* attached to the tangent. A second
//! pass arranges the balloon content and tip boxes inside the container.

use crate::layout::edge::AnchorEdge;
use crate::layout::position::EdgePosition;
use crate::layout::scope::{ConstraintScope, ReferenceId, Side};
use crate::layout::Padding;
use crate::style::TooltipStyle;

/// References created by [compose_inline].
#[derive(Debug, Clone, Copy)]
pub struct TooltipReferences {
    /// Invisible along-edge origin, present when `anchor_position.offset`
    /// is nonzero.
    pub contact_point_origin: Option<ReferenceId>,
    /// The point on the anchor's boundary the tip points at.
    pub contact_point: ReferenceId,
    /// The span the tip can traverse, centered on the contact point.
    pub tangent: ReferenceId,
    /// The tooltip container holding balloon and tip.
    pub container: ReferenceId,
}

/// References created by [compose_container].
#[derive(Debug, Clone, Copy)]
pub struct ContainerParts {
    /// The balloon content box.
    pub content: ReferenceId,
    /// The tip box, between the balloon and the anchor.
    pub tip: ReferenceId,
}

/// Emit the constraint chain attaching a tooltip container to `anchor`.
///
/// The contact point sits at `anchor_position.percent` along the chosen
/// edge, pushed outside the anchor by `margin` and nudged along the edge
/// by `anchor_position.offset`. The outward and along-edge displacements
/// cannot both ride on one link, so a nonzero offset first places an
/// invisible origin at the bias position and then chains the contact
/// point off it.
///
/// Declarations are emitted into `scope` as a side effect; the returned
/// ids let the host attach its own content to the container. `percent`
/// values outside `[0, 1]` are the caller's contract violation and are
/// not clamped.
pub fn compose_inline(
    scope: &mut dyn ConstraintScope,
    anchor: ReferenceId,
    edge: AnchorEdge,
    style: &TooltipStyle,
    tip_position: EdgePosition,
    anchor_position: EdgePosition,
    margin: f32,
) -> TooltipReferences {
    let offset = anchor_position.offset;
    let contact_point_origin;
    let contact_point;
    if offset == 0.0 {
        contact_point_origin = None;
        contact_point = scope.create_reference();
        scope.set_size(
            contact_point,
            edge.select_width(1.0, 0.0),
            edge.select_height(1.0, 0.0),
        );
        edge.outside(scope, contact_point, anchor, margin);
        edge.align(scope, contact_point, anchor, anchor_position.percent);
    } else {
        let origin = scope.create_reference();
        scope.set_size(origin, 0.0, 0.0);
        edge.align(scope, origin, anchor, anchor_position.percent);

        contact_point = scope.create_reference();
        scope.set_size(contact_point, 0.0, 0.0);
        edge.outside(scope, contact_point, anchor, margin);
        if offset > 0.0 {
            edge.next_to(scope, contact_point, origin, offset);
        } else {
            edge.before_to(scope, contact_point, origin, -offset);
        }
        contact_point_origin = Some(origin);
    }

    let tangent = scope.create_reference();
    let span = edge.tangent_span(style, tip_position);
    scope.set_size(
        tangent,
        edge.select_width(span, 0.0),
        edge.select_height(span, 0.0),
    );
    edge.outside(scope, tangent, contact_point, 0.0);
    edge.align(scope, tangent, contact_point, 0.5);

    let container = scope.create_reference();
    edge.outside(scope, container, tangent, 0.0);
    edge.align(scope, container, tangent, tip_position.percent);

    TooltipReferences {
        contact_point_origin,
        contact_point,
        tangent,
        container,
    }
}

/// Arrange the balloon content box and tip box inside `container`.
///
/// The content box fills the container on the far side of the anchor,
/// padded along the edge by twice the tip offset so the balloon grows
/// under a shifted tip instead of letting the tip slide past its corner.
/// The tip box sits between balloon and anchor at `tip_position.percent`,
/// padded by `corner_radius + |offset|` on both edge-parallel sides so
/// the tip polygon never clips the rounded corner.
pub fn compose_container(
    scope: &mut dyn ConstraintScope,
    container: ReferenceId,
    edge: AnchorEdge,
    style: &TooltipStyle,
    tip_position: EdgePosition,
) -> ContainerParts {
    let offset = tip_position.offset;
    let lead = if offset < 0.0 { -offset * 2.0 } else { 0.0 };
    let trail = if offset > 0.0 { offset * 2.0 } else { 0.0 };

    let content = scope.create_reference();
    match edge {
        AnchorEdge::Start => {
            scope.link(content, Side::Start, container, Side::Start, 0.0);
            scope.link(content, Side::Top, container, Side::Top, 0.0);
            scope.link(content, Side::Bottom, container, Side::Bottom, 0.0);
        }
        AnchorEdge::Top => {
            scope.link(content, Side::Start, container, Side::Start, 0.0);
            scope.link(content, Side::Top, container, Side::Top, 0.0);
            scope.link(content, Side::End, container, Side::End, 0.0);
        }
        AnchorEdge::End => {
            scope.link(content, Side::Top, container, Side::Top, 0.0);
            scope.link(content, Side::End, container, Side::End, 0.0);
            scope.link(content, Side::Bottom, container, Side::Bottom, 0.0);
        }
        AnchorEdge::Bottom => {
            scope.link(content, Side::Start, container, Side::Start, 0.0);
            scope.link(content, Side::End, container, Side::End, 0.0);
            scope.link(content, Side::Bottom, container, Side::Bottom, 0.0);
        }
    }
    let content_padding = if edge.is_horizontal() {
        Padding::horizontal(lead, trail)
    } else {
        Padding::vertical(lead, trail)
    };
    scope.set_padding(content, content_padding);

    let tip = scope.create_reference();
    scope.set_size(
        tip,
        edge.select_width(style.tip_width, style.tip_height),
        edge.select_height(style.tip_width, style.tip_height),
    );
    edge.align(scope, tip, content, tip_position.percent);
    match edge {
        AnchorEdge::Start => scope.link(tip, Side::Start, content, Side::End, 0.0),
        AnchorEdge::Top => scope.link(tip, Side::Top, content, Side::Bottom, 0.0),
        AnchorEdge::End => scope.link(tip, Side::End, content, Side::Start, 0.0),
        AnchorEdge::Bottom => scope.link(tip, Side::Bottom, content, Side::Top, 0.0),
    }
    let tip_padding = style.corner_radius + offset.abs();
    let tip_insets = if edge.is_horizontal() {
        Padding::horizontal(tip_padding, tip_padding)
    } else {
        Padding::vertical(tip_padding, tip_padding)
    };
    scope.set_padding(tip, tip_insets);

    ContainerParts { content, tip }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::scope::RecordingScope;
    use crate::layout::LayoutDirection;
    use vello::kurbo::Rect;

    fn anchor_bounds() -> Rect {
        Rect::new(100.0, 100.0, 164.0, 164.0)
    }

    fn compose(
        edge: AnchorEdge,
        anchor_position: EdgePosition,
        margin: f32,
    ) -> (RecordingScope, ReferenceId, TooltipReferences) {
        let mut scope = RecordingScope::new();
        let anchor = scope.create_reference();
        let style = TooltipStyle::default();
        let refs = compose_inline(
            &mut scope,
            anchor,
            edge,
            &style,
            EdgePosition::default(),
            anchor_position,
            margin,
        );
        (scope, anchor, refs)
    }

    #[test]
    fn zero_offset_skips_the_origin_point() {
        let (_, _, refs) = compose(AnchorEdge::Top, EdgePosition::percent(0.5), 8.0);
        assert!(refs.contact_point_origin.is_none());
    }

    #[test]
    fn contact_point_touches_the_anchor_boundary() {
        for percent in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let (scope, anchor, refs) =
                compose(AnchorEdge::Top, EdgePosition::percent(percent), 0.0);
            let resolved = scope.resolve(anchor, anchor_bounds(), LayoutDirection::Ltr);
            let contact = resolved[&refs.contact_point];
            assert_eq!(contact.y1, anchor_bounds().y0);
        }
    }

    #[test]
    fn nonzero_offset_chains_off_an_origin_point() {
        for offset in [-10.0_f32, 10.0] {
            let (scope, anchor, refs) =
                compose(AnchorEdge::Top, EdgePosition::new(0.5, offset), 0.0);
            let origin = refs.contact_point_origin.expect("origin point");
            let resolved = scope.resolve(anchor, anchor_bounds(), LayoutDirection::Ltr);
            let origin_x = resolved[&origin].x0;
            let contact_x = resolved[&refs.contact_point].x0;
            assert_eq!(contact_x - origin_x, offset as f64);
            // Still exactly on the boundary on the outward axis.
            assert_eq!(resolved[&refs.contact_point].y1, anchor_bounds().y0);
        }
    }

    #[test]
    fn tangent_is_centered_on_the_contact_point() {
        for edge in [
            AnchorEdge::Start,
            AnchorEdge::Top,
            AnchorEdge::End,
            AnchorEdge::Bottom,
        ] {
            let (scope, anchor, refs) = compose(edge, EdgePosition::percent(0.25), 8.0);
            let resolved = scope.resolve(anchor, anchor_bounds(), LayoutDirection::Ltr);
            let contact = resolved[&refs.contact_point];
            let tangent = resolved[&refs.tangent];
            if edge.is_horizontal() {
                let contact_center = (contact.x0 + contact.x1) / 2.0;
                let tangent_center = (tangent.x0 + tangent.x1) / 2.0;
                assert!((contact_center - tangent_center).abs() < 1e-9);
            } else {
                let contact_center = (contact.y0 + contact.y1) / 2.0;
                let tangent_center = (tangent.y0 + tangent.y1) / 2.0;
                assert!((contact_center - tangent_center).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn container_padding_keeps_the_tip_clear_of_corners() {
        let mut scope = RecordingScope::new();
        let anchor = scope.create_reference();
        let style = TooltipStyle::default();
        let tip_position = EdgePosition::new(0.5, -6.0);
        let refs = compose_inline(
            &mut scope,
            anchor,
            AnchorEdge::Top,
            &style,
            tip_position,
            EdgePosition::default(),
            8.0,
        );
        let parts = compose_container(&mut scope, refs.container, AnchorEdge::Top, &style, tip_position);

        let content = scope.constraints(parts.content).unwrap();
        assert_eq!(content.padding, Some(Padding::horizontal(12.0, 0.0)));

        let tip = scope.constraints(parts.tip).unwrap();
        let expected = style.corner_radius + 6.0;
        assert_eq!(tip.padding, Some(Padding::horizontal(expected, expected)));
        assert_eq!(
            tip.size,
            Some((
                style.tip_width.max(style.tip_height),
                style.tip_width.min(style.tip_height)
            ))
        );
    }
}
