//! Cross-module positioning scenarios: the inline constraint chain and the
//! floating position calculator must agree about where the tip touches the
//! anchor.

use balloontip_core::layout::{
    compose_inline, AnchorEdge, ConstraintScope, EdgePosition, LayoutDirection, RecordingScope,
    TooltipPositionProvider,
};
use balloontip_core::style::TooltipStyle;
use balloontip_core::vg::kurbo::{Rect, Size};

const EDGES: [AnchorEdge; 4] = [
    AnchorEdge::Start,
    AnchorEdge::Top,
    AnchorEdge::End,
    AnchorEdge::Bottom,
];

fn anchor_bounds() -> Rect {
    Rect::new(100.0, 100.0, 164.0, 164.0)
}

/// The anchor's boundary coordinate on the side a given edge faces.
fn boundary(edge: AnchorEdge, bounds: Rect) -> f64 {
    match edge {
        AnchorEdge::Start => bounds.x0,
        AnchorEdge::Top => bounds.y0,
        AnchorEdge::End => bounds.x1,
        AnchorEdge::Bottom => bounds.y1,
    }
}

#[test]
fn contact_point_sits_on_the_anchor_boundary_for_every_edge() {
    for edge in EDGES {
        for percent in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for offset in [-10.0_f32, 0.0, 10.0] {
                let mut scope = RecordingScope::new();
                let anchor = scope.create_reference();
                let refs = compose_inline(
                    &mut scope,
                    anchor,
                    edge,
                    &TooltipStyle::default(),
                    EdgePosition::default(),
                    EdgePosition::new(percent, offset),
                    0.0,
                );
                let resolved = scope.resolve(anchor, anchor_bounds(), LayoutDirection::Ltr);
                let contact = resolved[&refs.contact_point];
                let coord = boundary(edge, anchor_bounds());
                // With zero margin the contact point's facing side lies
                // exactly on the anchor's boundary.
                let facing = match edge {
                    AnchorEdge::Start => contact.x1,
                    AnchorEdge::Top => contact.y1,
                    AnchorEdge::End => contact.x0,
                    AnchorEdge::Bottom => contact.y0,
                };
                assert_eq!(
                    facing, coord,
                    "edge {edge:?}, percent {percent}, offset {offset}"
                );
            }
        }
    }
}

#[test]
fn anchor_offset_displaces_the_contact_point_along_the_edge() {
    for edge in EDGES {
        for offset in [-10.0_f32, 10.0] {
            let mut scope = RecordingScope::new();
            let anchor = scope.create_reference();
            let refs = compose_inline(
                &mut scope,
                anchor,
                edge,
                &TooltipStyle::default(),
                EdgePosition::default(),
                EdgePosition::new(0.5, offset),
                0.0,
            );
            let origin = refs.contact_point_origin.expect("origin point");
            let resolved = scope.resolve(anchor, anchor_bounds(), LayoutDirection::Ltr);
            let (origin_coord, contact_coord) = if edge.is_horizontal() {
                (resolved[&origin].x0, resolved[&refs.contact_point].x0)
            } else {
                (resolved[&origin].y0, resolved[&refs.contact_point].y0)
            };
            assert_eq!(
                contact_coord - origin_coord,
                offset as f64,
                "edge {edge:?}, offset {offset}"
            );
        }
    }
}

#[test]
fn inline_and_floating_paths_agree_on_the_contact_point() {
    // Inline: resolve the constraint chain and take the tangent midpoint.
    let mut scope = RecordingScope::new();
    let anchor = scope.create_reference();
    let style = TooltipStyle::default();
    let refs = compose_inline(
        &mut scope,
        anchor,
        AnchorEdge::Top,
        &style,
        EdgePosition::default(),
        EdgePosition::default(),
        8.0,
    );
    let resolved = scope.resolve(anchor, anchor_bounds(), LayoutDirection::Ltr);
    let tangent = resolved[&refs.tangent];
    let inline_contact_x = (tangent.x0 + tangent.x1) / 2.0;

    // Floating: recover the tangent midpoint from the computed offset.
    let provider = TooltipPositionProvider::new(
        AnchorEdge::Top,
        style.clone(),
        EdgePosition::default(),
        EdgePosition::default(),
        8.0,
    );
    let content = Size::new(120.0, 48.0);
    let offset = provider.calculate_position(
        anchor_bounds(),
        Size::new(800.0, 600.0),
        LayoutDirection::Ltr,
        content,
    );
    let span = AnchorEdge::Top.tangent_span(&style, EdgePosition::default()) as f64;
    let tip_margin = (content.width - span) * 0.5;
    let floating_contact_x = offset.x + tip_margin + span / 2.0;

    assert_eq!(inline_contact_x, 132.0);
    assert_eq!(floating_contact_x, 132.0);
}

#[test]
fn popup_round_trip_matches_the_worked_example() {
    let provider = TooltipPositionProvider::new(
        AnchorEdge::Top,
        TooltipStyle::default(),
        EdgePosition::default(),
        EdgePosition::default(),
        8.0,
    );
    let offset = provider.calculate_position(
        anchor_bounds(),
        Size::new(800.0, 600.0),
        LayoutDirection::Ltr,
        Size::new(120.0, 48.0),
    );
    assert_eq!(offset.y, 44.0);
    assert_eq!(offset.x + 120.0 / 2.0, 132.0);
}
