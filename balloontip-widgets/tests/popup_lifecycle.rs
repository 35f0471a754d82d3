//! Full lifecycle of a floating tooltip: mount invisibly, measure,
//! position, dismiss, unmount.

use balloontip_core::layout::{AnchorEdge, EdgePosition, LayoutDirection};
use balloontip_core::transition::{TransitionEnd, TransitionPhase};
use balloontip_core::vg::kurbo::{Point, Rect, Size};
use balloontip_widgets::popup::TooltipPopup;

fn anchor() -> Rect {
    Rect::new(100.0, 100.0, 164.0, 164.0)
}

fn window() -> Size {
    Size::new(800.0, 600.0)
}

#[test]
fn measure_then_position_then_dismiss() {
    let mut popup = TooltipPopup::new(AnchorEdge::Top)
        .with_anchor_position(EdgePosition::percent(0.5))
        .with_margin(8.0);

    // Mount: one invisible pass to measure.
    popup.request_visible(true);
    popup.tick();
    assert_eq!(popup.phase(), TransitionPhase::Initializing);
    assert!(popup.position(anchor(), window(), LayoutDirection::Ltr).is_none());

    // Measurement arrives; the next tick begins the enter transition.
    popup.set_content_size(Size::new(120.0, 48.0));
    popup.tick();
    assert_eq!(popup.phase(), TransitionPhase::Visible);
    let offset = popup
        .position(anchor(), window(), LayoutDirection::Ltr)
        .unwrap();
    assert_eq!((offset.x, offset.y), (72.0, 44.0));
    assert_eq!(popup.bounds(), Some(Rect::new(72.0, 44.0, 192.0, 92.0)));

    // An outside click plays the exit transition, then the popup unmounts.
    assert!(popup.handle_click(Point::new(10.0, 10.0), Some(anchor())));
    popup.tick();
    assert_eq!(popup.phase(), TransitionPhase::Exiting);
    popup.transition_finished(TransitionEnd::Completed);
    assert_eq!(popup.phase(), TransitionPhase::Gone);
    assert!(popup.bounds().is_none());
}

#[test]
fn toggling_mid_measurement_keeps_the_popup_mounted() {
    let mut popup = TooltipPopup::new(AnchorEdge::End);
    popup.request_visible(true);
    popup.tick();

    popup.request_visible(false);
    popup.request_visible(true);
    popup.tick();
    assert_eq!(popup.phase(), TransitionPhase::Visible);
}
