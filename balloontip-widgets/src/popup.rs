// SPDX-License-Identifier: MIT OR Apache-2.0

//! Floating tooltip rendered as an overlay near an anchor.

use balloontip_core::layout::{
    overlay_inset, AnchorEdge, EdgePosition, LayoutDirection, OverlayInset,
    TooltipPositionProvider,
};
use balloontip_core::style::TooltipStyle;
use balloontip_core::transition::{TooltipTransition, TransitionEnd, TransitionPhase};
use balloontip_core::update::Update;
use balloontip_core::vg::kurbo::{Point, Rect, Size};
use balloontip_core::vg::Scene;
use log::debug;
use nalgebra::Vector2;

use crate::shape;

type DismissCallback = Box<dyn FnMut()>;

/// A tooltip floating in an overlay layer near an anchor.
///
/// The popup follows a two-phase protocol: on mount it renders once
/// invisibly, the host reports the measured content size through
/// [set_content_size](TooltipPopup::set_content_size), and from the next
/// tick on [position](TooltipPopup::position) yields the window offset and
/// [render](TooltipPopup::render) paints the balloon there.
///
/// Drive it once per frame:
///
/// ```rust,no_run
/// use balloontip_core::layout::{AnchorEdge, LayoutDirection};
/// use balloontip_core::vg::kurbo::{Rect, Size};
/// use balloontip_widgets::popup::TooltipPopup;
///
/// let mut popup = TooltipPopup::new(AnchorEdge::Bottom);
/// popup.request_visible(true);
/// popup.tick();
/// popup.set_content_size(Size::new(120.0, 48.0));
/// popup.tick();
/// let anchor = Rect::new(100.0, 100.0, 164.0, 164.0);
/// let offset = popup.position(anchor, Size::new(800.0, 600.0), LayoutDirection::Ltr);
/// ```
pub struct TooltipPopup {
    edge: AnchorEdge,
    style: TooltipStyle,
    tip_position: EdgePosition,
    anchor_position: EdgePosition,
    margin: f32,
    transition: TooltipTransition,
    content_size: Option<Size>,
    position: Option<Vector2<f64>>,
    on_dismiss: Option<DismissCallback>,
}

impl TooltipPopup {
    /// Create a popup on the given edge with the default style, centered
    /// positions and an 8 unit margin.
    pub fn new(edge: AnchorEdge) -> Self {
        Self {
            edge,
            style: TooltipStyle::default(),
            tip_position: EdgePosition::default(),
            anchor_position: EdgePosition::default(),
            margin: 8.0,
            transition: TooltipTransition::new(),
            content_size: None,
            position: None,
            on_dismiss: None,
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: TooltipStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the tip position relative to the balloon.
    pub fn with_tip_position(mut self, tip_position: EdgePosition) -> Self {
        self.tip_position = tip_position;
        self
    }

    /// Set the position on the anchor's edge the tip points at.
    pub fn with_anchor_position(mut self, anchor_position: EdgePosition) -> Self {
        self.anchor_position = anchor_position;
        self
    }

    /// Set the margin between tip and anchor.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the callback invoked when a click outside dismisses the popup.
    pub fn with_on_dismiss(mut self, on_dismiss: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(on_dismiss));
        self
    }

    /// Request the popup shown or hidden. Takes effect at the next tick.
    pub fn request_visible(&mut self, visible: bool) {
        self.transition.request(visible);
    }

    /// Advance one scheduling tick.
    pub fn tick(&mut self) -> Update {
        let update = self.transition.tick();
        if !self.transition.is_mounted() {
            self.content_size = None;
            self.position = None;
        }
        update
    }

    /// The enter/exit transition finished or was torn down.
    pub fn transition_finished(&mut self, end: TransitionEnd) -> Update {
        let update = self.transition.transition_finished(end);
        self.content_size = None;
        self.position = None;
        update
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    /// Whether the popup window exists.
    pub fn is_mounted(&self) -> bool {
        self.transition.is_mounted()
    }

    /// Measurement callback: record the content size produced by the
    /// invisible first layout pass. Call again whenever the content
    /// remeasures.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = Some(size);
    }

    /// Compute the popup's window offset.
    ///
    /// Returns `None` until a measurement pass has reported the content
    /// size. Pure in its inputs; the stored result only feeds
    /// [bounds](TooltipPopup::bounds) and hit testing.
    pub fn position(
        &mut self,
        anchor_bounds: Rect,
        window_size: Size,
        direction: LayoutDirection,
    ) -> Option<Vector2<f64>> {
        let content_size = self.content_size?;
        let provider = TooltipPositionProvider::new(
            self.edge,
            self.style.clone(),
            self.tip_position,
            self.anchor_position,
            self.margin,
        );
        let offset = provider.calculate_position(anchor_bounds, window_size, direction, content_size);
        debug!("tooltip popup placed at ({}, {})", offset.x, offset.y);
        self.position = Some(offset);
        Some(offset)
    }

    /// Absolute-position styles for hosts placing the overlay in a taffy
    /// tree. Requires a prior [position](TooltipPopup::position) call.
    pub fn inset(&self) -> Option<OverlayInset> {
        self.position.map(overlay_inset)
    }

    /// Current popup bounds, once measured and positioned.
    pub fn bounds(&self) -> Option<Rect> {
        let offset = self.position?;
        let size = self.content_size?;
        Some(Rect::new(
            offset.x,
            offset.y,
            offset.x + size.width,
            offset.y + size.height,
        ))
    }

    /// Handle a click for outside-click dismissal.
    ///
    /// Clicks inside the popup or on the anchor keep it open. Returns
    /// `true` when the click dismissed the popup; the dismiss callback
    /// fires and the exit transition is requested.
    pub fn handle_click(&mut self, point: Point, anchor_bounds: Option<Rect>) -> bool {
        if !self.transition.is_mounted() {
            return false;
        }
        if let Some(bounds) = self.bounds() {
            if bounds.contains(point) {
                return false;
            }
        }
        if let Some(anchor) = anchor_bounds {
            if anchor.contains(point) {
                return false;
            }
        }
        debug!("click outside tooltip popup, dismissing");
        if let Some(on_dismiss) = &mut self.on_dismiss {
            on_dismiss();
        }
        self.transition.request(false);
        true
    }

    /// Paint the balloon and tip at the computed offset.
    ///
    /// Draws nothing while unmounted or during the invisible measurement
    /// pass; the enter/exit alpha is the host transition's business.
    pub fn render(&mut self, scene: &mut Scene, direction: LayoutDirection) {
        if !self.transition.is_mounted() || self.transition.is_measuring() {
            return;
        }
        let (Some(offset), Some(content_size)) = (self.position, self.content_size) else {
            return;
        };
        let frame = Rect::new(
            offset.x,
            offset.y,
            offset.x + content_size.width,
            offset.y + content_size.height,
        );
        let parts = shape::split_frame(self.edge, &self.style, self.tip_position, direction, frame);
        shape::paint_balloon(scene, &self.style, parts.balloon);
        shape::paint_tip(scene, self.edge, &self.style, direction, parts.tip);
    }
}
