// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline tooltip attached to an anchor inside a constraint layout.

use balloontip_core::layout::{
    compose_container, compose_inline, AnchorEdge, ConstraintScope, ContainerParts, EdgePosition,
    ReferenceId, TooltipReferences,
};
use balloontip_core::style::TooltipStyle;

/// Every reference one composed tooltip owns.
#[derive(Debug, Clone, Copy)]
pub struct TooltipParts {
    /// The anchor-to-container chain.
    pub references: TooltipReferences,
    /// The balloon content and tip boxes inside the container.
    pub container: ContainerParts,
}

/// A tooltip attached next to an anchor through constraint links.
///
/// Configure with the builder methods, then call
/// [compose](Tooltip::compose) inside the host's constraint scope. The
/// host puts its own content into the returned content reference and
/// draws the tip shape into the tip reference.
///
/// ```rust,no_run
/// use balloontip_core::layout::{AnchorEdge, EdgePosition, RecordingScope, ConstraintScope};
/// use balloontip_widgets::tooltip::Tooltip;
///
/// let mut scope = RecordingScope::new();
/// let anchor = scope.create_reference();
/// let parts = Tooltip::new(AnchorEdge::Top)
///     .with_anchor_position(EdgePosition::percent(0.25))
///     .compose(&mut scope, anchor);
/// ```
pub struct Tooltip {
    edge: AnchorEdge,
    style: TooltipStyle,
    tip_position: EdgePosition,
    anchor_position: EdgePosition,
    margin: f32,
}

impl Tooltip {
    /// Create a tooltip on the given edge with the default style, centered
    /// positions and an 8 unit margin.
    pub fn new(edge: AnchorEdge) -> Self {
        Self {
            edge,
            style: TooltipStyle::default(),
            tip_position: EdgePosition::default(),
            anchor_position: EdgePosition::default(),
            margin: 8.0,
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

    /// The edge this tooltip attaches to.
    pub fn edge(&self) -> AnchorEdge {
        self.edge
    }

    /// The style in use.
    pub fn style(&self) -> &TooltipStyle {
        &self.style
    }

    /// Emit this tooltip's constraint chain into `scope`.
    ///
    /// Declarations are a side effect on the scope; the returned parts let
    /// the host attach content and tip drawing to the created references.
    pub fn compose(&self, scope: &mut dyn ConstraintScope, anchor: ReferenceId) -> TooltipParts {
        let references = compose_inline(
            scope,
            anchor,
            self.edge,
            &self.style,
            self.tip_position,
            self.anchor_position,
            self.margin,
        );
        let container = compose_container(
            scope,
            references.container,
            self.edge,
            &self.style,
            self.tip_position,
        );
        TooltipParts {
            references,
            container,
        }
    }
}
