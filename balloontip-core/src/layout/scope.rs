// SPDX-License-Identifier: LGPL-3.0-only

//! Constraint declaration vocabulary for inline tooltip layout.
//!
//! The inline composer does not solve constraints; it declares directional
//! links between layout references and leaves solving to the host's
//! constraint layout. [ConstraintScope] is the interface hosts implement;
//! [RecordingScope] is a ready-made implementation that records the
//! declarations in order for hosts that batch them, and can resolve the
//! tooltip's own constraint chain for inspection and tests.

use indexmap::IndexMap;
use vello::kurbo::Rect;

use crate::layout::{LayoutDirection, Padding};

/// Unique identifier for a layout reference inside a constraint scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceId(pub u32);

impl ReferenceId {
    /// Create a new reference ID with the given value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Constraint anchor on one side of a reference.
///
/// Start and End are direction-relative and resolve to physical left or
/// right against the host's [LayoutDirection].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The leading side.
    Start,
    /// The top side.
    Top,
    /// The trailing side.
    End,
    /// The bottom side.
    Bottom,
}

/// A scope accepting directional link declarations between references.
///
/// Implemented by hosts over their constraint layout. All lengths are in
/// layout units; declarations take effect on the host's next solve pass.
pub trait ConstraintScope {
    /// Allocate a new layout reference.
    fn create_reference(&mut self) -> ReferenceId;

    /// Fix the size of a reference.
    fn set_size(&mut self, reference: ReferenceId, width: f32, height: f32);

    /// Set direction-relative padding inside a reference.
    fn set_padding(&mut self, reference: ReferenceId, padding: Padding);

    /// Pin `side` of `reference` to `target_side` of `target`.
    ///
    /// `margin` pushes the reference away from the target's anchor line,
    /// into the reference's own box direction.
    fn link(
        &mut self,
        reference: ReferenceId,
        side: Side,
        target: ReferenceId,
        target_side: Side,
        margin: f32,
    );

    /// Place `reference` between two sides of `target` at fractional `bias`.
    ///
    /// The pair is either (`Start`, `End`) or (`Top`, `Bottom`); the free
    /// space on that axis is distributed `bias : 1 - bias`. Bias is
    /// start-relative and flips under RTL.
    fn link_between(
        &mut self,
        reference: ReferenceId,
        target: ReferenceId,
        first: Side,
        second: Side,
        bias: f32,
    );
}

/// A recorded `link` declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkConstraint {
    /// Side of the declaring reference.
    pub side: Side,
    /// Target reference.
    pub target: ReferenceId,
    /// Side of the target reference.
    pub target_side: Side,
    /// Space between the two linked sides.
    pub margin: f32,
}

/// A recorded `link_between` declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanConstraint {
    /// Target reference.
    pub target: ReferenceId,
    /// First side of the span pair.
    pub first: Side,
    /// Second side of the span pair.
    pub second: Side,
    /// Start-relative fraction of the free space.
    pub bias: f32,
}

/// Recorded constraint state for one reference.
#[derive(Debug, Clone, Default)]
pub struct ReferenceConstraints {
    /// Fixed size, when declared.
    pub size: Option<(f32, f32)>,
    /// Inner padding, when declared.
    pub padding: Option<Padding>,
    /// Side-to-side links, in declaration order.
    pub links: Vec<LinkConstraint>,
    /// Bias placements, in declaration order.
    pub spans: Vec<SpanConstraint>,
}

/// A [ConstraintScope] that records declarations in order.
///
/// Hosts that batch constraint declarations drain the recorded table into
/// their own solver. [resolve](RecordingScope::resolve) additionally
/// resolves the chain the composer emits (each reference links only to
/// already-placed references) against concrete anchor bounds; it is not a
/// general constraint solver.
#[derive(Debug, Default)]
pub struct RecordingScope {
    references: IndexMap<ReferenceId, ReferenceConstraints>,
    next_id: u32,
}

enum PhysicalSide {
    Left,
    Top,
    Right,
    Bottom,
}

fn physical(side: Side, direction: LayoutDirection) -> PhysicalSide {
    match (side, direction.is_rtl()) {
        (Side::Start, false) | (Side::End, true) => PhysicalSide::Left,
        (Side::End, false) | (Side::Start, true) => PhysicalSide::Right,
        (Side::Top, _) => PhysicalSide::Top,
        (Side::Bottom, _) => PhysicalSide::Bottom,
    }
}

fn side_coord(rect: Rect, side: PhysicalSide) -> f64 {
    match side {
        PhysicalSide::Left => rect.x0,
        PhysicalSide::Top => rect.y0,
        PhysicalSide::Right => rect.x1,
        PhysicalSide::Bottom => rect.y1,
    }
}

impl RecordingScope {
    /// Create a new recording scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded constraints for a reference.
    pub fn constraints(&self, reference: ReferenceId) -> Option<&ReferenceConstraints> {
        self.references.get(&reference)
    }

    /// Iterate all references with their constraints, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ReferenceId, &ReferenceConstraints)> {
        self.references.iter().map(|(id, c)| (*id, c))
    }

    /// Resolve the recorded chain against concrete anchor bounds.
    ///
    /// `anchor` is placed at `anchor_bounds`; every other reference is
    /// placed in creation order from its recorded size, links and bias
    /// placements. References the composer leaves unsized resolve as
    /// points unless the host fixed a size itself. Axes without any
    /// constraint stay at zero.
    pub fn resolve(
        &self,
        anchor: ReferenceId,
        anchor_bounds: Rect,
        direction: LayoutDirection,
    ) -> IndexMap<ReferenceId, Rect> {
        let mut resolved = IndexMap::new();
        resolved.insert(anchor, anchor_bounds);
        for (&id, constraints) in &self.references {
            if id == anchor {
                continue;
            }
            let (width, height) = constraints.size.unwrap_or((0.0, 0.0));
            let (width, height) = (width as f64, height as f64);
            let mut x0 = 0.0;
            let mut y0 = 0.0;
            for link in &constraints.links {
                let Some(target) = resolved.get(&link.target) else {
                    continue;
                };
                let coord = side_coord(*target, physical(link.target_side, direction));
                let margin = link.margin as f64;
                match physical(link.side, direction) {
                    PhysicalSide::Left => x0 = coord + margin,
                    PhysicalSide::Right => x0 = coord - margin - width,
                    PhysicalSide::Top => y0 = coord + margin,
                    PhysicalSide::Bottom => y0 = coord - margin - height,
                }
            }
            for span in &constraints.spans {
                let Some(target) = resolved.get(&span.target) else {
                    continue;
                };
                if matches!(span.first, Side::Start | Side::End) {
                    let bias = direction.resolve_bias(span.bias) as f64;
                    x0 = target.x0 + (target.width() - width) * bias;
                } else {
                    y0 = target.y0 + (target.height() - height) * span.bias as f64;
                }
            }
            resolved.insert(id, Rect::new(x0, y0, x0 + width, y0 + height));
        }
        resolved
    }

    fn entry(&mut self, reference: ReferenceId) -> &mut ReferenceConstraints {
        self.references.entry(reference).or_default()
    }
}

impl ConstraintScope for RecordingScope {
    fn create_reference(&mut self) -> ReferenceId {
        let id = ReferenceId::new(self.next_id);
        self.next_id += 1;
        self.references.insert(id, ReferenceConstraints::default());
        id
    }

    fn set_size(&mut self, reference: ReferenceId, width: f32, height: f32) {
        self.entry(reference).size = Some((width, height));
    }

    fn set_padding(&mut self, reference: ReferenceId, padding: Padding) {
        self.entry(reference).padding = Some(padding);
    }

    fn link(
        &mut self,
        reference: ReferenceId,
        side: Side,
        target: ReferenceId,
        target_side: Side,
        margin: f32,
    ) {
        self.entry(reference).links.push(LinkConstraint {
            side,
            target,
            target_side,
            margin,
        });
    }

    fn link_between(
        &mut self,
        reference: ReferenceId,
        target: ReferenceId,
        first: Side,
        second: Side,
        bias: f32,
    ) {
        self.entry(reference).spans.push(SpanConstraint {
            target,
            first,
            second,
            bias,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_margin_pushes_away_from_target() {
        let mut scope = RecordingScope::new();
        let anchor = scope.create_reference();
        let reference = scope.create_reference();
        scope.set_size(reference, 10.0, 10.0);
        // Sit 8 units above the anchor's top.
        scope.link(reference, Side::Bottom, anchor, Side::Top, 8.0);
        scope.link(reference, Side::Start, anchor, Side::Start, 0.0);

        let bounds = Rect::new(100.0, 100.0, 200.0, 150.0);
        let resolved = scope.resolve(anchor, bounds, LayoutDirection::Ltr);
        let rect = resolved[&reference];
        assert_eq!(rect.y1, 92.0);
        assert_eq!(rect.y0, 82.0);
        assert_eq!(rect.x0, 100.0);
    }

    #[test]
    fn bias_distributes_free_space() {
        let mut scope = RecordingScope::new();
        let anchor = scope.create_reference();
        let reference = scope.create_reference();
        scope.set_size(reference, 20.0, 0.0);
        scope.link_between(reference, anchor, Side::Start, Side::End, 0.25);

        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let resolved = scope.resolve(anchor, bounds, LayoutDirection::Ltr);
        assert_eq!(resolved[&reference].x0, 20.0);

        let resolved = scope.resolve(anchor, bounds, LayoutDirection::Rtl);
        assert_eq!(resolved[&reference].x0, 60.0);
    }

    #[test]
    fn start_side_resolves_against_direction() {
        let mut scope = RecordingScope::new();
        let anchor = scope.create_reference();
        let reference = scope.create_reference();
        scope.set_size(reference, 10.0, 10.0);
        // "Just before the anchor's start edge" flips sides under RTL.
        scope.link(reference, Side::End, anchor, Side::Start, 4.0);

        let bounds = Rect::new(50.0, 0.0, 150.0, 20.0);
        let resolved = scope.resolve(anchor, bounds, LayoutDirection::Ltr);
        assert_eq!(resolved[&reference].x1, 46.0);

        let resolved = scope.resolve(anchor, bounds, LayoutDirection::Rtl);
        assert_eq!(resolved[&reference].x0, 154.0);
    }
}
