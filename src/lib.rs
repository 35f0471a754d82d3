#![warn(missing_docs)]

//! Anchor-relative tooltip and popover positioning for Rust UI toolkits.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use balloontip_core as core;
pub use balloontip_widgets as widgets;

/// A "prelude" for users of the balloontip crates.
///
/// Importing this module brings into scope the most common types
/// needed to attach a tooltip to an anchor.
///
/// ```rust
/// use balloontip::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::layout::{
        AnchorEdge, ConstraintScope, EdgePosition, LayoutDirection, RecordingScope, ReferenceId,
        Side, TooltipPositionProvider,
    };
    pub use crate::core::style::{TooltipBorder, TooltipStyle};
    pub use crate::core::transition::{TooltipTransition, TransitionEnd, TransitionPhase};
    pub use crate::core::update::Update;

    // Math
    pub use nalgebra::Vector2;

    // Widgets
    pub use crate::widgets::popup::TooltipPopup;
    pub use crate::widgets::tooltip::Tooltip;
}
