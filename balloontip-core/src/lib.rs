#![warn(missing_docs)]

//! Core geometry for balloontip => See the `balloontip` crate for more.
//!
//! Contains the anchor-relative positioning engine and the popup
//! transition state machine.

pub use vello as vg;

/// Contains useful types and functions for layout interaction.
pub mod layout;

/// Contains the [TooltipStyle](style::TooltipStyle) configuration bundle.
pub mod style;

/// Contains the tip outline geometry.
pub mod tip;

/// Contains the show/hide transition state machine for floating tooltips.
pub mod transition;

/// Contains the [Update](update::Update) flags returned by state changes.
pub mod update;
