// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Tooltip widgets for balloontip => See the `balloontip` crate for more.
//!
//! [tooltip::Tooltip] attaches a balloon to an anchor inside a constraint
//! layout; [popup::TooltipPopup] floats one in an overlay layer near the
//! anchor's screen bounds.

/// Inline tooltip composed into a constraint scope.
pub mod tooltip;

/// Floating tooltip rendered as an overlay.
pub mod popup;

/// Scene painting for balloon and tip.
pub mod shape;
