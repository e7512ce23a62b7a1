//! Label layout around a point anchor.
//!
//! A station label is one or more blocks of multi-line text placed next to
//! a point marker according to a discrete offset preference. This module
//! provides the three layers of that engine:
//!
//! - [`offset`]: resolves an offset preference into a concrete
//!   (dx, text-anchor, polarity) triple and owns the placement invariants
//! - [`multiline`]: stacks lines of text above/below/around the anchor in
//!   closed form
//! - [`vertical`]: character-stacked and rotated label blocks, including
//!   the two-phase measure-then-reposition protocol for rotated text

pub mod multiline;
pub mod offset;
pub mod vertical;

pub use multiline::{Grow, LineSpec, MultilineText, split_lines};
pub use offset::{LabelPlacement, NameOffsetX, NameOffsetY, ResolvedOffset, TextAnchor,
    block_offset, resolve_offset};
pub use vertical::{RotatedText, Rotation, StackedText, Transform};
