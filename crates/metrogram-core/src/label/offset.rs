//! Offset preference resolution for station labels.
//!
//! A label sits next to its marker according to a discrete preference pair:
//! horizontal ([`NameOffsetX`]) and vertical ([`NameOffsetY`]). This module
//! converts that preference into the concrete numbers a renderer needs
//! ([`resolve_offset`]) and owns the [`LabelPlacement`] record whose setters
//! keep the vertical-text exclusions true on every mutation path.

use serde::{Deserialize, Serialize};

/// Horizontal placement preference of a label relative to its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameOffsetX {
    Left,
    Middle,
    Right,
}

/// Vertical placement preference of a label relative to its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameOffsetY {
    Top,
    Middle,
    Bottom,
}

/// SVG `text-anchor` values.
///
/// The anchor marks the edge the text should abut, not its visual center,
/// except when centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG attribute value for this anchor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// The concrete placement numbers resolved from an offset preference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOffset {
    dx: f32,
    anchor: TextAnchor,
    polarity: f32,
}

impl ResolvedOffset {
    /// Horizontal shift of the label block from the marker center.
    pub fn dx(self) -> f32 {
        self.dx
    }

    /// The `text-anchor` the label block renders with.
    pub fn anchor(self) -> TextAnchor {
        self.anchor
    }

    /// Sign of vertical offsets: -1 stacks away from the marker upward,
    /// +1 downward. `NameOffsetY::Middle` resolves to +1 with the label
    /// sitting on the anchor itself.
    pub fn polarity(self) -> f32 {
        self.polarity
    }
}

/// Resolves an offset preference into a (dx, anchor, polarity) triple.
///
/// `dx_magnitude` is the per-station-type style constant for the horizontal
/// shift; it is signed here by the horizontal preference. When vertical-text
/// mode is engaged the label is horizontally centered by construction, so
/// `dx` resolves to zero.
///
/// Pure function of its inputs; call it once per render.
pub fn resolve_offset(
    x: NameOffsetX,
    y: NameOffsetY,
    text_vertical: bool,
    dx_magnitude: f32,
) -> ResolvedOffset {
    let dx = if text_vertical {
        0.0
    } else {
        match x {
            NameOffsetX::Left => -dx_magnitude,
            NameOffsetX::Middle => 0.0,
            NameOffsetX::Right => dx_magnitude,
        }
    };

    let anchor = match x {
        NameOffsetX::Left => TextAnchor::End,
        NameOffsetX::Middle => TextAnchor::Middle,
        NameOffsetX::Right => TextAnchor::Start,
    };

    let polarity = match y {
        NameOffsetY::Top => -1.0,
        NameOffsetY::Middle | NameOffsetY::Bottom => 1.0,
    };

    ResolvedOffset {
        dx,
        anchor,
        polarity,
    }
}

/// Signed vertical offset of a label block's anchor from the marker.
///
/// The magnitude grows with the number of lines in the block adjacent to
/// the marker: `polarity * (lines * line_height + base_offset)`. With zero
/// lines the offset is the base offset alone.
pub fn block_offset(lines: usize, line_height: f32, base_offset: f32, polarity: f32) -> f32 {
    polarity * (lines as f32 * line_height + base_offset)
}

/// The placement preference trio of a station label.
///
/// Vertical-text mode (character-stacked, rotated rendering) is only
/// meaningful when the label is horizontally centered and not vertically
/// centered. The setters force it off whenever a mutation leaves the
/// preference pair outside that region, so the exclusions hold for all
/// update sequences, not just direct toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPlacement {
    #[serde(default = "default_offset_x")]
    offset_x: NameOffsetX,
    #[serde(default = "default_offset_y")]
    offset_y: NameOffsetY,
    #[serde(default)]
    text_vertical: bool,
}

fn default_offset_x() -> NameOffsetX {
    NameOffsetX::Right
}

fn default_offset_y() -> NameOffsetY {
    NameOffsetY::Top
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self::new(NameOffsetX::Right, NameOffsetY::Top, false)
    }
}

impl LabelPlacement {
    /// Creates a placement, forcing vertical-text mode off if the offsets
    /// do not allow it.
    pub fn new(offset_x: NameOffsetX, offset_y: NameOffsetY, text_vertical: bool) -> Self {
        let mut placement = Self {
            offset_x,
            offset_y,
            text_vertical,
        };
        placement.enforce_exclusions();
        placement
    }

    pub fn offset_x(&self) -> NameOffsetX {
        self.offset_x
    }

    pub fn offset_y(&self) -> NameOffsetY {
        self.offset_y
    }

    pub fn text_vertical(&self) -> bool {
        self.text_vertical
    }

    /// True when the current offsets permit vertical-text mode.
    pub fn allows_text_vertical(&self) -> bool {
        self.offset_x == NameOffsetX::Middle && self.offset_y != NameOffsetY::Middle
    }

    pub fn set_offset_x(&mut self, offset_x: NameOffsetX) {
        self.offset_x = offset_x;
        self.enforce_exclusions();
    }

    pub fn set_offset_y(&mut self, offset_y: NameOffsetY) {
        self.offset_y = offset_y;
        self.enforce_exclusions();
    }

    /// Engages or disengages vertical-text mode. Engaging is a no-op when
    /// the current offsets exclude it.
    pub fn set_text_vertical(&mut self, text_vertical: bool) {
        self.text_vertical = text_vertical && self.allows_text_vertical();
    }

    /// Re-applies the exclusions after external construction, e.g. when a
    /// host deserializes a placement from a document.
    pub fn normalize(&mut self) {
        self.enforce_exclusions();
    }

    fn enforce_exclusions(&mut self) {
        if !self.allows_text_vertical() {
            self.text_vertical = false;
        }
    }
}
