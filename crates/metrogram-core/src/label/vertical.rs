//! Character-stacked and rotated label layout.
//!
//! Vertical-text mode renders a label reading top-to-bottom next to its
//! marker. Square-cell scripts stack exactly in closed form
//! ([`StackedText`]); rotated blocks of proportional glyphs do not, so
//! [`RotatedText`] is laid out in two phases:
//!
//! 1. [`RotatedText::provisional`] renders with a transform derived from a
//!    conservative glyph-cell estimate and emits a [`MeasurementRequest`].
//! 2. Once the host has committed the provisional render and measured the
//!    actual bounding box, [`RotatedText::refine`] recomputes the
//!    translation so the rotated block's visual center aligns with the
//!    intended anchor point.
//!
//! The protocol executes exactly once per change to the line content; both
//! phases are pure, so re-running them with the same inputs yields the same
//! transforms.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, MeasurementRequest},
    geometry::{Point, Size},
    label::multiline::{Grow, LineSpec, MultilineText},
};

// Width-per-character estimate for unmeasured proportional text, as a
// fraction of the font size.
const NOMINAL_CHAR_ADVANCE: f32 = 0.55;

/// Rotation applied to a [`RotatedText`] block about its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Quarter turn; the block reads straight down.
    Quarter,
    /// Backward diagonal, for diagonal placement variants.
    DiagonalBack,
}

impl Rotation {
    /// Rotation angle in SVG degrees.
    pub fn degrees(self) -> f32 {
        match self {
            Self::Quarter => 90.0,
            Self::DiagonalBack => -45.0,
        }
    }

    /// Vertical extent of a block of the given size after this rotation.
    fn rotated_height(self, block: Size) -> f32 {
        match self {
            Self::Quarter => block.transpose().height(),
            Self::DiagonalBack => {
                (block.width() + block.height()) * std::f32::consts::FRAC_1_SQRT_2
            }
        }
    }
}

/// A resolved block transform: translation of the block's visual center,
/// plus its rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translate: Point,
    rotate: f32,
}

impl Transform {
    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn rotate(&self) -> f32 {
        self.rotate
    }

    /// Renders the transform as an SVG `transform` attribute value.
    pub fn to_attribute(&self) -> String {
        if self.rotate == 0.0 {
            format!("translate({}, {})", self.translate.x(), self.translate.y())
        } else {
            format!(
                "translate({}, {}) rotate({})",
                self.translate.x(),
                self.translate.y(),
                self.rotate
            )
        }
    }
}

/// A character-stacked block for square-cell scripts.
///
/// Each line becomes a column read top-to-bottom; columns are ordered
/// right-to-left and centered on the anchor's x. Glyph cells are square
/// (the font size), so the layout is exact without measurement. The block
/// stacks away from the marker: for upward polarity the final character
/// sits nearest the anchor.
#[derive(Debug, Clone)]
pub struct StackedText {
    lines: Vec<String>,
    spec: LineSpec,
    polarity: f32,
    class: Option<&'static str>,
}

impl StackedText {
    /// `spec.font_size` is the glyph cell, `spec.line_height` the column
    /// advance, and `spec.base_offset` the clearance between the anchor and
    /// the block edge. `polarity` is the resolved vertical polarity.
    pub fn new(lines: Vec<String>, spec: LineSpec, polarity: f32) -> Self {
        Self {
            lines,
            spec,
            polarity,
            class: None,
        }
    }

    /// Sets a class attribute for host stylesheets.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Total width of the column block.
    pub fn width(&self) -> f32 {
        self.lines.len() as f32 * self.spec.line_height()
    }

    /// Column x for the line at `index`: first input line is the rightmost
    /// column, and the block is centered on x = 0.
    fn column_x(&self, index: usize) -> f32 {
        let count = self.lines.len() as f32;
        ((count - 1.0) / 2.0 - index as f32) * self.spec.line_height()
    }

    /// Center y of the character at `char_index` within a column of
    /// `char_count` characters.
    fn char_y(&self, char_index: usize, char_count: usize) -> f32 {
        let cell = self.spec.font_size();
        let from_anchor = if self.polarity < 0.0 {
            (char_count - 1 - char_index) as f32
        } else {
            char_index as f32
        };
        self.polarity * (self.spec.base_offset() + (from_anchor + 0.5) * cell)
    }
}

impl Drawable for StackedText {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node> {
        let mut group = svg_element::Group::new();
        if let Some(class) = self.class {
            group = group.set("class", class);
        }

        for (index, line) in self.lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            let column_x = position.x() + self.column_x(index);

            for (char_index, ch) in chars.iter().enumerate() {
                let text = svg_element::Text::new(ch.to_string())
                    .set("x", column_x)
                    .set("y", position.y() + self.char_y(char_index, chars.len()))
                    .set("font-size", self.spec.font_size())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central");
                group = group.add(text);
            }
        }

        Box::new(group)
    }

    fn size(&self) -> Size {
        if self.lines.is_empty() {
            return Size::default();
        }

        let max_chars = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        Size::new(
            self.width(),
            max_chars as f32 * self.spec.font_size() + self.spec.base_offset(),
        )
    }
}

/// A rotated text block positioned by the two-phase protocol.
///
/// The block's lines are stacked symmetrically about the block center, so
/// its untransformed bounding box is centered on the local origin. The
/// transform places that origin, the block's visual center, at the
/// intended anchor point: `lateral` across the reading axis and clearance
/// plus half the rotated extent away from the marker.
#[derive(Debug, Clone)]
pub struct RotatedText {
    lines: Vec<String>,
    spec: LineSpec,
    rotation: Rotation,
    polarity: f32,
    clearance: f32,
    lateral: f32,
    fill: Option<Color>,
    class: Option<&'static str>,
}

impl RotatedText {
    pub fn new(
        lines: Vec<String>,
        spec: LineSpec,
        rotation: Rotation,
        polarity: f32,
        clearance: f32,
        lateral: f32,
    ) -> Self {
        Self {
            lines,
            spec,
            rotation,
            polarity,
            clearance,
            lateral,
            fill: None,
            class: None,
        }
    }

    /// Sets an explicit fill color for the block.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets a class attribute for host stylesheets.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// The measurement the host must perform after committing the
    /// provisional render.
    pub fn request(&self) -> MeasurementRequest {
        MeasurementRequest::new(self.lines.join("\n"), self.spec.font_size())
    }

    /// Conservative glyph-cell estimate of the unrotated block extent, used
    /// only until the host has measured the real bounding box.
    fn nominal_size(&self) -> Size {
        if self.lines.is_empty() {
            return Size::default();
        }

        let max_chars = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        Size::new(
            max_chars as f32 * self.spec.font_size() * NOMINAL_CHAR_ADVANCE,
            self.lines.len() as f32 * self.spec.line_height(),
        )
    }

    /// The transform placing a block of the given unrotated extent.
    pub fn transform_for(&self, block: Size) -> Transform {
        let rotated_height = self.rotation.rotated_height(block);
        Transform {
            translate: Point::new(
                self.lateral,
                self.polarity * (self.clearance + rotated_height / 2.0),
            ),
            rotate: self.rotation.degrees(),
        }
    }

    /// Phase 1: renders the block with a provisional transform and emits
    /// the measurement request for phase 2.
    pub fn provisional(&self) -> (svg_element::Group, MeasurementRequest) {
        let transform = self.transform_for(self.nominal_size());
        (self.render_with(&transform), self.request())
    }

    /// Phase 2: the corrected transform for the measured bounding box.
    pub fn refine(&self, measured: Size) -> Transform {
        self.transform_for(measured)
    }

    /// Renders the block under an explicit transform.
    pub fn render_with(&self, transform: &Transform) -> svg_element::Group {
        let mut group = svg_element::Group::new()
            .set("transform", transform.to_attribute())
            .set("text-anchor", "middle");
        if let Some(class) = self.class {
            group = group.set("class", class);
        }

        let mut block =
            MultilineText::new(self.lines.clone(), self.spec.with_grow(Grow::Bidirectional));
        if let Some(fill) = &self.fill {
            block = block.with_fill(fill.clone());
        }

        group.add(block.render_to_svg(Point::default()))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn latin_spec() -> LineSpec {
        LineSpec::new(10.0, 10.0, 1.0, Grow::Up)
    }

    fn stacked(lines: &[&str], polarity: f32) -> StackedText {
        let lines = lines.iter().map(|line| line.to_string()).collect();
        StackedText::new(lines, LineSpec::new(5.0, 5.0, 4.5, Grow::Up), polarity)
    }

    #[test]
    fn test_stacked_columns_read_right_to_left() {
        let block = stacked(&["AB", "CD"], 1.0);
        // First input line is the rightmost column
        assert!(block.column_x(0) > block.column_x(1));
        assert_approx_eq!(f32, block.column_x(0) + block.column_x(1), 0.0);
    }

    #[test]
    fn test_stacked_chars_step_away_from_marker() {
        let below = stacked(&["ABC"], 1.0);
        // Reading order runs downward, away from the anchor
        assert!(below.char_y(0, 3) < below.char_y(2, 3));
        assert_approx_eq!(f32, below.char_y(0, 3), 4.5 + 2.5);

        let above = stacked(&["ABC"], -1.0);
        // The final character sits nearest the anchor
        assert_approx_eq!(f32, above.char_y(2, 3), -(4.5 + 2.5));
        assert!(above.char_y(0, 3) < above.char_y(2, 3));
    }

    #[test]
    fn test_stacked_render_one_text_per_char() {
        let block = stacked(&["AB", "C"], 1.0);
        let rendered = block.render_to_svg(Point::default()).to_string();
        assert_eq!(rendered.matches("<text").count(), 3);
    }

    #[test]
    fn test_stacked_empty_is_zero_sized() {
        let block = stacked(&[], 1.0);
        assert!(block.size().is_zero());
    }

    #[test]
    fn test_rotated_refine_centers_block_on_anchor() {
        let block = RotatedText::new(
            vec!["Joy".to_string()],
            latin_spec(),
            Rotation::Quarter,
            -1.0,
            4.5,
            0.0,
        );

        let measured = Size::new(30.0, 12.0);
        let refined = block.refine(measured);

        // After a quarter turn the block's vertical extent is its width;
        // the visual center sits clearance plus half that extent above.
        assert_approx_eq!(f32, refined.translate().y(), -(4.5 + 15.0));
        assert_approx_eq!(f32, refined.rotate(), 90.0);
    }

    #[test]
    fn test_rotated_provisional_differs_from_refined() {
        let block = RotatedText::new(
            vec!["Joy".to_string()],
            latin_spec(),
            Rotation::Quarter,
            -1.0,
            4.5,
            0.0,
        );

        let (_, request) = block.provisional();
        assert_eq!(request.content(), "Joy");

        // A 3-character name measures wider than the glyph-cell estimate
        let provisional = block.transform_for(block.nominal_size());
        let refined = block.refine(Size::new(30.0, 12.0));
        assert!(provisional.translate().y() > refined.translate().y());
    }

    #[test]
    fn test_rotated_diagonal_extent() {
        let block = RotatedText::new(
            vec!["Joy".to_string()],
            latin_spec(),
            Rotation::DiagonalBack,
            1.0,
            4.5,
            0.0,
        );

        let refined = block.refine(Size::new(30.0, 10.0));
        let expected = 4.5 + (30.0 + 10.0) * std::f32::consts::FRAC_1_SQRT_2 / 2.0;
        assert_approx_eq!(f32, refined.translate().y(), expected);
        assert_approx_eq!(f32, refined.rotate(), -45.0);
    }

    #[test]
    fn test_rotated_two_phase_is_repeatable() {
        let block = RotatedText::new(
            vec!["Joy".to_string()],
            latin_spec(),
            Rotation::Quarter,
            -1.0,
            4.5,
            2.0,
        );

        let (first, _) = block.provisional();
        let (second, _) = block.provisional();
        assert_eq!(first.to_string(), second.to_string());

        let measured = Size::new(30.0, 12.0);
        assert_eq!(block.refine(measured), block.refine(measured));
    }

    #[test]
    fn test_transform_attribute_without_rotation() {
        let transform = Transform {
            translate: Point::new(1.5, -2.0),
            rotate: 0.0,
        };
        assert_eq!(transform.to_attribute(), "translate(1.5, -2)");
    }
}
