//! Closed-form multi-line label layout.
//!
//! Stacks N lines of text above, below, or around an anchor point. Line
//! metrics are caller-supplied style constants ([`LineSpec`]), never
//! measured from a font engine; the layout is a pure arithmetic mapping
//! from line index to vertical offset.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::Drawable,
    geometry::{Point, Size},
};

/// Direction additional lines push content relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grow {
    /// Lines are numbered upward from the bottom line; the block extends
    /// above the anchor.
    Up,
    /// Lines are numbered downward from the top line; the block extends
    /// below the anchor.
    Down,
    /// The block is centered so its lines sit symmetrically around the
    /// anchor. Used for scripts without separate language stacking.
    Bidirectional,
}

/// Per-language line metrics for a label block.
///
/// All values are caller-supplied style constants in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpec {
    font_size: f32,
    line_height: f32,
    base_offset: f32,
    grow: Grow,
}

impl LineSpec {
    pub fn new(font_size: f32, line_height: f32, base_offset: f32, grow: Grow) -> Self {
        Self {
            font_size,
            line_height,
            base_offset,
            grow,
        }
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Gap between the anchor and the anchor-adjacent line.
    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    pub fn grow(&self) -> Grow {
        self.grow
    }

    /// Returns this spec with a different growth direction.
    pub fn with_grow(self, grow: Grow) -> Self {
        Self { grow, ..self }
    }
}

/// Splits a manually line-broken name into its lines.
///
/// An empty name yields no lines at all, so downstream layout produces a
/// zero-height block with no text nodes.
pub fn split_lines(name: &str) -> Vec<&str> {
    if name.is_empty() {
        Vec::new()
    } else {
        name.split('\n').collect()
    }
}

/// A multi-line text block laid out in closed form around its anchor.
///
/// The block inherits `text-anchor` from its enclosing group; the enclosing
/// group is expected to carry the anchor resolved by
/// [`resolve_offset`](crate::label::offset::resolve_offset).
#[derive(Debug, Clone)]
pub struct MultilineText {
    lines: Vec<String>,
    spec: LineSpec,
    fill: Option<Color>,
    class: Option<&'static str>,
}

impl MultilineText {
    pub fn new(lines: Vec<String>, spec: LineSpec) -> Self {
        Self {
            lines,
            spec,
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

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn spec(&self) -> &LineSpec {
        &self.spec
    }

    /// Vertical offset of line `index` (in input order) from the anchor.
    ///
    /// For `Grow::Up` line 0 of the formula is the bottom (anchor-adjacent)
    /// line, which is the *last* input line; for `Grow::Down` it is the
    /// first. `Grow::Bidirectional` centers the block and ignores the base
    /// offset.
    fn line_dy(&self, index: usize) -> f32 {
        let count = self.lines.len();
        let spec = &self.spec;
        match spec.grow() {
            Grow::Up => {
                let from_anchor = (count - 1 - index) as f32;
                -(from_anchor * spec.line_height() + spec.base_offset())
            }
            Grow::Down => index as f32 * spec.line_height() + spec.base_offset(),
            Grow::Bidirectional => {
                (index as f32 - (count as f32 - 1.0) / 2.0) * spec.line_height()
            }
        }
    }
}

impl Drawable for MultilineText {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node> {
        let mut group = svg_element::Group::new();
        if let Some(class) = self.class {
            group = group.set("class", class);
        }

        for (index, line) in self.lines.iter().enumerate() {
            let mut text = svg_element::Text::new(line.clone())
                .set("x", position.x())
                .set("y", position.y() + self.line_dy(index))
                .set("font-size", self.spec.font_size())
                .set("dominant-baseline", "central");

            if let Some(fill) = &self.fill {
                text = text.set("fill", fill);
            }

            group = group.add(text);
        }

        Box::new(group)
    }

    fn size(&self) -> Size {
        if self.lines.is_empty() {
            return Size::default();
        }

        // Width assumes square glyph cells; callers needing exact extents
        // use the measurement service instead.
        let max_chars = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let height = match self.spec.grow() {
            Grow::Up | Grow::Down => {
                self.lines.len() as f32 * self.spec.line_height() + self.spec.base_offset()
            }
            Grow::Bidirectional => self.lines.len() as f32 * self.spec.line_height(),
        };

        Size::new(max_chars as f32 * self.spec.font_size(), height)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn spec(grow: Grow) -> LineSpec {
        LineSpec::new(10.0, 10.0, 1.0, grow)
    }

    fn lines(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("King\nStreet"), vec!["King", "Street"]);
        assert_eq!(split_lines("King"), vec!["King"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_grow_up_numbers_from_bottom_line() {
        let block = MultilineText::new(lines(&["A", "B"]), spec(Grow::Up));
        // B is the anchor-adjacent (bottom) line, A stacks above it
        assert_approx_eq!(f32, block.line_dy(1), -1.0);
        assert_approx_eq!(f32, block.line_dy(0), -11.0);
    }

    #[test]
    fn test_grow_down_numbers_from_top_line() {
        let block = MultilineText::new(lines(&["A", "B"]), spec(Grow::Down));
        assert_approx_eq!(f32, block.line_dy(0), 1.0);
        assert_approx_eq!(f32, block.line_dy(1), 11.0);
    }

    #[test]
    fn test_grow_bidirectional_centers_block() {
        let block = MultilineText::new(lines(&["A", "B", "C"]), spec(Grow::Bidirectional));
        assert_approx_eq!(f32, block.line_dy(0), -10.0);
        assert_approx_eq!(f32, block.line_dy(1), 0.0);
        assert_approx_eq!(f32, block.line_dy(2), 10.0);
    }

    #[test]
    fn test_empty_lines_render_no_text_nodes() {
        let block = MultilineText::new(Vec::new(), spec(Grow::Up));
        assert!(block.size().is_zero());

        let rendered = block.render_to_svg(Point::default()).to_string();
        assert!(!rendered.contains("<text"));
    }

    #[test]
    fn test_render_emits_one_text_per_line() {
        let block = MultilineText::new(lines(&["King", "Street"]), spec(Grow::Down));
        let rendered = block.render_to_svg(Point::default()).to_string();
        assert_eq!(rendered.matches("<text").count(), 2);
        assert!(rendered.contains("King"));
        assert!(rendered.contains("Street"));
    }

    #[test]
    fn test_render_applies_fill_and_class() {
        let block = MultilineText::new(lines(&["King"]), spec(Grow::Down))
            .with_fill(Color::new("gray").unwrap())
            .with_class("name-latin");
        let rendered = block.render_to_svg(Point::default()).to_string();
        assert!(rendered.contains("fill"));
        assert!(rendered.contains("name-latin"));
    }

    #[test]
    fn test_size_grows_with_line_count() {
        let two = MultilineText::new(lines(&["A", "B"]), spec(Grow::Up));
        let three = MultilineText::new(lines(&["A", "B", "C"]), spec(Grow::Up));
        assert!(three.size().height() > two.size().height());
    }
}
