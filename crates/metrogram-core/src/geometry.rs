//! Basic geometric value types shared by layout and rendering.

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns the size with width and height exchanged.
    ///
    /// This is the extent of the same box after a quarter-turn rotation.
    pub fn transpose(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center of the bounds as a Point
    pub fn center(self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    ///
    /// The resulting bounds will have the minimum values of both bounds for min_x and min_y,
    /// and the maximum values of both bounds for max_x and max_y.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Expands the bounds by adding insets.
    ///
    /// This decreases the minimum coordinates by left/top insets and increases
    /// the maximum coordinates by right/bottom insets, effectively growing the bounds.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_approx_eq!(f32, point.x(), 3.5);
        assert_approx_eq!(f32, point.y(), 4.2);
    }

    #[test]
    fn test_point_default_is_zero() {
        let point = Point::default();
        assert!(point.is_zero());
        assert!(!Point::new(1.0, 0.0).is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_point_add() {
        let result = Point::new(1.0, 2.0).add_point(Point::new(3.0, 4.0));
        assert_approx_eq!(f32, result.x(), 4.0);
        assert_approx_eq!(f32, result.y(), 6.0);
    }

    #[test]
    fn test_point_to_bounds() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(6.0, 8.0));

        assert_approx_eq!(f32, bounds.min_x(), 7.0); // 10 - 3
        assert_approx_eq!(f32, bounds.min_y(), 16.0); // 20 - 4
        assert_approx_eq!(f32, bounds.max_x(), 13.0); // 10 + 3
        assert_approx_eq!(f32, bounds.max_y(), 24.0); // 20 + 4
    }

    #[test]
    fn test_size_max() {
        let max_size = Size::new(10.0, 20.0).max(Size::new(15.0, 18.0));
        assert_approx_eq!(f32, max_size.width(), 15.0);
        assert_approx_eq!(f32, max_size.height(), 20.0);
    }

    #[test]
    fn test_size_is_zero() {
        assert!(Size::default().is_zero());
        assert!(!Size::new(1.0, 0.0).is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_size_transpose() {
        let size = Size::new(3.0, 7.0).transpose();
        assert_approx_eq!(f32, size.width(), 7.0);
        assert_approx_eq!(f32, size.height(), 3.0);
    }

    #[test]
    fn test_bounds_dimensions() {
        let bounds = Point::new(4.5, 7.0).to_bounds(Size::new(5.0, 8.0));
        assert_approx_eq!(f32, bounds.width(), 5.0);
        assert_approx_eq!(f32, bounds.height(), 8.0);
    }

    #[test]
    fn test_bounds_center_round_trips() {
        let center = Point::new(-3.0, 12.5);
        let bounds = center.to_bounds(Size::new(4.0, 6.0));
        assert_eq!(bounds.center(), center);
    }

    #[test]
    fn test_bounds_min_point_and_size() {
        let bounds = Point::new(2.0, 3.0).to_bounds(Size::new(4.0, 2.0));
        let min_point = bounds.min_point();
        assert_approx_eq!(f32, min_point.x(), 0.0);
        assert_approx_eq!(f32, min_point.y(), 2.0);

        let size = bounds.to_size();
        assert_approx_eq!(f32, size.width(), 4.0);
        assert_approx_eq!(f32, size.height(), 2.0);
    }

    #[test]
    fn test_bounds_add_padding() {
        let bounds = Point::new(0.0, 0.0)
            .to_bounds(Size::new(10.0, 10.0))
            .add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));

        assert_approx_eq!(f32, bounds.min_x(), -9.0); // -5 - 4 (left)
        assert_approx_eq!(f32, bounds.min_y(), -6.0); // -5 - 1 (top)
        assert_approx_eq!(f32, bounds.max_x(), 7.0); // 5 + 2 (right)
        assert_approx_eq!(f32, bounds.max_y(), 8.0); // 5 + 3 (bottom)
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(2.5);
        assert_approx_eq!(f32, insets.top(), 2.5);
        assert_approx_eq!(f32, insets.left(), insets.right());
    }

    #[test]
    fn test_bounds_merge() {
        let bounds1 = Point::new(3.0, 4.0).to_bounds(Size::new(4.0, 4.0));
        let bounds2 = Point::new(5.5, 2.0).to_bounds(Size::new(5.0, 4.0));

        let merged = bounds1.merge(&bounds2);
        assert_approx_eq!(f32, merged.min_x(), 1.0);
        assert_approx_eq!(f32, merged.min_y(), 0.0);
        assert_approx_eq!(f32, merged.max_x(), 8.0);
        assert_approx_eq!(f32, merged.max_y(), 6.0);
    }
}
