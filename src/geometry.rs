//! Integer geometric primitives.
//!
//! Coordinates follow the buffer convention: `x` is the row, `y` the column.
//! Nothing here is bounds-checked; the buffer enforces bounds on access.

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Row coordinate.
    pub x: i32,
    /// Column coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by an integer factor, saturating at the `i32` range.
    #[must_use]
    pub const fn scaled(self, factor: i32) -> Self {
        Self::new(self.x.saturating_mul(factor), self.y.saturating_mul(factor))
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points. `start.x <= end.x` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Same segment with endpoints swapped if needed so that `start.x <= end.x`.
    #[must_use]
    pub const fn ordered(self) -> Self {
        if self.start.x <= self.end.x {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }
}

/// A circle given by integer center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Create a circle from center coordinates and radius.
    #[must_use]
    pub const fn from_coords(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(Point::new(cx, cy), radius)
    }

    /// Scale center and radius by an integer factor, saturating at the `i32` range.
    ///
    /// Rendering the scaled circle into a buffer enlarged by the same factor is
    /// how the supersampler reuses the rasterizers unchanged.
    #[must_use]
    pub const fn scaled(self, factor: i32) -> Self {
        Self::new(self.center.scaled(factor), self.radius.saturating_mul(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert!((p1.distance(p2) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_scaled() {
        assert_eq!(Point::new(3, -2).scaled(2), Point::new(6, -4));
    }

    #[test]
    fn test_line_ordered() {
        let line = Line::from_coords(10, 5, 0, 0).ordered();
        assert_eq!(line.start, Point::new(0, 0));
        assert_eq!(line.end, Point::new(10, 5));
    }

    #[test]
    fn test_circle_scaled() {
        let c = Circle::from_coords(250, 250, 150).scaled(2);
        assert_eq!(c, Circle::from_coords(500, 500, 300));
    }

    #[test]
    fn test_scaled_saturates() {
        let c = Circle::from_coords(i32::MAX / 2 + 1, -5, i32::MIN / 2 - 1).scaled(2);
        assert_eq!(c.center, Point::new(i32::MAX, -10));
        assert_eq!(c.radius, i32::MIN);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point = (1, 2).into();
        assert_eq!(p, Point::new(1, 2));
    }
}
