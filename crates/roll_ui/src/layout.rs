//! Layout primitives used for hit testing.

use crate::event::Point;

/// Defines how a widget's dimension should be sized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Fill all available space
    Fill,
    /// Shrink to fit content
    #[default]
    Shrink,
    /// Fixed size in pixels
    Fixed(f32),
}

impl Length {
    /// Resolve the length to a concrete size.
    pub fn resolve(&self, available: f32, intrinsic: f32) -> f32 {
        match self {
            Length::Fill => available,
            Length::Shrink => intrinsic,
            Length::Fixed(px) => *px,
        }
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Fixed(px)
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds of the given size placed at a position
    pub fn from_size(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new(10.0, 10.0, 64.0, 44.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(74.0, 54.0)));
        assert!(!bounds.contains(Point::new(9.9, 20.0)));
        assert!(!bounds.contains(Point::new(20.0, 54.1)));
    }

    #[test]
    fn test_length_resolve() {
        assert_eq!(Length::Fill.resolve(300.0, 64.0), 300.0);
        assert_eq!(Length::Shrink.resolve(300.0, 64.0), 64.0);
        assert_eq!(Length::from(96.0).resolve(300.0, 64.0), 96.0);
    }
}
