//! Simple geometric value types.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
///
/// A plain value constructor: no validation of sign or finiteness is
/// performed, so NaN and negative inputs propagate through [`area`]
/// exactly as `f64` multiplication dictates.
///
/// [`area`]: Rectangle::area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The product of the side lengths.
    #[must_use]
    pub const fn area(self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;

    #[test]
    fn test_area_is_the_product_of_the_sides() {
        assert_eq!(Rectangle::new(10.0, 20.0).area(), 200.0);
        assert_eq!(Rectangle::new(0.0, 7.5).area(), 0.0);
    }

    #[test]
    fn test_fields_are_exposed() {
        let rect = Rectangle::new(3.0, 4.0);
        assert_eq!(rect.width, 3.0);
        assert_eq!(rect.height, 4.0);
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        assert!(Rectangle::new(f64::NAN, 2.0).area().is_nan());
        assert_eq!(Rectangle::new(f64::INFINITY, 2.0).area(), f64::INFINITY);
        assert_eq!(Rectangle::new(-3.0, 4.0).area(), -12.0);
    }
}
