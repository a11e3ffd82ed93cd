//! Geometry primitives shared by the mapper and its platform backends.
//!
//! Coordinates are f64 throughout to match what CoreGraphics-style
//! window bounds report. The vertical axis direction is whatever the
//! platform uses; nothing here assumes y-up or y-down.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A point in screen or window-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    /// Translate by another point, component-wise.
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// An axis-aligned rectangle stored as origin plus size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Origin x (left edge).
    pub x: f64,
    /// Origin y (top edge in CoreGraphics bounds coordinates).
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct from origin and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Construct from two opposite corners.
    #[must_use]
    pub const fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x: x1,
            y: y1,
            w: x2 - x1,
            h: y2 - y1,
        }
    }

    /// Width of the rectangle.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.w
    }

    /// Height of the rectangle.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.h
    }

    /// The origin corner.
    #[inline]
    #[must_use]
    pub fn left_top(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The corner opposite the origin.
    #[inline]
    #[must_use]
    pub fn right_bottom(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }
}

/// Approximate float equality within `eps`.
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_works() {
        assert!(approx_eq(1.0, 1.0, 0.0));
        assert!(approx_eq(1.0, 1.000_5, 0.001));
        assert!(!approx_eq(1.0, 1.01, 0.001));
    }

    #[test]
    fn point_translation() {
        let p = Point::new(100.0, 255.0) + Point::new(960.0, 540.0);
        assert_eq!(p, Point::new(1060.0, 795.0));
    }

    #[test]
    fn rect_corners_and_size() {
        let r = Rect::from_corners(100.0, 255.0, 2020.0, 1280.0);
        assert_eq!(r, Rect::new(100.0, 255.0, 1920.0, 1025.0));
        assert_eq!(r.width(), 1920.0);
        assert_eq!(r.height(), 1025.0);
        assert_eq!(r.left_top(), Point::new(100.0, 255.0));
        assert_eq!(r.right_bottom(), Point::new(2020.0, 1280.0));
    }
}
