//! 2D vector used both as a screen-space point and as an edge direction.

use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `(self, 0)` and `(other, 0)`.
    ///
    /// Negative when `other` turns counter-clockwise from `self` on a y-down screen.
    pub fn cross_z(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Determinant of the 2x2 matrix with `self` and `other` as rows.
    pub fn determinant(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Self) -> f32 {
        (other - *self).length()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A zero-length vector is returned unchanged rather than becoming NaN.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return *self;
        }
        Self::new(self.x / length, self.y / length)
    }

    /// Rotates by 90 degrees: a right turn in a y-down coordinate system.
    pub fn turn_right(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_zero_vector_is_unchanged() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec2::new(3.0, 4.0).normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn cross_and_determinant_agree() {
        let a = Vec2::new(2.0, -1.0);
        let b = Vec2::new(0.5, 3.0);
        assert_eq!(a.cross_z(b), a.determinant(b));
        assert_eq!(a.cross_z(b), 6.5);
        assert_eq!(b.cross_z(a), -6.5);
    }

    #[test]
    fn turn_right_is_perpendicular() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.dot(v.turn_right()), 0.0);
        assert_eq!(v.turn_right(), Vec2::new(-2.0, 1.0));
    }

    #[test]
    fn distance_between_points() {
        assert_relative_eq!(Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
    }
}
