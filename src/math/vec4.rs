//! 4D vector for homogeneous (perspective-projected) points.
//!
//! A projected point `(x, y, z, w)` lands on screen at `(x/w, y/w)`. Clipping happens in
//! screen space, so any interpolation between two homogeneous points must be done on
//! `(x/w, y/w, z/w, 1/w)`, which is linear on screen, and converted back afterwards.

use std::ops::{Add, Mul, Sub};

use super::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::point(0.0, 0.0, 0.0)
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (w=1) from x, y, z coordinates.
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Lift a screen-space point to a homogeneous point on the z=0 plane.
    pub const fn from_vec2(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0, 1.0)
    }

    /// Screen position `(x/w, y/w)`. The stored `w` is never modified.
    pub fn perspective_divide(&self) -> Vec2 {
        Vec2::new(self.x / self.w, self.y / self.w)
    }

    /// `(x/w, y/w, z/w, 1/w)`, the representation that interpolates linearly on screen.
    pub fn over_w(&self) -> Self {
        Self::new(self.x / self.w, self.y / self.w, self.z / self.w, 1.0 / self.w)
    }

    /// Inverse of [`Vec4::over_w`].
    pub fn from_over_w(v: Self) -> Self {
        Self::new(v.x / v.w, v.y / v.w, v.z / v.w, 1.0 / v.w)
    }

    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }

    /// Linearly interpolate between two vectors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl From<Vec2> for Vec4 {
    /// Convert a screen point to a homogeneous point (z=0, w=1).
    fn from(v: Vec2) -> Self {
        Self::from_vec2(v)
    }
}
