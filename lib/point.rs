use std::ops::{Mul, Neg, Sub};

use glam::*;

use crate::error::GeometryError;

/// Homogeneous 3d point or vector.
///
/// `w` is the tag: `1.0` for an affine position, `0.0` for a direction.
/// Transforms by a `DMat4` therefore translate points but not vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Point4 {
    pub const ORIGIN: Point4 = Point4::point(0.0, 0.0, 0.0);

    pub const fn point(x: f64, y: f64, z: f64) -> Point4 {
        Point4 { x, y, z, w: 1.0 }
    }

    pub const fn vector(x: f64, y: f64, z: f64) -> Point4 {
        Point4 { x, y, z, w: 0.0 }
    }

    pub fn from_point(p: DVec3) -> Point4 {
        Point4::point(p.x, p.y, p.z)
    }

    pub fn from_vector(v: DVec3) -> Point4 {
        Point4::vector(v.x, v.y, v.z)
    }

    pub fn is_point(&self) -> bool {
        self.w != 0.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    pub fn xyz(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Euclidean inner product of the xyz parts; the tag is ignored.
    pub fn dot(a: Point4, b: Point4) -> f64 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    pub fn length(&self) -> f64 {
        Point4::dot(*self, *self).sqrt()
    }

    /// `self - other`, always tagged as a vector.
    pub fn minus(self, other: Point4) -> Point4 {
        Point4::vector(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, s: f64) -> Point4 {
        Point4 { x: self.x * s, y: self.y * s, z: self.z * s, w: self.w }
    }

    /// Affine addition. Point + vector is a point, vector + vector a vector;
    /// point + point has no meaning and is rejected.
    pub fn try_add(self, other: Point4) -> Result<Point4, GeometryError> {
        if self.is_point() && other.is_point() {
            return Err(GeometryError::PointSum);
        }

        let w = if self.is_point() || other.is_point() { 1.0 } else { 0.0 };

        return Ok(Point4 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w });
    }

    /// Rescales to unit length in place.
    ///
    /// A zero-length vector is not guarded: every component becomes NaN
    /// (0/0). Use [`Point4::try_normalized`] where the input may be degenerate.
    pub fn normalize(&mut self) {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self.z /= len;
    }

    pub fn normalized(mut self) -> Point4 {
        self.normalize();
        self
    }

    pub fn try_normalized(self) -> Result<Point4, GeometryError> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Err(GeometryError::DegenerateVector(len));
        }
        return Ok(self.normalized());
    }

    pub fn transform(&self, m: &DMat4) -> Point4 {
        let v = *m * DVec4::new(self.x, self.y, self.z, self.w);
        Point4 { x: v.x, y: v.y, z: v.z, w: v.w }
    }
}

impl Sub for Point4 {
    type Output = Point4;

    fn sub(self, rhs: Point4) -> Point4 {
        self.minus(rhs)
    }
}

impl Mul<f64> for Point4 {
    type Output = Point4;

    fn mul(self, s: f64) -> Point4 {
        self.scale(s)
    }
}

impl Neg for Point4 {
    type Output = Point4;

    fn neg(self) -> Point4 {
        Point4 { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }
}
