use glam::DMat4;

use crate::error::GeometryError;
use crate::point::Point4;

/// A ray through two points: `calculate(t) = origin + t * (dest - origin)`.
///
/// `t = 0` is the origin and `t = 1` the destination, so hit distances are
/// measured in units of `dest - origin`, not in world units.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point4,
    pub dest: Point4,
}

impl Ray {
    pub const fn new(origin: Point4, dest: Point4) -> Ray {
        Ray { origin, dest }
    }

    /// Fails with `PointSum` when `direction` is tagged as a point.
    pub fn from_direction(origin: Point4, direction: Point4) -> Result<Ray, GeometryError> {
        let dest = origin.try_add(direction)?;
        Ok(Ray { origin, dest })
    }

    pub fn direction(&self) -> Point4 {
        self.dest - self.origin
    }

    pub fn calculate(&self, t: f64) -> Point4 {
        let d = self.direction();
        Point4::point(self.origin.x + t * d.x, self.origin.y + t * d.y, self.origin.z + t * d.z)
    }

    /// Maps both endpoints by `m`. The ray parameter of a hit is preserved by
    /// affine maps, so `t` found in a local frame is valid in the world frame.
    pub fn transform(&self, m: &DMat4) -> Ray {
        Ray { origin: self.origin.transform(m), dest: self.dest.transform(m) }
    }
}
