use crate::bounds::Bounds;
use crate::point::Point4;
use crate::ray::Ray;
use crate::surface::{HitRecord, Surface};

/// The infinite plane z = 0 of the local frame, normal +Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane;

impl Plane {
    const ORIGIN: Point4 = Point4::ORIGIN;
    const NORMAL: Point4 = Point4::vector(0.0, 0.0, 1.0);

    pub const fn new() -> Plane {
        Plane
    }
}

impl Surface for Plane {
    /// Always reports a hit, whatever the sign of `t`.
    ///
    /// A ray parallel to the plane is not guarded: `t` comes out as ±inf, or
    /// NaN when the ray also lies in the plane, and the hit point with it.
    /// Texture coordinates are unclamped.
    fn shoot(&self, r: &Ray, hit: &mut HitRecord) -> bool {
        let u = r.direction();
        let v = Plane::ORIGIN - r.origin;

        let t = v.z / u.z;

        hit.normal = Plane::NORMAL;
        hit.point = r.calculate(t);
        hit.u = hit.point.x + 0.5;
        hit.v = 0.5 - hit.point.y;
        hit.t = t;
        hit.is_hit = true;

        return true;
    }

    fn bounds(&self) -> Bounds {
        Bounds::Unbounded
    }
}
