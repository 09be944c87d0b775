use std::f64::consts::PI;

use crate::bounds::{BoundingBox, Bounds};
use crate::point::Point4;
use crate::ray::Ray;
use crate::surface::{HitRecord, Surface, TINY};

/// Unit-diameter sphere centred on the local origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sphere;

impl Sphere {
    pub const RADIUS: f64 = 0.5;
    pub const CENTER: Point4 = Point4::ORIGIN;

    pub const fn new() -> Sphere {
        Sphere
    }
}

impl Surface for Sphere {
    fn shoot(&self, r: &Ray, hit: &mut HitRecord) -> bool {
        let d = r.direction();
        let oc = r.origin - Sphere::CENTER;

        let a = Point4::dot(d, d);
        let b = 2.0 * Point4::dot(oc, d);
        let c = Point4::dot(oc, oc) - Sphere::RADIUS * Sphere::RADIUS;

        let discriminant = (b * b) - (4.0 * a * c);

        if discriminant < 0.0 {
            hit.is_hit = false;
            return false;
        }

        let discriminant_sqrt = discriminant.sqrt();

        let root_lower = (-b - discriminant_sqrt) / (2.0 * a);
        let root_upper = (-b + discriminant_sqrt) / (2.0 * a);

        let t = if root_lower > TINY { root_lower } else { root_upper };

        // also rejects the NaN roots of a zero-length ray
        if !(t > TINY) {
            hit.is_hit = false;
            return false;
        }

        hit.t = t;
        hit.point = r.calculate(t);
        hit.normal = (hit.point - Sphere::CENTER).normalized();

        // u is undefined at the poles, where atan2(0, 0) picks 0
        let n = hit.normal;
        hit.u = (n.z.atan2(n.x) + PI) / (2.0 * PI);
        hit.v = n.y.clamp(-1.0, 1.0).acos() / PI;

        hit.is_hit = true;
        return true;
    }

    fn bounds(&self) -> Bounds {
        Bounds::Bounded(BoundingBox::cube(Sphere::RADIUS))
    }
}
