use crate::bounds::Bounds;
use crate::point::Point4;
use crate::ray::Ray;
use crate::surfaces::{BoundedPlane, Plane, Region, Sphere};

/// Half-thickness given to planar surfaces' boxes, and the minimum accepted
/// sphere root.
pub const TINY: f64 = 0.01;

/// Result of one ray/surface intersection, owned by the caller and reused.
///
/// After a miss only `is_hit` is meaningful; the other fields keep whatever
/// an earlier (or partial) intersection left in them.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub point: Point4,
    pub normal: Point4,
    pub u: f64,
    pub v: f64,
    pub t: f64,
    pub is_hit: bool,
}

impl Default for HitRecord {
    fn default() -> HitRecord {
        HitRecord { point: Point4::ORIGIN, normal: Point4::vector(0.0, 0.0, 0.0), u: 0.0, v: 0.0, t: 0.0, is_hit: false }
    }
}

/// Geometry that can be shot at with a ray given in its local frame.
pub trait Surface: Send + Sync {
    /// Fills `hit` and returns `hit.is_hit`.
    fn shoot(&self, r: &Ray, hit: &mut HitRecord) -> bool;

    fn bounds(&self) -> Bounds;
}

/// The closed set of canonical surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Plane(Plane),
    Bounded(BoundedPlane),
    Sphere(Sphere),
}

impl Geometry {
    pub const fn plane() -> Geometry {
        Geometry::Plane(Plane::new())
    }

    pub const fn square() -> Geometry {
        Geometry::Bounded(BoundedPlane::new(Region::UnitSquare))
    }

    pub const fn disk(radius: f64) -> Geometry {
        Geometry::Bounded(BoundedPlane::new(Region::Disk { radius }))
    }

    pub const fn sphere() -> Geometry {
        Geometry::Sphere(Sphere::new())
    }
}

impl Surface for Geometry {
    fn shoot(&self, r: &Ray, hit: &mut HitRecord) -> bool {
        match self {
            Geometry::Plane(s) => s.shoot(r, hit),
            Geometry::Bounded(s) => s.shoot(r, hit),
            Geometry::Sphere(s) => s.shoot(r, hit),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Geometry::Plane(s) => s.bounds(),
            Geometry::Bounded(s) => s.bounds(),
            Geometry::Sphere(s) => s.bounds(),
        }
    }
}
