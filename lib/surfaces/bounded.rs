use crate::bounds::{BoundingBox, Bounds};
use crate::ray::Ray;
use crate::surface::{HitRecord, Surface, TINY};

use super::Plane;

/// Part of the local z = 0 plane that a bounded planar surface keeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// Texture coordinates within [0,1]^2, i.e. x, y in [-0.5, 0.5].
    UnitSquare,
    /// Centred on the local origin.
    Disk { radius: f64 },
}

impl Region {
    pub fn contains(&self, hit: &HitRecord) -> bool {
        match *self {
            Region::UnitSquare => (0.0..=1.0).contains(&hit.u) && (0.0..=1.0).contains(&hit.v),
            Region::Disk { radius } => hit.point.x * hit.point.x + hit.point.y * hit.point.y <= radius * radius,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let h = match *self {
            Region::UnitSquare => 0.5,
            Region::Disk { radius } => radius,
        };
        BoundingBox::new(-h, h, -h, h, -TINY, TINY)
    }
}

/// The plane intersection restricted to a region and to hits in front of the
/// ray origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedPlane {
    pub region: Region,
}

impl BoundedPlane {
    pub const fn new(region: Region) -> BoundedPlane {
        BoundedPlane { region }
    }

    pub const fn square() -> BoundedPlane {
        BoundedPlane::new(Region::UnitSquare)
    }
}

impl Surface for BoundedPlane {
    fn shoot(&self, r: &Ray, hit: &mut HitRecord) -> bool {
        Plane.shoot(r, hit);

        // NaN / inf from a parallel ray fail the comparisons below
        hit.is_hit = hit.t > 0.0 && self.region.contains(hit);

        return hit.is_hit;
    }

    fn bounds(&self) -> Bounds {
        Bounds::Bounded(self.region.bounding_box())
    }
}
