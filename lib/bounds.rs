use crate::point::Point4;

/// Axis-aligned box in a surface's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
}

impl BoundingBox {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> BoundingBox {
        BoundingBox { xmin, xmax, ymin, ymax, zmin, zmax }
    }

    /// The cube `[-h, h]^3`.
    pub const fn cube(h: f64) -> BoundingBox {
        BoundingBox::new(-h, h, -h, h, -h, h)
    }

    pub fn contains(&self, p: &Point4) -> bool {
        self.xmin <= p.x && p.x <= self.xmax && self.ymin <= p.y && p.y <= self.ymax && self.zmin <= p.z && p.z <= self.zmax
    }

    pub fn join(&self, o: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.xmin.min(o.xmin),
            self.xmax.max(o.xmax),
            self.ymin.min(o.ymin),
            self.ymax.max(o.ymax),
            self.zmin.min(o.zmin),
            self.zmax.max(o.zmax),
        )
    }

    pub fn volume(&self) -> f64 {
        (self.xmax - self.xmin) * (self.ymax - self.ymin) * (self.zmax - self.zmin)
    }
}

/// Extent of a surface. Infinite surfaces report `Unbounded` and must be
/// handled separately by any acceleration structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    Bounded(BoundingBox),
    Unbounded,
}

impl Bounds {
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            Bounds::Bounded(bb) => Some(bb),
            Bounds::Unbounded => None,
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, Bounds::Bounded(_))
    }
}
