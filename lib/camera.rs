use glam::*;

use crate::point::Point4;
use crate::ray::Ray;
use crate::util::rand_in_unit_disc;

/// Thin-lens camera. Rays run from a point on the lens to the matching point
/// on the focal plane, so `t = 1` lies on the focal plane.
pub struct Camera {
    pub origin: DVec3,
    llc: DVec3,
    horizontal: DVec3,
    vertical: DVec3,
    cu: DVec3,
    cv: DVec3,
    aperture: f64,
}

impl Camera {
    pub fn new(
        origin: DVec3,
        target: DVec3,
        up: DVec3,
        vertical_fov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focal_length: f64,
    ) -> Camera {
        let theta = vertical_fov.to_radians();

        let viewport_h = 2.0 * (theta * 0.5).tan();
        let viewport_w = viewport_h * aspect_ratio;

        let cw = (origin - target).normalize();
        let cu = up.cross(cw).normalize();
        let cv = cw.cross(cu);

        let h = focal_length * viewport_w * cu;
        let v = focal_length * viewport_h * cv;

        let llc = origin - (h * 0.5) - (v * 0.5) - focal_length * cw;

        return Camera { origin, llc, horizontal: h, vertical: v, cu, cv, aperture };
    }

    /// `s` and `t` are in [0,1] from the lower-left corner of the image.
    pub fn create_ray(&self, s: f64, t: f64) -> Ray {
        let offset = if self.aperture > 0.0 {
            let lens = rand_in_unit_disc() * self.aperture * 0.5;
            self.cu * lens.x + self.cv * lens.y
        } else {
            DVec3::ZERO
        };

        return Ray::new(
            Point4::from_point(self.origin + offset),
            Point4::from_point(self.llc + s * self.horizontal + t * self.vertical),
        );
    }
}
