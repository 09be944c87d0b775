use glam::*;
use rand::thread_rng;
use rand_distr::*;

use crate::point::Point4;

pub fn rand_in_unit_disc() -> DVec2 {
    let [x, y]: [f64; 2] = UnitDisc.sample(&mut thread_rng());
    return DVec2::new(x, y);
}

/// Mirrors `v` about the plane with the given unit normal.
pub fn reflect(v: Point4, normal: Point4) -> Point4 {
    return v - normal * (2.0 * Point4::dot(v, normal));
}
