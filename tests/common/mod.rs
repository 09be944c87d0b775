#![allow(dead_code)]

use glam::DVec3;
use phong_shoot::point::Point4;
use rand::rngs::StdRng;
use rand_distr::{Distribution, UnitSphere};

pub fn unit_vector(rng: &mut StdRng) -> Point4 {
    let [x, y, z]: [f64; 3] = UnitSphere.sample(rng);
    Point4::vector(x, y, z)
}

pub fn is_near_zero(v: Point4) -> bool {
    v.xyz().abs_diff_eq(DVec3::ZERO, f64::EPSILON)
}
