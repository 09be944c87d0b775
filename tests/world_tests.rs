use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::*;
use image::{Rgb, RgbImage};
use phong_shoot::camera::Camera;
use phong_shoot::error::GeometryError;
use phong_shoot::materials::PhongMaterial;
use phong_shoot::point::Point4;
use phong_shoot::ray::Ray;
use phong_shoot::surface::Geometry;
use phong_shoot::texture::{Color, TextureMap};
use phong_shoot::world::{Object, World};

fn floor_rotation() -> DQuat {
    DQuat::from_rotation_x(-FRAC_PI_2)
}

fn scene(light: DVec3) -> World {
    let diffuse = Arc::new(PhongMaterial::new(0.0, 1.0, 1.0).unwrap());
    let mut world = World::new(light);

    world.add(
        Object::new(
            Geometry::square(),
            DMat4::from_scale_rotation_translation(DVec3::splat(8.0), floor_rotation(), DVec3::ZERO),
            diffuse.clone(),
        )
        .with_colour(Color::splat(0.5)),
    );
    world.add(Object::new(
        Geometry::sphere(),
        DMat4::from_scale_rotation_translation(DVec3::splat(2.0), DQuat::IDENTITY, DVec3::new(0.0, 1.0, 0.0)),
        diffuse,
    ));

    world
}

fn down_from(x: f64) -> Ray {
    Ray::new(Point4::point(x, 5.0, 0.0), Point4::point(x, 4.0, 0.0))
}

#[test]
fn test_raycast_picks_nearest_object() {
    let world = scene(DVec3::new(0.0, 10.0, 0.0));

    let hit = world.raycast(&down_from(0.0)).unwrap();
    assert_eq!(hit.object, 1);
    assert!((hit.record.t - 3.0).abs() < 1e-9);

    let hit = world.raycast(&down_from(3.0)).unwrap();
    assert_eq!(hit.object, 0);
    assert!((hit.record.t - 5.0).abs() < 1e-9);
}

#[test]
fn test_raycast_miss() {
    let world = scene(DVec3::new(0.0, 10.0, 0.0));
    let up = Ray::new(Point4::point(0.0, 5.0, 0.0), Point4::point(0.0, 6.0, 0.0));

    assert!(world.raycast(&up).is_none());
    assert_eq!(world.shade(&up), world.background);
}

#[test]
fn test_shade_floor_uses_world_normal() {
    let world = scene(DVec3::new(0.0, 10.0, 0.0));
    let c = world.shade(&down_from(3.0));

    let cos = 10.0 / 109.0_f64.sqrt();
    assert!(c.abs_diff_eq(Color::splat(0.5 * cos), 1e-9));
}

#[test]
fn test_plane_is_lit_from_below() {
    let diffuse = Arc::new(PhongMaterial::new(0.0, 1.0, 1.0).unwrap());
    let mut world = World::new(DVec3::new(0.0, -10.0, 0.0));
    world.add(Object::new(Geometry::plane(), DMat4::from_quat(floor_rotation()), diffuse));

    let up = Ray::new(Point4::point(0.0, -5.0, 0.0), Point4::point(0.0, -4.0, 0.0));
    let hit = world.raycast(&up).unwrap();
    assert!((hit.record.t - 5.0).abs() < 1e-9);
    assert!(world.shade(&up).abs_diff_eq(Color::ONE, 1e-9));

    // the plane lies behind this ray
    let down = Ray::new(Point4::point(0.0, -5.0, 0.0), Point4::point(0.0, -6.0, 0.0));
    assert!(world.raycast(&down).is_none());
}

#[test]
fn test_texture_colour_is_applied() {
    let mut green = RgbImage::new(1, 1);
    green.put_pixel(0, 0, Rgb([0, 255, 0]));

    let material = Arc::new(PhongMaterial::new(0.0, 1.0, 1.0).unwrap());
    let mut world = World::new(DVec3::new(0.0, 10.0, 0.0));
    world.add(
        Object::new(Geometry::sphere(), DMat4::IDENTITY, material).with_texture(Arc::new(TextureMap::from_image(green))),
    );

    let c = world.shade(&down_from(0.0));
    assert!(c.abs_diff_eq(Color::new(0.0, 1.0, 0.0), 1e-9));
}

#[test]
fn test_camera_rays_reach_focal_plane() {
    let camera = Camera::new(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO, DVec3::Y, 90.0, 1.0, 0.0, 5.0);

    let centre = camera.create_ray(0.5, 0.5);
    assert_eq!(centre.origin, Point4::point(0.0, 0.0, 5.0));
    assert!(centre.dest.xyz().abs_diff_eq(DVec3::ZERO, 1e-9));

    let corner = camera.create_ray(0.0, 0.0);
    assert!(corner.dest.xyz().abs_diff_eq(DVec3::new(-5.0, -5.0, 0.0), 1e-9));
}

#[test]
fn test_lens_jitter_stays_within_aperture() {
    let origin = DVec3::new(0.0, 0.0, 5.0);
    let aperture = 2.0;
    let camera = Camera::new(origin, DVec3::ZERO, DVec3::Y, 90.0, 1.0, aperture, 5.0);

    let mut moved = false;
    for _ in 0..200 {
        let r = camera.create_ray(0.5, 0.5);
        let offset = r.origin.xyz() - origin;

        assert!(offset.length() <= aperture * 0.5 + 1e-12);
        // the lens lies in the plane facing the target
        assert!(offset.z.abs() < 1e-12);
        assert!(r.dest.xyz().abs_diff_eq(DVec3::ZERO, 1e-9));

        moved |= offset.length() > 1e-6;
    }
    assert!(moved);
}

#[test]
fn test_singular_placement_is_rejected() {
    let material = Arc::new(PhongMaterial::new(0.1, 0.5, 8.0).unwrap());
    let flat = DMat4::from_scale(DVec3::new(1.0, 0.0, 1.0));

    let result = Object::try_new(Geometry::sphere(), flat, material.clone());
    assert!(matches!(result, Err(GeometryError::SingularTransform(d)) if d == 0.0));

    assert!(Object::try_new(Geometry::sphere(), DMat4::IDENTITY, material).is_ok());
}
