use std::error::Error;
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use glam::*;
use image::{Rgb, RgbImage};
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use phong_shoot::camera::Camera;
use phong_shoot::materials::PhongMaterial;
use phong_shoot::surface::{Geometry, Surface};
use phong_shoot::texture::{Color, TextureMap};
use phong_shoot::world::{Object, World};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn create_world(texture: Option<&str>) -> Result<World, Box<dyn Error>> {
    let mut world = World::new(DVec3::new(4.0, 6.0, 4.0));

    let matte = Arc::new(PhongMaterial::new(0.15, 0.9, 4.0)?);
    let shiny = Arc::new(PhongMaterial::new(0.1, 0.6, 32.0)?);

    // local +Z becomes world +Y
    let floor_rot = DQuat::from_rotation_x(-FRAC_PI_2);

    world.add({
        let to_world = DMat4::from_scale_rotation_translation(DVec3::splat(8.0), floor_rot, DVec3::ZERO);
        Object::try_new(Geometry::square(), to_world, matte.clone())?.with_colour(Color::new(0.6, 0.6, 0.6))
    });

    world.add({
        let to_world = DMat4::from_scale_rotation_translation(DVec3::splat(1.0), floor_rot, DVec3::new(2.0, 0.01, 1.5));
        Object::try_new(Geometry::disk(0.5), to_world, matte.clone())?.with_colour(Color::new(0.8, 0.2, 0.1))
    });

    world.add({
        let to_world = DMat4::from_scale_rotation_translation(DVec3::splat(2.0), DQuat::IDENTITY, DVec3::new(0.0, 1.0, 0.0));
        let obj = Object::try_new(Geometry::sphere(), to_world, shiny.clone())?;
        match texture {
            Some(path) => obj.with_texture(Arc::new(TextureMap::open(path))),
            None => obj.with_colour(Color::new(0.2, 0.4, 0.9)),
        }
    });

    for obj in &world.objects {
        debug!("{:?} with bounds {:?}", obj.geometry, obj.geometry.bounds());
    }

    return Ok(world);
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_logger(args.log_level.clone().into());

    let width = args.width.max(2);
    let height = args.height.max(2);
    let samples = args.samples.max(1);

    info!("Image resolution: {}x{}, samples per pixel: {}", width, height, samples);

    let world = create_world(args.texture.as_deref())?;

    let camera = Camera::new(
        DVec3::new(0.0, 2.5, 7.0),
        DVec3::new(0.0, 0.8, 0.0),
        DVec3::Y,
        35.0,
        width as f64 / height as f64,
        args.aperture.max(0.0),
        7.0,
    );

    let start = Instant::now();

    let rows: Vec<Vec<Color>> = (0..height)
        .into_par_iter()
        .map(|j| {
            let mut rng = rand::thread_rng();
            let y = height - 1 - j;

            (0..width)
                .map(|x| {
                    let mut c = Color::ZERO;

                    for _ in 0..samples {
                        let s = (x as f64 + rng.gen::<f64>()) / (width - 1) as f64;
                        let t = (y as f64 + rng.gen::<f64>()) / (height - 1) as f64;
                        c += world.shade(&camera.create_ray(s, t));
                    }

                    c / samples as f64
                })
                .collect::<Vec<Color>>()
        })
        .collect();

    info!("Rendered in {:.2?}", start.elapsed());

    let mut image = RgbImage::new(width, height);
    for (j, row) in rows.iter().enumerate() {
        for (x, c) in row.iter().enumerate() {
            image.put_pixel(x as u32, j as u32, Rgb(to_rgb8(*c)));
        }
    }

    image.save(&args.output)?;
    info!("Wrote {}", args.output);

    Ok(())
}

fn to_rgb8(c: Color) -> [u8; 3] {
    let c = c.clamp(Color::ZERO, Color::ONE) * 255.999;
    return [c.x as u8, c.y as u8, c.z as u8];
}
