use image::{Rgb, RgbImage};
use phong_shoot::error::TextureError;
use phong_shoot::texture::{Color, TextureMap};

fn corners() -> RgbImage {
    let mut image = RgbImage::new(3, 2);
    image.put_pixel(0, 0, Rgb([255, 0, 0]));
    image.put_pixel(2, 0, Rgb([0, 255, 0]));
    image.put_pixel(0, 1, Rgb([0, 0, 255]));
    image.put_pixel(2, 1, Rgb([255, 255, 255]));
    image
}

#[test]
fn test_pick_colour_addresses_corner_pixels() {
    let texture = TextureMap::from_image(corners());

    assert_eq!(texture.pick_colour(0.0, 0.0), Color::new(1.0, 0.0, 0.0));
    assert_eq!(texture.pick_colour(1.0, 0.0), Color::new(0.0, 1.0, 0.0));
    assert_eq!(texture.pick_colour(0.0, 1.0), Color::new(0.0, 0.0, 1.0));
    assert_eq!(texture.pick_colour(1.0, 1.0), Color::ONE);
}

#[test]
fn test_pick_colour_clamps_coordinates() {
    let texture = TextureMap::from_image(corners());

    assert_eq!(texture.pick_colour(-3.0, 7.0), Color::new(0.0, 0.0, 1.0));
    assert_eq!(texture.pick_colour(1.1, -0.2), Color::new(0.0, 1.0, 0.0));
    assert_eq!(texture.pick_colour(f64::NAN, 0.0), Color::new(1.0, 0.0, 0.0));
}

#[test]
fn test_nearest_pixel_floors() {
    let texture = TextureMap::from_image(corners());

    // u * (w - 1) = 0.98 -> column 0; 1.0 -> column 1, which was never painted
    assert_eq!(texture.pick_colour(0.49, 0.0), Color::new(1.0, 0.0, 0.0));
    assert_eq!(texture.pick_colour(0.5, 0.0), Color::ZERO);
}

#[test]
fn test_missing_file_degrades_to_black() {
    let path = std::env::temp_dir().join("phong_shoot_does_not_exist.png");

    assert!(matches!(TextureMap::load(&path), Err(TextureError::Load { .. })));

    let texture = TextureMap::open(&path);
    assert!(!texture.is_loaded());
    assert_eq!(texture.pick_colour(0.5, 0.5), TextureMap::DEFAULT_COLOUR);
}

#[test]
fn test_empty_texture_is_black() {
    assert_eq!(TextureMap::empty().pick_colour(0.0, 0.0), Color::ZERO);
    assert!(!TextureMap::from_image(RgbImage::new(0, 0)).is_loaded());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("phong_shoot_texture_{}.png", std::process::id()));
    corners().save(&path).unwrap();

    let texture = TextureMap::open(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(texture.is_loaded());
    assert_eq!(texture.pick_colour(1.0, 1.0), Color::ONE);
    assert_eq!(texture.pick_colour(0.0, 0.0), Color::new(1.0, 0.0, 0.0));
}
