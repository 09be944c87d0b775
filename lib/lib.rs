pub mod bounds;
pub mod camera;
pub mod error;
pub mod materials;
pub mod point;
pub mod ray;
pub mod shade;
pub mod surface;
pub mod surfaces;
pub mod texture;
pub mod util;
pub mod world;
