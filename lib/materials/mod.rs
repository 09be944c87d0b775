mod phong;

pub use phong::PhongMaterial;
