mod bounded;
mod plane;
mod sphere;

pub use bounded::{BoundedPlane, Region};
pub use plane::Plane;
pub use sphere::Sphere;
