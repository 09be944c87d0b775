use crate::point::Point4;

/// Local illumination model of a surface.
pub trait Shade: Send + Sync {
    /// Scalar reflectance in [0,1] at a point with the given normal, direction
    /// towards the light and direction towards the viewer. `shadow_factor` is
    /// the visible fraction of the light (0 fully shadowed, 1 fully lit).
    ///
    /// Degenerate (zero-length) vectors are not guarded and yield NaN.
    fn calculate(&self, normal: Point4, light: Point4, view: Point4, shadow_factor: f64) -> f64;
}
