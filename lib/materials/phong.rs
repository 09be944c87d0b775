use crate::error::MaterialError;
use crate::point::Point4;
use crate::shade::Shade;
use crate::util::reflect;

/// Phong reflection model: ambient + diffuse (Lambert) + specular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    alpha: f64,
    beta: f64,
    n_shiny: f64,
}

impl PhongMaterial {
    /// `alpha` is the ambient coefficient, `beta` splits the direct light
    /// between diffuse (`beta`) and specular (`1 - beta`), `n_shiny` is the
    /// specular exponent.
    pub fn new(alpha: f64, beta: f64, n_shiny: f64) -> Result<PhongMaterial, MaterialError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(MaterialError::Alpha(alpha));
        }
        if !(0.0..=1.0).contains(&beta) {
            return Err(MaterialError::Beta(beta));
        }
        if !(n_shiny > 0.0) {
            return Err(MaterialError::Shininess(n_shiny));
        }

        return Ok(PhongMaterial { alpha, beta, n_shiny });
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn n_shiny(&self) -> f64 {
        self.n_shiny
    }
}

impl Shade for PhongMaterial {
    /// The three vectors are normalized copies; callers keep their originals.
    /// A zero-length vector normalizes to NaN and the NaN reaches the result.
    fn calculate(&self, normal: Point4, light: Point4, view: Point4, shadow_factor: f64) -> f64 {
        let n = normal.normalized();
        let l = light.normalized();
        let v = view.normalized();

        let ambient = self.alpha;

        let n_dot_l = Point4::dot(n, l);
        let diffuse = positive_part(n_dot_l);

        // 2(N.L)N - L
        let r = (-reflect(l, n)).normalized();
        // negative base with a fractional exponent would be NaN
        let specular = positive_part(Point4::dot(r, v)).powf(self.n_shiny);

        let lit = shadow_factor.clamp(0.0, 1.0);

        let total = ambient + lit * (self.beta * diffuse + (1.0 - self.beta) * specular);

        return if total > 1.0 { 1.0 } else { total };
    }
}

// `f64::max` would swallow a NaN; this keeps it
fn positive_part(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}
