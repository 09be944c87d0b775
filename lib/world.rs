use std::sync::Arc;

use glam::*;
use log::warn;

use crate::error::GeometryError;
use crate::point::Point4;
use crate::ray::Ray;
use crate::shade::Shade;
use crate::surface::{Geometry, HitRecord, Surface, TINY};
use crate::texture::{Color, TextureMap};

/// A canonical surface placed in the world by an affine transform.
pub struct Object {
    pub geometry: Geometry,
    to_local: DMat4,
    pub material: Arc<dyn Shade>,
    pub texture: Option<Arc<TextureMap>>,
    pub colour: Color,
}

impl Object {
    /// Rejects a placement that cannot be inverted, e.g. a zero scale.
    pub fn try_new(geometry: Geometry, to_world: DMat4, material: Arc<dyn Shade>) -> Result<Object, GeometryError> {
        let det = to_world.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(GeometryError::SingularTransform(det));
        }

        Ok(Object { geometry, to_local: to_world.inverse(), material, texture: None, colour: Color::ONE })
    }

    /// Like [`Object::try_new`], but a singular placement is only logged and
    /// the object's local frame is left non-finite.
    pub fn new(geometry: Geometry, to_world: DMat4, material: Arc<dyn Shade>) -> Object {
        match Object::try_new(geometry, to_world, material.clone()) {
            Ok(obj) => obj,
            Err(e) => {
                warn!("{:?}: {}", geometry, e);
                Object { geometry, to_local: to_world.inverse(), material, texture: None, colour: Color::ONE }
            }
        }
    }

    pub fn with_texture(mut self, texture: Arc<TextureMap>) -> Object {
        self.texture = Some(texture);
        self
    }

    pub fn with_colour(mut self, colour: Color) -> Object {
        self.colour = colour;
        self
    }

    /// Normals transform by the inverse transpose of the placement.
    pub fn normal_to_world(&self, normal: Point4) -> Point4 {
        Point4::from_vector(self.to_local.transpose().transform_vector3(normal.xyz()))
    }

    pub fn base_colour(&self, hit: &HitRecord) -> Color {
        match &self.texture {
            Some(texture) => texture.pick_colour(hit.u, hit.v),
            None => self.colour,
        }
    }
}

/// Nearest hit of a world ray. `record` is in the object's local frame;
/// `t` is shared by both frames.
pub struct WorldHit {
    pub object: usize,
    pub record: HitRecord,
}

pub struct World {
    pub objects: Vec<Object>,
    pub light: DVec3,
    pub background: Color,
}

impl World {
    pub fn new(light: DVec3) -> World {
        World { objects: Vec::new(), light, background: Color::ZERO }
    }

    pub fn add(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn raycast(&self, r: &Ray) -> Option<WorldHit> {
        let mut result = None;
        let mut t_nearest = f64::INFINITY;
        let mut rec = HitRecord::default();

        for (i, obj) in self.objects.iter().enumerate() {
            let local = r.transform(&obj.to_local);

            if obj.geometry.shoot(&local, &mut rec) && rec.t > TINY && rec.t < t_nearest {
                t_nearest = rec.t;
                result = Some(WorldHit { object: i, record: rec });
            }
        }

        return result;
    }

    /// Colour seen along `r`. Every point is treated as fully lit.
    pub fn shade(&self, r: &Ray) -> Color {
        let hit = match self.raycast(r) {
            Some(hit) => hit,
            None => return self.background,
        };

        let obj = &self.objects[hit.object];
        let p = r.calculate(hit.record.t);

        let view = r.origin - p;
        let light = Point4::from_point(self.light) - p;

        let mut normal = obj.normal_to_world(hit.record.normal);
        // planes are visible from both sides
        if Point4::dot(normal, view) < 0.0 {
            normal = -normal;
        }

        let scale = obj.material.calculate(normal, light, view, 1.0);

        return obj.base_colour(&hit.record) * scale;
    }
}
