// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::core::light::Light;
use crate::core::shape::Shape;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

use std::sync::Arc;

/// Anything the scene can intersect: plain geometry, or an emitter wrapping
/// its geometry. A closed set, matched on directly by the integrator.
pub enum Primitive {
    Shape(Arc<dyn Shape>),
    Light(Arc<dyn Light>),
}

impl Primitive {
    pub fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)> {
        match self {
            Primitive::Shape(shape) => shape.intersect(ray),
            Primitive::Light(light) => light.intersect(ray),
        }
    }

    pub fn is_light(&self) -> bool {
        matches!(self, Primitive::Light(_))
    }
}
