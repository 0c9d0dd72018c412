// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::core::light::Light;
use crate::core::primitive::Primitive;
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f, EPSILON};
use crate::math::ray::Ray3f;

use std::sync::Arc;

/// Insertion-ordered collection of primitives. Built once, then read-only
/// for the whole render, so it can be shared across worker threads.
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self { primitives: Vec::new(), lights: Vec::new() }
    }

    pub fn add_shape(&mut self, shape: Arc<dyn Shape>) {
        self.primitives.push(Primitive::Shape(shape));
    }

    pub fn add_light(&mut self, light: Arc<dyn Light>) {
        self.lights.push(self.primitives.len());
        self.primitives.push(Primitive::Light(light));
    }

    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn light(&self, light_index: usize) -> Option<&Arc<dyn Light>> {
        let prim_index = *self.lights.get(light_index)?;
        match &self.primitives[prim_index] {
            Primitive::Light(light) => Some(light),
            Primitive::Shape(_) => None,
        }
    }

    /// Nearest hit with t > EPSILON. A strict less-than comparison makes
    /// exact t ties resolve to declaration order.
    pub fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)> {
        let mut min_t: Option<Float> = None;
        let mut nearest: Option<SurfaceInteraction> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some((t, si)) = primitive.intersect(ray) {
                if t > EPSILON && min_t.map_or(true, |mt| t < mt) {
                    min_t = Some(t);
                    nearest = Some(si.with_primitive(index));
                }
            }
        }

        match (min_t, nearest) {
            (Some(t), Some(si)) => Some((t, si)),
            _ => None,
        }
    }

    /// True if no primitive lies strictly between p1 and p2. A hit at (or
    /// within EPSILON of) p2 itself does not count as occlusion, so light
    /// surfaces do not shadow their own samples.
    pub fn unoccluded(&self, p1: &Vector3f, p2: &Vector3f) -> bool {
        let d = p2 - p1;
        let dist = d.norm();
        let ray = Ray3f::new(*p1, d);
        match self.intersect(&ray) {
            None => true,
            Some((t, _)) => t >= dist - EPSILON,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/* Tests for Scene */
