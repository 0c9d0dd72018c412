// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::materials::bsdf::BSDF;
use crate::math::constants::{Float, Vector2f, Vector3f, EPSILON};
use crate::math::ray::Ray3f;

/// Geometry the scene can intersect and lights can sample. Implementations
/// own an object-to-world transform and a BSDF, do their intersection math
/// in object space and hand back world-space interactions.
pub trait Shape: Send + Sync {
    /// Nearest intersection along the ray, as the world-space distance t and
    /// the surface point. Hits with t <= EPSILON are rejected so secondary
    /// rays do not re-hit their own origin.
    fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)>;

    /// Uniform sample over the surface. The returned pdf is with respect to
    /// area, 1 / area().
    fn sample(&self, u: &Vector2f) -> (SurfaceInteraction, Float);

    fn area(&self) -> Float;

    fn bsdf(&self) -> &BSDF;

    /// Sample the surface as seen from `p_ref`, with the pdf converted to
    /// solid angle at the reference point. A back-facing or zero-distance
    /// sample yields pdf 0.
    fn sample_toward(&self, p_ref: &Vector3f, u: &Vector2f) -> (SurfaceInteraction, Float) {
        let (si, area_pdf) = self.sample(u);
        let to_sample = si.p() - p_ref;
        let dist2 = to_sample.dot(&to_sample);
        if area_pdf <= 0.0 || dist2 < EPSILON {
            return (si, 0.0);
        }

        let wi = to_sample / dist2.sqrt();
        let cos_light = si.normal().dot(&(-wi)).abs();
        if cos_light < EPSILON {
            return (si, 0.0);
        }

        (si, area_pdf * dist2 / cos_light)
    }

    /// Solid-angle pdf of reaching this shape from `p_ref` along `wi`:
    /// the area pdf at the visible point scaled by dist^2 / |cos|. Zero if
    /// the ray misses the shape.
    fn pdf(&self, p_ref: &Vector3f, wi: &Vector3f) -> Float {
        let ray = Ray3f::new(*p_ref, *wi);
        let (t, si) = match self.intersect(&ray) {
            Some(hit) => hit,
            None => return 0.0,
        };

        let cos_light = si.normal().dot(&(-ray.dir())).abs();
        let area = self.area();
        if cos_light < EPSILON || area <= 0.0 {
            return 0.0;
        }

        t * t / (cos_light * area)
    }
}
