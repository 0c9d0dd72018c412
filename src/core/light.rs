// Copyright @yucwang 2026

use crate::core::interaction::SurfaceInteraction;
use crate::core::rng::Sampler;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Radiance, incident direction, solid-angle pdf and the sampled point on
/// the light, as produced by `Light::sample_li`. A pdf of 0 marks a failed
/// or degenerate sample; callers must not divide by it.
pub struct LightLiSample {
    pub li: RGBSpectrum,
    pub wi: Vector3f,
    pub pdf: Float,
    pub p_light: Vector3f,
}

impl LightLiSample {
    pub fn zero() -> Self {
        Self {
            li: RGBSpectrum::zero(),
            wi: Vector3f::zeros(),
            pdf: 0.0,
            p_light: Vector3f::zeros(),
        }
    }
}

pub trait Light: Send + Sync {
    /// Intersection with the light's surface. The scene re-tags the result
    /// with the light's primitive index so a hit on a light is
    /// distinguishable from a hit on plain geometry.
    fn intersect(&self, ray: &Ray3f) -> Option<(Float, SurfaceInteraction)>;

    /// Sample a direction from `source` toward the light for direct-lighting
    /// estimation.
    fn sample_li(&self, source: &SurfaceInteraction, sampler: &mut dyn Sampler) -> LightLiSample;

    /// Emitted radiance at a point on the light toward w. One-sided.
    fn l(&self, si: &SurfaceInteraction, w: &Vector3f) -> RGBSpectrum;

    /// Solid-angle pdf of sampling direction wi from si.
    fn pdf_li(&self, si: &SurfaceInteraction, wi: &Vector3f) -> Float;
}
