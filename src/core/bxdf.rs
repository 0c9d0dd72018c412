// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// A single reflectance term. All directions are expressed in the local
/// shading frame of the surface point, where z is the shading normal.
pub trait BxDF: Send + Sync {
    /// Reflectance density f(wo, wi). Zero when wo and wi are not in the
    /// same hemisphere.
    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> RGBSpectrum;

    /// Draw wi from a distribution matched to f, returning f(wo, wi), wi
    /// and the solid-angle pdf of the draw.
    fn sample_f(&self, wo: &Vector3f, u: &Vector2f) -> (RGBSpectrum, Vector3f, Float);

    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float;

    /// True for delta-distribution reflectance.
    fn is_specular(&self) -> bool {
        false
    }
}
