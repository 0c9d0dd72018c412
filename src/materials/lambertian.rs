// Copyright @yucwang 2026

use crate::core::bxdf::BxDF;
use crate::math::constants::{Float, Vector2f, Vector3f, INV_PI};
use crate::math::frame::same_hemisphere;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{sample_cosine_hemisphere, sample_cosine_hemisphere_pdf};

/// Perfectly diffuse reflectance: f = albedo / pi inside the hemisphere.
pub struct Lambertian {
    albedo: RGBSpectrum,
}

impl Lambertian {
    pub fn new(albedo: RGBSpectrum) -> Self {
        Self { albedo }
    }
}

impl BxDF for Lambertian {
    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> RGBSpectrum {
        if !same_hemisphere(wo, wi) {
            return RGBSpectrum::zero();
        }
        self.albedo * INV_PI
    }

    // Cosine-weighted sampling, mirrored into wo's hemisphere. The cosine
    // cancels against the pdf, so f / pdf reduces to the albedo.
    fn sample_f(&self, wo: &Vector3f, u: &Vector2f) -> (RGBSpectrum, Vector3f, Float) {
        let mut wi = sample_cosine_hemisphere(u);
        if wo.z < 0.0 {
            wi.z = -wi.z;
        }
        let pdf = self.pdf(wo, &wi);
        (self.f(wo, &wi), wi, pdf)
    }

    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        if !same_hemisphere(wo, wi) {
            return 0.0;
        }
        sample_cosine_hemisphere_pdf(wi.z.abs())
    }
}

/* Tests for Lambertian */
