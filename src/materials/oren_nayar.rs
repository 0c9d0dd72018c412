// Copyright @yucwang 2026

use crate::core::bxdf::BxDF;
use crate::math::constants::{Float, Vector2f, Vector3f, INV_PI};
use crate::math::frame::{abs_cos_theta, cos_phi, same_hemisphere, sin_phi, sin_theta};
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{sample_cosine_hemisphere, sample_cosine_hemisphere_pdf};

/// Oren-Nayar rough diffuse reflectance. Sigma is the surface roughness in
/// radians; the A and B coefficients only depend on it, so they are fixed at
/// construction.
pub struct OrenNayar {
    albedo: RGBSpectrum,
    a: Float,
    b: Float,
}

impl OrenNayar {
    pub fn new(albedo: RGBSpectrum, sigma: Float) -> Self {
        let sigma2 = sigma * sigma;
        let a = 1.0 - sigma2 / (2.0 * (sigma2 + 0.33));
        let b = 0.45 * sigma2 / (sigma2 + 0.09);
        Self { albedo, a, b }
    }
}

impl BxDF for OrenNayar {
    fn f(&self, wo: &Vector3f, wi: &Vector3f) -> RGBSpectrum {
        if !same_hemisphere(wo, wi) {
            return RGBSpectrum::zero();
        }

        let sin_theta_i = sin_theta(wi);
        let sin_theta_o = sin_theta(wo);

        // cos(phi_i - phi_o), clamped non-negative.
        let d_cos = cos_phi(wi) * cos_phi(wo) + sin_phi(wi) * sin_phi(wo);
        let max_cos = d_cos.max(0.0);

        // alpha is the larger polar angle, beta the smaller.
        let (sin_alpha, tan_beta) = if abs_cos_theta(wi) > abs_cos_theta(wo) {
            (sin_theta_o, sin_theta_i / abs_cos_theta(wi))
        } else {
            (sin_theta_i, sin_theta_o / abs_cos_theta(wo))
        };

        self.albedo * INV_PI * (self.a + self.b * max_cos * sin_alpha * tan_beta)
    }

    // Cosine-weighted sampling, the same approximate scheme as Lambertian.
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

/* Tests for OrenNayar */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{LcgRng, Sampler};

    #[test]
    fn test_zero_roughness_matches_lambertian() {
        // With sigma = 0, A = 1 and B = 0, so f collapses to albedo / pi.
        let bxdf = OrenNayar::new(RGBSpectrum::splat(0.7), 0.0);
        let wo = Vector3f::new(0.3, 0.2, 0.8).normalize();
        let wi = Vector3f::new(-0.4, 0.1, 0.6).normalize();

        let f = bxdf.f(&wo, &wi);
        assert!((f.r() - 0.7 * INV_PI).abs() < 1e-9);
    }

    #[test]
    fn test_hemisphere_symmetry() {
        let bxdf = OrenNayar::new(RGBSpectrum::splat(0.7), 1.0);
        let wo = Vector3f::new(0.3, 0.2, 0.8).normalize();
        let wi = Vector3f::new(-0.4, 0.1, -0.6).normalize();

        assert!(bxdf.f(&wo, &wi).is_black());
        assert_eq!(bxdf.pdf(&wo, &wi), 0.0);
    }

    #[test]
    fn test_retroreflection_brighter_than_opposed_azimuth() {
        // At equal polar angles the rough term adds energy when viewing
        // along the incident azimuth and none when opposed.
        let bxdf = OrenNayar::new(RGBSpectrum::splat(0.7), 1.0);
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let wi_aligned = Vector3f::new(0.6, 0.0, 0.8);
        let wi_opposed = Vector3f::new(-0.6, 0.0, 0.8);

        let f_aligned = bxdf.f(&wo, &wi_aligned);
        let f_opposed = bxdf.f(&wo, &wi_opposed);
        assert!(f_aligned.r() > f_opposed.r());
    }

    #[test]
    fn test_sampled_directions_share_hemisphere() {
        let bxdf = OrenNayar::new(RGBSpectrum::splat(0.5), 0.5);
        let wo = Vector3f::new(0.1, -0.2, -0.9).normalize();
        let mut rng = LcgRng::new(23);

        for _ in 0..64 {
            let (f, wi, pdf) = bxdf.sample_f(&wo, &rng.next_2d());
            assert!(wi.z < 0.0);
            assert!(pdf > 0.0);
            assert!(!f.is_black());
        }
    }
}
